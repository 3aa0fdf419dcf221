use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

coded_enum! {
    /// Discriminant carried in the `type` member of every account object.
    pub enum AccountType {
        Basic = 0,
        Vesting = 1,
        Htlc = 2,
    }
}

// ==============================================================================
// Account Variants
// ==============================================================================

/// Fields shared by every account kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAccount {
    /// Hex-encoded account id.
    pub id: String,
    /// User-friendly address.
    pub address: String,
    /// Balance in luna.
    pub balance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingContract {
    #[serde(flatten)]
    pub account: BasicAccount,
    /// Hex-encoded owner id.
    pub owner: String,
    pub owner_address: String,
    /// Block height at which vesting begins.
    pub vesting_start: u64,
    pub vesting_step_blocks: u64,
    pub vesting_step_amount: u64,
    pub vesting_total_amount: u64,
}

/// Hashed time-locked contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Htlc {
    #[serde(flatten)]
    pub account: BasicAccount,
    pub sender: String,
    pub sender_address: String,
    pub recipient: String,
    pub recipient_address: String,
    pub hash_root: String,
    /// 1 = Blake2b, 3 = SHA-256.
    pub hash_algorithm: u8,
    pub hash_count: u32,
    /// Block height after which the sender may reclaim the funds.
    pub timeout: u64,
    pub total_amount: u64,
}

// ==============================================================================
// Account (tagged union)
// ==============================================================================

/// An account as returned by `getAccount` and `accounts`.
///
/// The node sends one flat object per account with a numeric `type` member;
/// decoding reads the tag once and builds only the matching variant.
/// Members belonging to other variants are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Basic(BasicAccount),
    Vesting(VestingContract),
    Htlc(Htlc),
}

impl Account {
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Basic(_) => AccountType::Basic,
            Self::Vesting(_) => AccountType::Vesting,
            Self::Htlc(_) => AccountType::Htlc,
        }
    }

    /// The fields every variant carries.
    pub fn base(&self) -> &BasicAccount {
        match self {
            Self::Basic(account) => account,
            Self::Vesting(contract) => &contract.account,
            Self::Htlc(htlc) => &htlc.account,
        }
    }

    pub fn address(&self) -> &str {
        &self.base().address
    }

    pub fn balance(&self) -> u64 {
        self.base().balance
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let tag = raw
            .get("type")
            .ok_or_else(|| D::Error::missing_field("type"))?;
        let code = tag
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid account type `{tag}`")))?;
        let kind = AccountType::try_from(code).map_err(D::Error::custom)?;

        let account = match kind {
            AccountType::Basic => BasicAccount::deserialize(raw).map(Self::Basic),
            AccountType::Vesting => VestingContract::deserialize(raw).map(Self::Vesting),
            AccountType::Htlc => Htlc::deserialize(raw).map(Self::Htlc),
        };
        account.map_err(D::Error::custom)
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Re-attach the tag so the output matches the wire shape.
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(flatten)]
            fields: &'a T,
            #[serde(rename = "type")]
            kind: AccountType,
        }

        let kind = self.account_type();
        match self {
            Self::Basic(fields) => Tagged { fields, kind }.serialize(serializer),
            Self::Vesting(fields) => Tagged { fields, kind }.serialize(serializer),
            Self::Htlc(fields) => Tagged { fields, kind }.serialize(serializer),
        }
    }
}

// ==============================================================================
// Wallet
// ==============================================================================

/// Key pair created by `createAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub address: String,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[test]
    fn basic_tag_decodes_to_basic_account() {
        let account: Account = serde_json::from_value(basic_account_json()).unwrap();
        let Account::Basic(basic) = &account else {
            panic!("expected basic account, got {account:?}");
        };
        assert_eq!(basic.id, "f925107376081be421f52d64bec775cc1fc20829");
        assert_eq!(basic.address, "NQ33 Y4JH 0UTN 10DX 88FM 5MJB VHTM RGFU 4219");
        assert_eq!(basic.balance, 0);
        assert_eq!(account.account_type(), AccountType::Basic);
    }

    #[test]
    fn vesting_tag_exposes_vesting_fields() {
        let account: Account = serde_json::from_value(vesting_contract_json()).unwrap();
        let Account::Vesting(contract) = account else {
            panic!("expected vesting contract");
        };
        assert_eq!(contract.account.balance, 52500000000000);
        assert_eq!(contract.owner, "fd34ab7265a0e48c454ccbf4c9c61dfdf68f9a22");
        assert_eq!(
            contract.owner_address,
            "NQ62 YLSA NUK5 L3J8 QHAC RFSC KHGV YPT8 Y6H2"
        );
        assert_eq!(contract.vesting_start, 1);
        assert_eq!(contract.vesting_step_blocks, 259200);
        assert_eq!(contract.vesting_step_amount, 2625000000000);
        assert_eq!(contract.vesting_total_amount, 52500000000000);
    }

    #[test]
    fn htlc_tag_exposes_htlc_fields() {
        let account: Account = serde_json::from_value(htlc_json()).unwrap();
        let Account::Htlc(htlc) = account else {
            panic!("expected HTLC");
        };
        assert_eq!(htlc.account.address, "NQ46 NTNU QX94 MVD0 BBT0 GXAR QUHK VGNF 39ET");
        assert_eq!(htlc.sender, "d62d519b3478c63bdd729cf2ccb863178060c64a");
        assert_eq!(
            htlc.sender_address,
            "NQ53 SQNM 36RL F333 PPBJ KKRC RE33 2X06 1HJA"
        );
        assert_eq!(htlc.recipient, "f5ad55071730d3b9f05989481eefbda7324a44f8");
        assert_eq!(
            htlc.recipient_address,
            "NQ41 XNNM A1QP 639T KU2R H541 VTVV LUR4 LH7Q"
        );
        assert_eq!(
            htlc.hash_root,
            "df331b3c8f8a889703092ea05503779058b7f44e71bc57176378adde424ce922"
        );
        assert_eq!(htlc.hash_algorithm, 1);
        assert_eq!(htlc.hash_count, 1);
        assert_eq!(htlc.timeout, 1105605);
        assert_eq!(htlc.total_amount, 1000000000);
    }

    #[test]
    fn account_type_codes_are_closed() {
        assert_eq!(u8::from(AccountType::Basic), 0);
        assert_eq!(u8::from(AccountType::Htlc), 2);
        assert_eq!(AccountType::try_from(1), Ok(AccountType::Vesting));
        assert_eq!(
            AccountType::try_from(3),
            Err("unknown AccountType code 3".to_owned())
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let mut raw = basic_account_json();
        raw["type"] = serde_json::json!(99);
        let err = serde_json::from_value::<Account>(raw).expect_err("tag 99 must fail");
        assert!(err.to_string().contains("unknown AccountType code 99"));
    }

    #[test]
    fn missing_tag_is_rejected() {
        let mut raw = basic_account_json();
        raw.as_object_mut().unwrap().remove("type");
        assert!(serde_json::from_value::<Account>(raw).is_err());
    }

    #[test]
    fn vesting_tag_without_vesting_fields_is_rejected() {
        let mut raw = basic_account_json();
        raw["type"] = serde_json::json!(1);
        assert!(serde_json::from_value::<Account>(raw).is_err());
    }

    #[test]
    fn serialization_restores_type_tag() {
        let account: Account = serde_json::from_value(htlc_json()).unwrap();
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], 2);
        assert_eq!(value["hashCount"], 1);
        assert_eq!(value["balance"], 1000000000);
    }
}
