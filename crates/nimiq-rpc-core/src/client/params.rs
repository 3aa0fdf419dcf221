use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Positional parameter list for one call.
///
/// Optional parameters are trailing: an omitted one is left out of the array
/// entirely rather than sent as `null`, so the node sees a shorter prefix and
/// applies its own default. Never follow an omitted optional with a
/// required argument.
///
/// The first argument that fails to serialize is kept and reported by
/// [`Params::build`]; later arguments are ignored.
#[derive(Debug, Default)]
pub(crate) struct Params {
    values: Vec<Value>,
    error: Option<serde_json::Error>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a required argument.
    pub(crate) fn arg(mut self, value: impl Serialize) -> Self {
        if self.error.is_none() {
            match serde_json::to_value(value) {
                Ok(value) => self.values.push(value),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Append an optional trailing argument when present.
    pub(crate) fn opt(self, value: Option<impl Serialize>) -> Self {
        match value {
            Some(value) => self.arg(value),
            None => self,
        }
    }

    pub(crate) fn build(self) -> Result<Vec<Value>, ClientError> {
        match self.error {
            Some(e) => Err(ClientError::Protocol(format!("encode parameter: {e}"))),
            None => Ok(self.values),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::json;

    use super::*;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("value has no JSON form"))
        }
    }

    #[test]
    fn omitted_optional_is_dropped_not_nulled() {
        let params = Params::new().arg("0xabc").opt(None::<bool>).build().unwrap();
        assert_eq!(params, vec![json!("0xabc")]);
    }

    #[test]
    fn supplied_optional_is_appended() {
        let params = Params::new().arg(11608).opt(Some(true)).build().unwrap();
        assert_eq!(params, vec![json!(11608), json!(true)]);
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(Params::new().build().unwrap().is_empty());
    }

    #[test]
    fn serialization_failure_is_reported_not_panicked() {
        let err = Params::new()
            .arg(Unencodable)
            .arg(1)
            .build()
            .expect_err("argument cannot be encoded");
        assert!(matches!(err, ClientError::Protocol(ref m) if m.contains("value has no JSON form")));
    }

    #[test]
    fn failing_optional_is_reported() {
        assert!(Params::new()
            .arg("NQ07")
            .opt(Some(Unencodable))
            .build()
            .is_err());
    }
}
