use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mempool summary returned by `mempool`.
///
/// On the wire the per-bucket counts are not nested: they sit next to
/// `total` and `buckets` as members keyed by the bucket's fee-per-byte
/// threshold, e.g. `{"total": 3, "buckets": [1], "1": 3}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MempoolInfo {
    /// Number of pending transactions.
    pub total: u32,
    /// Fee-per-byte thresholds that currently hold transactions.
    pub buckets: Vec<u32>,
    /// Fee bucket → number of transactions in it.
    pub transactions_per_bucket: BTreeMap<u32, u32>,
}

impl<'de> Deserialize<'de> for MempoolInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MempoolInfoVisitor)
    }
}

struct MempoolInfoVisitor;

impl<'de> Visitor<'de> for MempoolInfoVisitor {
    type Value = MempoolInfo;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mempool object with `total`, `buckets` and numeric bucket keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut total = None;
        let mut buckets = None;
        let mut transactions_per_bucket = BTreeMap::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "total" => total = Some(map.next_value()?),
                "buckets" => buckets = Some(map.next_value()?),
                other => {
                    let bucket: u32 = other.parse().map_err(|_| {
                        de::Error::custom(format!("unexpected mempool key `{other}`"))
                    })?;
                    transactions_per_bucket.insert(bucket, map.next_value()?);
                }
            }
        }

        Ok(MempoolInfo {
            total: total.ok_or_else(|| de::Error::missing_field("total"))?,
            buckets: buckets.ok_or_else(|| de::Error::missing_field("buckets"))?,
            transactions_per_bucket,
        })
    }
}

impl Serialize for MempoolInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.transactions_per_bucket.len()))?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("buckets", &self.buckets)?;
        for (bucket, count) in &self.transactions_per_bucket {
            map.serialize_entry(&bucket.to_string(), count)?;
        }
        map.end()
    }
}
