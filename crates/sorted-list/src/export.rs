//! Plain-data export: a list serializes as a bare sequence of primitives.
//! The element kind is not part of the representation.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::sorted_list::SortedList;
use crate::value::Value;

impl Serialize for SortedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Replays the sequence through `from_values`, inferring the kind from the
/// first element. Mixed sequences are rejected.
impl<'de> Deserialize<'de> for SortedList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        SortedList::from_values(values, None).map_err(D::Error::custom)
    }
}

impl SortedList {
    /// Snapshot as a JSON array of numbers or strings.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.iter()
                .map(|value| match value {
                    Value::Integer(n) => serde_json::Value::from(*n),
                    Value::Text(s) => serde_json::Value::String(s.clone()),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ElementKind;

    #[test]
    fn export_drops_kind() {
        let ints = SortedList::from_values([3, -1], None).unwrap();
        assert_eq!(ints.to_json(), json!([-1, 3]));
        assert_eq!(serde_json::to_string(&ints).unwrap(), "[-1,3]");

        let empty_text = SortedList::of_string();
        assert_eq!(empty_text.to_json(), json!([]));
    }

    #[test]
    fn import_infers_kind() {
        let list: SortedList = serde_json::from_str(r#"["pear","apple"]"#).unwrap();
        assert_eq!(list.kind(), Some(ElementKind::Text));
        assert_eq!(list.to_json(), json!(["apple", "pear"]));

        let empty: SortedList = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.kind(), None);

        let err = serde_json::from_str::<SortedList>(r#"[1,"a"]"#).unwrap_err();
        assert!(err.to_string().contains("type mismatch"));
    }
}
