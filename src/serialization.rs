use serde::{ Serialize, Serializer, Deserialize, Deserializer };
use serde::de::Error;

use owner::Owner;

/// An owner serializes like `Option<T>`: the held value, or `null` when empty.
///
/// Values that serialize to `null` themselves (`()`, `None`) can't be told
/// apart from an empty owner and come back empty.
impl<T: Serialize> Serialize for Owner<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        match self.get() {
            Ok(protege) => serializer.serialize_some(protege),
            Err(_) => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Owner<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Owner::create(value).map_err(D::Error::custom),
            None => Ok(Owner::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Widget {
        id: i32,
    }

    #[test]
    fn owning_serializes_inner_value() {
        let owner = Owner::new(Widget { id: 1998 });

        assert_eq!(serde_json::to_string(&owner).unwrap(), r#"{"id":1998}"#);
    }

    #[test]
    fn empty_serializes_as_null() {
        let owner: Owner<Widget> = Owner::empty();

        assert_eq!(serde_json::to_string(&owner).unwrap(), "null");
    }

    #[test]
    fn deserializes_both_states() {
        let owner: Owner<Widget> = serde_json::from_str(r#"{"id":7}"#).unwrap();
        let empty: Owner<Widget> = serde_json::from_str("null").unwrap();

        assert_eq!(*owner, Widget { id: 7 });
        assert!(empty.is_empty());
    }

    #[test]
    fn null_like_values_come_back_empty() {
        let json = serde_json::to_string(&Owner::new(())).unwrap();
        let restored: Owner<()> = serde_json::from_str(&json).unwrap();

        assert_eq!(json, "null");
        assert!(restored.is_empty());
    }
}
