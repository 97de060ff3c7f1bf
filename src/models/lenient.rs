use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` as the member's default value.
///
/// The server sends `null` for unset members of records whose Rust fields are
/// plain values, so these fields accept both a missing member and `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        count: i32,
        #[serde(deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn null_members_decode_to_default() {
        let sample: Sample =
            serde_json::from_str(r#"{"name":null,"count":null,"tags":null}"#).expect("sample");
        assert_eq!(sample.name, "");
        assert_eq!(sample.count, 0);
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn present_and_missing_members() {
        let sample: Sample = serde_json::from_str(r#"{"name":"demo","tags":["a"]}"#).expect("sample");
        assert_eq!(sample.name, "demo");
        assert_eq!(sample.count, 0);
        assert_eq!(sample.tags, vec!["a".to_string()]);
    }

    #[test]
    fn wrong_types_still_fail() {
        let err = serde_json::from_str::<Sample>(r#"{"count":"many"}"#).expect_err("count");
        assert!(err.to_string().contains("invalid type"));
    }
}
