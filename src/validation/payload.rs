use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrOther {
    Text(String),
    Other(IgnoredAny),
}

/// Reads a JSON field as a string, treating `null` and non-string values as
/// empty so they fall through to the presence checks.
///
/// Pair with `#[serde(default)]` to cover a missing key as well.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrOther::deserialize(deserializer)? {
        TextOrOther::Text(text) => text,
        TextOrOther::Other(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "lenient_string")]
        field: String,
    }

    fn field(json: &str) -> String {
        serde_json::from_str::<Payload>(json).unwrap().field
    }

    #[test]
    fn keeps_strings() {
        assert_eq!(field(r#"{"field":"hello"}"#), "hello");
        assert_eq!(field(r#"{"field":""}"#), "");
    }

    #[test]
    fn blanks_missing_null_and_non_strings() {
        assert_eq!(field("{}"), "");
        assert_eq!(field(r#"{"field":null}"#), "");
        assert_eq!(field(r#"{"field":0}"#), "");
        assert_eq!(field(r#"{"field":true}"#), "");
        assert_eq!(field(r#"{"field":["a"]}"#), "");
        assert_eq!(field(r#"{"field":{"a":1}}"#), "");
    }
}
