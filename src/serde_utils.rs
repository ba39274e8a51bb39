//! Serde helpers for request bodies.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field into `Option<Option<T>>`.
///
/// Pair with `#[serde(default)]` so the three JSON shapes stay distinct:
/// a missing `dueDate` keeps the stored value (`None`), `"dueDate": null`
/// clears it (`Some(None)`), and a value replaces it (`Some(Some(v))`).
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        due: Option<Option<String>>,
    }

    fn parse(json: &str) -> Option<Option<String>> {
        serde_json::from_str::<Patch>(json).unwrap().due
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"due": null}"#), Some(None));
        assert_eq!(parse(r#"{"due": "2030-01-01"}"#), Some(Some("2030-01-01".into())));
    }
}
