// src/presentation/http/controllers/fields.rs
//! Request-body field shapes shared by several controllers.

use crate::domain::catalog::photo::split_keywords;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Keywords arrive either as a JSON array or as one comma-separated string.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum KeywordsInput {
    List(Vec<String>),
    Csv(String),
}

impl KeywordsInput {
    pub fn into_keywords(self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .into_iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            Self::Csv(raw) => split_keywords(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        description: Option<Option<String>>,
        keywords: Option<KeywordsInput>,
    }

    #[test]
    fn null_and_absent_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let cleared: Patch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: Patch = serde_json::from_str(r#"{"description": "Coastline"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Coastline".into())));
    }

    #[test]
    fn keywords_accept_list_or_csv() {
        let csv: Patch = serde_json::from_str(r#"{"keywords": "sea, fog ,"}"#).unwrap();
        assert_eq!(csv.keywords.unwrap().into_keywords(), vec!["sea", "fog"]);

        let list: Patch = serde_json::from_str(r#"{"keywords": [" sea", "", "fog"]}"#).unwrap();
        assert_eq!(list.keywords.unwrap().into_keywords(), vec!["sea", "fog"]);
    }
}
