use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::response::{is_truthy, message_of};

/// A single generated ad variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta: String,
}

/// One platform's content after parsing its JSON-encoded string.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformAds {
    /// Variant key -> ad, in the order the backend sent them
    Ads(Vec<(String, AdCopy)>),
    /// The backend could not generate this platform and said why
    Reported {
        error: String,
        details: Option<String>,
    },
    /// Content that is not a variant mapping; shown verbatim
    Invalid(String),
}

impl PlatformAds {
    pub fn parse(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::Invalid(raw.to_string());
        };

        if let Some(error) = map.get("error").filter(|e| is_truthy(e)) {
            return Self::Reported {
                error: message_of(error),
                details: map.get("details").filter(|d| is_truthy(d)).map(message_of),
            };
        }

        let mut ads = Vec::with_capacity(map.len());
        for (key, value) in map {
            let Value::Object(fields) = value else {
                return Self::Invalid(raw.to_string());
            };
            ads.push((key, AdCopy::from_fields(&fields)));
        }
        Self::Ads(ads)
    }
}

impl AdCopy {
    /// Model output is loosely typed: `null` or absent fields read as
    /// empty text, other scalars as their JSON text.
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| match fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(value) => message_of(value),
        };
        Self {
            headline: text("headline"),
            description: text("description"),
            cta: text("cta"),
        }
    }
}

/// Tab label for a platform id: first letter upper-cased
pub fn platform_label(platform: &str) -> String {
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variants_in_order() {
        let raw = r#"{
            "ad2": {"headline": "B", "description": "Bd", "cta": "Bc"},
            "ad1": {"headline": "A", "description": "Ad", "cta": "Ac"}
        }"#;

        let PlatformAds::Ads(ads) = PlatformAds::parse(raw) else {
            panic!("expected ads");
        };
        let keys: Vec<&str> = ads.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["ad2", "ad1"]);
        assert_eq!(
            ads[1].1,
            AdCopy { headline: "A".into(), description: "Ad".into(), cta: "Ac".into() }
        );
    }

    #[test]
    fn non_json_is_kept_verbatim() {
        assert_eq!(PlatformAds::parse("not json"), PlatformAds::Invalid("not json".into()));
    }

    #[test]
    fn non_object_json_is_invalid() {
        assert_eq!(PlatformAds::parse("[1,2]"), PlatformAds::Invalid("[1,2]".into()));
        assert_eq!(PlatformAds::parse("42"), PlatformAds::Invalid("42".into()));
    }

    #[test]
    fn variant_that_is_not_an_object_invalidates_platform() {
        let raw = r#"{"ad1": "oops"}"#;
        assert_eq!(PlatformAds::parse(raw), PlatformAds::Invalid(raw.into()));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let PlatformAds::Ads(ads) = PlatformAds::parse(r#"{"ad1": {"headline": "H"}}"#) else {
            panic!("expected ads");
        };
        assert_eq!(ads[0].1.description, "");
        assert_eq!(ads[0].1.cta, "");
    }

    #[test]
    fn loosely_typed_fields_keep_every_variant() {
        let raw = r#"{
            "ad1": {"headline": "H", "description": "D", "cta": null},
            "ad2": {"headline": "H2", "description": "D2", "cta": "C2"},
            "ad3": {"headline": 50, "description": true, "cta": 1.5}
        }"#;

        let PlatformAds::Ads(ads) = PlatformAds::parse(raw) else {
            panic!("expected ads");
        };
        assert_eq!(ads.len(), 3);
        assert_eq!(
            ads[0].1,
            AdCopy { headline: "H".into(), description: "D".into(), cta: "".into() }
        );
        assert_eq!(ads[1].1.cta, "C2");
        assert_eq!(
            ads[2].1,
            AdCopy { headline: "50".into(), description: "true".into(), cta: "1.5".into() }
        );
    }

    #[test]
    fn backend_reported_error_object() {
        let raw = r#"{"error": "Invalid JSON response for tiktok", "details": "line 1"}"#;
        assert_eq!(
            PlatformAds::parse(raw),
            PlatformAds::Reported {
                error: "Invalid JSON response for tiktok".into(),
                details: Some("line 1".into()),
            }
        );
    }

    #[test]
    fn empty_mapping_has_no_cards() {
        assert_eq!(PlatformAds::parse("{}"), PlatformAds::Ads(Vec::new()));
    }

    #[test]
    fn labels_capitalize_first_letter() {
        assert_eq!(platform_label("google"), "Google");
        assert_eq!(platform_label("tikTok"), "TikTok");
        assert_eq!(platform_label(""), "");
    }
}
