//! Card info types as served by the card API.
//!
//! Every field is optional on the wire. Missing or `null` values decode to an
//! empty default so views can render before (or without) a successful load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a weekly consumption record, used as the card lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumeId(pub u64);

impl std::fmt::Display for ConsumeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConsumeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for ConsumeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Kind of card issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    /// Weekly card drawn from the spending pattern
    #[default]
    Basic,
    /// Card earned through a challenge
    Special,
    #[serde(other)]
    Unknown,
}

/// The tarot card itself
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub image_path: String,
    #[serde(deserialize_with = "nullable")]
    pub card_type: CardType,
    pub created_date: Option<NaiveDateTime>,
}

/// One spending keyword attached to a basic card
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicItem {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub keyword: String,
}

/// Card plus its keyword list for one consume id.
///
/// `ConsumeInfo::default()` is the empty entity shown before the first load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumeInfo {
    #[serde(deserialize_with = "nullable")]
    pub card: Card,
    #[serde(deserialize_with = "nullable")]
    pub basic_list: Vec<BasicItem>,
}

impl ConsumeInfo {
    /// Decode an API response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Treat an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_response() {
        let body = r#"{
            "card": {
                "id": 4,
                "name": "The Fool",
                "description": "A new beginning",
                "imagePath": "https://cdn.example.com/fool.png",
                "cardType": "BASIC",
                "createdDate": "2023-10-02T12:30:00"
            },
            "basicList": [
                {"id": 1, "keyword": "coffee"},
                {"id": 2, "keyword": "taxi"}
            ]
        }"#;

        let info = ConsumeInfo::from_json(body).unwrap();
        assert_eq!(info.card.id, 4);
        assert_eq!(info.card.name, "The Fool");
        assert_eq!(info.card.image_path, "https://cdn.example.com/fool.png");
        assert_eq!(info.card.card_type, CardType::Basic);
        assert!(info.card.created_date.is_some());
        assert_eq!(info.basic_list.len(), 2);
        assert_eq!(info.basic_list[1].keyword, "taxi");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let info = ConsumeInfo::from_json("{}").unwrap();
        assert_eq!(info, ConsumeInfo::default());

        let info = ConsumeInfo::from_json(r#"{"card": {"name": "Star"}}"#).unwrap();
        assert_eq!(info.card.name, "Star");
        assert!(info.card.description.is_empty());
        assert!(info.basic_list.is_empty());
    }

    #[test]
    fn null_fields_use_defaults() {
        let body = r#"{"card": {"name": null, "description": null}, "basicList": null}"#;
        let info = ConsumeInfo::from_json(body).unwrap();
        assert_eq!(info.card.name, "");
        assert!(info.basic_list.is_empty());

        let info = ConsumeInfo::from_json(r#"{"card": null}"#).unwrap();
        assert_eq!(info.card, Card::default());
    }

    #[test]
    fn unknown_card_type() {
        let info = ConsumeInfo::from_json(r#"{"card": {"cardType": "LEGENDARY"}}"#).unwrap();
        assert_eq!(info.card.card_type, CardType::Unknown);

        let info = ConsumeInfo::from_json(r#"{"card": {"cardType": "SPECIAL"}}"#).unwrap();
        assert_eq!(info.card.card_type, CardType::Special);
    }

    #[test]
    fn serializes_camel_case() {
        let info = ConsumeInfo {
            card: Card {
                name: "The Fool".to_string(),
                ..Default::default()
            },
            basic_list: vec![BasicItem {
                id: 1,
                keyword: "coffee".to_string(),
            }],
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["basicList"][0]["keyword"], "coffee");
        assert_eq!(json["card"]["cardType"], "BASIC");
        assert!(json["card"].get("imagePath").is_some());
    }

    #[test]
    fn consume_id_display_and_parse() {
        assert_eq!(ConsumeId::from(4).to_string(), "4");
        assert_eq!("12".parse::<ConsumeId>().unwrap(), ConsumeId(12));
        assert!("abc".parse::<ConsumeId>().is_err());
    }
}
