//! Guest Model

use serde::{Deserialize, Deserializer, Serialize};

/// RSVP status attached to a guest
///
/// Only `amount` and `attendance` are modelled. Other fields the application
/// keeps on the status are dropped on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStatus {
    /// Party size as entered on the RSVP form (e.g. `"2"`)
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    /// `Some(false)` when the guest declined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<bool>,
}

/// Guest entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Affinity tag such as "family" or "friend"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub relation: String,
    /// Affinity tag such as "bride" or "groom"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub side: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
}

impl Guest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            relation: String::new(),
            side: String::new(),
            rsvp_status: None,
        }
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = side.into();
        self
    }

    /// Set the RSVP party size text
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.rsvp_status.get_or_insert_with(RsvpStatus::default).amount = Some(amount.into());
        self
    }

    pub fn with_attendance(mut self, attending: bool) -> Self {
        self.rsvp_status.get_or_insert_with(RsvpStatus::default).attendance = Some(attending);
        self
    }

    /// Raw party size text, if the guest has an RSVP with an amount
    pub fn rsvp_amount(&self) -> Option<&str> {
        self.rsvp_status
            .as_ref()
            .and_then(|status| status.amount.as_deref())
    }

    /// True only when the RSVP explicitly says the guest is not coming
    pub fn has_declined(&self) -> bool {
        matches!(
            self.rsvp_status.as_ref().and_then(|status| status.attendance),
            Some(false)
        )
    }
}

/// Older RSVP forms stored the party size as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<AmountRepr>::deserialize(deserializer)?;
    Ok(repr.map(|value| match value {
        AmountRepr::Text(text) => text,
        AmountRepr::Integer(n) => n.to_string(),
        AmountRepr::Float(f) => f.to_string(),
    }))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_guest() {
        let json = r#"{
            "id": "g1",
            "name": "Ana",
            "relation": "family",
            "side": "bride",
            "rsvpStatus": { "amount": "3", "attendance": true, "dietary": "vegan" }
        }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();

        assert_eq!(guest.id, "g1");
        assert_eq!(guest.relation, "family");
        assert_eq!(guest.side, "bride");
        assert_eq!(guest.rsvp_amount(), Some("3"));
        assert!(!guest.has_declined());
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let json = r#"{ "id": "g2", "relation": null }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();

        assert_eq!(guest.name, "");
        assert_eq!(guest.relation, "");
        assert_eq!(guest.side, "");
        assert!(guest.rsvp_status.is_none());
        assert_eq!(guest.rsvp_amount(), None);
    }

    #[test]
    fn test_numeric_amount_is_kept_as_text() {
        let json = r#"{ "id": "g3", "rsvpStatus": { "amount": 4 } }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();
        assert_eq!(guest.rsvp_amount(), Some("4"));

        let json = r#"{ "id": "g4", "rsvpStatus": { "amount": 2.0 } }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();
        assert_eq!(guest.rsvp_amount(), Some("2"));
    }

    #[test]
    fn test_has_declined() {
        assert!(Guest::new("g1", "A").with_attendance(false).has_declined());
        assert!(!Guest::new("g2", "B").with_attendance(true).has_declined());
        assert!(!Guest::new("g3", "C").has_declined());
        assert!(!Guest::new("g4", "D").with_amount("2").has_declined());
    }

    #[test]
    fn test_serialize_camel_case() {
        let guest = Guest::new("g1", "Ana").with_amount("2");
        let json = serde_json::to_string(&guest).unwrap();
        assert!(json.contains("\"rsvpStatus\":{\"amount\":\"2\"}"));
    }
}
