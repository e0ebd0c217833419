use serde::{Deserialize, Deserializer, Serialize};

use crate::user::UserId;

pub type EventId = i64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub creator_id: UserId,
    /// Join order is kept and a user may appear more than once.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<UserId>,
}

// Older data files store an event nobody joined as `"participants": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<UserId>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_participants_load_as_empty() {
        let event: Event = serde_json::from_str(
            r#"{"id":1,"title":"Test Event","description":"","date":"2023-09-22","location":"Testort","creator_id":1,"participants":null}"#,
        )
        .unwrap();

        assert!(event.participants.is_empty());
        assert_eq!(event.location, "Testort");
    }

    #[test]
    fn test_missing_fields_default() {
        let event: Event = serde_json::from_str(r#"{"id":3}"#).unwrap();

        assert_eq!(event.id, 3);
        assert_eq!(event.creator_id, 0);
        assert!(event.title.is_empty());
        assert!(event.participants.is_empty());
    }
}
