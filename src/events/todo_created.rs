use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Payload of the Todo.Created domain event
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodoCreatedEvent {
    /// id of the created todo
    pub id: String,

    /// title of the created todo, if the publisher included one
    pub title: Option<String>,
}

#[derive(ThisError, Debug)]
pub enum ParseEventError {
    #[error("Failed to parse event payload: {0}")]
    Payload(
        #[source]
        #[from]
        serde_json::Error,
    ),
}

impl TodoCreatedEvent {
    pub fn from_json(payload: &str) -> Result<Self, ParseEventError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Accepts the event payload and returns normally. Delivery and retry
/// semantics belong to the event bus.
pub fn handle(event: TodoCreatedEvent) {
    tracing::info!(id = %event.id, "Todo created.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_payload() {
        let event = TodoCreatedEvent::from_json(r#"{"id":"todo-1","title":"Buy milk"}"#)
            .expect("payload should parse");

        assert_eq!(event.id, "todo-1");
        assert_eq!(event.title.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn parses_a_payload_without_a_title() {
        let event =
            TodoCreatedEvent::from_json(r#"{"id":"todo-2"}"#).expect("payload should parse");

        assert_eq!(event.id, "todo-2");
        assert_eq!(event.title, None);
    }

    #[test]
    fn rejects_a_malformed_payload() {
        assert!(TodoCreatedEvent::from_json("not json").is_err());
    }
}
