//! Frontend Models
//!
//! Data structures matching backend entities. The client never fabricates
//! ids; everything here is a read-only snapshot of server state.

use serde::{Deserialize, Serialize};

/// Card priority. Serialized lowercase on the wire (`alta`/`media`/`baixa`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baixa,
}

impl Priority {
    /// Parse a backend value, falling back to `Media` for anything unknown.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "alta" => Priority::Alta,
            "baixa" => Priority::Baixa,
            _ => Priority::Media,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Alta => "alta",
            Priority::Media => "media",
            Priority::Baixa => "baixa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Alta => "Alta",
            Priority::Media => "Média",
            Priority::Baixa => "Baixa",
        }
    }

    /// Indicator color used by cards and the modal.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Alta => "#ef4444",
            Priority::Media => "#f59e0b",
            Priority::Baixa => "#10b981",
        }
    }
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Column data structure (matches backend)
///
/// `position` is the server-assigned order within the board; the client
/// never renumbers, it only requests a target position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    pub name: String,
    pub position: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// User profile snapshot, also persisted in localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Login/register response. User fields come denormalized next to the token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl AuthResponse {
    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            photo: self.photo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_falls_back_to_media() {
        assert_eq!(Priority::parse("alta"), Priority::Alta);
        assert_eq!(Priority::parse("BAIXA"), Priority::Baixa);
        assert_eq!(Priority::parse("urgente"), Priority::Media);
        assert_eq!(Priority::parse(""), Priority::Media);
    }

    #[test]
    fn card_without_priority_defaults_to_media() {
        let card: Card = serde_json::from_str(r#"{"id":1,"title":"t"}"#).unwrap();
        assert_eq!(card.priority, Priority::Media);
        assert_eq!(card.description, None);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Alta).unwrap(), r#""alta""#);
    }
}
