//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between the
//! dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardUpdate;
use crate::view::Selection;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The country selection changed
    Select {
        /// Selected country names; empty means all countries
        #[serde(default)]
        countries: Selection,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Recomputed outputs for the latest selection
    Update(DashboardUpdate),
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_select() {
        let json = r#"{"type": "select", "countries": ["Finland", "Norway"]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Select { countries } => {
                assert_eq!(countries.len(), 2);
                assert!(countries.contains("Finland"));
            }
            _ => panic!("Expected Select"),
        }
    }

    #[test]
    fn test_client_message_deserialize_select_without_countries() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "select"}"#).unwrap();
        match msg {
            ClientMessage::Select { countries } => assert!(countries.is_empty()),
            _ => panic!("Expected Select"),
        }
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            connection_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"connection_id\":\"abc-123\""));
    }

    #[test]
    fn test_server_message_serialize_pong() {
        let json = serde_json::to_string(&ServerMessage::Pong).unwrap();
        assert_eq!(json, r#"{"type":"pong"}"#);
    }
}
