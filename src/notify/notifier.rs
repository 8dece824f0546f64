use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// JSON payload attached to every order notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    BufferPoisoned,
    Encode(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::BufferPoisoned => write!(f, "notifier buffer poisoned"),
            NotifyError::Encode(msg) => write!(f, "notification encode failed: {}", msg),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Trait for publishing order notifications to external systems.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &str, payload: &str) -> Result<(), NotifyError>;
}

/// A simple notifier that logs events to stdout or a buffer.
pub struct LogNotifier {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNotifier {
    pub fn new() -> Self {
        LogNotifier { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogNotifier {
            buffer: Some(buffer),
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, event: &str, payload: &str) -> Result<(), NotifyError> {
        let line = format!("[NOTIFY] {} {}", event, payload);
        if let Some(buffer) = &self.buffer {
            let mut buffer = buffer.lock().map_err(|_| NotifyError::BufferPoisoned)?;
            buffer.push(line);
        } else {
            println!("{}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_notifier_to_buffer() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let notifier = LogNotifier::with_buffer(buffer.clone());

        notifier
            .notify("order:completed", r#"{"order_id":"o1"}"#)
            .unwrap();
        notifier
            .notify("order:status", r#"{"order_id":"o1"}"#)
            .unwrap();

        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("order:completed"));
        assert!(lines[1].contains("order:status"));
    }

    #[test]
    fn notification_payload_round_trips() {
        let payload = Notification {
            order_id: "o1".to_string(),
            status: OrderStatus::Completed,
            delivery_info: Some("CODE-1".to_string()),
        };
        let json = serde_json::to_string(&payload).unwrap();
        let parsed: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
