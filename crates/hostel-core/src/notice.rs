//! # Notices
//!
//! Transient user-facing messages (the frontend renders them as toasts).
//!
//! Every mutation reports its outcome through a notice. Session redirects
//! are the one exception: they are silent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// One toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    #[ts(as = "String")]
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Notice {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice::new(NoticeLevel::Info, message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let n = Notice::error("No beds available at this hostel");
        assert!(n.is_error());
        assert_eq!(n.message, "No beds available at this hostel");
        assert_ne!(Notice::info("a").id, Notice::info("a").id);
    }

    #[test]
    fn test_serialized_level_is_lowercase() {
        let json = serde_json::to_value(Notice::success("ok")).unwrap();
        assert_eq!(json["level"], "success");
        assert!(json["createdAt"].is_string());
    }
}
