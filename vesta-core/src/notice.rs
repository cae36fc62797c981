use serde::Serialize;

use crate::ClientError;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Advisory,
}

/// A dismissible, user-facing notification.
///
/// Every recoverable failure in the client resolves to one of these; none of
/// them tears the session down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    /// Low-stock style advisories: informative, not blocking.
    pub fn advisory(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Advisory,
            text: text.into(),
        }
    }
}

impl From<&ClientError> for Notice {
    fn from(err: &ClientError) -> Self {
        Notice::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_text_is_surfaced_verbatim() {
        let err = ClientError::service("Insufficient stock for this product");
        let notice = Notice::from(&err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Insufficient stock for this product");
    }
}
