use crate::{ClientError, ClientResult};

/// Credential context handed explicitly to every remote call site.
///
/// Token storage belongs to the authentication collaborator; this type only
/// carries the current credential so components can be exercised without a
/// simulated storage layer. The token must be treated as invalidate-able:
/// callers get an `Unauthorized` error rather than a panic when it is gone.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session for a signed-in shopper.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Session with no credential (catalog browsing only).
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(&self.token, Some(t) if !t.is_empty())
    }

    /// Current credential, or an `Unauthorized` error when absent.
    pub fn credential(&self) -> ClientResult<&str> {
        match &self.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ClientError::Unauthorized(
                "no session credential available".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_session_exposes_credential() {
        let session = Session::authenticated("tok-123");
        assert!(session.is_authenticated());
        assert_eq!(session.credential().unwrap(), "tok-123");
    }

    #[test]
    fn test_anonymous_session_fails_gracefully() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.credential(),
            Err(ClientError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let session = Session::authenticated("");
        assert!(!session.is_authenticated());
        assert!(session.credential().is_err());
    }
}
