use thiserror::Error;

/// Configured access token, shared with server functions via Leptos context.
#[derive(Clone, Debug)]
pub struct AccessToken(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must not be empty")]
    Empty,
    #[error("invalid token")]
    Invalid,
}

impl AccessToken {
    /// Checks a submitted token, ignoring surrounding whitespace on both sides.
    /// Returns the normalised token on success.
    pub fn verify(&self, submitted: &str) -> Result<String, TokenError> {
        let submitted = submitted.trim();
        if submitted.is_empty() {
            return Err(TokenError::Empty);
        }

        if submitted != self.0.trim() {
            return Err(TokenError::Invalid);
        }

        Ok(submitted.to_string())
    }
}

/// Session login state. The token exists exactly when the session is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn {
        token: String,
    },
}

impl AuthState {
    /// Replaces any previous session with one holding `token`.
    pub fn login(&mut self, token: impl Into<String>) {
        *self = Self::LoggedIn {
            token: token.into(),
        };
    }

    pub fn logout(&mut self) {
        *self = Self::LoggedOut;
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { token } => Some(token),
            Self::LoggedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_ignores_whitespace_on_both_sides() {
        let configured = AccessToken("  s3cret\n".into());

        assert_eq!(configured.verify("s3cret"), Ok("s3cret".to_string()));
        assert_eq!(configured.verify(" s3cret "), Ok("s3cret".to_string()));
    }

    #[test]
    fn test_verify_rejects_blank_and_wrong_tokens() {
        let configured = AccessToken("s3cret".into());

        assert_eq!(configured.verify("   "), Err(TokenError::Empty));
        assert_eq!(configured.verify("guess"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_starts_logged_out() {
        let state = AuthState::default();
        assert!(!state.is_logged_in());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_login_stores_token() {
        let mut state = AuthState::default();
        state.login("abc");

        assert!(state.is_logged_in());
        assert_eq!(state.token(), Some("abc"));
    }

    #[test]
    fn test_login_replaces_previous_token() {
        let mut state = AuthState::default();
        state.login("abc");
        state.login("def");

        assert_eq!(state.token(), Some("def"));
    }

    #[test]
    fn test_logout_clears_from_any_state() {
        let mut loggedIn = AuthState::default();
        loggedIn.login("abc");
        loggedIn.logout();

        let mut loggedOut = AuthState::default();
        loggedOut.logout();

        for state in [loggedIn, loggedOut] {
            assert!(!state.is_logged_in());
            assert_eq!(state.token(), None);
        }
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut once = AuthState::default();
        once.login("abc");
        once.logout();

        let mut twice = once.clone();
        twice.logout();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_login_is_idempotent() {
        let mut once = AuthState::default();
        once.login("abc");
        let mut twice = once.clone();
        twice.login("abc");

        assert_eq!(once, twice);
    }
}
