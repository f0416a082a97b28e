use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("nickname must not be empty")]
    EmptyNickname,
    #[error("group code must not be empty")]
    EmptyGroupCode,
}

/// Who we are and which group we joined. Set once at join time and immutable
/// for the lifetime of the chat view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    nickname: String,
    group_code: String,
}

impl Session {
    /// Validates and builds a session. Both fields are trimmed; an empty
    /// result is rejected synchronously, before any network call is made.
    pub fn new(nickname: &str, group_code: &str) -> Result<Self, SessionError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(SessionError::EmptyNickname);
        }

        let group_code = group_code.trim();
        if group_code.is_empty() {
            return Err(SessionError::EmptyGroupCode);
        }

        Ok(Self {
            nickname: nickname.to_owned(),
            group_code: group_code.to_owned(),
        })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn group_code(&self) -> &str {
        &self.group_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_session_from_trimmed_fields() {
        let session = Session::new("  ann ", " team42  ").expect("session must build");

        assert_eq!(session.nickname(), "ann");
        assert_eq!(session.group_code(), "team42");
    }

    #[test]
    fn rejects_empty_nickname() {
        assert_eq!(Session::new("   ", "team42"), Err(SessionError::EmptyNickname));
    }

    #[test]
    fn rejects_empty_group_code() {
        assert_eq!(Session::new("ann", ""), Err(SessionError::EmptyGroupCode));
    }
}
