use thiserror::Error;

/// Failure of a single call to the review table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("store returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode store response: {0}")]
    Decode(String),
    #[error("store returned no row")]
    EmptyResponse,
    #[error("no review with id {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Shown inline on the login form.
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("auth request failed: {0}")]
    Request(String),
    #[error("auth service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode auth response: {0}")]
    Decode(String),
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

impl AuthError {
    /// Text for the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            MutationKind::Insert | MutationKind::Update => "saving",
            MutationKind::Delete => "deleting",
        };
        f.write_str(verb)
    }
}

/// What a review screen failed to do. Logged, never shown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Error fetching reviews: {0}")]
    Fetch(#[source] StoreError),
    #[error("Error {kind} review: {source}")]
    Mutation {
        kind: MutationKind,
        #[source]
        source: StoreError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_errors_read_like_log_lines() {
        let fetch = ReviewError::Fetch(StoreError::Request("offline".into()));
        assert_eq!(fetch.to_string(), "Error fetching reviews: request failed: offline");

        let delete = ReviewError::Mutation {
            kind: MutationKind::Delete,
            source: StoreError::Status { status: 403, message: "denied".into() },
        };
        assert_eq!(delete.to_string(), "Error deleting review: store returned 403: denied");
    }

    #[test]
    fn invalid_credentials_message_is_passed_through() {
        let err = AuthError::InvalidCredentials("Invalid login credentials".into());
        assert_eq!(err.user_message(), "Invalid login credentials");
    }
}
