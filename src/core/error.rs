//! Error types for the `qRate` client.
//!
//! Four families, mirroring where a failure can originate: the review
//! form (client-local validation), the HTTP gateway, the session store,
//! and the submission pipeline that composes the first two. None of
//! these are fatal to the application; commands surface them and leave
//! entered state intact.

/// Client-local validation failures raised before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewFormError {
    /// One or more required fields are blank. Submission is blocked and
    /// the gateway is never called.
    #[error("Please fill in all required fields: {}.", .fields.join(", "))]
    MissingFields {
        /// Names of the blank fields, in form order.
        fields: Vec<&'static str>,
    },

    /// The comment is non-blank but shorter than the minimum once
    /// trimmed. Checked only after the required-field gate passes.
    #[error("Please provide a more detailed review (at least 50 characters).")]
    CommentTooShort {
        /// Trimmed comment length in characters.
        length: usize,
    },
}

/// Failures talking to the backend API.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-2xx status. `message` is the
    /// server's `error` field when the body carried one, otherwise the
    /// generic fallback.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message, surfaced to the user unchanged.
        message: String,
    },

    /// The request never completed: no connectivity, DNS failure,
    /// connection refused.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered 2xx but the body did not match the expected
    /// shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Session store and authentication-gate failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A protected operation was attempted without a signed-in session.
    #[error("Authentication Required: you must be signed in to leave a review.")]
    NotSignedIn,

    /// The supplied address is not an institutional email.
    #[error("Please use a valid @queensu.ca email address.")]
    InvalidEmail,

    /// Reading or writing the persisted session file failed.
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The session state could not be serialized for persistence.
    #[error("session serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Composite error for a review submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; the gateway was not called.
    #[error(transparent)]
    Form(#[from] ReviewFormError),

    /// Validation passed but the gateway call failed. The draft keeps
    /// every entered value so the user can resubmit.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
