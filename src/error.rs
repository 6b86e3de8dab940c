use thiserror::Error;

/// Error type for Authorization header extraction.
///
/// # Security Note
/// Both messages are fixed strings and never echo header content, so they
/// are safe to surface to clients (e.g. in a 401 body).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The `Authorization` header is absent, or present with an empty value.
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,

    /// The header is present but does not match the `ApiKey <key>` shape.
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

pub type Result<T> = std::result::Result<T, AuthError>;
