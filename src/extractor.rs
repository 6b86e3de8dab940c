use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::error::{AuthError, Result};
use crate::header_parser::parse_authorization;
use crate::secure::SecureString;

/// Extracts the API key from the `Authorization` header of `headers`.
///
/// The header must carry the custom `ApiKey <key>` scheme. Lookup of the
/// header name is case-insensitive (`HeaderMap` normalizes names); the
/// scheme comparison is not. Only the first value of a repeated header is
/// considered.
///
/// # Errors
///
/// - [`AuthError::NoAuthHeaderIncluded`] when the header is absent or its
///   value is empty.
/// - [`AuthError::MalformedAuthHeader`] when the value does not match
///   `ApiKey <key>`, including wrong or wrong-case scheme, a bare scheme
///   with no key, or a value `http` cannot expose as a string.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    let value = match headers.get(AUTHORIZATION) {
        None => return Err(AuthError::NoAuthHeaderIncluded),
        // Present but unreadable is a malformed header, not a missing one
        Some(v) => v.to_str().map_err(|_| AuthError::MalformedAuthHeader)?,
    };

    if value.is_empty() {
        return Err(AuthError::NoAuthHeaderIncluded);
    }

    let (_, key) = parse_authorization(value).map_err(|_| AuthError::MalformedAuthHeader)?;

    Ok(key.to_owned())
}

/// Like [`extract_api_key`], but returns the key wrapped in a
/// [`SecureString`].
///
/// Use this variant when the credential is held beyond the request path:
/// the wrapper zeroes its memory on drop and redacts itself in `Debug`
/// and `Display` output.
pub fn extract_api_key_secure(headers: &HeaderMap) -> Result<SecureString> {
    extract_api_key(headers).map(SecureString::new)
}
