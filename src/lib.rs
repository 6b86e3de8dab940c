#![forbid(unsafe_code)]
//! # API Key Header
//!
//! Extract `ApiKey` credentials from HTTP `Authorization` headers.
//!
//! ## Quick Start
//!
//! ```rust
//! use api_key_header::extract_api_key;
//! use http::{header::AUTHORIZATION, HeaderMap};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, "ApiKey test-key-123".parse()?);
//!
//! let key = extract_api_key(&headers)?;
//! assert_eq!(key, "test-key-123");
//! # Ok(())
//! # }
//! ```
//!
//! The extractor classifies failures into two terminal errors: a missing or
//! empty header is [`AuthError::NoAuthHeaderIncluded`], anything present but
//! not shaped like `ApiKey <key>` is [`AuthError::MalformedAuthHeader`]. Key
//! validation against a store is the caller's concern.

mod error;
mod extractor;
mod header_parser;
mod secure;

pub use error::{AuthError, Result};
pub use extractor::{extract_api_key, extract_api_key_secure};
pub use header_parser::API_KEY_SCHEME;
pub use secure::SecureString;
