//! Secure memory handling for extracted credentials.

use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An extracted API key that zeros its memory on drop.
///
/// A key pulled out of an `Authorization` header is a live credential; this
/// wrapper keeps it from lingering in memory (core dumps, swap) after use
/// and from leaking through logs. Access to the underlying string is
/// explicit via `.as_ref()`; there is intentionally no `Deref<Target=str>`,
/// so every use site is auditable.
///
/// # Example
///
/// ```
/// use api_key_header::SecureString;
///
/// let key = SecureString::new("test-key-123".to_string());
/// assert_eq!(key.as_ref(), "test-key-123");
///
/// // Debug and Display output is redacted
/// assert_eq!(format!("{:?}", key), "SecureString([REDACTED])");
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new SecureString, taking ownership of `s`.
    ///
    /// The string is zeroed when the SecureString is dropped.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Returns the length of the key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Comparing an extracted key against an expected one must not leak where
// the first mismatching byte sits.
impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString([REDACTED])")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
