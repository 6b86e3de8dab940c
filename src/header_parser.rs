use nom::{
    error::{ErrorKind, ParseError},
    Err as NomErr, IResult,
};

/// Authorization scheme recognized by this crate.
///
/// Comparison against the scheme token is case-sensitive: `apikey` is not a
/// valid spelling.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Parse an `ApiKey <key>` header value into the key.
///
/// Only the first space separates scheme from key; anything after it,
/// including further spaces, is the key and is returned verbatim. An input
/// with no space at all (a bare `ApiKey` included) fails, as does a wrong
/// scheme token or an empty key.
pub fn parse_authorization(input: &str) -> IResult<&str, &str> {
    // No space → no scheme/key boundary
    let (scheme, key) = match input.split_once(' ') {
        None => {
            return Err(NomErr::Error(ParseError::from_error_kind(
                input,
                ErrorKind::Space,
            )));
        }
        Some(x) => x,
    };

    if scheme != API_KEY_SCHEME {
        return Err(NomErr::Error(ParseError::from_error_kind(
            input,
            ErrorKind::Tag,
        )));
    }

    // "ApiKey " with nothing after the space
    if key.is_empty() {
        return Err(NomErr::Error(ParseError::from_error_kind(
            input,
            ErrorKind::Eof,
        )));
    }

    Ok((&input[input.len()..], key))
}
