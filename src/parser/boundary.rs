use crate::error::MultipartError;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";
/// Maximum boundary length permitted by RFC 2046 §5.1.1.
pub const MAX_BOUNDARY_LEN: usize = 70;

/// Validates a boundary token intended for [`crate::parser::MultipartParser::new`].
///
/// Only the length is constrained per the spec this parser implements; arbitrary
/// byte content is otherwise accepted since the parser matches it literally.
pub fn validate_boundary(boundary: &[u8]) -> Result<(), MultipartError> {
    if boundary.is_empty() || boundary.len() > MAX_BOUNDARY_LEN {
        return Err(MultipartError::InvalidBoundary);
    }
    Ok(())
}

/// Extracts and validates the `boundary` parameter from a `Content-Type` header
/// value, for callers that only have the raw header rather than a pre-extracted
/// boundary.
///
/// This supplements the core parser, which is always constructed from an
/// already-known boundary; extraction from a `Content-Type` is a separate,
/// transport-adjacent concern.
pub fn extract_boundary(content_type: &str) -> Result<String, MultipartError> {
    let mime = content_type
        .parse::<mime::Mime>()
        .map_err(|_| MultipartError::InvalidContentType {
            message: "invalid Content-Type header".to_owned(),
        })?;

    if mime.essence_str() != MULTIPART_FORM_DATA {
        return Err(MultipartError::InvalidContentType {
            message: "Content-Type must be multipart/form-data".to_owned(),
        });
    }

    let boundary = mime
        .get_param("boundary")
        .map(|value| value.as_str())
        .ok_or_else(|| MultipartError::InvalidContentType {
            message: "missing multipart boundary parameter".to_owned(),
        })?;

    let boundary = decode_boundary_percent_encoding(boundary)?;
    validate_boundary(boundary.as_bytes())?;

    if boundary.ends_with(' ') {
        return Err(MultipartError::InvalidContentType {
            message: "multipart boundary cannot end with whitespace".to_owned(),
        });
    }

    if !boundary.chars().all(is_boundary_char) {
        return Err(MultipartError::InvalidContentType {
            message: "multipart boundary contains invalid characters".to_owned(),
        });
    }

    Ok(boundary)
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '\'' | '(' | ')' | '+' | '_' | ',' | '-' | '.' | '/' | ':' | '=' | '?' | ' '
        )
}

fn decode_boundary_percent_encoding(boundary: &str) -> Result<String, MultipartError> {
    if !boundary.as_bytes().contains(&b'%') {
        return Ok(boundary.to_owned());
    }

    let mut bytes = Vec::with_capacity(boundary.len());
    let raw = boundary.as_bytes();
    let mut index = 0usize;

    while index < raw.len() {
        if raw[index] == b'%' {
            if index + 2 >= raw.len() {
                return Err(invalid_percent_encoding());
            }
            let hi = hex_value(raw[index + 1])?;
            let lo = hex_value(raw[index + 2])?;
            bytes.push((hi << 4) | lo);
            index += 3;
            continue;
        }

        bytes.push(raw[index]);
        index += 1;
    }

    String::from_utf8(bytes).map_err(|_| MultipartError::InvalidContentType {
        message: "multipart boundary percent-encoding is not valid UTF-8".to_owned(),
    })
}

fn hex_value(byte: u8) -> Result<u8, MultipartError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(invalid_percent_encoding()),
    }
}

fn invalid_percent_encoding() -> MultipartError {
    MultipartError::InvalidContentType {
        message: "invalid percent-encoding in multipart boundary".to_owned(),
    }
}
