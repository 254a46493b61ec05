use crate::error::MultipartError;

/// Parsed `content-disposition` parameters relevant to multipart aggregation.
///
/// Quoted parameter values are retained with their surrounding quotes rather than
/// unescaped, matching the observed behavior of the reference implementation this
/// parser is modeled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDisposition {
    /// The `name` parameter, if present.
    pub name: Option<String>,
    /// The `filename` parameter, if present.
    pub filename: Option<String>,
}

/// Parses a single header line of the form `name: value` into a lowercased name
/// and a trimmed value.
///
/// Returns [`MultipartError::MalformedHeader`] when the line has no `:` separator
/// or the name is empty.
pub fn parse_header_line(line: &[u8]) -> Result<(String, String), MultipartError> {
    let text = std::str::from_utf8(line).map_err(|_| MultipartError::MalformedHeader)?;
    let (raw_name, raw_value) = text.split_once(':').ok_or(MultipartError::MalformedHeader)?;

    let name = raw_name.trim();
    if name.is_empty() || !name.bytes().all(is_header_name_char) {
        return Err(MultipartError::MalformedHeader);
    }

    let value = raw_value.trim_matches(|c: char| c == ' ' || c == '\t').trim_end();
    Ok((name.to_ascii_lowercase(), value.to_owned()))
}

fn is_header_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Parses a `content-disposition` header value, extracting `name` and `filename`.
///
/// Parameter names are matched case-insensitively. Quoted values keep their
/// surrounding `"` characters verbatim. `filename*` (RFC 5987) is not recognized.
/// When a parameter appears more than once, the last occurrence wins.
pub fn parse_content_disposition(value: &str) -> ContentDisposition {
    let mut result = ContentDisposition::default();

    for segment in split_semicolon_aware(value).into_iter().skip(1) {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = trimmed.split_once('=') else {
            continue;
        };

        match raw_key.trim().to_ascii_lowercase().as_str() {
            "name" => result.name = Some(raw_value.trim().to_owned()),
            "filename" => result.filename = Some(raw_value.trim().to_owned()),
            _ => {}
        }
    }

    result
}

fn split_semicolon_aware(value: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in value.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_quotes => {
                current.push(ch);
                escaped = true;
            }
            '"' => {
                current.push(ch);
                in_quotes = !in_quotes;
            }
            ';' if !in_quotes => {
                segments.push(current);
                current = String::new();
            }
            _ => current.push(ch),
        }
    }

    segments.push(current);
    segments
}
