#![allow(missing_docs)]

use formstream::MultipartError;
use formstream::parser::extract_boundary;

#[test]
fn extracts_boundary_from_content_type() {
    let boundary = extract_boundary("multipart/form-data; boundary=abc123").expect("should parse");
    assert_eq!(boundary, "abc123");
}

#[test]
fn extracts_quoted_boundary() {
    let boundary = extract_boundary("multipart/form-data; boundary=\"my-boundary\"")
        .expect("quoted boundary should parse");
    assert_eq!(boundary, "my-boundary");
}

#[test]
fn rejects_non_multipart_content_type() {
    let err = extract_boundary("application/json").expect_err("must fail");
    assert_err_contains(&err.to_string(), "multipart/form-data");
}

#[test]
fn rejects_missing_boundary_parameter() {
    let err = extract_boundary("multipart/form-data").expect_err("must fail");
    assert_err_contains(&err.to_string(), "missing multipart boundary");
}

#[test]
fn rejects_invalid_boundary_characters() {
    let err = extract_boundary("multipart/form-data; boundary=abc@123").expect_err("must fail");
    assert_err_contains(&err.to_string(), "invalid characters");
}

#[test]
fn rejects_boundary_that_is_too_long() {
    let long_boundary = "a".repeat(71);
    let header = format!("multipart/form-data; boundary={long_boundary}");
    let err = extract_boundary(&header).expect_err("must fail");
    assert!(matches!(err, MultipartError::InvalidBoundary));
}

#[test]
fn decodes_percent_encoded_boundary() {
    let boundary =
        extract_boundary("multipart/form-data; boundary=abc%2D123").expect("should parse");
    assert_eq!(boundary, "abc-123");
}

#[test]
fn rejects_malformed_percent_encoding_in_boundary() {
    let err = extract_boundary("multipart/form-data; boundary=abc%2").expect_err("must fail");
    assert_err_contains(&err.to_string(), "percent-encoding");
}

#[test]
fn constructor_accepts_boundary_at_max_length() {
    let boundary = "b".repeat(70);
    formstream::MultipartParser::new(&boundary).expect("70-byte boundary is valid");
}

#[test]
fn constructor_rejects_boundary_over_max_length() {
    let boundary = "b".repeat(71);
    let err = formstream::MultipartParser::new(&boundary).expect_err("must fail");
    assert!(matches!(err, MultipartError::InvalidBoundary));
}

#[test]
fn constructor_rejects_empty_boundary() {
    let err = formstream::MultipartParser::new("").expect_err("must fail");
    assert!(matches!(err, MultipartError::InvalidBoundary));
}

fn assert_err_contains(actual: &str, expected_fragment: &str) {
    assert!(
        actual.contains(expected_fragment),
        "expected `{actual}` to contain `{expected_fragment}`"
    );
}
