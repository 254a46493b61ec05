#![allow(missing_docs)]

use formstream::{MultipartError, MultipartParser};

#[test]
fn missing_content_disposition_is_rejected() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    let err = parser
        .parse(b"--B\r\ncontent-type: text/plain\r\n\r\nbody\r\n--B--")
        .expect_err("must fail without content-disposition");

    assert!(matches!(err, MultipartError::MissingContentDisposition));
}

#[test]
fn malformed_header_line_without_colon_is_rejected() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    let err = parser
        .parse(b"--B\r\nnot-a-header-line\r\n\r\nbody\r\n--B--")
        .expect_err("must fail on a colon-less header line");

    assert!(matches!(err, MultipartError::MalformedHeader));
}

#[test]
fn malformed_header_line_with_empty_name_is_rejected() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    let err = parser
        .parse(b"--B\r\n: value\r\n\r\nbody\r\n--B--")
        .expect_err("must fail on an empty header name");

    assert!(matches!(err, MultipartError::MalformedHeader));
}

#[test]
fn lone_cr_not_followed_by_lf_after_delimiter_is_rejected() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    let err = parser
        .parse(b"--B\r\ncontent-disposition: form-data; name=f\r\n\r\nhello--B\rX")
        .expect_err("a lone CR after the delimiter is invalid");

    assert!(matches!(err, MultipartError::InvalidLineBreakAfterDelimiter));
}

#[test]
fn empty_boundary_is_rejected_at_construction() {
    let err = MultipartParser::new("").expect_err("must fail");
    assert!(matches!(err, MultipartError::InvalidBoundary));
}

#[test]
fn oversized_boundary_is_rejected_at_construction() {
    let err = MultipartParser::new("x".repeat(71)).expect_err("must fail");
    assert!(matches!(err, MultipartError::InvalidBoundary));
}

#[test]
fn parser_does_not_recover_after_an_error() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    assert!(
        parser
            .parse(b"--B\r\nnot-a-header-line\r\n\r\nbody\r\n--B--")
            .is_err()
    );

    // Once `parse` has returned an error the caller is expected to stop
    // feeding this parser; a further call is not guaranteed to make progress.
    let second = parser.parse(b"more bytes");
    let _ = second;
}

#[test]
fn duplicate_content_disposition_last_one_wins_through_next_part() {
    let mut parser = MultipartParser::new("B").expect("boundary should be valid");
    parser
        .parse(
            b"--B\r\ncontent-disposition: form-data; name=first\r\ncontent-disposition: form-data; name=second\r\n\r\nbody\r\n--B--",
        )
        .expect("parse should succeed");

    let part = parser.next_part().expect("part expected");
    assert_eq!(part.name(), "second");
}

#[test]
fn error_messages_match_their_documented_text() {
    assert_eq!(
        MultipartError::MissingContentDisposition.to_string(),
        "Missing content-disposition header"
    );
    assert_eq!(
        MultipartError::InvalidLineBreakAfterDelimiter.to_string(),
        "Invalid line break after delimiter"
    );
    assert_eq!(
        MultipartError::MalformedHeader.to_string(),
        "Malformed header line"
    );
    assert_eq!(
        MultipartError::InvalidBoundary.to_string(),
        "Boundary length must be between 1 and 70 characters."
    );
}
