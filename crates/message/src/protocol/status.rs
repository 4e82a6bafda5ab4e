//! Status code validation and default reason phrases.
//!
//! The phrase table is a process-wide, immutable constant: it has no
//! lifecycle beyond process start and is never mutated. Entries are sorted
//! by code so lookup is a binary search.

use tracing::error;

use super::MessageError;

/// Lowest status code accepted by [`validate`].
pub const MIN_STATUS_CODE: u16 = 100;

/// One past the highest status code accepted by [`validate`].
pub const MAX_STATUS_CODE_EXCLUSIVE: u16 = 600;

/// Default reason phrases, sorted by status code.
const STATUS_PHRASES: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (103, "Early Hints"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),
    (208, "Already Reported"),
    (226, "IM Used"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Content Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Content"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (427, "Unassigned"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (510, "Not Extended"),
    (511, "Network Authentication"),
];

/// Returns the default reason phrase for `code`, if the table has one.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    STATUS_PHRASES
        .binary_search_by_key(&code, |&(code, _)| code)
        .ok()
        .map(|idx| STATUS_PHRASES[idx].1)
}

/// Checks that `code` lies in the `1xx..5xx` range.
///
/// # Errors
///
/// [`MessageError::InvalidStatusCode`] for anything outside the range.
/// There is no recovery and no fallback value; validation fails
/// immediately and locally.
pub fn validate(code: u16) -> Result<(), MessageError> {
    if !(MIN_STATUS_CODE..MAX_STATUS_CODE_EXCLUSIVE).contains(&code) {
        error!(code, "status code outside the 1xx-5xx range");
        return Err(MessageError::invalid_status_code(code));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(reason_phrase(200), Some("OK"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(418), Some("I'm a teapot"));
        assert_eq!(reason_phrase(427), Some("Unassigned"));
        assert_eq!(reason_phrase(511), Some("Network Authentication"));
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        assert_eq!(reason_phrase(306), None);
        assert_eq!(reason_phrase(599), None);
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(STATUS_PHRASES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn validate_accepts_the_full_range() {
        assert!(validate(100).is_ok());
        assert!(validate(306).is_ok()); // valid range, no default phrase
        assert!(validate(599).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(matches!(validate(99), Err(MessageError::InvalidStatusCode { code: 99 })));
        assert!(matches!(validate(600), Err(MessageError::InvalidStatusCode { code: 600 })));
        assert!(matches!(validate(0), Err(MessageError::InvalidStatusCode { code: 0 })));
    }
}
