use std::sync::LazyLock;

use regex::Regex;

/// Matches `application/json` and any `type/subtype+json` media type, with an
/// optional parameter section (`; charset=...`).
static JSON_MIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(application/json|[^;/\s]+/[^;/\s]+\+json)\s*(;.*)?$").expect("a valid regex")
});

/// Checks whether the given MIME string carries structured JSON data.
///
/// Accepts `application/json` (with parameters, any casing), vendor suffixes
/// such as `application/vnd.api+json`, and `application/json-patch+json`.
pub fn is_json_mime(mime: &str) -> bool {
    JSON_MIME.is_match(mime) || mime.eq_ignore_ascii_case("application/json-patch+json")
}

/// Selects the media type to use from a candidate list.
///
/// Returns the first JSON-like candidate. When none of the candidates is
/// JSON-like the first entry wins — a declaration-order tie-break, not a
/// priority rule. An empty list yields `None`.
fn select_media_type<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .find(|candidate| is_json_mime(candidate))
        .or_else(|| candidates.first())
        .copied()
}

/// Selects the request `Content-Type` from the endpoint's producible types.
pub fn select_content_type<'a>(produces: &[&'a str]) -> Option<&'a str> {
    select_media_type(produces)
}

/// Selects the response `Accept` value from the endpoint's acceptable types.
pub fn select_accept<'a>(accepts: &[&'a str]) -> Option<&'a str> {
    select_media_type(accepts)
}

/// How a response body should be decoded, derived from the negotiated `Accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseKind {
    /// Structured data; decoded through serde.
    #[default]
    Json,
    /// Plain text; decoded as a UTF-8 string.
    Text,
    /// Anything else; kept as an opaque byte blob.
    Binary,
}

impl ResponseKind {
    /// Classifies the negotiated `Accept` value.
    ///
    /// `text/*` decodes as text, JSON-like types as structured data, anything
    /// else as binary. With no negotiated value the response defaults to JSON.
    pub fn from_accept(accept: Option<&str>) -> Self {
        match accept {
            None => Self::Json,
            Some(value) if is_text(value) => Self::Text,
            Some(value) if is_json_mime(value) => Self::Json,
            Some(_) => Self::Binary,
        }
    }
}

fn is_text(value: &str) -> bool {
    value
        .parse::<mime::Mime>()
        .is_ok_and(|mime| mime.type_() == mime::TEXT)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("application/json")]
    #[case::with_charset("application/json; charset=UTF-8")]
    #[case::vendor_suffix("application/vnd.api+json")]
    #[case::upper_case("APPLICATION/JSON")]
    #[case::json_patch("application/json-patch+json")]
    #[case::json_patch_upper("Application/Json-Patch+Json")]
    #[case::problem_details("application/problem+json")]
    fn should_accept_json_mimes(#[case] mime: &str) {
        assert!(is_json_mime(mime), "expected {mime} to be JSON-like");
    }

    #[rstest]
    #[case::text("text/plain")]
    #[case::xml("application/xml")]
    #[case::html("text/html")]
    #[case::suffix_not_json("application/vnd.api+xml")]
    #[case::embedded_space("application/ json")]
    #[case::empty("")]
    fn should_reject_non_json_mimes(#[case] mime: &str) {
        assert!(!is_json_mime(mime), "expected {mime} to be rejected");
    }

    #[test]
    fn should_prefer_json_candidates() {
        let selected = select_accept(&["text/plain", "application/json", "application/xml"]);
        assert_eq!(selected, Some("application/json"));
    }

    #[test]
    fn should_fall_back_to_first_candidate() {
        let selected = select_accept(&["text/plain", "application/pdf"]);
        assert_eq!(selected, Some("text/plain"));
    }

    #[test]
    fn should_return_none_for_empty_candidates() {
        assert_eq!(select_accept(&[]), None);
    }

    #[test]
    fn should_keep_single_candidate() {
        assert_eq!(select_accept(&["application/json"]), Some("application/json"));
        assert_eq!(select_accept(&["text/plain"]), Some("text/plain"));
    }

    #[test]
    fn select_content_type_uses_same_algorithm() {
        let selected = select_content_type(&["multipart/form-data", "application/json"]);
        assert_eq!(selected, Some("application/json"));
    }

    #[rstest]
    #[case::default_json(None, ResponseKind::Json)]
    #[case::text(Some("text/plain"), ResponseKind::Text)]
    #[case::html(Some("text/html"), ResponseKind::Text)]
    #[case::json(Some("application/json"), ResponseKind::Json)]
    #[case::vendor(Some("application/vnd.api+json"), ResponseKind::Json)]
    #[case::pdf(Some("application/pdf"), ResponseKind::Binary)]
    #[case::wildcard(Some("*/*"), ResponseKind::Binary)]
    fn should_classify_response_kind(#[case] accept: Option<&str>, #[case] expected: ResponseKind) {
        assert_eq!(ResponseKind::from_accept(accept), expected);
    }
}
