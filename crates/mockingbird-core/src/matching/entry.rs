//! Entry lookup against a bundle.

use crate::bundle::{MockBundle, MockEntry};
use crate::matching::query::query_matches;
use crate::matching::request::RequestDescriptor;

/// Check whether a single entry answers the request.
///
/// URL and method are compared with exact, case-sensitive equality before the
/// query parameters are validated.
pub fn entry_matches(entry: &MockEntry, request: &RequestDescriptor) -> bool {
    entry.url == request.url
        && entry.method == request.method
        && query_matches(&entry.query_parameters, &request.query)
}

/// Find the first entry, in bundle order, that answers the request.
///
/// There is no scoring: a later entry never wins over an earlier one.
pub fn find_match<'a>(
    bundle: &'a MockBundle,
    request: &RequestDescriptor,
) -> Option<&'a MockEntry> {
    bundle
        .entries()
        .iter()
        .find(|entry| entry_matches(entry, request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::parse_manifest;
    use crate::matching::query::QueryItem;
    use rstest::{fixture, rstest};
    use url::Url;

    fn request(method: &str, url: &str) -> RequestDescriptor {
        RequestDescriptor::from_url(method, &Url::parse(url).unwrap())
    }

    fn entry_with(url: &str, code: i64, parameters: &[(&str, Option<&str>)]) -> MockEntry {
        let mut entry = MockEntry::new(url, code);
        entry.query_parameters = parameters
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.map(String::from)))
            .collect();
        entry
    }

    #[fixture]
    fn httpbin() -> MockBundle {
        let mut post = MockEntry::new("://httpbin.org/post", 201);
        post.method = "POST".into();

        MockBundle::new(
            vec![
                entry_with("://httpbin.org/ip", 200, &[]),
                entry_with(
                    "://httpbin.org/get",
                    200,
                    &[("arg1", Some("test")), ("arg2", Some("test"))],
                ),
                entry_with("://httpbin.org/get", 202, &[("arg1", None)]),
                post,
            ],
            "/bundles/httpbin",
        )
    }

    #[rstest]
    #[case("GET", "http://httpbin.org/ip", Some(200))]
    #[case("GET", "https://httpbin.org/ip", Some(200))]
    #[case("GET", "http://httpbin.org/ip?x=1", None)]
    #[case("GET", "http://httpbin.org/get?arg1=test&arg2=test", Some(200))]
    #[case("GET", "http://httpbin.org/get?arg1=test", Some(200))]
    #[case("GET", "http://httpbin.org/get?arg1=wrong", Some(202))]
    #[case("GET", "http://httpbin.org/get?arg1=test&other=x", None)]
    #[case("GET", "http://httpbin.org/get?arg2=test", Some(200))]
    #[case("GET", "http://httpbin.org/get?arg2=wrong", None)]
    #[case("GET", "http://httpbin.org/get", None)]
    #[case("POST", "http://httpbin.org/post", Some(201))]
    #[case("post", "http://httpbin.org/post", None)]
    #[case("GET", "http://httpbin.org/post", None)]
    #[case("POST", "http://httpbin.org/ip", None)]
    #[case("GET", "http://httpbin.org:8080/ip", None)]
    #[case("GET", "http://example.com/ip", None)]
    fn test_find_match(
        httpbin: MockBundle,
        #[case] method: &str,
        #[case] url: &str,
        #[case] expected: Option<i64>,
    ) {
        let found = find_match(&httpbin, &request(method, url));
        assert_eq!(found.map(|e| e.response_code), expected);
    }

    #[rstest]
    fn test_first_match_wins() {
        let bundle = MockBundle::new(
            vec![
                entry_with("://a/b", 200, &[("q", None)]),
                entry_with("://a/b", 201, &[("q", Some("1"))]),
            ],
            "/bundles/a",
        );
        let found = find_match(&bundle, &request("GET", "http://a/b?q=1")).unwrap();
        assert_eq!(found.response_code, 200);
    }

    #[rstest]
    fn test_earlier_non_matching_entry_is_skipped() {
        let bundle = MockBundle::new(
            vec![
                entry_with("://a/b", 200, &[("q", Some("2"))]),
                entry_with("://a/b", 201, &[("q", Some("1"))]),
            ],
            "/bundles/a",
        );
        let found = find_match(&bundle, &request("GET", "http://a/b?q=1")).unwrap();
        assert_eq!(found.response_code, 201);
    }

    #[rstest]
    fn test_empty_bundle_never_matches() {
        let bundle = MockBundle::new(vec![], "/bundles/empty");
        assert!(find_match(&bundle, &request("GET", "http://a/b")).is_none());
    }

    #[rstest]
    #[case("http://HTTPBIN.org/ip")]
    #[case("http://httpbin.org/ip")]
    #[case("https://HttpBin.ORG/ip")]
    fn test_mixed_case_manifest_host_matches(#[case] url: &str) {
        let entries = parse_manifest(
            r#"[{"request": {"url": "://HTTPBIN.org/ip"}, "response": {"code": 200}}]"#,
        )
        .unwrap();
        let bundle = MockBundle::new(entries, "/bundles/httpbin");
        let found = find_match(&bundle, &request("GET", url));
        assert_eq!(found.map(|e| e.response_code), Some(200));
    }

    #[rstest]
    fn test_entry_matches_with_explicit_descriptor() {
        let entry = entry_with("://a/b", 200, &[("flag", None)]);
        let descriptor =
            RequestDescriptor::new("://a/b", "GET", vec![QueryItem::new("flag", None)]);
        assert!(entry_matches(&entry, &descriptor));
    }
}
