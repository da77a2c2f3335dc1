//! Tests for the HTTP parser.

#[cfg(test)]
mod parser_tests {
    use serde::Deserialize;

    use crate::parser::{parse_request, Error, HttpVersion, Method};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version, HttpVersion::Http11);
        assert_eq!(result.headers.get("Host").unwrap(), "example.com");
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let request =
            b"GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.get("User-Agent").unwrap(), "test");
        assert_eq!(result.headers.get("Accept").unwrap(), "*/*");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert!(result.has_header("host"));
        assert!(result.has_header("HOST"));
        assert!(result.has_header("Host"));
    }

    #[test]
    fn test_missing_host_header() {
        let request = b"GET / HTTP/1.1\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
    }

    #[test]
    fn test_http10_does_not_require_host() {
        let request = b"GET / HTTP/1.0\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.version, HttpVersion::Http10);
    }

    #[test]
    fn test_invalid_method() {
        let request = b"INVALID / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "INVALID"));
    }

    #[test]
    fn test_invalid_http_version() {
        let request = b"GET / HTTP/9.9\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_invalid_header_format() {
        let request = b"GET / HTTP/1.1\r\nInvalidHeader\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidHeaderFormat)));
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_headers_with_multiple_colons() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Test: value:with:colons\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.get("X-Test").unwrap(), "value:with:colons");
    }

    #[test]
    fn test_all_methods() {
        for (raw, expected) in [
            ("GET", Method::GET),
            ("POST", Method::POST),
            ("PUT", Method::PUT),
            ("DELETE", Method::DELETE),
            ("HEAD", Method::HEAD),
            ("OPTIONS", Method::OPTIONS),
            ("PATCH", Method::PATCH),
        ] {
            let request = format!("{raw} / HTTP/1.1\r\nHost: example.com\r\n\r\n");
            let result = parse_request(request.as_bytes()).unwrap();
            assert_eq!(result.method, expected);
        }
    }

    #[test]
    fn test_body_after_blank_line() {
        let request = b"POST /submit HTTP/1.1\r\nHost: example.com\r\n\r\nhello=world";
        let result = parse_request(request).unwrap();
        assert_eq!(result.body, b"hello=world");
    }

    #[test]
    fn test_json_body() {
        #[derive(Deserialize)]
        struct Payload {
            name: String,
        }

        let request = b"POST /users HTTP/1.1\r\nHost: example.com\r\nContent-Type: application/json\r\n\r\n{\"name\":\"ada\"}";
        let result = parse_request(request).unwrap();
        assert!(result.is_json());
        let payload: Payload = result.json().unwrap();
        assert_eq!(payload.name, "ada");
    }

    #[test]
    fn test_json_without_content_type_is_rejected() {
        let request = b"POST /users HTTP/1.1\r\nHost: example.com\r\n\r\n{\"name\":\"ada\"}";
        let result = parse_request(request).unwrap();
        let err = result.json::<serde_json::Value>();
        assert!(matches!(err, Err(Error::MissingHeader(_))));
    }

    #[test]
    fn test_query_params() {
        let request = b"GET /search?q=rust&page=2&flag HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/search?q=rust&page=2&flag");
        assert_eq!(result.route_path(), "/search");
        assert_eq!(result.get_query_param("q").unwrap(), "rust");
        assert_eq!(result.get_query_param("page").unwrap(), "2");
        assert_eq!(result.get_query_param("flag").unwrap(), "");
        assert!(result.get_query_param("missing").is_none());
    }

    #[test]
    fn test_route_path_without_query() {
        let request = b"GET /plain HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.route_path(), "/plain");
    }
}
