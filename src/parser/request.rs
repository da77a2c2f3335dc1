//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;
use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// An immutable view of one inbound HTTP message.
///
/// Built once per connection from the first chunk of received bytes and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path as sent by the client, query string included
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    /// Query parameters parsed from the path
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new request. Query parameters are split out of the path
    /// eagerly so handlers can look them up without re-parsing.
    pub fn new(
        method: Method,
        path: String,
        version: HttpVersion,
        headers: HashMap<String, String>,
        body: Vec<u8>,
    ) -> Self {
        let query_params: HashMap<String, String> = path
            .split_once('?')
            .map(|(_, query)| {
                query
                    .split('&')
                    .filter(|s| !s.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((k, v)) => (k.to_string(), v.to_string()),
                        None => (pair.to_string(), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method,
            path,
            version,
            headers,
            body,
            query_params,
        }
    }

    /// The path with the query string stripped; this is what the router
    /// matches against.
    pub fn route_path(&self) -> &str {
        match self.path.split_once('?') {
            Some((path, _)) => path,
            None => &self.path,
        }
    }

    /// Get a header value, case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v))
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Deserialize the request body as JSON.
    ///
    /// Fails unless the Content-Type header declares `application/json`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader(
                "Content-Type: application/json".to_string(),
            ));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Check if the request declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false)
    }
}

/// Parse an HTTP request from a byte slice.
///
/// The slice is assumed to hold the complete message: request line, headers,
/// a blank line, and whatever body bytes followed in the same chunk.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let input_str = std::str::from_utf8(input)
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;

    let mut lines = input_str.lines();

    let request_line = lines.next().ok_or(Error::EmptyRequest)?;
    if request_line.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;

    let path = parts[1].to_string();
    if path.is_empty() {
        return Err(Error::InvalidPath);
    }

    let version = HttpVersion::from_str(parts[2])?;

    let mut headers = HashMap::new();
    for line in lines.by_ref() {
        // Empty line ends the header section
        if line.is_empty() {
            break;
        }

        let (name, value) = line.split_once(':').ok_or(Error::InvalidHeaderFormat)?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    // Whatever follows the blank line is the body
    let body = input_str
        .split_once("\r\n\r\n")
        .or_else(|| input_str.split_once("\n\n"))
        .map(|(_, rest)| rest.as_bytes().to_vec())
        .unwrap_or_default();

    if version == HttpVersion::Http11 && !headers.keys().any(|k| k.eq_ignore_ascii_case("Host")) {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    Ok(HttpRequest::new(method, path, version, headers, body))
}
