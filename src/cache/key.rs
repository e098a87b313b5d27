//! Cache key derivation

use url::form_urlencoded::byte_serialize;

fn encode(component: &str) -> String {
    byte_serialize(component.as_bytes()).collect()
}

/// Build the canonical cache key for a read request.
///
/// The key is the endpoint followed by the form-encoded query parameters
/// sorted by name (and value, for repeated names), so `{a:1,b:2}` and
/// `{b:2,a:1}` produce the same key. Names and values are encoded before
/// joining, so a value containing `&` or `=` cannot pose as extra pairs.
pub fn cache_key(endpoint: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let query: Vec<String> = encoded
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();

    format!("{}?{}", endpoint, query.join("&"))
}
