/// Cookie the identity service stores the access token in.
pub const ACCESS_COOKIE_NAME: &str = "access_token";

/// Finds `name` in a raw `Cookie` header. Empty values count as absent.
pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
