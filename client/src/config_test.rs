use super::*;

#[test]
fn new_falls_back_to_defaults() {
    let config = ClientConfig::new(None, Some("  "));
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.socket_url, DEFAULT_SOCKET_URL);
}

#[test]
fn new_strips_trailing_slash_from_api_url() {
    let config = ClientConfig::new(Some("https://api.example.com/v1/"), Some("wss://rt.example.com"));
    assert_eq!(config.api_base_url, "https://api.example.com/v1");
    assert_eq!(config.socket_url, "wss://rt.example.com");
}

#[test]
fn api_url_joins_path() {
    let config = ClientConfig::new(Some("https://api.example.com"), None);
    assert_eq!(config.api_url("/projects/p-1"), "https://api.example.com/projects/p-1");
}

#[test]
fn autosave_window_is_half_a_second() {
    assert_eq!(AUTOSAVE_DEBOUNCE_MS, 500);
}
