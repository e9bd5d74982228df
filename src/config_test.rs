use super::*;

#[test]
fn defaults_point_at_local_api() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert_eq!(config.redirect_delay, Duration::from_millis(800));
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_values(Some("https://api.example.com//"), None);
    assert_eq!(config.api_base_url, "https://api.example.com");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn redirect_delay_parses_milliseconds() {
    let config = ClientConfig::from_values(None, Some(" 1500 "));
    assert_eq!(config.redirect_delay, Duration::from_millis(1500));
}

#[test]
fn invalid_redirect_delay_uses_default() {
    let config = ClientConfig::from_values(None, Some("soon"));
    assert_eq!(config.redirect_delay, Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS));
}
