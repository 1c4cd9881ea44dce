use super::*;

#[test]
fn explicit_override_wins_in_every_mode() {
    let dev = ApiBase::resolve(Some("https://api.example.com"), true, Some("https://app.example.com"));
    let prod = ApiBase::resolve(Some("https://api.example.com"), false, Some("https://app.example.com"));
    assert_eq!(dev.as_str(), "https://api.example.com");
    assert_eq!(prod.as_str(), "https://api.example.com");
}

#[test]
fn development_falls_back_to_local_backend() {
    let base = ApiBase::resolve(None, true, Some("https://app.example.com"));
    assert_eq!(base.as_str(), DEV_API_BASE);
}

#[test]
fn production_falls_back_to_host_proxy_on_page_origin() {
    let base = ApiBase::resolve(None, false, Some("https://app.example.com/"));
    assert_eq!(base.as_str(), "https://app.example.com/api");
    assert_eq!(base.url("/Expedientes?page=1"), "https://app.example.com/api/Expedientes?page=1");
}

#[test]
fn production_without_origin_is_page_relative() {
    let base = ApiBase::resolve(None, false, None);
    assert_eq!(base.url("/auth/login"), "/api/auth/login");
}

#[test]
fn blank_override_is_ignored() {
    let base = ApiBase::resolve(Some("   "), true, None);
    assert_eq!(base.as_str(), DEV_API_BASE);
}

#[test]
fn trailing_slashes_are_trimmed() {
    assert_eq!(ApiBase::new("https://api.example.com///").as_str(), "https://api.example.com");
}

#[test]
fn url_joins_with_exactly_one_slash() {
    let base = ApiBase::new("https://api.example.com/api/");
    assert_eq!(base.url("/auth/login"), "https://api.example.com/api/auth/login");
    assert_eq!(base.url("auth/login"), "https://api.example.com/api/auth/login");
    assert_eq!(base.url("//auth/login"), "https://api.example.com/api/auth/login");
}
