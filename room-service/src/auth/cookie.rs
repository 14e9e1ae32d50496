//! Session cookies
//!
//! Tokens travel in HttpOnly cookies whose value is `"Bearer <jwt>"`.

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};

use super::JwtService;

/// Room session cookie
pub const ROOM_COOKIE: &str = "access_token";

/// Admin session cookie
pub const ADMIN_COOKIE: &str = "admin_token";

/// Raw value of cookie `name`, quotes removed
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| unquote(value.trim()).to_string())
        .filter(|value| !value.is_empty())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Token carried in a cookie value; the `Bearer ` prefix is optional
pub fn token_from_cookie_value(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

/// Token from cookie `name`, falling back to `Authorization: Bearer`
pub fn find_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = get_cookie(headers, cookie_name)
        && let Some(token) = token_from_cookie_value(&value)
    {
        return Some(token.to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
        .map(String::from)
}

/// `Set-Cookie` value for a fresh session
pub fn session_cookie(name: &str, token: &str, max_age_seconds: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{name}=\"Bearer {token}\"; HttpOnly; Max-Age={max_age_seconds}; Path=/; SameSite=Lax"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session
pub fn clear_cookie(name: &str, secure: bool) -> String {
    let mut cookie = format!("{name}=\"\"; HttpOnly; Max-Age=0; Path=/; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
