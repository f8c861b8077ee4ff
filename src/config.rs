use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "authToken";

/// Message shown for any failed login, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Username or Password incorrect";

pub fn products_path() -> &'static str {
    "/products"
}

pub fn product_path(id: i64) -> String {
    format!("/products/{}", id)
}

pub fn login_path() -> &'static str {
    "/auth/login"
}

pub fn default_session_path() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("storefront-sdk").join("session.json")
    } else {
        PathBuf::from(".storefront-sdk").join("session.json")
    }
}
