//! Bearer-token holder. The token is the only durable state the client
//! keeps, and it lives in browser `localStorage` under a single key.

const TOKEN_KEY: &str = "token";

pub fn access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
