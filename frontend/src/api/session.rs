//! Session token persistence.
//!
//! The token lives in browser local storage under one fixed key. It is
//! written on login success and read back once at startup so a reload keeps
//! the signed-in indicator; no other component touches it.

use web_sys::Storage;

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}
