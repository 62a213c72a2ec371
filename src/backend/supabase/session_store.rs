//! Browser `localStorage` persistence for the signed-in session.
use crate::error::AuthError;
use crate::models::session::Session;
use leptos::logging::warn;

fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .ok_or_else(|| AuthError::Storage("no window".into()))?
        .local_storage()
        .map_err(|_| AuthError::Storage("localStorage access denied".into()))?
        .ok_or_else(|| AuthError::Storage("localStorage missing".into()))
}

pub fn load(key: &str) -> Option<Session> {
    let raw = local_storage().ok()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!("[AUTH] Discarding unreadable stored session: {}", err);
            let _ = clear(key);
            None
        }
    }
}

pub fn save(key: &str, session: &Session) -> Result<(), AuthError> {
    let raw = serde_json::to_string(session).map_err(|e| AuthError::Storage(e.to_string()))?;
    local_storage()?
        .set_item(key, &raw)
        .map_err(|_| AuthError::Storage("could not write session".into()))
}

pub fn clear(key: &str) -> Result<(), AuthError> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| AuthError::Storage("could not remove session".into()))
}
