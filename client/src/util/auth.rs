//! Browser localStorage store for the access credential.
//!
//! The credential persists across reloads under a fixed key and is read
//! explicitly at app start and on submission, never at module load. There
//! is no expiry and no automatic clearing: a backend 401 leaves the stored
//! value in place until the user submits a replacement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Fixed localStorage key for the credential.
pub const TOKEN_STORAGE_KEY: &str = "demo_token";

/// Read the stored credential, trimmed; empty values read as absent.
#[must_use]
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        crate::state::session::normalize_token(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a credential. The write is synchronous from the caller's
/// perspective; storage failures are best-effort ignored.
pub fn store_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}
