//! Session Store
//!
//! Persisted authentication state: an opaque bearer token plus a
//! denormalized user snapshot, both in `localStorage`. The server stays the
//! source of truth; the snapshot is a cache for degraded reads.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::models::User;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

/// Reject values corrupted by a stringified `undefined`/`null` write.
fn sanitize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "undefined" && v != "null")
}

/// Best-effort decode of a JWT payload into a user snapshot.
///
/// The signature is never verified; decoded claims are a recovery
/// convenience when no snapshot exists, not authenticated facts.
pub fn decode_token_claims(token: &str) -> Option<User> {
    let mut parts = token.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;

    let id = ["id", "sub", "userId"]
        .iter()
        .find_map(|key| claim_as_u64(&claims, key))?;
    let name = claim_as_string(&claims, "name")
        .or_else(|| claim_as_string(&claims, "username"))
        .unwrap_or_default();
    let email = claim_as_string(&claims, "email").unwrap_or_default();
    let photo = claim_as_string(&claims, "photo").or_else(|| claim_as_string(&claims, "avatar"));

    Some(User { id, name, email, role: None, photo })
}

fn claim_as_u64(claims: &serde_json::Value, key: &str) -> Option<u64> {
    let value = claims.get(key)?;
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn claim_as_string(claims: &serde_json::Value, key: &str) -> Option<String> {
    claims.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

/// Handle to the persisted session. Constructed once in `main` and owned by
/// the [`ApiClient`](crate::api::ApiClient); no ambient lookups.
#[derive(Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        let store = SessionStore;
        store.clear_corrupted();
        store
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Current bearer token, if a non-sentinel one is stored.
    pub fn token(&self) -> Option<String> {
        let storage = self.storage()?;
        sanitize(storage.get_item(TOKEN_KEY).ok().flatten())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Cached user snapshot. Unparseable snapshots are removed on read.
    pub fn user(&self) -> Option<User> {
        let storage = self.storage()?;
        let raw = sanitize(storage.get_item(USER_KEY).ok().flatten())?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Dados de usuário corrompidos, removendo: {err}").into(),
                );
                let _ = storage.remove_item(USER_KEY);
                None
            }
        }
    }

    /// Persist token and snapshot after a successful login/register.
    pub fn store_auth(&self, token: &str, user: &User) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            self.store_user(user);
        }
    }

    /// Replace the persisted snapshot.
    pub fn store_user(&self, user: &User) {
        if let Some(storage) = self.storage() {
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }

    /// Patch the persisted snapshot in place, if one exists.
    pub fn update_user(&self, patch: impl FnOnce(&mut User)) {
        if let Some(mut user) = self.user() {
            patch(&mut user);
            self.store_user(&user);
        }
    }

    /// Recover a user snapshot from the bearer token's payload when no
    /// snapshot is stored.
    pub fn user_from_token(&self) -> Option<User> {
        decode_token_claims(&self.token()?)
    }

    /// Drop sentinel-corrupted values left by earlier sessions.
    pub fn clear_corrupted(&self) {
        let Some(storage) = self.storage() else { return };
        for key in [TOKEN_KEY, USER_KEY] {
            if let Ok(Some(value)) = storage.get_item(key) {
                if value == "undefined" || value == "null" {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }

    /// End the session: revoke a locally-created photo object URL and clear
    /// both persisted values.
    pub fn logout(&self) {
        if let Some(user) = self.user() {
            if let Some(photo) = user.photo {
                if photo.starts_with("blob:") {
                    let _ = web_sys::Url::revoke_object_url(&photo);
                }
            }
        }
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let encode = |s: &str| URL_SAFE_NO_PAD.encode(s.as_bytes());
        format!("{}.{}.{}", encode("{\"alg\":\"HS256\"}"), encode(payload), "sig")
    }

    #[test]
    fn sanitize_rejects_sentinels() {
        assert_eq!(sanitize(Some("undefined".into())), None);
        assert_eq!(sanitize(Some("null".into())), None);
        assert_eq!(sanitize(Some(String::new())), None);
        assert_eq!(sanitize(Some("abc".into())), Some("abc".into()));
        assert_eq!(sanitize(None), None);
    }

    #[test]
    fn decode_recovers_claims() {
        let token = token_with_payload(
            r#"{"id":42,"name":"Maria","email":"maria@example.com","photo":"p.png"}"#,
        );
        let user = decode_token_claims(&token).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Maria");
        assert_eq!(user.email, "maria@example.com");
        assert_eq!(user.photo.as_deref(), Some("p.png"));
        assert_eq!(user.role, None);
    }

    #[test]
    fn decode_falls_back_to_sub_and_username() {
        let token = token_with_payload(r#"{"sub":"7","username":"joao","avatar":"a.png"}"#);
        let user = decode_token_claims(&token).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "joao");
        assert_eq!(user.photo.as_deref(), Some("a.png"));
    }

    #[test]
    fn decode_rejects_non_jwt_tokens() {
        assert!(decode_token_claims("opaque-token").is_none());
        assert!(decode_token_claims("a.b").is_none());
        assert!(decode_token_claims("a.b.c.d").is_none());
        assert!(decode_token_claims("x.!!!not-base64!!!.y").is_none());
    }

    #[test]
    fn decode_requires_a_numeric_id_claim() {
        let token = token_with_payload(r#"{"sub":"someone@example.com"}"#);
        assert!(decode_token_claims(&token).is_none());
    }
}
