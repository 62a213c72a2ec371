#![cfg(target_arch = "wasm32")]

use review_showcase::backend::supabase::{session_store, SupabaseClient};
use review_showcase::backend::{AuthClient, ReviewStore};
use review_showcase::config::SupabaseConfig;
use review_showcase::error::AuthError;
use review_showcase::models::session::{Session, SessionUser};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const ANON_KEY: &str = "anon-key";

// Nothing listens on port 9, so every remote call fails fast. Each test uses
// its own host so the stored sessions do not collide.
fn client(host: &str) -> SupabaseClient {
    SupabaseClient::new(SupabaseConfig::new(format!("http://{host}.localhost:9"), ANON_KEY))
}

fn storage_key(client: &SupabaseClient) -> String {
    client.config().session_storage_key()
}

fn session(access_token: &str, expires_in: i64, refresh_token: Option<&str>) -> Session {
    Session {
        access_token: access_token.into(),
        refresh_token: refresh_token.map(str::to_string),
        expires_at: Some(chrono::Utc::now().timestamp() + expires_in),
        user: SessionUser {
            id: "u-1".into(),
            email: Some("admin@example.com".into()),
        },
    }
}

#[wasm_bindgen_test]
async fn live_session_is_used_for_rows() {
    let client = client("live");
    let key = storage_key(&client);
    session_store::save(&key, &session("live-jwt", 3600, Some("refresh"))).unwrap();

    assert_eq!(client.get_session().await.unwrap().unwrap().access_token, "live-jwt");
    assert_eq!(client.access_token().await, "live-jwt");
    session_store::clear(&key).unwrap();
}

#[wasm_bindgen_test]
async fn no_session_reads_anonymously() {
    let client = client("anonymous");
    session_store::clear(&storage_key(&client)).unwrap();
    assert_eq!(client.get_session().await.unwrap(), None);
    assert_eq!(client.access_token().await, ANON_KEY);
}

#[wasm_bindgen_test]
async fn expired_session_without_refresh_token_is_dropped() {
    let client = client("expired");
    let key = storage_key(&client);
    session_store::save(&key, &session("old-jwt", -60, None)).unwrap();

    assert_eq!(client.access_token().await, ANON_KEY);
    assert_eq!(session_store::load(&key), None);
    assert_eq!(client.get_session().await.unwrap(), None);
}

#[wasm_bindgen_test]
async fn failed_refresh_clears_session_and_falls_back_to_anon() {
    let client = client("refresh-fails");
    let key = storage_key(&client);
    session_store::save(&key, &session("old-jwt", -60, Some("refresh"))).unwrap();

    // An old admin session must never reach the table as a bearer token.
    assert_eq!(client.access_token().await, ANON_KEY);
    assert_eq!(session_store::load(&key), None);

    session_store::save(&key, &session("old-jwt", -60, Some("refresh"))).unwrap();
    assert_eq!(client.get_session().await.unwrap(), None);
    assert_eq!(session_store::load(&key), None);
}

#[wasm_bindgen_test]
async fn expired_session_does_not_break_row_requests() {
    let client = client("public-list");
    let key = storage_key(&client);
    session_store::save(&key, &session("old-jwt", -60, None)).unwrap();

    // The host is unreachable, so the list fails in transport, not with a 401.
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, review_showcase::error::StoreError::Request(_)), "{err:?}");
    assert_eq!(session_store::load(&key), None);
}

#[wasm_bindgen_test]
async fn sign_out_clears_local_copy_even_when_remote_fails() {
    let client = client("sign-out");
    let key = storage_key(&client);
    session_store::save(&key, &session("live-jwt", 3600, None)).unwrap();

    let result = client.sign_out().await;
    assert!(matches!(result, Err(AuthError::Request(_))), "{result:?}");
    assert_eq!(session_store::load(&key), None);
    assert_eq!(client.get_session().await.unwrap(), None);
}

#[wasm_bindgen_test]
async fn sign_out_without_session_skips_remote_call() {
    let client = client("signed-out");
    session_store::clear(&storage_key(&client)).unwrap();
    assert_eq!(client.sign_out().await, Ok(()));
}
