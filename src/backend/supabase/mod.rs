//! Supabase-hosted review table (PostgREST) and auth service (GoTrue).
pub mod session_store;
pub mod wire;

use super::{AuthClient, AuthFuture, ReviewStore, StoreFuture};
use crate::config::SupabaseConfig;
use crate::error::{AuthError, StoreError};
use crate::models::review::{Review, ReviewDraft};
use crate::models::session::{Credentials, Session};
use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{log, warn};
use serde::Serialize;

pub struct SupabaseClient {
    config: SupabaseConfig,
    storage_key: String,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        let storage_key = config.session_storage_key();
        Self { config, storage_key }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Bearer token for row access: a live admin session, refreshed if it
    /// expired, otherwise the anon key.
    pub async fn access_token(&self) -> String {
        match self.current_session().await {
            Ok(Some(session)) => session.access_token,
            Ok(None) => self.config.anon_key().to_string(),
            Err(err) => {
                warn!("[AUTH] Falling back to anonymous access: {}", err);
                self.config.anon_key().to_string()
            }
        }
    }

    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.access_token().await;
        builder
            .header("apikey", self.config.anon_key())
            .header("Authorization", &wire::bearer(&token))
    }

    /// The stored session if still valid. An expired one is refreshed once;
    /// when that is impossible it is cleared.
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let stored = session_store::load(&self.storage_key);
        match wire::classify_session(stored, now_unix()) {
            wire::StoredSession::Absent => Ok(None),
            wire::StoredSession::Live(session) => Ok(Some(session)),
            wire::StoredSession::Stale { refresh_token: None } => {
                session_store::clear(&self.storage_key)?;
                Ok(None)
            }
            wire::StoredSession::Stale {
                refresh_token: Some(refresh_token),
            } => match self.refresh(&refresh_token).await {
                Ok(fresh) => Ok(Some(fresh)),
                Err(err) => {
                    warn!("[AUTH] Session refresh failed: {}", err);
                    session_store::clear(&self.storage_key)?;
                    Ok(None)
                }
            },
        }
    }

    async fn send_store<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: Option<&B>,
    ) -> Result<Response, StoreError> {
        let builder = self.authorized(builder).await;
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| StoreError::Request(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| StoreError::Request(e.to_string()))?;

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(wire::store_error(status, &body))
        }
    }

    async fn token_grant<B: Serialize>(&self, url: &str, body: &B) -> Result<Session, AuthError> {
        let response = Request::post(url)
            .header("apikey", self.config.anon_key())
            .json(body)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(wire::auth_error(status, &body));
        }

        let token: wire::TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let session = token.into_session(now_unix());
        session_store::save(&self.storage_key, &session)?;
        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        #[derive(Serialize)]
        struct RefreshBody<'a> {
            refresh_token: &'a str,
        }
        self.token_grant(&wire::refresh_grant_url(&self.config), &RefreshBody { refresh_token })
            .await
    }
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

impl ReviewStore for SupabaseClient {
    fn list(&self) -> StoreFuture<'_, Vec<Review>> {
        async move {
            let response = self
                .send_store::<()>(Request::get(&wire::list_reviews_url(&self.config)), None)
                .await?;
            let reviews: Vec<Review> = response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            log!("[STORE] Fetched {} reviews", reviews.len());
            Ok(reviews)
        }
        .boxed_local()
    }

    fn insert(&self, draft: ReviewDraft) -> StoreFuture<'_, Review> {
        async move {
            let builder = Request::post(&wire::insert_review_url(&self.config))
                .header("Prefer", "return=representation");
            let response = self.send_store(builder, Some(&[draft])).await?;
            let mut rows: Vec<Review> = response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            if rows.is_empty() {
                return Err(StoreError::EmptyResponse);
            }
            let review = rows.swap_remove(0);
            log!("[STORE] Inserted review {}", review.id);
            Ok(review)
        }
        .boxed_local()
    }

    fn update<'a>(&'a self, id: &'a str, draft: ReviewDraft) -> StoreFuture<'a, ()> {
        async move {
            let builder = Request::patch(&wire::review_by_id_url(&self.config, id))
                .header("Prefer", "return=minimal");
            self.send_store(builder, Some(&draft)).await?;
            log!("[STORE] Updated review {}", id);
            Ok(())
        }
        .boxed_local()
    }

    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()> {
        async move {
            self.send_store::<()>(Request::delete(&wire::review_by_id_url(&self.config, id)), None)
                .await?;
            log!("[STORE] Deleted review {}", id);
            Ok(())
        }
        .boxed_local()
    }
}

impl AuthClient for SupabaseClient {
    fn sign_in(&self, credentials: Credentials) -> AuthFuture<'_, Session> {
        async move {
            let session = self
                .token_grant(&wire::password_grant_url(&self.config), &credentials)
                .await?;
            log!("[AUTH] Signed in as {}", session.user.email.as_deref().unwrap_or(&session.user.id));
            Ok(session)
        }
        .boxed_local()
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        async move {
            let stored = session_store::load(&self.storage_key);
            // The local copy goes first: signing out must hold even if the call below fails.
            session_store::clear(&self.storage_key)?;
            let Some(session) = stored else {
                return Ok(());
            };

            let response = Request::post(&wire::logout_url(&self.config))
                .header("apikey", self.config.anon_key())
                .header("Authorization", &wire::bearer(&session.access_token))
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(wire::auth_error(status, &body))
            }
        }
        .boxed_local()
    }

    fn get_session(&self) -> AuthFuture<'_, Option<Session>> {
        self.current_session().boxed_local()
    }
}
