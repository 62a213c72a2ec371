//! Clients for the hosted review table and its auth service.
//!
//! Components only see the two traits below, reached through the
//! [`Backend`] context value.
pub mod memory;
pub mod supabase;

use crate::config::SupabaseConfig;
use crate::error::{AuthError, StoreError};
use crate::models::review::{Review, ReviewDraft};
use crate::models::session::{Credentials, Session};
use futures::future::LocalBoxFuture;
use leptos::logging::warn;
use std::rc::Rc;

pub type StoreFuture<'a, T> = LocalBoxFuture<'a, Result<T, StoreError>>;
pub type AuthFuture<'a, T> = LocalBoxFuture<'a, Result<T, AuthError>>;

/// The `client_reviews` table.
pub trait ReviewStore {
    /// Every review, newest first.
    fn list(&self) -> StoreFuture<'_, Vec<Review>>;
    /// Inserts a row; the store assigns `id` and `created_at`.
    fn insert(&self, draft: ReviewDraft) -> StoreFuture<'_, Review>;
    fn update<'a>(&'a self, id: &'a str, draft: ReviewDraft) -> StoreFuture<'a, ()>;
    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()>;
}

/// Password auth against the hosted service.
pub trait AuthClient {
    fn sign_in(&self, credentials: Credentials) -> AuthFuture<'_, Session>;
    fn sign_out(&self) -> AuthFuture<'_, ()>;
    fn get_session(&self) -> AuthFuture<'_, Option<Session>>;
}

/// The client pair handed to the component tree.
#[derive(Clone)]
pub struct Backend {
    pub reviews: Rc<dyn ReviewStore>,
    pub auth: Rc<dyn AuthClient>,
}

impl Backend {
    pub fn new(reviews: Rc<dyn ReviewStore>, auth: Rc<dyn AuthClient>) -> Self {
        Self { reviews, auth }
    }

    pub fn supabase(config: SupabaseConfig) -> Self {
        let client = Rc::new(supabase::SupabaseClient::new(config));
        Self {
            reviews: client.clone(),
            auth: client,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            reviews: Rc::new(memory::MemoryStore::default()),
            auth: Rc::new(memory::MemoryAuth::default()),
        }
    }

    /// Supabase when an endpoint was supplied at build time, otherwise an
    /// empty in-memory table with admin sign-in disabled.
    pub fn from_build_env() -> Self {
        match SupabaseConfig::from_build_env() {
            Some(config) => Self::supabase(config),
            None => {
                warn!("[BACKEND] SUPABASE_URL/SUPABASE_ANON_KEY not set at build time, using in-memory reviews");
                Self::in_memory()
            }
        }
    }
}
