//! In-process table and auth service with the hosted service's semantics.
use super::{AuthClient, AuthFuture, ReviewStore, StoreFuture};
use crate::error::{AuthError, StoreError};
use crate::models::review::{Review, ReviewDraft};
use crate::models::session::{Credentials, Session, SessionUser};
use chrono::{Duration, Utc};
use futures::FutureExt;
use leptos::logging::log;
use std::cell::RefCell;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<Review>>,
}

impl MemoryStore {
    pub fn with_reviews(rows: Vec<Review>) -> Self {
        Self {
            rows: RefCell::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    // Timestamps stay strictly increasing so newest-first order is total.
    fn next_timestamp(&self) -> chrono::DateTime<Utc> {
        let now = Utc::now();
        let latest = self.rows.borrow().iter().map(|r| r.created_at).max();
        match latest {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        }
    }
}

impl ReviewStore for MemoryStore {
    fn list(&self) -> StoreFuture<'_, Vec<Review>> {
        let mut rows = self.rows.borrow().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        async move { Ok(rows) }.boxed_local()
    }

    fn insert(&self, draft: ReviewDraft) -> StoreFuture<'_, Review> {
        let review = Review {
            id: Uuid::new_v4().to_string(),
            client_name: draft.client_name,
            review_text: draft.review_text,
            rating: draft.rating,
            created_at: self.next_timestamp(),
        };
        self.rows.borrow_mut().push(review.clone());
        log!("[MEMORY] Inserted review {}", review.id);
        async move { Ok(review) }.boxed_local()
    }

    fn update<'a>(&'a self, id: &'a str, draft: ReviewDraft) -> StoreFuture<'a, ()> {
        let result = match self.rows.borrow_mut().iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.client_name = draft.client_name;
                row.review_text = draft.review_text;
                row.rating = draft.rating;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        };
        async move { result }.boxed_local()
    }

    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()> {
        // Deleting a missing row is not an error for the hosted table either.
        self.rows.borrow_mut().retain(|r| r.id != id);
        async move { Ok(()) }.boxed_local()
    }
}

/// Admin accounts checked in-process. Empty by default, so every sign-in fails.
#[derive(Default)]
pub struct MemoryAuth {
    accounts: Vec<Credentials>,
    session: RefCell<Option<Session>>,
}

impl MemoryAuth {
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.accounts.push(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.borrow().is_some()
    }
}

impl AuthClient for MemoryAuth {
    fn sign_in(&self, credentials: Credentials) -> AuthFuture<'_, Session> {
        let result = if self.accounts.contains(&credentials) {
            let session = Session {
                access_token: Uuid::new_v4().to_string(),
                refresh_token: None,
                expires_at: None,
                user: SessionUser {
                    id: Uuid::new_v5(&Uuid::NAMESPACE_OID, credentials.email.as_bytes()).to_string(),
                    email: Some(credentials.email),
                },
            };
            *self.session.borrow_mut() = Some(session.clone());
            Ok(session)
        } else {
            Err(AuthError::InvalidCredentials("Invalid login credentials".into()))
        };
        async move { result }.boxed_local()
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        self.session.borrow_mut().take();
        async { Ok(()) }.boxed_local()
    }

    fn get_session(&self) -> AuthFuture<'_, Option<Session>> {
        let session = self.session.borrow().clone();
        async move { Ok(session) }.boxed_local()
    }
}
