use futures::FutureExt;
use review_showcase::backend::{AuthClient, AuthFuture, ReviewStore, StoreFuture};
use review_showcase::error::{AuthError, StoreError};
use review_showcase::models::review::{Review, ReviewDraft};
use review_showcase::models::session::{Credentials, Session};
use std::cell::Cell;

fn offline() -> StoreError {
    StoreError::Request("network unreachable".into())
}

/// Table whose every call fails, counting how often it was hit.
#[derive(Default)]
pub struct FailingStore {
    pub calls: Cell<usize>,
}

impl ReviewStore for FailingStore {
    fn list(&self) -> StoreFuture<'_, Vec<Review>> {
        self.calls.set(self.calls.get() + 1);
        async { Err(offline()) }.boxed_local()
    }

    fn insert(&self, _draft: ReviewDraft) -> StoreFuture<'_, Review> {
        self.calls.set(self.calls.get() + 1);
        async { Err(offline()) }.boxed_local()
    }

    fn update<'a>(&'a self, _id: &'a str, _draft: ReviewDraft) -> StoreFuture<'a, ()> {
        self.calls.set(self.calls.get() + 1);
        async { Err(offline()) }.boxed_local()
    }

    fn delete<'a>(&'a self, _id: &'a str) -> StoreFuture<'a, ()> {
        self.calls.set(self.calls.get() + 1);
        async { Err(offline()) }.boxed_local()
    }
}

/// Auth service that cannot be reached.
pub struct UnreachableAuth;

impl AuthClient for UnreachableAuth {
    fn sign_in(&self, _credentials: Credentials) -> AuthFuture<'_, Session> {
        async { Err(AuthError::Request("network unreachable".into())) }.boxed_local()
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        async { Err(AuthError::Request("network unreachable".into())) }.boxed_local()
    }

    fn get_session(&self) -> AuthFuture<'_, Option<Session>> {
        async { Err(AuthError::Request("network unreachable".into())) }.boxed_local()
    }
}
