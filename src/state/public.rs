use crate::backend::ReviewStore;
use crate::error::ReviewError;
use crate::models::review::Review;
use leptos::logging::error;

pub const EMPTY_MESSAGE: &str = "No reviews yet.";

/// Reviews for the public page; a failed fetch shows as an empty list.
pub async fn load_reviews(store: &dyn ReviewStore) -> Vec<Review> {
    match store.list().await {
        Ok(reviews) => reviews,
        Err(err) => {
            error!("[REVIEWS] {}", ReviewError::Fetch(err));
            Vec::new()
        }
    }
}
