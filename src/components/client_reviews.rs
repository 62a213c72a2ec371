/// Public, read-only grid of client reviews.
use crate::components::star_rating::StarRating;
use crate::models::review::Review;
use crate::state::public::EMPTY_MESSAGE;
use leptos::*;

#[component]
pub fn ClientReviews(reviews: Vec<Review>) -> impl IntoView {
    let body = if reviews.is_empty() {
        view! {
            <div class="reviews-empty">
                <p>{ EMPTY_MESSAGE }</p>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="reviews-grid">
                { reviews.into_iter().map(|review| view! { <ReviewCard review /> }).collect_view() }
            </div>
        }
        .into_view()
    };

    view! {
        <section id="reviews">
            <h2>{ "Client Reviews" }</h2>
            <p class="subtitle">{ "What our clients say about our design work" }</p>
            { body }
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let date = review.display_date();
    view! {
        <div class="review-card" data-review-id=review.id>
            <StarRating rating=review.rating />
            <p class="review-text">{ format!("\"{}\"", review.review_text) }</p>
            <div class="review-meta">
                <p class="client-name">{ review.client_name }</p>
                <p class="review-date">{ date }</p>
            </div>
        </div>
    }
}
