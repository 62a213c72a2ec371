use crate::models::review::star_slots;
use leptos::*;

/// N filled and 5-N empty stars.
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="stars" aria-label=format!("{} out of 5 stars", rating.min(5))>
            {star_slots(rating)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "star filled" } else { "star" };
                    view! { <span class=class>{if filled { "\u{2605}" } else { "\u{2606}" }}</span> }
                })
                .collect_view()}
        </div>
    }
}
