use crate::backend::Backend;
use crate::components::client_reviews::ClientReviews;
use crate::state::public::load_reviews;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    // Fetched once, in the browser. Nothing renders until it resolves.
    let reviews = create_local_resource(
        || (),
        move |_| {
            let backend = backend.clone();
            async move { load_reviews(&*backend.reviews).await }
        },
    );

    view! {
        <div class="home">
            <section id="hero">
                <h1>{ "Moeez Design Showcase" }</h1>
                <p>
                    { "Professional design portfolio showcasing creative digital solutions and innovative design work" }
                </p>
                <a href="#reviews">{ "View Client Reviews" }</a>
            </section>
            {move || reviews.get().map(|reviews| view! { <ClientReviews reviews /> })}
            <footer>
                <p>{ "\u{a9} 2024 Moeez Design Showcase. All rights reserved." }</p>
            </footer>
        </div>
    }
}
