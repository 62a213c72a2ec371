/// Application root: the public showcase at `/` and the review admin at `/admin`.
use crate::backend::Backend;
use crate::pages::{admin::AdminPage, home::HomePage};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Backend::from_build_env());

    view! {
        <Title text="Moeez Design Showcase" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/admin" view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}
