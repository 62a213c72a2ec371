use crate::backend::Backend;
use crate::components::{admin_login::AdminLogin, admin_panel::AdminPanel};
use crate::state::gate::{self, GateState};
use crate::utils::leptos_owner::update_if_alive;
use leptos::*;

/// `/admin`: a login form or the review panel, decided by one session check.
#[component]
pub fn AdminPage() -> impl IntoView {
    let backend = store_value(expect_context::<Backend>());
    let state = create_rw_signal(GateState::Loading);

    let session = create_local_resource(
        || (),
        move |_| {
            let backend = backend.get_value();
            async move { backend.auth.get_session().await }
        },
    );
    create_effect(move |_| {
        if let Some(result) = session.get() {
            state.update(|s| *s = s.session_checked(result));
        }
    });

    let on_login = Callback::new(move |_: ()| state.update(|s| *s = s.signed_in()));
    let on_logout = Callback::new(move |_: ()| {
        let backend = backend.get_value();
        spawn_local(async move {
            let current = state.get_untracked();
            let next = gate::sign_out(&*backend.auth, current).await;
            update_if_alive(state, "admin gate", |s| *s = next);
        });
    });

    view! {
        <div class="admin">
            {move || match state.get() {
                GateState::Loading => view! {
                    <div class="loading">
                        <p>{ "Loading..." }</p>
                    </div>
                }
                .into_view(),
                GateState::LoggedOut => view! { <AdminLogin on_login /> }.into_view(),
                GateState::LoggedIn => view! { <AdminPanel on_logout /> }.into_view(),
            }}
        </div>
    }
}
