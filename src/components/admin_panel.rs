/// Authenticated review table with create, edit and delete.
use crate::backend::Backend;
use crate::components::review_modal::ReviewModal;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;
use crate::state::panel::{self, PanelCommand, ReviewPanel, DELETE_CONFIRMATION};
use crate::utils::leptos_owner::update_if_alive;
use leptos::*;

fn confirm_delete() -> bool {
    gloo_utils::window()
        .confirm_with_message(DELETE_CONFIRMATION)
        .unwrap_or(false)
}

#[component]
pub fn AdminPanel(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let backend = store_value(expect_context::<Backend>());
    let panel = create_rw_signal(ReviewPanel::default());

    // Runs a store command, then whatever re-fetch it calls for.
    let dispatch = move |command: PanelCommand| {
        let backend = backend.get_value();
        spawn_local(async move {
            let mut next = Some(command);
            while let Some(command) = next {
                let outcome = panel::run(&*backend.reviews, command).await;
                next = update_if_alive(panel, "review panel", |p| p.apply(outcome)).flatten();
            }
        });
    };
    let on_save = Callback::new(dispatch);

    // Effects only run in the browser, so this is the on-mount fetch.
    create_effect(move |_| dispatch(PanelCommand::Refresh));

    // Re-render the dialog only when it opens, closes or switches review.
    let modal_key = create_memo(move |_| panel.with(|p| p.modal.as_ref().map(|m| m.editing.clone())));

    let row = move |review: Review| {
        let id = review.id.clone();
        let date = review.display_date();
        let editing = review.clone();
        view! {
            <tr>
                <td class="client-name">{ review.client_name }</td>
                <td class="review-text">{ review.review_text }</td>
                <td><StarRating rating=review.rating /></td>
                <td class="review-date">{ date }</td>
                <td class="actions">
                    <button class="edit" on:click=move |_| panel.update(|p| p.open_edit(&editing))>
                        { "Edit" }
                    </button>
                    <button
                        class="delete"
                        on:click=move |_| {
                            let command = panel.with_untracked(|p| p.request_delete(&id, confirm_delete()));
                            if let Some(command) = command {
                                dispatch(command);
                            }
                        }
                    >
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="admin-panel">
            <div class="admin-header">
                <h1>{ "Admin Panel - Client Reviews" }</h1>
                <div class="admin-actions">
                    <button class="add" on:click=move |_| panel.update(|p| p.open_create())>
                        { "Add Review" }
                    </button>
                    <button class="logout" on:click=move |_| on_logout.call(())>
                        { "Logout" }
                    </button>
                </div>
            </div>
            <table class="reviews-table">
                <thead>
                    <tr>
                        <th>{ "Client Name" }</th>
                        <th>{ "Review" }</th>
                        <th>{ "Rating" }</th>
                        <th>{ "Date" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {move || panel.with(|p| p.reviews.clone()).into_iter().map(row).collect_view()}
                </tbody>
            </table>
            {move || modal_key.get().map(|_| view! { <ReviewModal panel on_save /> })}
        </div>
    }
}
