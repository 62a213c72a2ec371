use crate::models::review::Rating;
use crate::state::panel::{PanelCommand, ReviewForm, ReviewPanel};
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::*;

fn form_value(
    panel: RwSignal<ReviewPanel>,
    read: fn(&ReviewForm) -> String,
) -> impl Fn() -> String + Copy {
    move || panel.with(|p| p.modal.as_ref().map(|m| read(&m.form)).unwrap_or_default())
}

fn edit_form(panel: RwSignal<ReviewPanel>, edit: impl FnOnce(&mut ReviewForm)) {
    panel.update(|p| {
        if let Some(form) = p.form_mut() {
            edit(form);
        }
    });
}

/// Create/edit dialog for one review. Reads and writes the panel's open form.
#[component]
pub fn ReviewModal(
    panel: RwSignal<ReviewPanel>,
    #[prop(into)] on_save: Callback<PanelCommand>,
) -> impl IntoView {
    let title = move || panel.with(|p| p.modal.as_ref().map(|m| m.title()).unwrap_or_default());
    let submit_label =
        move || panel.with(|p| p.modal.as_ref().map(|m| m.submit_label()).unwrap_or_default());
    let current_rating = move || panel.with(|p| p.modal.as_ref().map(|m| m.form.rating));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match panel.with_untracked(|p| p.submit()) {
            Ok(command) => on_save.call(command),
            Err(err) => warn!("[PANEL] Not saving review: {}", err),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{ title }</h2>
                <form on:submit=handle_submit>
                    <label>{ "Client Name" }</label>
                    <input
                        type="text"
                        required=true
                        prop:value=form_value(panel, |f| f.client_name.clone())
                        on:input=move |e| edit_form(panel, |f| f.client_name = event_target_value(&e))
                    />
                    <label>{ "Review Text" }</label>
                    <textarea
                        rows="4"
                        required=true
                        prop:value=form_value(panel, |f| f.review_text.clone())
                        on:input=move |e| edit_form(panel, |f| f.review_text = event_target_value(&e))
                    />
                    <label>{ "Rating" }</label>
                    <select on:change=move |e| {
                        if let Some(rating) = Rating::parse(&event_target_value(&e)) {
                            edit_form(panel, |f| f.rating = rating);
                        }
                    }>
                        {Rating::ALL
                            .into_iter()
                            .map(|rating| view! {
                                <option
                                    value=rating.to_string()
                                    selected=move || current_rating() == Some(rating)
                                >
                                    { rating.label() }
                                </option>
                            })
                            .collect_view()}
                    </select>
                    <div class="modal-actions">
                        <button type="button" on:click=move |_| panel.update(|p| p.close_modal())>
                            { "Cancel" }
                        </button>
                        <button type="submit">{ submit_label }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
