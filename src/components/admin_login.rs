use crate::backend::Backend;
use crate::state::login::LoginForm;
use crate::utils::leptos_owner::update_if_alive;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn AdminLogin(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let backend = store_value(expect_context::<Backend>());
    let form = create_rw_signal(LoginForm::default());

    let handle_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let backend = backend.get_value();
        spawn_local(async move {
            let result = backend.auth.sign_in(credentials).await;
            if update_if_alive(form, "admin login", |f| f.finish(result)) == Some(true) {
                on_login.call(());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{ "Admin Login" }</h1>
                <form on:submit=handle_login>
                    <label for="email">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |e| form.update(|f| f.email = event_target_value(&e))
                    />
                    <label for="password">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |e| form.update(|f| f.password = event_target_value(&e))
                    />
                    {move || form.with(|f| f.error.clone()).map(|message| view! {
                        <div class="login-error">{ message }</div>
                    })}
                    <button type="submit" disabled=move || form.with(|f| f.pending)>
                        {move || form.with(|f| f.button_label())}
                    </button>
                </form>
            </div>
        </div>
    }
}
