use leptos::*;
use leptos::ev::SubmitEvent;

/// Email/password form. Validation and the request happen in the caller.
#[component]
pub fn LoginForm(on_submit: Callback<(String, String)>) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call((email.get_untracked(), password.get_untracked()));
    };

    view! {
        <form id="login-form" on:submit=handle_submit>
            <label for="email">{ "Email" }</label>
            <input
                type="email"
                id="email"
                name="email"
                prop:value=email
                on:input=move |e| set_email.set(event_target_value(&e))
            />
            <label for="password">{ "Password" }</label>
            <input
                type="password"
                id="password"
                name="password"
                prop:value=password
                on:input=move |e| set_password.set(event_target_value(&e))
            />
            <button type="submit" class="login-button">{ "Login" }</button>
        </form>
    }
}
