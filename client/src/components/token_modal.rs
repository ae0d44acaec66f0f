//! Access-token modal shown while the dashboard is gated.
//!
//! Validation is local: empty or whitespace-only submissions surface a
//! message inside the modal and never reach the network. The parent
//! receives the trimmed token through `on_submit`.

use leptos::prelude::*;

use crate::state::session::normalize_token;

const INVALID_TOKEN_MESSAGE: &str = "Debes introducir un token válido";

/// Modal dialog asking for the demo access token.
#[component]
pub fn TokenModal(on_submit: Callback<String>) -> impl IntoView {
    let token = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| match normalize_token(&token.get()) {
        Some(value) => {
            error.set(None);
            on_submit.run(value);
        }
        None => error.set(Some(INVALID_TOKEN_MESSAGE.to_owned())),
    });

    view! {
        <div class="dialog-backdrop">
            <div class="dialog token-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>"Acceso a la Demo"</h2>
                <p class="token-modal__hint">"Introduce tu token de acceso para usar esta demo."</p>
                <input
                    class="dialog__input"
                    type="password"
                    placeholder="Pega tu token aquí"
                    prop:value=move || token.get()
                    on:input=move |ev| {
                        token.set(event_target_value(&ev));
                        error.set(None);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Confirmar Token"
                    </button>
                </div>
            </div>
        </div>
    }
}
