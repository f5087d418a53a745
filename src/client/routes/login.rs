use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

/// Sign-in and sign-up share one form; a toggle flips between them.
#[component]
pub fn Login() -> Element {
    let account_store = use_account_store();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_sign_up = use_signal(|| false);
    let mut pending_confirmation = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Signed-in visitors have nothing to do here.
    use_effect(move || {
        if account_store.is_signed_in() {
            navigator.push(Route::Dashboard {});
        }
    });

    rsx!(
        Title { "Sign in | SizeVault" }
        Meta {
            name: "description",
            content: "Sign in to SizeVault or create an account."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        if is_sign_up() {
                            "Create an account"
                        } else {
                            "Sign in"
                        }
                    }
                    if pending_confirmation() {
                        div { class: "alert alert-success",
                            "Check your e-mail to confirm your account, then sign in."
                        }
                    }
                    if let Some(err) = error() {
                        p { class: "text-error", "{err}" }
                    }
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: move |_| {
                            #[cfg(feature = "web")]
                            {
                                error.set(None);
                                is_pending.set(true);
                                spawn(async move {
                                    use crate::client::util::api;
                                    use crate::model::auth::CredentialsDto;

                                    let credentials = CredentialsDto {
                                        email: email.peek().trim().to_string(),
                                        password: password.peek().clone(),
                                    };

                                    if *is_sign_up.peek() {
                                        match api::sign_up(&credentials).await {
                                            Ok(signed_up) => {
                                                if let Some(account) = signed_up.account {
                                                    account_store.set_account(Some(account));
                                                } else {
                                                    pending_confirmation.set(true);
                                                    is_sign_up.set(false);
                                                }
                                            }
                                            Err(err) => error.set(Some(err)),
                                        }
                                    } else {
                                        match api::sign_in(&credentials).await {
                                            Ok(account) => {
                                                account_store.set_account(Some(account));
                                            }
                                            Err(err) => error.set(Some(err)),
                                        }
                                    }

                                    is_pending.set(false);
                                });
                            }
                        },
                        label { class: "form-control",
                            div { class: "label",
                                span { class: "label-text", "E-mail" }
                            }
                            input {
                                r#type: "email",
                                class: "input input-bordered",
                                required: true,
                                value: "{email}",
                                oninput: move |event| email.set(event.value()),
                            }
                        }
                        label { class: "form-control",
                            div { class: "label",
                                span { class: "label-text", "Password" }
                            }
                            input {
                                r#type: "password",
                                class: "input input-bordered",
                                required: true,
                                value: "{password}",
                                oninput: move |event| password.set(event.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary mt-2",
                            r#type: "submit",
                            disabled: is_pending(),
                            if is_sign_up() {
                                "Create account"
                            } else {
                                "Sign in"
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| {
                            error.set(None);
                            is_sign_up.set(!is_sign_up());
                        },
                        if is_sign_up() {
                            "Have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }
                }
            }
        }
    )
}
