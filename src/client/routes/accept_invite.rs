use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

/// Landing page for shared invite links. Anonymous visitors get sent through
/// sign-in first; the link can be reopened afterwards.
#[component]
pub fn AcceptInvite(token: String) -> Element {
    let account_store = use_account_store();
    let navigator = use_navigator();

    let mut error = use_signal(|| None::<String>);
    let mut joining = use_signal(|| false);

    let submit_token = token.clone();

    rsx!(
        Title { "Join Family | SizeVault" }
        Meta {
            name: "description",
            content: "Accept an invite to a SizeVault family group."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title", "Join a family" }
                    if token.trim().is_empty() {
                        p { "This invite link is missing its token. Ask for a fresh link." }
                    } else if !account_store.is_fetched() {
                        div { class: "skeleton h-10 w-full" }
                    } else if !account_store.is_signed_in() {
                        p { "Sign in or create an account first, then open this link again." }
                        Link {
                            to: Route::Login {},
                            class: "btn btn-primary",
                            "Sign in"
                        }
                    } else {
                        p { "Accepting adds your account to the family that shared this link." }
                        if let Some(err) = error() {
                            p { class: "text-error", "{err}" }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: joining(),
                            onclick: move |_| {
                                #[cfg(feature = "web")]
                                {
                                    let token = submit_token.clone();
                                    error.set(None);
                                    joining.set(true);
                                    spawn(async move {
                                        use crate::client::util::api;
                                        use crate::model::family::AcceptInviteDto;

                                        match api::accept_invite(&AcceptInviteDto { token }).await {
                                            Ok(_) => {
                                                navigator.push(Route::Family {});
                                            }
                                            Err(err) => {
                                                error.set(Some(err));
                                                joining.set(false);
                                            }
                                        }
                                    });
                                }
                            },
                            "Accept invite"
                        }
                    }
                }
            }
        }
    )
}
