use dioxus::prelude::*;

pub use crate::client::router::Route;

use crate::client::components::SizeVaultTitleButton;
use crate::client::store::account::use_account_store;

#[component]
pub fn Navbar() -> Element {
    let account_store = use_account_store();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                SizeVaultTitleButton {}
            }
            div {
                class: "navbar-end",
                div { class: "h-10",
                    if account_store.is_signed_in() {
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-primary",
                            "Open SizeVault"
                        }
                    } else if account_store.is_fetched() {
                        Link {
                            to: Route::Login {},
                            class: "btn btn-primary",
                            "Sign in"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
