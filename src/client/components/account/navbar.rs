use dioxus::prelude::*;

use crate::client::components::SizeVaultTitleButton;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

#[component]
pub fn AccountNavbar() -> Element {
    let account_store = use_account_store();
    let navigator = use_navigator();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                SizeVaultTitleButton {}
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal px-1",
                    li {
                        Link {
                            to: Route::Dashboard {},
                            "Dashboard"
                        }
                    }
                    li {
                        Link {
                            to: Route::Me {},
                            "My Sizes"
                        }
                    }
                    li {
                        Link {
                            to: Route::Family {},
                            "Family"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                div { class: "h-10",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            #[cfg(feature = "web")]
                            spawn(async move {
                                if crate::client::util::api::sign_out().await.is_ok() {
                                    account_store.set_account(None);
                                    navigator.push(Route::Home {});
                                }
                            });
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
