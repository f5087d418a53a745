use dioxus::prelude::*;

use crate::client::components::account::AccountNavbar;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

/// Wraps every signed-in page. Shows a spinner until the session check
/// finishes, then bounces anonymous visitors to the sign-in page.
#[component]
pub fn AccountLayout() -> Element {
    let account_store = use_account_store();
    let navigator = use_navigator();

    use_effect(move || {
        if account_store.is_fetched() && !account_store.is_signed_in() {
            navigator.push(Route::Login {});
        }
    });

    if !account_store.is_signed_in() {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    rsx! {
        AccountNavbar {}
        Outlet::<Route> {}
    }
}
