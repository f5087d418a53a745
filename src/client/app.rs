use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;
use crate::client::store::account::AccountStore;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let account_store = use_context_provider(AccountStore::new);

    // One session check per page load; everything else reads the store.
    #[cfg(feature = "web")]
    use_effect(move || {
        spawn(async move {
            match crate::client::util::api::get_account().await {
                Ok(account) => account_store.set_account(account),
                Err(err) => {
                    tracing::error!(err);
                    account_store.set_account(None);
                }
            }
        });
    });

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
