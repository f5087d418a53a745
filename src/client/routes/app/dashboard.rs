use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRuler, FaUserGroup};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

#[component]
pub fn Dashboard() -> Element {
    let account_store = use_account_store();

    rsx!(
        Title { "Dashboard | SizeVault" }
        Meta {
            name: "description",
            content: "Keep your family's clothing sizes and body measurements in one shared place."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                div { class: "card shadow-sm w-full",
                    div { class: "card-body",
                        h2 { class: "card-title", "Welcome" }
                        if let Some(account) = account_store.account() {
                            p { "Signed in as {account.email}" }
                        }
                        p {
                            "Record your sizes under My Sizes, add your children there too,
                            then share everything through a family group."
                        }
                    }
                }
                div { class: "flex flex-wrap gap-4",
                    Link {
                        to: Route::Me {},
                        class: "card shadow-sm flex-1 min-w-64",
                        div { class: "card-body",
                            h2 { class: "card-title",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaRuler
                                }
                                "My Sizes"
                            }
                            p { "Your measurements and your children's." }
                        }
                    }
                    Link {
                        to: Route::Family {},
                        class: "card shadow-sm flex-1 min-w-64",
                        div { class: "card-body",
                            h2 { class: "card-title",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaUserGroup
                                }
                                "Family Group"
                            }
                            p { "Invite family members and browse everyone's sizes." }
                        }
                    }
                }
            }
        }
    )
}
