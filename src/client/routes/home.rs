use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRuler, FaUserGroup};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::account::use_account_store;

#[component]
pub fn SignInButtons() -> Element {
    let account_store = use_account_store();

    rsx!(
        ul { class: "flex gap-2",
            if account_store.is_signed_in() {
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-28",
                        "Open app"
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-28",
                            "API Docs"
                        }
                    }
                }
            } else if account_store.is_fetched() {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-28",
                        "Sign in"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "SizeVault Home" }
        Meta {
            name: "description",
            content: "Keep your family's clothing sizes and body measurements in one shared place."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "SizeVault"
                    }
                    p {
                        "v0.1.0"
                    }
                }
                div {
                    SignInButtons { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "Never guess a size in the store again"
                    }
                    p {
                        "SizeVault keeps body measurements for your whole family in one place.
                        Record your own sizes, add your children, and share everything with
                        the people who actually buy the clothes."
                    }
                    p {
                        "Create a family group and invite your partner, grandparents, or anyone
                        else who shops for the kids. Every member sees the latest measurements,
                        so a birthday jacket bought across the country still fits."
                    }
                    ul { class: "list-disc pl-6",
                        li { "Height, weight, chest, waist, hips, inseam, and shoe size" }
                        li { "Separate size cards for each child" }
                        li { "Invite links that expire after seven days" }
                        li { "Every family member sees the same up to date numbers" }
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link {
                            to: Route::Me {},
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaRuler
                                }
                                p {
                                    "My Sizes"
                                }
                            }
                        }
                    }
                    li {
                        Link {
                            to: Route::Family {},
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaUserGroup
                                }
                                p {
                                    "Family Group"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
