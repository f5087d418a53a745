use dioxus::prelude::*;

use crate::client::{
    components::{account::AccountLayout, Navbar},
    routes::{
        app::{Dashboard, Family, Me},
        AcceptInvite, Home, Login, NotFound,
    },
};

use crate::client::routes::NotFound as AppNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/accept-invite?:token")]
    AcceptInvite { token: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/app")]

        #[layout(AccountLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/me")]
        Me {},

        #[route("/family")]
        Family {},

        #[route("/:..segments")]
        AppNotFound { segments: Vec<String> },
}
