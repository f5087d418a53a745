pub mod layout;
pub mod navbar;

pub use layout::AccountLayout;
pub use navbar::AccountNavbar;
