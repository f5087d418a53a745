pub mod account;
pub mod measurement_form;
pub mod navbar;
pub mod page;
pub mod sizevault_title;

pub use measurement_form::MeasurementForm;
pub use navbar::Navbar;
pub use page::Page;
pub use sizevault_title::SizeVaultTitleButton;
