pub mod dashboard;
pub mod family;
pub mod me;

pub use dashboard::Dashboard;
pub use family::Family;
pub use me::Me;
