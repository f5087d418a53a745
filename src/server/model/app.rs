use sea_orm::DatabaseConnection;

use crate::server::identity::IdentityClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityClient,
    /// Origin used to build shareable invite links, e.g. `https://sizevault.example`.
    pub public_origin: String,
}
