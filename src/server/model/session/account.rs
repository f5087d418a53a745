use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_ACCOUNT_KEY: &str = "sizevault:account";

/// The signed-in account as stored in the session.
///
/// Holds the opaque account id issued by the identity provider along with the email it
/// was issued for. The id is the profile primary key, so handlers can load the profile
/// straight from session data without another round trip to the identity provider.
#[derive(Default, Deserialize, Serialize, Debug, Clone)]
pub struct SessionAccount {
    pub id: String,
    pub email: String,
}

impl SessionAccount {
    /// Insert the signed-in account into the session
    pub async fn insert(session: &Session, id: &str, email: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_ACCOUNT_KEY,
                SessionAccount {
                    id: id.to_string(),
                    email: email.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    /// Get the signed-in account from the session
    pub async fn get(session: &Session) -> Result<Option<SessionAccount>, Error> {
        let account = session.get(SESSION_ACCOUNT_KEY).await?;

        Ok(account)
    }

    /// Remove the signed-in account from the session
    pub async fn remove(session: &Session) -> Result<Option<SessionAccount>, Error> {
        Ok(session.remove(SESSION_ACCOUNT_KEY).await?)
    }
}
