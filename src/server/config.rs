pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub identity_url: String,
    pub identity_api_key: String,
    pub public_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            valkey_url: std::env::var("VALKEY_URL")?,
            identity_url: std::env::var("IDENTITY_URL")?,
            identity_api_key: std::env::var("IDENTITY_API_KEY")?,
            public_origin: std::env::var("PUBLIC_ORIGIN")?,
        })
    }
}
