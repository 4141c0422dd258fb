use std::env;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

/// Server and persistence settings, read once at startup.
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub auth: AuthConfig,
}

/// Token-signing settings shared by the login route and the request
/// gateway. Constructed once in `main` and handed to handlers through
/// app data; nothing in a request path reads the environment.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, algorithm: Algorithm, token_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
            token_ttl,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let secret = env::var("SECRET_KEY").expect("SECRET_KEY must be set");
        let algorithm = env::var("ALGORITHM")
            .map(|name| Algorithm::from_str(&name).expect("ALGORITHM must name a JWT algorithm"))
            .unwrap_or(Algorithm::HS256);
        let ttl_minutes: i64 = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .expect("ACCESS_TOKEN_EXPIRE_MINUTES must be a number");

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            auth: AuthConfig::new(secret, algorithm, Duration::minutes(ttl_minutes)),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
