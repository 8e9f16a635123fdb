use anyhow::{Context, Result};
use secrecy::SecretString;

const DEFAULT_SERVER_PORT: u16 = 8080;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse::<u16>()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME")
                .context("DATABASE_USERNAME is not set")?,
            password: SecretString::new(
                std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            ),
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let server = ServerConfig {
            port: match std::env::var("SERVER_PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .context("SERVER_PORT must be a port number")?,
                Err(_) => DEFAULT_SERVER_PORT,
            },
        };
        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}
