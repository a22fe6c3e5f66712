use std::env;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for requests no API route matches.
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "client/public".to_string());
        AppConfig { host, port, static_dir }
    }
}
