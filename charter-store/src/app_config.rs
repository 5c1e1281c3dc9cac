use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// When false (production posture), 500 responses carry a generic
    /// message and the underlying error only goes to the logs.
    #[serde(default)]
    pub expose_error_detail: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Load the launch catalog into an empty database on boot.
    #[serde(default = "default_seed_on_start")]
    pub seed_on_start: bool,
}

fn default_seed_on_start() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub sender_email: String,
    pub sender_name: String,
    pub admin_email: String,
}

fn default_smtp_port() -> u16 {
    587
}

impl EmailConfig {
    /// Host plus credentials, present only when all three are configured.
    /// Anything less selects the console mailer.
    pub fn smtp_settings(&self) -> Option<(String, String, String)> {
        match (&self.smtp_host, &self.smtp_username, &self.smtp_password) {
            (Some(host), Some(user), Some(pass)) => {
                Some((host.clone(), user.clone(), pass.clone()))
            }
            _ => None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of CHARTER)
            // Eg.. `CHARTER__SERVER__PORT=9000` would set the server port
            .add_source(config::Environment::with_prefix("CHARTER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_in_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "server": { "port": 5000 },
            "database": { "url": "postgres://localhost/charter" },
            "email": {
                "sender_email": "noreply@example.com",
                "sender_name": "Charter Desk",
                "admin_email": "ops@example.com"
            }
        }))
        .unwrap();

        assert!(!config.server.expose_error_detail);
        assert!(config.database.seed_on_start);
        assert_eq!(config.email.smtp_port, 587);
        assert!(config.email.smtp_settings().is_none());
    }

    #[test]
    fn smtp_settings_require_host_and_both_credentials() {
        let mut email = EmailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_port: 587,
            smtp_username: Some("mailer".to_string()),
            smtp_password: None,
            sender_email: "noreply@example.com".to_string(),
            sender_name: "Charter Desk".to_string(),
            admin_email: "ops@example.com".to_string(),
        };
        assert!(email.smtp_settings().is_none());

        email.smtp_password = Some("secret".to_string());
        let (host, user, _) = email.smtp_settings().unwrap();
        assert_eq!(host, "smtp.example.com");
        assert_eq!(user, "mailer");
    }
}
