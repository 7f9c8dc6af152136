use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

pub const DEFAULT_PANTRY_API_URL: &str = "https://getpantry.cloud/apiv1/pantry";

#[derive(Debug, Clone)]
pub struct Config {
    pub pantry_id: String,
    pub pantry_api_url: String,
    pub service_port: u16,
    pub service_host: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let pantry_id = env::var("PANTRY_ID")
            .context("PANTRY_ID environment variable is required")?;

        let pantry_api_url = env::var("PANTRY_API_URL")
            .unwrap_or_else(|_| DEFAULT_PANTRY_API_URL.to_string());

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Config {
            pantry_id,
            pantry_api_url,
            service_port,
            service_host,
            static_dir,
        })
    }

    /// Base URL every basket path is appended to:
    /// `{pantry_api_url}/{pantry_id}/basket`
    pub fn basket_base_url(&self) -> String {
        format!(
            "{}/{}/basket",
            self.pantry_api_url.trim_end_matches('/'),
            self.pantry_id
        )
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Pantry API: {}", self.pantry_api_url);
        tracing::info!("  Pantry id: {}", self.pantry_id);
        tracing::info!("  Static assets: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("PANTRY_ID");
            env::remove_var("PANTRY_API_URL");
            env::remove_var("PORT");
            env::remove_var("HOST");
            env::remove_var("STATIC_DIR");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("PANTRY_ID", "abc-123");
            env::set_var("PANTRY_API_URL", "http://localhost:9000/apiv1/pantry");
            env::set_var("PORT", "8080");
            env::set_var("HOST", "127.0.0.1");
            env::set_var("STATIC_DIR", "/srv/public");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.pantry_id, "abc-123");
        assert_eq!(config.pantry_api_url, "http://localhost:9000/apiv1/pantry");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.static_dir, PathBuf::from("/srv/public"));
        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("PANTRY_ID", "abc-123");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.pantry_api_url, DEFAULT_PANTRY_API_URL);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        clear_env_vars();
    }

    #[test]
    fn test_missing_pantry_id() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PANTRY_ID"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("PANTRY_ID", "abc-123");
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));
        clear_env_vars();
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("PANTRY_ID", "abc-123");
            env::set_var("PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        clear_env_vars();
    }

    #[test]
    fn test_basket_base_url() {
        let config = Config {
            pantry_id: "abc-123".to_string(),
            pantry_api_url: "https://getpantry.cloud/apiv1/pantry/".to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from("static"),
        };

        assert_eq!(
            config.basket_base_url(),
            "https://getpantry.cloud/apiv1/pantry/abc-123/basket"
        );
    }
}
