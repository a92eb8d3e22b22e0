use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:3000").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_defaults() {
        let config = AppConfig::from_env();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.api_base_url.ends_with('/'));
    }
}
