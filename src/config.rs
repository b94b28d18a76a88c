// ============================================================================
// CONFIG - Configuración del router (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    pub enable_logging: bool,
    pub log_level: String,
    /// ID del contenedor donde las páginas renderizan su contenido
    pub root_id: String,
    /// Si es false no se registra el listener de clicks en el document
    pub intercept_links: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            root_id: "root".to_string(),
            intercept_links: true,
        }
    }
}

impl RouterConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ROUTER_ENABLE_LOGGING"),
            option_env!("ROUTER_LOG_LEVEL"),
            option_env!("ROUTER_ROOT_ID"),
            option_env!("ROUTER_INTERCEPT_LINKS"),
        )
    }

    fn from_values(
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        root_id: Option<&str>,
        intercept_links: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .filter(|v| !v.is_empty())
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),
            root_id: root_id
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.root_id),
            intercept_links: intercept_links
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.intercept_links),
        }
    }

    /// Nivel de log efectivo (Off si el logging está deshabilitado)
    pub fn level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: RouterConfig = RouterConfig::from_env();
}
