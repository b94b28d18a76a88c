// ============================================================================
// SPA ROUTER - Router client-side para WebAssembly
// ============================================================================
// - router:  tabla de rutas exactas, resolución y listeners del navegador
// - history: backend de history (navegador o memoria)
// - dom:     helpers DOM y plantillas para las páginas
// ============================================================================
//
// Uso típico desde la app:
//
//     spa_router::init();
//     let router = Router::browser();
//     router.on("/", home).on("/about", about).not_found(not_found);
//     router.start()?;

pub mod config;
pub mod dom;
pub mod error;
pub mod history;
pub mod router;

pub use config::{RouterConfig, CONFIG};
pub use dom::{render_into, render_root, template, Children};
pub use error::RouterError;
pub use history::{History, MemoryHistory};
pub use router::{resolve_link, LinkClick, RouteCallback, RouteOutcome, Router};

#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;

/// Inicializar panic hook y logging (idempotente)
#[cfg(target_arch = "wasm32")]
pub fn init() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
            log::info!("🚀 [ROUTER] spa-router {}", env!("CARGO_PKG_VERSION"));
        }
    });
}
