// ============================================================================
// ROUTER MODULE - Tabla de rutas, resolución y listeners del navegador
// ============================================================================

pub mod core;
pub mod links;

#[cfg(target_arch = "wasm32")]
pub mod listeners;

pub use self::core::{RouteCallback, RouteOutcome, Router};
pub use links::{resolve_link, LinkClick};
