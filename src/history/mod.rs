// History del navegador con implementaciones específicas por plataforma

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod memory;
pub mod traits;

#[cfg(target_arch = "wasm32")]
pub use web::BrowserHistory;

pub use memory::MemoryHistory;
pub use traits::History;
