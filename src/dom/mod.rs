// ============================================================================
// DOM MODULE - Helpers para manipulación DOM y plantillas
// ============================================================================

pub mod element;
pub mod events;
pub mod template;

pub use element::*;
pub use events::*;
pub use template::*;
