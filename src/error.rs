// ============================================================================
// ERRORES DEL ROUTER
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    /// pushState o lectura de location rechazados por el navegador
    #[error("History error: {0}")]
    History(String),
    #[error("Listener error: {0}")]
    Listener(String),
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl RouterError {
    /// Construir desde un error JS (el navegador devuelve JsValue opacos)
    pub(crate) fn history(err: JsValue) -> Self {
        RouterError::History(js_error_message(&err))
    }

    pub(crate) fn listener(err: JsValue) -> Self {
        RouterError::Listener(js_error_message(&err))
    }
}

impl From<RouterError> for JsValue {
    fn from(err: RouterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
