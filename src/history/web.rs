use super::traits::History;
use crate::error::RouterError;

/// History real del navegador (`window.location` + `window.history`)
#[derive(Debug, Clone, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    pub fn new() -> Self {
        Self
    }
}

impl History for BrowserHistory {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_state(&self, path: &str) -> Result<(), RouterError> {
        let window = web_sys::window().ok_or(RouterError::NoWindow)?;
        let history = window.history().map_err(RouterError::history)?;
        history
            .push_state_with_url(&js_sys::Object::new().into(), "", Some(path))
            .map_err(RouterError::history)
    }
}
