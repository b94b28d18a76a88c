// ============================================================================
// LISTENERS - popstate (window) y click en captura (document)
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement, MouseEvent};

use super::core::{RouteOutcome, Router};
use super::links::{resolve_link, LinkClick};
use crate::config::CONFIG;
use crate::dom::{document, listen, listen_capture};
use crate::error::RouterError;
use crate::history::BrowserHistory;

impl Router<BrowserHistory> {
    /// Router sobre el history real del navegador
    pub fn browser() -> Self {
        Router::new(BrowserHistory::new())
    }

    /// Registrar los listeners globales
    ///
    /// Solo se registran una vez por router; llamadas repetidas se ignoran.
    pub fn start(&self) -> Result<(), RouterError> {
        if self.inner.listening.replace(true) {
            log::warn!("⚠️ [ROUTER] start ya fue llamado, ignorando llamada duplicada");
            return Ok(());
        }

        let window = web_sys::window().ok_or(RouterError::NoWindow)?;
        let router = self.clone();
        listen(&window, "popstate", move |_event: Event| {
            if let RouteOutcome::Matched(path) = router.handle_route() {
                log::debug!("[ROUTER] popstate -> {}", path);
            }
        })
        .map_err(RouterError::listener)?;

        if CONFIG.intercept_links {
            let document = document().map_err(|_| RouterError::NoDocument)?;
            let router = self.clone();
            listen_capture(&document, "click", move |event: MouseEvent| {
                router.handle_click(&event);
            })
            .map_err(RouterError::listener)?;
        }

        log::info!("✅ [ROUTER] Listeners registrados");
        Ok(())
    }

    fn handle_click(&self, event: &MouseEvent) {
        let Some(anchor) = closest_anchor(event) else {
            return;
        };
        let Some(path) = link_click(&anchor, event).as_ref().and_then(resolve_link) else {
            return;
        };

        event.prevent_default();
        if let Err(e) = self.navigate_to(&path) {
            log::error!("❌ [ROUTER] Error navegando a {}: {}", path, e);
        }
    }
}

/// Anchor que contiene el target del click (el target puede ser un hijo del <a>)
fn closest_anchor(event: &MouseEvent) -> Option<HtmlAnchorElement> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    target
        .closest("a")
        .ok()
        .flatten()?
        .dyn_into::<HtmlAnchorElement>()
        .ok()
}

fn link_click(anchor: &HtmlAnchorElement, event: &MouseEvent) -> Option<LinkClick> {
    let location = web_sys::window()?.location();
    let page_origin = location.origin().ok()?;
    let page_path = format!(
        "{}{}",
        location.pathname().ok()?,
        location.search().ok()?
    );
    Some(LinkClick {
        href: anchor.get_attribute("href").unwrap_or_default(),
        origin: anchor.origin(),
        page_origin,
        page_path,
        pathname: anchor.pathname(),
        search: anchor.search(),
        hash: anchor.hash(),
        target: Some(anchor.target()).filter(|t| !t.is_empty()),
        download: anchor.has_attribute("download"),
        button: event.button(),
        modifier: event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key(),
    })
}
