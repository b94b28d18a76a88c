// ============================================================================
// ROUTER - Rutas exactas path -> callback, sincronizadas con el history
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RouterError;
use crate::history::History;

/// Callback de ruta: sin argumentos, solo efectos (normalmente mutar el DOM)
pub type RouteCallback = Rc<dyn Fn()>;

/// Resultado de una resolución de ruta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// El path activo ya era el actual; no se ejecutó nada
    Unchanged,
    /// Se ejecutó el callback registrado para el path
    Matched(String),
    /// No hay ruta para el path (se ejecutó el fallback si existe)
    NotFound(String),
}

pub(super) struct RouterInner<H> {
    pub(super) history: H,
    routes: RefCell<HashMap<String, RouteCallback>>,
    not_found: RefCell<Option<RouteCallback>>,
    current_path: RefCell<String>,
    previous_path: RefCell<Option<String>>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(super) listening: Cell<bool>,
}

/// Router SPA
///
/// Es un handle barato de clonar: todos los clones comparten la tabla de
/// rutas y el estado de navegación. Se construye una vez por página y se
/// pasa explícitamente a quien necesite navegar.
pub struct Router<H: History> {
    pub(super) inner: Rc<RouterInner<H>>,
}

impl<H: History> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H: History> Router<H> {
    /// Crear router leyendo el path activo del history
    pub fn new(history: H) -> Self {
        let current_path = history.pathname();
        log::info!("🧭 [ROUTER] Inicializado en {}", current_path);

        Self {
            inner: Rc::new(RouterInner {
                history,
                routes: RefCell::new(HashMap::new()),
                not_found: RefCell::new(None),
                current_path: RefCell::new(current_path),
                previous_path: RefCell::new(None),
                listening: Cell::new(false),
            }),
        }
    }

    /// Registrar callback para un path exacto (reemplaza el anterior si existe)
    pub fn on<F>(&self, path: &str, callback: F) -> &Self
    where
        F: Fn() + 'static,
    {
        let replaced = self
            .inner
            .routes
            .borrow_mut()
            .insert(path.to_string(), Rc::new(callback));
        if replaced.is_some() {
            log::debug!("[ROUTER] Ruta {} reemplazada", path);
        }
        self
    }

    /// Registrar el fallback para paths sin ruta
    pub fn not_found<F>(&self, callback: F) -> &Self
    where
        F: Fn() + 'static,
    {
        *self.inner.not_found.borrow_mut() = Some(Rc::new(callback));
        self
    }

    /// Apilar una entrada en el history y resolver la ruta
    pub fn navigate_to(&self, path: &str) -> Result<RouteOutcome, RouterError> {
        self.inner.history.push_state(path)?;
        Ok(self.handle_route())
    }

    /// Resolver el path activo del history
    ///
    /// Los callbacks se ejecutan sin ningún borrow activo, así que pueden
    /// volver a llamar a `navigate_to` (redirecciones).
    pub fn handle_route(&self) -> RouteOutcome {
        let path = self.inner.history.pathname();

        if *self.inner.current_path.borrow() == path {
            return RouteOutcome::Unchanged;
        }

        let previous = self.inner.current_path.replace(path.clone());
        *self.inner.previous_path.borrow_mut() = Some(previous);

        let callback = self.inner.routes.borrow().get(&path).cloned();
        match callback {
            Some(callback) => {
                log::info!("➡️ [ROUTER] {}", path);
                callback();
                RouteOutcome::Matched(path)
            }
            None => {
                log::error!("❌ [ROUTER] 404: {}", path);
                let fallback = self.inner.not_found.borrow().clone();
                if let Some(fallback) = fallback {
                    fallback();
                }
                RouteOutcome::NotFound(path)
            }
        }
    }

    pub fn current_path(&self) -> String {
        self.inner.current_path.borrow().clone()
    }

    pub fn previous_path(&self) -> Option<String> {
        self.inner.previous_path.borrow().clone()
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.inner.routes.borrow().contains_key(path)
    }

    pub fn route_count(&self) -> usize {
        self.inner.routes.borrow().len()
    }

    pub fn history(&self) -> &H {
        &self.inner.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let hits_cb = hits.clone();
        (hits, move || hits_cb.set(hits_cb.get() + 1))
    }

    // Logger de captura: cada hilo de test ve solo sus propios registros
    struct CaptureLogger;

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()));
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_logs() {
        static INSTALL: std::sync::Once = std::sync::Once::new();
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
        RECORDS.with(|records| records.borrow_mut().clear());
    }

    fn error_logs() -> Vec<String> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _)| *level == log::Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    #[test]
    fn test_router_starts_at_history_path() {
        let router = Router::new(MemoryHistory::new("/start").unwrap());
        assert_eq!(router.current_path(), "/start");
        assert_eq!(router.previous_path(), None);
        assert_eq!(router.route_count(), 0);
    }

    #[test]
    fn test_navigate_invokes_registered_callback_once() {
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let (about_hits, about) = counter();
        let (home_hits, home) = counter();
        router.on("/about", about).on("/", home);

        let outcome = router.navigate_to("/about").unwrap();

        assert_eq!(outcome, RouteOutcome::Matched("/about".to_string()));
        assert_eq!(about_hits.get(), 1);
        assert_eq!(home_hits.get(), 0);
    }

    #[test]
    fn test_navigate_to_current_path_is_noop() {
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let (hits, about) = counter();
        router.on("/about", about);
        router.navigate_to("/about").unwrap();

        let outcome = router.navigate_to("/about").unwrap();

        assert_eq!(outcome, RouteOutcome::Unchanged);
        assert_eq!(hits.get(), 1);
        assert_eq!(router.previous_path().as_deref(), Some("/"));
    }

    #[test]
    fn test_back_updates_current_and_previous() {
        let history = MemoryHistory::new("/a").unwrap();
        let router = Router::new(history.clone());
        let (a_hits, a) = counter();
        let (b_hits, b) = counter();
        router.on("/a", a).on("/b", b);

        router.navigate_to("/b").unwrap();
        assert_eq!(router.current_path(), "/b");
        assert_eq!(router.previous_path().as_deref(), Some("/a"));

        // popstate tras pulsar "atrás"
        assert!(history.back());
        assert_eq!(
            router.handle_route(),
            RouteOutcome::Matched("/a".to_string())
        );
        assert_eq!(router.current_path(), "/a");
        assert_eq!(router.previous_path().as_deref(), Some("/b"));

        assert!(history.forward());
        router.handle_route();
        assert_eq!(router.current_path(), "/b");
        assert_eq!(router.previous_path().as_deref(), Some("/a"));

        assert_eq!(a_hits.get(), 1);
        assert_eq!(b_hits.get(), 2);
    }

    #[test]
    fn test_unknown_path_runs_fallback() {
        capture_logs();
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let (fallback_hits, fallback) = counter();
        router.not_found(fallback);

        let outcome = router.navigate_to("/missing").unwrap();

        assert_eq!(outcome, RouteOutcome::NotFound("/missing".to_string()));
        assert_eq!(fallback_hits.get(), 1);
        assert_eq!(router.current_path(), "/missing");

        let errors = error_logs();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("404: /missing"));
    }

    #[test]
    fn test_unknown_path_without_fallback_logs_404() {
        capture_logs();
        let router = Router::new(MemoryHistory::new("/").unwrap());

        let outcome = router.navigate_to("/missing").unwrap();

        assert_eq!(outcome, RouteOutcome::NotFound("/missing".to_string()));
        let errors = error_logs();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("404: /missing"));
    }

    #[test]
    fn test_matched_path_logs_no_error() {
        capture_logs();
        let router = Router::new(MemoryHistory::new("/").unwrap());
        router.on("/about", || {});

        router.navigate_to("/about").unwrap();
        router.navigate_to("/about").unwrap();

        assert!(error_logs().is_empty());
    }

    #[test]
    fn test_registering_twice_keeps_last_callback() {
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        router.on("/about", first);
        router.on("/about", second);

        router.navigate_to("/about").unwrap();

        assert_eq!(router.route_count(), 1);
        assert_eq!(first_hits.get(), 0);
        assert_eq!(second_hits.get(), 1);
    }

    #[test]
    fn test_matching_is_exact() {
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let (hits, about) = counter();
        router.on("/about", about);

        assert!(matches!(
            router.navigate_to("/about/").unwrap(),
            RouteOutcome::NotFound(_)
        ));
        assert!(matches!(
            router.navigate_to("/About").unwrap(),
            RouteOutcome::NotFound(_)
        ));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_query_and_fragment_do_not_change_route() {
        let history = MemoryHistory::new("/").unwrap();
        let router = Router::new(history.clone());
        let (hits, search) = counter();
        router.on("/search", search);

        router.navigate_to("/search?q=rust").unwrap();
        let outcome = router.navigate_to("/search#results").unwrap();

        assert_eq!(outcome, RouteOutcome::Unchanged);
        assert_eq!(hits.get(), 1);
        assert_eq!(history.current_entry(), "/search#results");
    }

    #[test]
    fn test_callback_can_redirect() {
        let history = MemoryHistory::new("/").unwrap();
        let router = Router::new(history.clone());
        let (new_hits, new_page) = counter();
        let redirect = router.clone();
        router.on("/old", move || {
            redirect.navigate_to("/new").unwrap();
        });
        router.on("/new", new_page);

        router.navigate_to("/old").unwrap();

        assert_eq!(new_hits.get(), 1);
        assert_eq!(router.current_path(), "/new");
        assert_eq!(router.previous_path().as_deref(), Some("/old"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_clones_share_state() {
        let router = Router::new(MemoryHistory::new("/").unwrap());
        let other = router.clone();
        other.on("/x", || {});
        assert!(router.has_route("/x"));
        other.navigate_to("/x").unwrap();
        assert_eq!(router.current_path(), "/x");
    }
}
