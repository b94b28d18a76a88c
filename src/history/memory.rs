// ============================================================================
// MEMORY HISTORY - Pila de entradas en memoria (tests y hosts sin navegador)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use url::{Position, Url};

use super::traits::History;
use crate::error::RouterError;

/// Origen ficticio contra el que se resuelven las entradas
const MEMORY_ORIGIN: &str = "http://memory.invalid/";

#[derive(Debug)]
struct Entries {
    stack: Vec<Url>,
    cursor: usize,
}

impl Entries {
    fn current(&self) -> &Url {
        &self.stack[self.cursor]
    }
}

/// History en memoria con semántica de pushState/back/forward
///
/// Cada entrada se resuelve contra la anterior igual que en el navegador:
/// paths relativos, query y URLs absolutas siguen las reglas de `Url::join`.
/// Los clones comparten la misma pila, igual que todas las referencias a
/// `window.history` ven la misma sesión.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Entries>>,
}

impl MemoryHistory {
    /// Crear history con una entrada inicial
    pub fn new(initial: &str) -> Result<Self, RouterError> {
        let base = Url::parse(MEMORY_ORIGIN).map_err(url_error)?;
        let first = base.join(initial).map_err(url_error)?;
        Ok(Self {
            entries: Rc::new(RefCell::new(Entries {
                stack: vec![first],
                cursor: 0,
            })),
        })
    }

    /// Retroceder una entrada. Devuelve false si ya está en la primera.
    ///
    /// Solo mueve el cursor; el caller debe llamar a `Router::handle_route`
    /// como haría el listener de `popstate`.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.cursor == 0 {
            return false;
        }
        entries.cursor -= 1;
        true
    }

    /// Avanzar una entrada. Devuelve false si no hay entradas hacia adelante.
    pub fn forward(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.cursor + 1 >= entries.stack.len() {
            return false;
        }
        entries.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().stack.is_empty()
    }

    /// Entrada activa sin origen (path + query + fragmento)
    pub fn current_entry(&self) -> String {
        self.entries.borrow().current()[Position::BeforePath..].to_string()
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        self.entries.borrow().current().path().to_string()
    }

    fn push_state(&self, path: &str) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();
        let url = entries.current().join(path).map_err(url_error)?;
        let next = entries.cursor + 1;
        // Una entrada nueva descarta todo lo que estaba hacia adelante
        entries.stack.truncate(next);
        entries.stack.push(url);
        entries.cursor = next;
        Ok(())
    }
}

fn url_error(err: url::ParseError) -> RouterError {
    RouterError::History(err.to_string())
}
