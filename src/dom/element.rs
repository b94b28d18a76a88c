// ============================================================================
// DOM BÁSICO - document, creación de nodos y contenedores
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Node};

/// Document de la página; falla fuera del navegador
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

/// Nodo de texto (el contenido se escapa, nunca se interpreta como HTML)
pub fn create_text_node(text: &str) -> Result<Node, JsValue> {
    Ok(document()?.create_text_node(text).into())
}

pub fn append_child(parent: &Element, child: &Node) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Vaciar un contenedor antes de renderizar la vista nueva
pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}
