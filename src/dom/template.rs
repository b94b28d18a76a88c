// ============================================================================
// TEMPLATE - Construcción declarativa de árboles DOM
// ============================================================================
// template("h1", &[("class", "title")], "Hola") -> <h1 class="title">Hola</h1>
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, create_element, create_text_node, element_by_id};

/// Hijos de un elemento: texto o elementos ya construidos
#[derive(Debug, Clone, Default)]
pub enum Children {
    #[default]
    Empty,
    Text(String),
    Nodes(Vec<Element>),
}

impl Children {
    pub fn is_empty(&self) -> bool {
        match self {
            Children::Empty => true,
            Children::Text(text) => text.is_empty(),
            Children::Nodes(nodes) => nodes.is_empty(),
        }
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Vec<Element>> for Children {
    fn from(nodes: Vec<Element>) -> Self {
        Children::Nodes(nodes)
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::Empty
    }
}

/// Crear elemento con atributos e hijos
pub fn template(
    tag: &str,
    attrs: &[(&str, &str)],
    children: impl Into<Children>,
) -> Result<Element, JsValue> {
    let element = create_element(tag)?;

    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }

    match children.into() {
        Children::Empty => {}
        Children::Text(text) => append_child(&element, &create_text_node(&text)?)?,
        Children::Nodes(nodes) => {
            for node in &nodes {
                append_child(&element, node)?;
            }
        }
    }

    Ok(element)
}

/// Reemplazar el contenido de un contenedor por los elementos dados
pub fn render_into(root: &Element, elements: Vec<Element>) -> Result<(), JsValue> {
    clear_children(root);
    for element in &elements {
        append_child(root, element)?;
    }
    Ok(())
}

/// Renderizar en el contenedor raíz configurado (`ROUTER_ROOT_ID`)
pub fn render_root(elements: Vec<Element>) -> Result<(), JsValue> {
    let root_id = &crate::config::CONFIG.root_id;
    let root = element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", root_id)))?;
    log::debug!("[DOM] Renderizando {} elementos en #{}", elements.len(), root_id);
    render_into(&root, elements)
}
