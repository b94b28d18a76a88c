// ============================================================================
// LINKS - Decidir si un click en <a> se queda dentro de la SPA
// ============================================================================

/// Datos de un click sobre un anchor, extraídos del DOM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkClick {
    /// Valor literal del atributo href
    pub href: String,
    /// Origen del anchor ya resuelto por el navegador
    pub origin: String,
    /// Origen de la página actual
    pub page_origin: String,
    /// pathname + search de la página actual
    pub page_path: String,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub target: Option<String>,
    pub download: bool,
    /// Botón del ratón (0 = principal)
    pub button: i16,
    /// ctrl/meta/shift/alt pulsado
    pub modifier: bool,
}

/// Path interno al que navegar, o None si el navegador debe manejar el click
pub fn resolve_link(click: &LinkClick) -> Option<String> {
    if click.href.trim().is_empty() {
        return None;
    }
    if click.button != 0 || click.modifier || click.download {
        return None;
    }
    if let Some(target) = click.target.as_deref() {
        if !target.is_empty() && !target.eq_ignore_ascii_case("_self") {
            return None;
        }
    }
    if click.origin != click.page_origin {
        return None;
    }

    let pathname = if click.pathname.is_empty() {
        "/"
    } else {
        click.pathname.as_str()
    };
    let path = format!("{}{}", pathname, click.search);

    // Fragmento en la misma página: el navegador hace scroll sin recargar
    if !click.hash.is_empty() && path == click.page_path {
        return None;
    }
    Some(format!("{}{}", path, click.hash))
}
