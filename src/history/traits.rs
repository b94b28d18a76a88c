use crate::error::RouterError;

/// Trait común para el backend de history que usa el router
///
/// El router solo necesita leer el path activo y apilar entradas nuevas;
/// back/forward los dispara el usuario y llegan como `popstate`.
pub trait History {
    /// Path activo (equivalente a `location.pathname`)
    fn pathname(&self) -> String;

    /// Apilar una entrada nueva sin recargar la página
    ///
    /// `path` se resuelve contra la entrada actual, como hace `pushState`.
    fn push_state(&self, path: &str) -> Result<(), RouterError>;
}
