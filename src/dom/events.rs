// ============================================================================
// EVENT HANDLING - Listeners globales (window/document)
// ============================================================================
// Los listeners globales viven toda la vida del documento: se registran una
// sola vez y el closure se mantiene vivo con forget().
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Registrar listener en fase de burbuja
pub fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    add_listener(target, event_type, false, handler)
}

/// Registrar listener en fase de captura (antes que los handlers de los hijos)
pub fn listen_capture<E, F>(
    target: &EventTarget,
    event_type: &str,
    handler: F,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    add_listener(target, event_type, true, handler)
}

fn add_listener<E, F>(
    target: &EventTarget,
    event_type: &str,
    capture: bool,
    handler: F,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback_and_bool(
        event_type,
        closure.as_ref().unchecked_ref(),
        capture,
    )?;
    closure.forget();
    Ok(())
}
