// ============================================================================
// HISTORY - Navegación cliente con history.pushState
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::dom::window;

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_path(path: &str) {
    let Some(win) = window() else { return };
    match win.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::error!("❌ [ROUTER] pushState falló: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [ROUTER] history no disponible: {:?}", e),
    }
}

/// Registra el listener de `popstate`. Llamar una sola vez al arrancar.
pub fn on_popstate<F>(mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        handler(current_path());
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
