// ============================================================================
// SCROLL LOCK - Bloqueo del scroll del documento con el panel abierto
// ============================================================================

use crate::utils::constants::SCROLL_LOCK_CLASS;

pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Implementación real: clase `overflow-hidden` en `<body>`
#[derive(Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        if let Some(body) = Self::body() {
            if let Err(e) = body.class_list().add_1(SCROLL_LOCK_CLASS) {
                log::warn!("⚠️ [DOM] No se pudo bloquear el scroll: {:?}", e);
            }
        }
    }

    fn unlock(&self) {
        if let Some(body) = Self::body() {
            if let Err(e) = body.class_list().remove_1(SCROLL_LOCK_CLASS) {
                log::warn!("⚠️ [DOM] No se pudo desbloquear el scroll: {:?}", e);
            }
        }
    }
}
