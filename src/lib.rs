// ============================================================================
// TOGETHER WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado de formularios + lógica UI
// - Services: SOLO comunicación API
// - State: Stores con Rc<RefCell> y notificación de cambios
// - Models: Estructuras compartidas con backend
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod config;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::App;
use crate::config::AppConfig;
use crate::state::UpdateType;

// Instancia única de App (raíz WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    wasm_logger::init(Config::new(config.log_level()));
    log::info!("🚀 Together Web - Rust Puro + MVVM (API: {})", config.api_base_url);

    let mut app = App::new(config)?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales: se registran UNA sola vez aquí
    dom::on_popstate(|path| {
        APP.with(|app_cell| {
            if let Some(ref app) = *app_cell.borrow() {
                app.on_location_change(&path);
            }
        });
    })?;

    if let Some(win) = web_sys::window() {
        // pagehide con `persisted` = la página entra en la bfcache y puede volver
        let on_hide = Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                log::debug!("💤 [MAIN] Página en bfcache, no se desmonta");
                return;
            }
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.context().teardown();
                }
            });
        }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);
        win.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
        on_hide.forget();

        let on_show = Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                log::info!("🔄 [MAIN] Página restaurada desde la bfcache");
                APP.with(|app_cell| {
                    if let Some(ref app) = *app_cell.borrow() {
                        app.context().resume();
                    }
                });
            }
        }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);
        win.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())?;
        on_show.forget();
    }

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualiza la app con el tipo de actualización indicado
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", inc_type);
                let needs_full_render = match *app_cell.borrow() {
                    Some(ref app) => match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            log::debug!("🔄 [UPDATE] Cambiando a re-render completo: {:?}", e);
                            true
                        }
                    },
                    None => {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(ref mut app) = *app_cell.borrow_mut() {
                        if let Err(e) = app.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                }
            }
            UpdateType::FullRender => {
                log::debug!("🔄 [RERENDER] Re-render completo");
                match *app_cell.borrow_mut() {
                    Some(ref mut app) => {
                        if let Err(e) = app.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                    None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
                }
            }
        }
    });
}
