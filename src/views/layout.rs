// ============================================================================
// LAYOUT - Selección de layout por ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::AppContext;
use crate::dom::{append_child, ElementBuilder};
use crate::state::{Layout, Route};
use crate::views::friend_panel::render_friend_panel;
use crate::views::home::{render_home, render_not_found};
use crate::views::login::render_login;
use crate::views::navbar::render_navbar;
use crate::views::register::render_register;

/// Renderizar la app completa para la ruta actual
pub fn render_app(ctx: &AppContext) -> Result<Element, JsValue> {
    let route = ctx.state.route.current();

    match route.layout() {
        Layout::Bare => {
            // Sin navbar no hay forma de cerrar el panel: soltarlo
            if ctx.state.friends.is_open() {
                ctx.panel_vm.teardown();
            }
            let container = ElementBuilder::new("div")?.class("layout-bare").build();
            append_child(&container, &render_page(ctx, &route)?)?;
            Ok(container)
        }
        Layout::Main => {
            let container = ElementBuilder::new("div")?.class("layout-main").build();
            append_child(&container, &render_navbar(ctx)?)?;

            let main = ElementBuilder::new("main")?.class("content").build();
            append_child(&main, &render_page(ctx, &route)?)?;
            append_child(&container, &main)?;

            append_child(&container, &render_footer()?)?;
            append_child(&container, &render_friend_panel(ctx)?)?;
            Ok(container)
        }
    }
}

fn render_page(ctx: &AppContext, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::Home => render_home(ctx),
        Route::Login => render_login(ctx),
        Route::Register => render_register(ctx),
        Route::NotFound(path) => render_not_found(ctx, path),
    }
}

fn render_footer() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("footer")?
        .class("footer")
        .text("© Together")
        .build())
}
