// ============================================================================
// NAVBAR
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::Route;

/// Enlace interno: navega con pushState en lugar de recargar
pub fn render_link(ctx: &AppContext, label: &str, route: Route, class: &str) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class(class)
        .attr("href", route.path())?
        .text(label)
        .build();

    let ctx = ctx.clone();
    on_click(&link, move |e| {
        e.prevent_default();
        ctx.navigate(route.clone());
    })?;

    Ok(link)
}

pub fn render_navbar(ctx: &AppContext) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();
    let inner = ElementBuilder::new("div")?.class("navbar-inner").build();

    append_child(&inner, &render_link(ctx, "Together", Route::Home, "navbar-brand")?)?;

    let links = ElementBuilder::new("div")?.class("navbar-links").build();
    append_child(&links, &render_link(ctx, "Login", Route::Login, "navbar-link")?)?;
    append_child(&links, &render_link(ctx, "Register", Route::Register, "navbar-link")?)?;

    if ctx.state.session.is_authenticated() {
        let friends_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("navbar-button")
            .text("Friends")
            .build();
        {
            let vm = ctx.panel_vm.clone();
            on_click(&friends_btn, move |_| {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.toggle().await;
                });
            })?;
        }
        append_child(&links, &friends_btn)?;

        let logout_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("navbar-button")
            .text("Logout")
            .build();
        {
            let ctx = ctx.clone();
            on_click(&logout_btn, move |_| ctx.logout())?;
        }
        append_child(&links, &logout_btn)?;
    }

    append_child(&inner, &links)?;
    append_child(&nav, &inner)?;
    Ok(nav)
}
