use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::AppContext;
use crate::dom::{append_child, ElementBuilder};
use crate::state::Route;
use crate::views::navbar::render_link;

pub fn render_home(ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("home").build();
    let session = ctx.state.session.snapshot();

    if session.is_loading {
        append_child(&page, &ElementBuilder::new("p")?.class("muted").text("Loading...").build())?;
        return Ok(page);
    }

    match session.user {
        Some(user) if session.is_authenticated => {
            let title = format!("Welcome back, {}", user.display_name());
            append_child(&page, &ElementBuilder::new("h1")?.text(&title).build())?;
            append_child(
                &page,
                &ElementBuilder::new("p")?
                    .class("muted")
                    .text("Open the Friends panel to find people and manage requests.")
                    .build(),
            )?;
        }
        _ => {
            append_child(&page, &ElementBuilder::new("h1")?.text("Welcome to Together").build())?;
            let hint = ElementBuilder::new("p")?.class("muted").build();
            append_child(&hint, &render_link(ctx, "Log in", Route::Login, "link")?)?;
            append_child(&hint, &ElementBuilder::new("span")?.text(" or ").build())?;
            append_child(&hint, &render_link(ctx, "Sign Up", Route::Register, "link")?)?;
            append_child(&page, &hint)?;
        }
    }

    Ok(page)
}

pub fn render_not_found(ctx: &AppContext, path: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("not-found").build();
    append_child(&page, &ElementBuilder::new("h1")?.text("Page not found").build())?;
    append_child(
        &page,
        &ElementBuilder::new("p")?
            .class("muted")
            .text(&format!("Nothing lives at {}", path))
            .build(),
    )?;
    append_child(&page, &render_link(ctx, "Back to home", Route::Home, "link")?)?;
    Ok(page)
}
