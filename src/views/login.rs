// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::AppContext;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::Route;
use crate::viewmodels::{LoginField, LoginForm, SubmitOutcome};
use crate::views::fields::{render_banner, render_field, FieldProps};
use crate::views::navbar::render_link;

pub fn render_login(ctx: &AppContext) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");
    let form_state = ctx.login_form.borrow().clone();

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();
    append_child(&card, &ElementBuilder::new("h2")?.text("Log In").build())?;

    if let Some(banner) = render_banner(form_state.banner.as_slice())? {
        append_child(&card, &banner)?;
    }

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .build();

    let fields = [
        (LoginField::Email, FieldProps { id: "email", label: "Email", input_type: "email", placeholder: "Enter your email" }),
        (LoginField::Password, FieldProps { id: "password", label: "Password", input_type: "password", placeholder: "Enter your password" }),
    ];
    for (field, props) in fields {
        let login_form = ctx.login_form.clone();
        let group = render_field(props, form_state.field(field), move |value| {
            login_form.borrow_mut().field_mut(field).set_value(value);
        })?;
        append_child(&form, &group)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(if form_state.submitting { "Logging in..." } else { "Log In" })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let ctx = ctx.clone();
        on_submit(&form, move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                let outcome = ctx.session_vm.login(&ctx.login_form).await;
                if matches!(outcome, SubmitOutcome::Navigate(_)) {
                    *ctx.login_form.borrow_mut() = LoginForm::default();
                }
                ctx.after_submit(outcome);
            });
        })?;
    }
    append_child(&card, &form)?;

    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Don't have an account? ")
        .build();
    append_child(&footer, &render_link(ctx, "Sign Up", Route::Register, "link")?)?;
    append_child(&card, &footer)?;

    append_child(&screen, &card)?;
    Ok(screen)
}
