// ============================================================================
// REGISTER VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::AppContext;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::Route;
use crate::viewmodels::{RegisterField, RegisterForm, SubmitOutcome};
use crate::views::fields::{render_banner, render_field, FieldProps};
use crate::views::navbar::render_link;

fn props_for(field: RegisterField) -> FieldProps<'static> {
    let (label, input_type, placeholder) = match field {
        RegisterField::FirstName => ("First Name", "text", "Enter your first name"),
        RegisterField::LastName => ("Last Name", "text", "Enter your last name"),
        RegisterField::NickName => ("Username", "text", "Enter your username"),
        RegisterField::Email => ("Email", "email", "Enter your email"),
        RegisterField::Password => ("Password", "password", "Enter your password"),
        RegisterField::ConfirmPassword => ("Confirm Password", "password", "Confirm your password"),
    };
    FieldProps { id: field.id(), label, input_type, placeholder }
}

pub fn render_register(ctx: &AppContext) -> Result<Element, JsValue> {
    log::debug!("🎬 [REGISTER] render_register()");
    let form_state = ctx.register_form.borrow().clone();

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();
    append_child(&card, &ElementBuilder::new("h2")?.text("Sign Up").build())?;

    // Lista de validación del servidor (una línea por error) o mensaje único
    let banner_lines = if form_state.server_errors.is_empty() {
        form_state.banner.iter().cloned().collect::<Vec<_>>()
    } else {
        form_state.server_errors.clone()
    };
    if let Some(banner) = render_banner(&banner_lines)? {
        append_child(&card, &banner)?;
    }

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .build();

    for field in RegisterField::ALL {
        let register_form = ctx.register_form.clone();
        let group = render_field(props_for(field), form_state.field(field), move |value| {
            register_form.borrow_mut().field_mut(field).set_value(value);
        })?;
        append_child(&form, &group)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(if form_state.submitting { "Signing up..." } else { "Sign Up" })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let ctx = ctx.clone();
        on_submit(&form, move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                let outcome = ctx.session_vm.register(&ctx.register_form).await;
                if matches!(outcome, SubmitOutcome::Navigate(_)) {
                    *ctx.register_form.borrow_mut() = RegisterForm::default();
                }
                ctx.after_submit(outcome);
            });
        })?;
    }
    append_child(&card, &form)?;

    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Already have an account? ")
        .build();
    append_child(&footer, &render_link(ctx, "Log in", Route::Login, "link")?)?;
    append_child(&card, &footer)?;

    append_child(&screen, &card)?;
    Ok(screen)
}
