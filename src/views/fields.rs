// ============================================================================
// FORM FIELDS - Grupos label + input + errores
// ============================================================================
// El input NO se vuelve a pintar al escribir: solo se actualiza el valor
// en el formulario. Los errores aparecen en el siguiente render.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{append_child, on_input_value, ElementBuilder};
use crate::viewmodels::FieldState;

pub struct FieldProps<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub placeholder: &'a str,
}

pub fn render_field<F>(props: FieldProps<'_>, field: &FieldState, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", props.id)?
        .text(props.label)
        .build();
    append_child(&group, &label)?;

    let input = ElementBuilder::new("input")?
        .id(props.id)?
        .attr("name", props.id)?
        .attr("type", props.input_type)?
        .attr("placeholder", props.placeholder)?
        .class(if field.is_valid() { "form-input" } else { "form-input invalid" })
        .build();
    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
        html_input.set_value(&field.value);
    }
    on_input_value(&input, on_value)?;
    append_child(&group, &input)?;

    for error in &field.errors {
        append_child(&group, &ElementBuilder::new("p")?.class("field-error").text(error).build())?;
    }

    Ok(group)
}

/// Banner de error del servidor
pub fn render_banner(lines: &[String]) -> Result<Option<Element>, JsValue> {
    if lines.is_empty() {
        return Ok(None);
    }
    let banner = ElementBuilder::new("div")?
        .class("form-banner")
        .attr("role", "alert")?
        .build();
    for line in lines {
        append_child(&banner, &ElementBuilder::new("p")?.text(line).build())?;
    }
    Ok(Some(banner))
}
