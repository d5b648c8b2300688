// ============================================================================
// FRIEND PANEL VIEW - Panel lateral de amigos
// ============================================================================
// Estructura estable:
//   #friend-panel (overlay, hidden si está cerrado)
//     ├─ #friend-panel-user      (nick + email)
//     ├─ #friend-search          (input, NUNCA se repinta en incremental)
//     ├─ #friend-search-results
//     └─ #friend-panel-lists     (solicitudes + amigos)
// La actualización incremental solo vacía y repinta los contenedores.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::app::AppContext;
use crate::dom::{alert, append_child, clear_children, get_element_by_id, on_click, on_input_value, set_hidden, ElementBuilder};
use crate::models::{FriendAction, FriendEntry, FriendRequest, User};

const PANEL_ID: &str = "friend-panel";
const USER_ID: &str = "friend-panel-user";
const SEARCH_INPUT_ID: &str = "friend-search";
const RESULTS_ID: &str = "friend-search-results";
const LISTS_ID: &str = "friend-panel-lists";

pub fn render_friend_panel(ctx: &AppContext) -> Result<Element, JsValue> {
    let friends = &ctx.state.friends;

    let overlay = ElementBuilder::new("div")?
        .id(PANEL_ID)?
        .class("friend-panel-overlay")
        .build();
    set_hidden(&overlay, !friends.is_open())?;
    {
        let vm = ctx.panel_vm.clone();
        on_click(&overlay, move |_| vm.close())?;
    }

    let panel = ElementBuilder::new("aside")?.class("friend-panel").build();
    on_click(&panel, |e| e.stop_propagation())?;

    // Header
    let header = ElementBuilder::new("div")?.class("friend-panel-section").build();
    let title_row = ElementBuilder::new("div")?.class("friend-panel-title").build();
    append_child(&title_row, &ElementBuilder::new("h2")?.text("Profile").build())?;
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .class("icon-button")
        .text("✕")
        .build();
    {
        let vm = ctx.panel_vm.clone();
        on_click(&close_btn, move |_| vm.close())?;
    }
    append_child(&title_row, &close_btn)?;
    append_child(&header, &title_row)?;

    let user_box = ElementBuilder::new("div")?.id(USER_ID)?.class("friend-panel-user").build();
    fill_user(ctx, &user_box)?;
    append_child(&header, &user_box)?;
    append_child(&panel, &header)?;

    // Búsqueda
    let search_section = ElementBuilder::new("div")?.class("friend-panel-section").build();
    let input = ElementBuilder::new("input")?
        .id(SEARCH_INPUT_ID)?
        .attr("type", "text")?
        .attr("placeholder", "Search users...")?
        .class("form-input")
        .build();
    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
        html_input.set_value(&friends.search_query());
    }
    {
        let vm = ctx.panel_vm.clone();
        on_input_value(&input, move |query| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.search(&query).await;
            });
        })?;
    }
    append_child(&search_section, &input)?;

    let results = ElementBuilder::new("div")?.id(RESULTS_ID)?.class("search-results").build();
    fill_search_results(ctx, &results)?;
    append_child(&search_section, &results)?;
    append_child(&panel, &search_section)?;

    // Solicitudes + amigos
    let lists = ElementBuilder::new("div")?.id(LISTS_ID)?.build();
    fill_lists(ctx, &lists)?;
    append_child(&panel, &lists)?;

    append_child(&overlay, &panel)?;
    Ok(overlay)
}

/// Actualización incremental del panel. `Err` si el panel debe mostrarse y no
/// existe en el DOM (layout sin panel): el llamador hace render completo.
pub fn update_friend_panel(ctx: &AppContext) -> Result<(), JsValue> {
    let open = ctx.state.friends.is_open();
    let Some(overlay) = get_element_by_id(PANEL_ID) else {
        if open {
            return Err(JsValue::from_str("Friend panel not found, needs full render"));
        }
        return Ok(());
    };
    set_hidden(&overlay, !open)?;

    if let Some(user_box) = get_element_by_id(USER_ID) {
        clear_children(&user_box);
        fill_user(ctx, &user_box)?;
    }
    if let Some(results) = get_element_by_id(RESULTS_ID) {
        clear_children(&results);
        fill_search_results(ctx, &results)?;
    }
    if let Some(lists) = get_element_by_id(LISTS_ID) {
        clear_children(&lists);
        fill_lists(ctx, &lists)?;
    }
    Ok(())
}

fn fill_user(ctx: &AppContext, container: &Element) -> Result<(), JsValue> {
    let Some(user) = ctx.state.session.user() else {
        return Ok(());
    };
    append_child(container, &ElementBuilder::new("div")?.class("avatar").build())?;
    let info = ElementBuilder::new("div")?.build();
    append_child(&info, &ElementBuilder::new("p")?.class("strong").text(&user.nick_name).build())?;
    append_child(&info, &ElementBuilder::new("p")?.class("muted").text(&user.email).build())?;
    append_child(container, &info)
}

fn fill_search_results(ctx: &AppContext, container: &Element) -> Result<(), JsValue> {
    for candidate in ctx.state.friends.search_results() {
        append_child(container, &render_candidate(ctx, candidate)?)?;
    }
    Ok(())
}

fn render_candidate(ctx: &AppContext, candidate: User) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("panel-row").build();
    let who = ElementBuilder::new("div")?.class("panel-row-main").build();
    append_child(&who, &ElementBuilder::new("div")?.class("avatar").build())?;
    append_child(&who, &ElementBuilder::new("span")?.text(&candidate.nick_name).build())?;
    append_child(&row, &who)?;

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-small btn-blue")
        .text("Add Friend")
        .build();
    {
        let vm = ctx.panel_vm.clone();
        on_click(&add_btn, move |_| {
            let vm = vm.clone();
            let candidate = candidate.clone();
            spawn_local(async move {
                if let Err(message) = vm.send_invitation(&candidate).await {
                    alert(&message);
                }
            });
        })?;
    }
    append_child(&row, &add_btn)?;
    Ok(row)
}

fn fill_lists(ctx: &AppContext, container: &Element) -> Result<(), JsValue> {
    let friends = &ctx.state.friends;
    let loading = friends.is_loading();
    let requests = friends.requests();
    let entries = friends.friends();

    let requests_section = ElementBuilder::new("div")?.class("friend-panel-section").build();
    append_child(
        &requests_section,
        &ElementBuilder::new("h3")?
            .text(&format!("Friend Requests ({})", requests.len()))
            .build(),
    )?;
    if loading {
        append_child(&requests_section, &render_loading()?)?;
    } else {
        for request in requests {
            append_child(&requests_section, &render_request(ctx, request)?)?;
        }
    }
    append_child(container, &requests_section)?;

    let friends_section = ElementBuilder::new("div")?.class("friend-panel-section").build();
    append_child(
        &friends_section,
        &ElementBuilder::new("h3")?
            .text(&format!("Friends ({})", entries.len()))
            .build(),
    )?;
    if loading {
        append_child(&friends_section, &render_loading()?)?;
    } else {
        for entry in entries {
            append_child(&friends_section, &render_friend(entry)?)?;
        }
    }
    append_child(container, &friends_section)
}

fn render_loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("muted").text("Loading...").build())
}

fn render_request(ctx: &AppContext, request: FriendRequest) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("panel-row").build();
    let info = ElementBuilder::new("div")?.build();
    append_child(&info, &ElementBuilder::new("p")?.class("strong").text(&request.nick_name).build())?;
    append_child(&info, &ElementBuilder::new("p")?.class("muted").text(&request.email).build())?;
    append_child(&row, &info)?;

    let actions = ElementBuilder::new("div")?.class("panel-row-actions").build();
    for (action, label, class) in [
        (FriendAction::Accept, "Accept", "btn-small btn-green"),
        (FriendAction::Reject, "Reject", "btn-small btn-red"),
    ] {
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class(class)
            .text(label)
            .build();
        let vm = ctx.panel_vm.clone();
        let nickname = request.nick_name.clone();
        on_click(&button, move |_| {
            let vm = vm.clone();
            let nickname = nickname.clone();
            spawn_local(async move {
                vm.respond_to_request(action, &nickname).await;
            });
        })?;
        append_child(&actions, &button)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}

fn render_friend(entry: FriendEntry) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("panel-row").build();
    append_child(&row, &ElementBuilder::new("div")?.class("avatar avatar-small").build())?;
    let info = ElementBuilder::new("div")?.build();
    append_child(&info, &ElementBuilder::new("p")?.class("strong").text(&entry.nick_name).build())?;
    append_child(&info, &ElementBuilder::new("p")?.class("muted").text(&entry.email).build())?;
    append_child(&row, &info)?;
    Ok(row)
}
