use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{signed_in, str_param};
use crate::ipc::types::{AppState, Request};
use crate::nav::{tabs_for, Tab};

fn tab_json(tab: &Tab) -> serde_json::Value {
    json!({
        "id": tab.id,
        "label": tab.label,
        "title": tab.title,
        "implemented": tab.implemented,
    })
}

fn handle_tabs(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let tabs: Vec<_> = tabs_for(profile.role).into_iter().map(tab_json).collect();
    ok(&req.id, json!({ "tabs": tabs }))
}

fn handle_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let Some(tab_id) = str_param(req, "tab") else {
        return err(&req.id, "bad_params", "missing tab", None);
    };
    match state.nav.select(profile.role, &tab_id) {
        Some(tab) => ok(&req.id, tab_json(tab)),
        None => err(&req.id, "bad_params", format!("unknown tab: {tab_id}"), None),
    }
}

fn handle_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    ok(&req.id, tab_json(state.nav.current()))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "nav.tabs" => Some(handle_tabs(state, req)),
        "nav.select" => Some(handle_select(state, req)),
        "nav.current" => Some(handle_current(state, req)),
        _ => None,
    }
}
