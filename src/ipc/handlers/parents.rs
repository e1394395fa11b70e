use log::info;
use serde_json::json;

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::{bool_param, id_list_param, school_scope, signed_in, str_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{ParentDraft, ParentPatch};
use crate::screen::Editor;
use crate::store::{link_children, unlink_parent};

fn editor_state(state: &AppState) -> serde_json::Value {
    match state.parent_screen.editor() {
        Editor::Closed => json!({ "mode": "browsing" }),
        Editor::Create => json!({ "mode": "editing", "editor": "create" }),
        Editor::Edit { target_id } => {
            json!({ "mode": "editing", "editor": "edit", "parentId": target_id })
        }
    }
}

fn listing(state: &AppState, req: &Request) -> serde_json::Value {
    let (rows, total) = match state.session.school_id() {
        Some(scope) => (
            state
                .parents
                .search(scope, state.parent_screen.search_term()),
            state.parents.count(scope),
        ),
        None => (Vec::new(), 0),
    };

    let shown = rows.len();
    ok(
        &req.id,
        json!({
            "parents": rows,
            "shown": shown,
            "total": total,
            "searchTerm": state.parent_screen.search_term(),
        }),
    )
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    listing(state, req)
}

fn handle_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    let term = str_param(req, "term").unwrap_or_default();
    state.parent_screen.set_search_term(&term);
    listing(state, req)
}

fn handle_begin_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    if let Err(resp) = school_scope(&profile, req) {
        return resp;
    }
    state.parent_screen.begin_create();
    ok(&req.id, editor_state(state))
}

fn handle_begin_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let scope = match school_scope(&profile, req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let Some(parent_id) = str_param(req, "parentId") else {
        return err(&req.id, "bad_params", "missing parentId", None);
    };

    let Some(row) = state
        .parents
        .get(&parent_id)
        .filter(|p| p.school_id == scope)
    else {
        return err(&req.id, "not_found", "parent not found", None);
    };
    let prefill = json!(row);

    state.parent_screen.begin_edit(&parent_id);
    let mut result = editor_state(state);
    result["parent"] = prefill;
    ok(&req.id, result)
}

fn handle_cancel_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    state.parent_screen.close_editor();
    ok(&req.id, editor_state(state))
}

fn handle_editor(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    ok(&req.id, editor_state(state))
}

fn handle_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let scope = match school_scope(&profile, req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.parent_screen.editor().clone() {
        Editor::Closed => err(&req.id, "no_editor", "open the parent form first", None),
        Editor::Create => {
            let draft = ParentDraft {
                first_name: str_param(req, "firstName").unwrap_or_default(),
                last_name: str_param(req, "lastName").unwrap_or_default(),
                email: str_param(req, "email").unwrap_or_default(),
                children_ids: id_list_param(req, "childrenIds").unwrap_or_default(),
                occupation: str_param(req, "occupation"),
                phone: str_param(req, "phone").unwrap_or_default(),
            };
            match state.parents.add(&scope, draft) {
                Ok(row) => {
                    // Keep the children's guardian lists in step.
                    link_children(&mut state.students, &row.id, &row.children_ids);
                    state.parent_screen.close_editor();
                    info!("parent created: {}", row.id);
                    ok(&req.id, json!({ "parent": row }))
                }
                Err(e) => store_err(&req.id, e),
            }
        }
        Editor::Edit { target_id } => {
            if state
                .parents
                .get(&target_id)
                .map(|p| p.school_id != scope)
                .unwrap_or(true)
            {
                return err(&req.id, "not_found", "parent not found", None);
            }
            let children_changed = req.params.get("childrenIds").is_some();
            let patch = ParentPatch {
                first_name: str_param(req, "firstName"),
                last_name: str_param(req, "lastName"),
                email: str_param(req, "email"),
                children_ids: id_list_param(req, "childrenIds"),
                occupation: str_param(req, "occupation"),
                phone: str_param(req, "phone"),
            };
            match state.parents.update(&target_id, patch) {
                Ok(row) => {
                    if children_changed {
                        unlink_parent(&mut state.students, &row.id);
                        link_children(&mut state.students, &row.id, &row.children_ids);
                    }
                    state.parent_screen.close_editor();
                    ok(&req.id, json!({ "parent": row }))
                }
                Err(e) => store_err(&req.id, e),
            }
        }
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let profile = match signed_in(state, req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let scope = match school_scope(&profile, req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let Some(parent_id) = str_param(req, "parentId") else {
        return err(&req.id, "bad_params", "missing parentId", None);
    };

    if !bool_param(req, "confirmed") {
        return ok(&req.id, json!({ "deleted": false }));
    }

    if state
        .parents
        .get(&parent_id)
        .map(|p| p.school_id != scope)
        .unwrap_or(false)
    {
        return err(&req.id, "not_found", "parent not found", None);
    }

    match state.parents.remove(&parent_id) {
        Ok(()) => {
            unlink_parent(&mut state.students, &parent_id);
            info!("parent deleted: {parent_id}");
            ok(&req.id, json!({ "deleted": true }))
        }
        Err(e) => store_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "parents.list" => Some(handle_list(state, req)),
        "parents.search" => Some(handle_search(state, req)),
        "parents.beginCreate" => Some(handle_begin_create(state, req)),
        "parents.beginEdit" => Some(handle_begin_edit(state, req)),
        "parents.cancelEdit" => Some(handle_cancel_edit(state, req)),
        "parents.editor" => Some(handle_editor(state, req)),
        "parents.save" => Some(handle_save(state, req)),
        "parents.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
