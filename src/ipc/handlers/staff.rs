use log::info;
use serde_json::json;

use crate::ipc::error::{err, ok, store_err, validation};
use crate::ipc::helpers::{bool_param, parse_subjects, school_scope, signed_in, str_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{StaffDraft, StaffPatch, StaffType};
use crate::screen::{Editor, StaffFilter};

fn editor_state(state: &AppState) -> serde_json::Value {
    match state.staff_screen.editor() {
        Editor::Closed => json!({ "mode": "browsing" }),
        Editor::Create => json!({ "mode": "editing", "editor": "create" }),
        Editor::Edit { target_id } => {
            json!({ "mode": "editing", "editor": "edit", "staffId": target_id })
        }
    }
}

/// Current listing: scoped rows through the search box and the
/// teacher/non-teacher dropdown, with the "Showing X of Y" counts.
fn listing(state: &AppState, req: &Request) -> serde_json::Value {
    let (rows, total) = match state.session.school_id() {
        Some(scope) => {
            let rows: Vec<_> = state
                .staff
                .search(scope, state.staff_screen.search_term())
                .into_iter()
                .filter(|s| state.staff_filter.keeps(s.staff_type))
                .collect();
            (rows, state.staff.count(scope))
        }
        None => (Vec::new(), 0),
    };

    let shown = rows.len();
    ok(
        &req.id,
        json!({
            "staff": rows,
            "shown": shown,
            "total": total,
            "searchTerm": state.staff_screen.search_term(),
            "staffType": state.staff_filter.as_str(),
        }),
    )
}

/// The staff type dropdown only ever produces the two known values; anything
/// else is a malformed form submission.
fn staff_type_param(req: &Request) -> Result<Option<StaffType>, serde_json::Value> {
    match str_param(req, "staffType") {
        None => Ok(None),
        Some(raw) => match StaffType::parse(&raw) {
            Some(t) => Ok(Some(t)),
            None => Err(validation(&req.id, "staffType")),
        },
    }
}

/// Subjects may arrive as the raw comma-separated form text or as an
/// already-split array; both normalize to the same list.
fn subjects_param(req: &Request) -> Option<Vec<String>> {
    match req.params.get("subjects") {
        Some(serde_json::Value::String(raw)) => Some(parse_subjects(raw)),
        Some(serde_json::Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
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
    state.staff_screen.set_search_term(&term);
    listing(state, req)
}

fn handle_set_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    let Some(raw) = str_param(req, "staffType") else {
        return err(&req.id, "bad_params", "missing staffType", None);
    };
    let Some(filter) = StaffFilter::parse(&raw) else {
        return validation(&req.id, "staffType");
    };
    state.staff_filter = filter;
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
    state.staff_screen.begin_create();
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
    let Some(staff_id) = str_param(req, "staffId") else {
        return err(&req.id, "bad_params", "missing staffId", None);
    };

    // The edit target must be visible to this screen, i.e. in scope.
    let Some(row) = state.staff.get(&staff_id).filter(|s| s.school_id == scope) else {
        return err(&req.id, "not_found", "staff member not found", None);
    };
    let prefill = json!(row);

    state.staff_screen.begin_edit(&staff_id);
    let mut result = editor_state(state);
    result["staff"] = prefill;
    ok(&req.id, result)
}

fn handle_cancel_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    // Discards form state; the store is never touched on cancel.
    state.staff_screen.close_editor();
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

    match state.staff_screen.editor().clone() {
        Editor::Closed => err(&req.id, "no_editor", "open the staff form first", None),
        Editor::Create => {
            let staff_type = match staff_type_param(req) {
                Ok(t) => t,
                Err(resp) => return resp,
            };
            let draft = StaffDraft {
                first_name: str_param(req, "firstName").unwrap_or_default(),
                last_name: str_param(req, "lastName").unwrap_or_default(),
                email: str_param(req, "email").unwrap_or_default(),
                staff_type: staff_type.unwrap_or_default(),
                department: str_param(req, "department"),
                subjects: subjects_param(req).unwrap_or_default(),
                employee_id: str_param(req, "employeeId").unwrap_or_default(),
            };
            match state.staff.add(&scope, draft) {
                Ok(row) => {
                    state.staff_screen.close_editor();
                    info!("staff created: {} ({})", row.id, row.employee_id);
                    ok(&req.id, json!({ "staff": row }))
                }
                // Failed submits keep the form open.
                Err(e) => store_err(&req.id, e),
            }
        }
        Editor::Edit { target_id } => {
            if state
                .staff
                .get(&target_id)
                .map(|s| s.school_id != scope)
                .unwrap_or(true)
            {
                return err(&req.id, "not_found", "staff member not found", None);
            }
            let staff_type = match staff_type_param(req) {
                Ok(t) => t,
                Err(resp) => return resp,
            };
            let patch = StaffPatch {
                first_name: str_param(req, "firstName"),
                last_name: str_param(req, "lastName"),
                email: str_param(req, "email"),
                staff_type,
                department: str_param(req, "department"),
                subjects: subjects_param(req),
                employee_id: str_param(req, "employeeId"),
            };
            match state.staff.update(&target_id, patch) {
                Ok(row) => {
                    state.staff_screen.close_editor();
                    ok(&req.id, json!({ "staff": row }))
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
    let Some(staff_id) = str_param(req, "staffId") else {
        return err(&req.id, "bad_params", "missing staffId", None);
    };

    // The confirmation dialog's answer travels with the request; declining
    // must not touch the store.
    if !bool_param(req, "confirmed") {
        return ok(&req.id, json!({ "deleted": false }));
    }

    if state
        .staff
        .get(&staff_id)
        .map(|s| s.school_id != scope)
        .unwrap_or(false)
    {
        return err(&req.id, "not_found", "staff member not found", None);
    }

    match state.staff.remove(&staff_id) {
        Ok(()) => {
            info!("staff deleted: {staff_id}");
            ok(&req.id, json!({ "deleted": true }))
        }
        Err(e) => store_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "staff.list" => Some(handle_list(state, req)),
        "staff.search" => Some(handle_search(state, req)),
        "staff.setFilter" => Some(handle_set_filter(state, req)),
        "staff.beginCreate" => Some(handle_begin_create(state, req)),
        "staff.beginEdit" => Some(handle_begin_edit(state, req)),
        "staff.cancelEdit" => Some(handle_cancel_edit(state, req)),
        "staff.editor" => Some(handle_editor(state, req)),
        "staff.save" => Some(handle_save(state, req)),
        "staff.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
