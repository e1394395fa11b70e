use log::info;
use serde_json::json;

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::{bool_param, id_list_param, school_scope, signed_in, str_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{StudentDraft, StudentPatch};
use crate::screen::Editor;
use crate::store::{link_guardians, unlink_student};

fn editor_state(state: &AppState) -> serde_json::Value {
    match state.student_screen.editor() {
        Editor::Closed => json!({ "mode": "browsing" }),
        Editor::Create => json!({ "mode": "editing", "editor": "create" }),
        Editor::Edit { target_id } => {
            json!({ "mode": "editing", "editor": "edit", "studentId": target_id })
        }
    }
}

fn listing(state: &AppState, req: &Request) -> serde_json::Value {
    let (rows, total) = match state.session.school_id() {
        Some(scope) => (
            state
                .students
                .search(scope, state.student_screen.search_term()),
            state.students.count(scope),
        ),
        None => (Vec::new(), 0),
    };

    let shown = rows.len();
    ok(
        &req.id,
        json!({
            "students": rows,
            "shown": shown,
            "total": total,
            "searchTerm": state.student_screen.search_term(),
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
    state.student_screen.set_search_term(&term);
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
    state.student_screen.begin_create();
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
    let Some(student_id) = str_param(req, "studentId") else {
        return err(&req.id, "bad_params", "missing studentId", None);
    };

    let Some(row) = state
        .students
        .get(&student_id)
        .filter(|s| s.school_id == scope)
    else {
        return err(&req.id, "not_found", "student not found", None);
    };
    let prefill = json!(row);

    state.student_screen.begin_edit(&student_id);
    let mut result = editor_state(state);
    result["student"] = prefill;
    ok(&req.id, result)
}

fn handle_cancel_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }
    state.student_screen.close_editor();
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

    match state.student_screen.editor().clone() {
        Editor::Closed => err(&req.id, "no_editor", "open the student form first", None),
        Editor::Create => {
            let draft = StudentDraft {
                first_name: str_param(req, "firstName").unwrap_or_default(),
                last_name: str_param(req, "lastName").unwrap_or_default(),
                email: str_param(req, "email").unwrap_or_default(),
                student_id: str_param(req, "studentId").unwrap_or_default(),
                grade: str_param(req, "grade").unwrap_or_default(),
                parent_ids: id_list_param(req, "parentIds").unwrap_or_default(),
                date_of_birth: str_param(req, "dateOfBirth").unwrap_or_default(),
                emergency_contact: str_param(req, "emergencyContact").unwrap_or_default(),
            };
            match state.students.add(&scope, draft) {
                Ok(row) => {
                    // Keep the guardians' child lists in step.
                    link_guardians(&mut state.parents, &row.id, &row.parent_ids);
                    state.student_screen.close_editor();
                    info!("student created: {} ({})", row.id, row.student_id);
                    ok(&req.id, json!({ "student": row }))
                }
                Err(e) => store_err(&req.id, e),
            }
        }
        Editor::Edit { target_id } => {
            if state
                .students
                .get(&target_id)
                .map(|s| s.school_id != scope)
                .unwrap_or(true)
            {
                return err(&req.id, "not_found", "student not found", None);
            }
            let guardians_changed = req.params.get("parentIds").is_some();
            let patch = StudentPatch {
                first_name: str_param(req, "firstName"),
                last_name: str_param(req, "lastName"),
                email: str_param(req, "email"),
                student_id: str_param(req, "studentId"),
                grade: str_param(req, "grade"),
                parent_ids: id_list_param(req, "parentIds"),
                date_of_birth: str_param(req, "dateOfBirth"),
                emergency_contact: str_param(req, "emergencyContact"),
            };
            match state.students.update(&target_id, patch) {
                Ok(row) => {
                    if guardians_changed {
                        // Reconcile: exactly the new guardians reference
                        // this student afterwards.
                        unlink_student(&mut state.parents, &row.id);
                        link_guardians(&mut state.parents, &row.id, &row.parent_ids);
                    }
                    state.student_screen.close_editor();
                    ok(&req.id, json!({ "student": row }))
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
    let Some(student_id) = str_param(req, "studentId") else {
        return err(&req.id, "bad_params", "missing studentId", None);
    };

    if !bool_param(req, "confirmed") {
        return ok(&req.id, json!({ "deleted": false }));
    }

    if state
        .students
        .get(&student_id)
        .map(|s| s.school_id != scope)
        .unwrap_or(false)
    {
        return err(&req.id, "not_found", "student not found", None);
    }

    match state.students.remove(&student_id) {
        Ok(()) => {
            unlink_student(&mut state.parents, &student_id);
            info!("student deleted: {student_id}");
            ok(&req.id, json!({ "deleted": true }))
        }
        Err(e) => store_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        "students.search" => Some(handle_search(state, req)),
        "students.beginCreate" => Some(handle_begin_create(state, req)),
        "students.beginEdit" => Some(handle_begin_edit(state, req)),
        "students.cancelEdit" => Some(handle_cancel_edit(state, req)),
        "students.editor" => Some(handle_editor(state, req)),
        "students.save" => Some(handle_save(state, req)),
        "students.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
