use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::signed_in;
use crate::ipc::types::{AppState, Request};

// The attendance tile is a fixed figure until attendance tracking exists.
const ATTENDANCE_RATE: &str = "94.5%";

fn handle_overview(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = signed_in(state, req) {
        return resp;
    }

    let (staff_count, student_count, parent_count, school_name) = match state.session.school_id() {
        Some(scope) => (
            state.staff.count(scope),
            state.students.count(scope),
            state.parents.count(scope),
            state
                .schools
                .iter()
                .find(|s| s.id == scope)
                .map(|s| s.name.clone()),
        ),
        None => (0, 0, 0, None),
    };

    ok(
        &req.id,
        json!({
            "staffCount": staff_count,
            "studentCount": student_count,
            "parentCount": parent_count,
            "attendanceRate": ATTENDANCE_RATE,
            "schoolName": school_name,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.overview" => Some(handle_overview(state, req)),
        _ => None,
    }
}
