use log::warn;
use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::str_param;
use crate::ipc::types::{AppState, Request};

fn handle_sign_in(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(email) = str_param(req, "email") else {
        return err(&req.id, "bad_params", "missing email", None);
    };
    let Some(password) = str_param(req, "password") else {
        return err(&req.id, "bad_params", "missing password", None);
    };

    match state.session.sign_in(&state.directory, &email, &password) {
        Ok(profile) => {
            state.reset_screens();
            ok(&req.id, json!({ "user": profile }))
        }
        Err(auth_err) => {
            warn!("rejected sign-in for {email}");
            // One generic message for both halves of the pair.
            err(&req.id, "invalid_credentials", auth_err.to_string(), None)
        }
    }
}

fn handle_sign_out(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.session.sign_out();
    state.reset_screens();
    ok(&req.id, json!({}))
}

fn handle_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    match state.session.profile() {
        Some(profile) => ok(&req.id, json!({ "user": profile })),
        None => ok(&req.id, json!({ "user": null })),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "auth.signIn" => Some(handle_sign_in(state, req)),
        "auth.signOut" => Some(handle_sign_out(state, req)),
        "auth.current" => Some(handle_current(state, req)),
        _ => None,
    }
}
