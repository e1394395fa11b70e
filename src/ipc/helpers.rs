use crate::ipc::error::err;
use crate::ipc::types::{AppState, Request};
use crate::model::Profile;

/// Auth gate shared by every method below `auth.*`. The `Err` side is a
/// ready-to-send response.
pub fn signed_in(state: &AppState, req: &Request) -> Result<Profile, serde_json::Value> {
    match state.session.profile() {
        Some(profile) => Ok(profile.clone()),
        None => Err(err(&req.id, "not_authenticated", "sign in first", None)),
    }
}

/// School scope required by every store mutation. The super admin carries no
/// scope and cannot create or touch school records.
pub fn school_scope(profile: &Profile, req: &Request) -> Result<String, serde_json::Value> {
    match &profile.school_id {
        Some(school_id) => Ok(school_id.clone()),
        None => Err(err(
            &req.id,
            "no_school",
            "this account has no school scope",
            None,
        )),
    }
}

pub fn str_param(req: &Request, key: &str) -> Option<String> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

pub fn bool_param(req: &Request, key: &str) -> bool {
    req.params
        .get(key)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Id-list params (`parentIds`, `childrenIds`) arrive as JSON string arrays.
/// Non-string elements are dropped rather than rejected.
pub fn id_list_param(req: &Request, key: &str) -> Option<Vec<String>> {
    req.params.get(key).and_then(|v| v.as_array()).map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect()
    })
}

/// The subjects input is comma-separated free text; it is split, trimmed and
/// emptied-out here at the form boundary. The store only ever sees the list.
pub fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_subjects;

    #[test]
    fn subjects_text_is_split_trimmed_and_filtered() {
        assert_eq!(
            parse_subjects("Algebra, Geometry ,  , Calculus"),
            vec!["Algebra", "Geometry", "Calculus"]
        );
        assert!(parse_subjects("").is_empty());
        assert!(parse_subjects(" , ,").is_empty());
    }
}
