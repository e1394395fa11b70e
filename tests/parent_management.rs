use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_schooladmind");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn schooladmind");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn error_code(value: &serde_json::Value) -> &str {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn sign_in_school1(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>) {
    let _ = request_ok(
        stdin,
        reader,
        "signin",
        "auth.signIn",
        json!({ "email": "admin@kingdomheritage.edu", "password": "admin123" }),
    );
}

#[test]
fn phone_is_matched_as_a_literal_substring() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    // Seeded parent-1 has phone "(555) 111-2222".
    let found = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "parents.search",
        json!({ "term": "111-2222" }),
    );
    assert_eq!(found["shown"], json!(1));
    assert_eq!(found["parents"][0]["id"], json!("parent-1"));

    // No digit normalization: a differently punctuated query misses.
    let miss = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "parents.search",
        json!({ "term": "5551112222" }),
    );
    assert_eq!(miss["shown"], json!(0));

    // Name matching stays case-insensitive.
    let found = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "parents.search",
        json!({ "term": "COOPER" }),
    );
    assert_eq!(found["shown"], json!(1));
}

#[test]
fn create_requires_phone_and_links_children() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let _ = request_ok(&mut stdin, &mut reader, "1", "parents.beginCreate", json!({}));
    let resp = request(
        &mut stdin,
        &mut reader,
        "2",
        "parents.save",
        json!({
            "firstName": "Nina",
            "lastName": "Reyes",
            "email": "nina@email.com"
        }),
    );
    assert_eq!(error_code(&resp), "validation_error");
    assert_eq!(resp["error"]["details"]["field"], json!("phone"));

    let saved = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "parents.save",
        json!({
            "firstName": "Nina",
            "lastName": "Reyes",
            "email": "nina@email.com",
            "phone": "(555) 444-5555",
            "childrenIds": ["student-1"]
        }),
    );
    let row = &saved["parent"];
    assert_eq!(row["schoolId"], json!("school-1"));
    assert_eq!(row["role"], json!("parent"));
    assert!(row.get("occupation").is_none());
    let nina_id = row["id"].as_str().expect("id").to_string();

    // student-1 now lists the new guardian alongside parent-1.
    let students = request_ok(&mut stdin, &mut reader, "4", "students.list", json!({}));
    assert_eq!(
        students["students"][0]["parentIds"],
        json!(["parent-1", nina_id])
    );
}

#[test]
fn update_reconciles_children_and_keeps_optionals() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let editor = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "parents.beginEdit",
        json!({ "parentId": "parent-1" }),
    );
    assert_eq!(editor["parent"]["occupation"], json!("Engineer"));

    let saved = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "parents.save",
        json!({ "occupation": "Architect", "childrenIds": [] }),
    );
    let row = &saved["parent"];
    assert_eq!(row["occupation"], json!("Architect"));
    assert_eq!(row["childrenIds"], json!([]));
    assert_eq!(row["phone"], json!("(555) 111-2222"));

    // The student no longer references the parent.
    let students = request_ok(&mut stdin, &mut reader, "3", "students.list", json!({}));
    assert_eq!(students["students"][0]["parentIds"], json!([]));
}

#[test]
fn delete_scrubs_guardian_references() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let deleted = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "parents.delete",
        json!({ "parentId": "parent-1", "confirmed": true }),
    );
    assert_eq!(deleted["deleted"], json!(true));

    let listing = request_ok(&mut stdin, &mut reader, "2", "parents.list", json!({}));
    assert_eq!(listing["total"], json!(0));

    let students = request_ok(&mut stdin, &mut reader, "3", "students.list", json!({}));
    assert_eq!(students["students"][0]["parentIds"], json!([]));

    let resp = request(
        &mut stdin,
        &mut reader,
        "4",
        "parents.delete",
        json!({ "parentId": "parent-1", "confirmed": true }),
    );
    assert_eq!(error_code(&resp), "not_found");
}
