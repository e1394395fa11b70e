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
fn save_against_a_vanished_target_reports_not_found() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "staff.beginEdit",
        json!({ "staffId": "staff-2" }),
    );

    // The row disappears while the form is open, as in a second tab.
    let deleted = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "staff.delete",
        json!({ "staffId": "staff-2", "confirmed": true }),
    );
    assert_eq!(deleted["deleted"], json!(true));

    let resp = request(
        &mut stdin,
        &mut reader,
        "3",
        "staff.save",
        json!({ "department": "Grounds" }),
    );
    assert_eq!(error_code(&resp), "not_found");

    // The banner leaves the form open; cancel is the way out.
    let editor = request_ok(&mut stdin, &mut reader, "4", "staff.editor", json!({}));
    assert_eq!(editor["mode"], json!("editing"));
    let _ = request_ok(&mut stdin, &mut reader, "5", "staff.cancelEdit", json!({}));
}

#[test]
fn each_screen_keeps_its_own_editor_and_term() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let _ = request_ok(&mut stdin, &mut reader, "1", "staff.beginCreate", json!({}));
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "students.search",
        json!({ "term": "alice" }),
    );

    // The student screen browsing state is untouched by the staff modal.
    let editor = request_ok(&mut stdin, &mut reader, "3", "students.editor", json!({}));
    assert_eq!(editor["mode"], json!("browsing"));
    let editor = request_ok(&mut stdin, &mut reader, "4", "staff.editor", json!({}));
    assert_eq!(editor["mode"], json!("editing"));

    // And the staff search box did not inherit the student term.
    let listing = request_ok(&mut stdin, &mut reader, "5", "staff.list", json!({}));
    assert_eq!(listing["searchTerm"], json!(""));

    let _ = request_ok(&mut stdin, &mut reader, "6", "staff.cancelEdit", json!({}));
}

#[test]
fn search_keystrokes_do_not_close_an_open_form() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in_school1(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "staff.beginEdit",
        json!({ "staffId": "staff-1" }),
    );

    // Each keystroke re-runs the search; none of them change the mode.
    for (id, term) in [("2", "w"), ("3", "wi"), ("4", "wil")] {
        let listing = request_ok(
            &mut stdin,
            &mut reader,
            id,
            "staff.search",
            json!({ "term": term }),
        );
        assert_eq!(listing["searchTerm"], json!(term));
    }

    let editor = request_ok(&mut stdin, &mut reader, "5", "staff.editor", json!({}));
    assert_eq!(editor["mode"], json!("editing"));
    assert_eq!(editor["staffId"], json!("staff-1"));
}
