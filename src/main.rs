mod directory;
mod ipc;
mod logging;
mod model;
mod nav;
mod screen;
mod seed;
mod session;
mod store;

use std::io::{self, BufRead, Write};

use log::warn;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let _logger = logging::init()?;

    let mut state = ipc::AppState::seeded();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't echo an id we never parsed; reply without one.
                warn!("unparseable request line: {e}");
                let resp = json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                });
                let _ = writeln!(stdout, "{resp}");
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    Ok(())
}
