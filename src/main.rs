//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local port for previewing the background.

use std::process::{Command, ExitCode};
use std::io;

const PORT: &str = "8000";

fn build_pkg() -> io::Result<bool> {
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()?;
    Ok(status.success())
}

fn main() -> ExitCode {
    println!("Building WASM pkg …");
    match build_pkg() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("wasm-pack finished with errors.");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Install it from https://rustwasm.github.io/wasm-pack/; serving whatever is already in static/pkg.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{PORT} (Ctrl-C to quit) …");
    match Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .status()
    {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            ExitCode::FAILURE
        }
    }
}
