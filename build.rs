//! Stamps the binary with the version details printed by `geocoder about`.
//!
//! Source tarballs have no `.git`; set `GEOCODER_GIT_HASH` there to name the commit.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const UNKNOWN: &str = "unknown";

fn main() {
    let built_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let commit = std::env::var("GEOCODER_GIT_HASH")
        .ok()
        .or_else(|| command_output("git", &["rev-parse", "--short", "HEAD"]));

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let toolchain = command_output(&rustc, &["--version"]);

    stamp("BUILD_TIME", &built_at.to_string());
    stamp("GIT_HASH", commit.as_deref().unwrap_or(UNKNOWN));
    stamp("RUST_VERSION", toolchain.as_deref().unwrap_or(UNKNOWN));

    println!("cargo:rerun-if-env-changed=GEOCODER_GIT_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn stamp(name: &str, value: &str) {
    println!("cargo:rustc-env={}={}", name, value);
}

/// Trimmed stdout of a successful run
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
