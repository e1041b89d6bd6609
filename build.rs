//! Embeds the commit hash and build date shown by `--version`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::Command;

/// `BUILD_COMMIT` from CI, else the short hash of `HEAD`.
fn commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    let hash = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok());
    match hash.as_deref().map(str::trim) {
        Some(hash) if !hash.is_empty() => hash.to_string(),
        _ => "unknown".to_string(),
    }
}

fn date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit(),
        date()
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)?;

    for watched in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={}", watched);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
