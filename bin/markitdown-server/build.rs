use std::env;
use std::process::Command;

fn main() {
    // Cargo always sets RUSTC for build scripts; fall back to PATH lookup.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=MARKITDOWN_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
