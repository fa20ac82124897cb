use chrono::Local;
use std::process::Command;

fn main() {
    // Short git hash for the version string
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let git_hash = match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    };

    // Modified tracked files get a timestamp so dirty builds are identifiable
    let dirty = Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false);

    let build_hash = if dirty {
        let timestamp = Local::now().format("%Y%m%d-%H%M%S");
        format!("{}-dirty-{}", git_hash, timestamp)
    } else {
        git_hash
    };

    println!("cargo:rustc-env=BUILD_HASH={}", build_hash);

    // .git lives at the workspace root, two levels up from this crate
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
