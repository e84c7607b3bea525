use std::process::Command;

/// Exposes the newest release tag as `GIT_TAG` for the footer version label.
/// Builds outside a git checkout fall back to the crate version.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
    println!("cargo:rerun-if-env-changed=GIT_TAG");

    if let Some(tag) = release_tag() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}

fn release_tag() -> Option<String> {
    if let Ok(tag) = std::env::var("GIT_TAG") {
        return normalize(&tag);
    }
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0", "--match", "v*"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    normalize(&String::from_utf8(output.stdout).ok()?)
}

fn normalize(raw: &str) -> Option<String> {
    let tag = raw.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}
