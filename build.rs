use std::process::Command;

/// Runs a git command, returning trimmed stdout or `None` when git is
/// unavailable or the command fails.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// `0.3.2` for a clean tree tagged with the package version, otherwise
/// `0.3.2@abc1234 2024-01-15 14:30`. Without git it is the bare version.
fn version_string(version: &str) -> String {
    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]).filter(|h| !h.is_empty()) else {
        return version.to_string();
    };

    let is_dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let tagged = git(&["tag", "--points-at", "HEAD"]).is_some_and(|tags| {
        tags.lines()
            .any(|tag| tag == version || tag.strip_prefix('v') == Some(version))
    });
    if tagged && !is_dirty {
        return version.to_string();
    }

    match git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M"]) {
        Some(date) if !date.is_empty() => format!("{}@{} {}", version, hash, date),
        _ => format!("{}@{}", version, hash),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = version_string(env!("CARGO_PKG_VERSION"));
    println!("cargo:rustc-env=HTML_ATTRIBUTES_VERSION={}", version);
}
