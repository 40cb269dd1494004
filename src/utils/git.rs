use std::path::Path;
use std::process::{Command, Stdio};

/// Short SHA of HEAD for the repository at `dir`, if there is one
pub(crate) fn short_sha(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    if sha.is_empty() {
        None
    } else {
        Some(sha.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_repository_has_no_sha() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A fresh temp dir is not inside a work tree unless TMPDIR is, so only
        // assert on the shape of a successful answer.
        if let Some(sha) = short_sha(dir.path()) {
            assert!(!sha.contains(char::is_whitespace));
        }
    }
}
