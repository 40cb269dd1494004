use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::utils::log;

/// Outcome of one preflight script
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptStatus {
    Skipped,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScriptOutcome {
    pub(crate) script: PathBuf,
    pub(crate) status: ScriptStatus,
}

/// Run each script with `bash` from `root`. Nothing here stops the build.
pub(crate) fn run_scripts(root: &Path, scripts: &[PathBuf]) -> Vec<ScriptOutcome> {
    scripts
        .iter()
        .map(|script| ScriptOutcome {
            script: script.clone(),
            status: run_one(root, script),
        })
        .collect()
}

fn run_one(root: &Path, script: &Path) -> ScriptStatus {
    if !script.is_file() {
        log::detail(format!("Preflight skipped, {} not found", script.display()));
        return ScriptStatus::Skipped;
    }

    log::info(format!("Preflight: {}", script.display()));
    let result = Command::new("bash")
        .arg(script)
        .current_dir(root)
        .stdin(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => ScriptStatus::Succeeded,
        Ok(status) => {
            let reason = match status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            log::warn(format!("Preflight {} failed: {}", script.display(), reason));
            ScriptStatus::Failed(reason)
        }
        Err(e) => {
            log::warn(format!("Preflight {} could not start: {}", script.display(), e));
            ScriptStatus::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_script_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("scripts/none.sh");
        let outcomes = run_scripts(dir.path(), std::slice::from_ref(&missing));
        assert_eq!(
            outcomes,
            vec![ScriptOutcome {
                script: missing,
                status: ScriptStatus::Skipped
            }]
        );
    }

    #[test]
    fn scripts_run_from_root_and_failures_continue() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ok = dir.path().join("ok.sh");
        let bad = dir.path().join("bad.sh");
        fs::write(&ok, "echo scanned > marker.txt\n").expect("write ok");
        fs::write(&bad, "exit 3\n").expect("write bad");

        let status: Vec<_> = run_scripts(dir.path(), &[bad, ok])
            .into_iter()
            .map(|o| o.status)
            .collect();
        assert_eq!(
            status,
            vec![
                ScriptStatus::Failed("exit code 3".into()),
                ScriptStatus::Succeeded
            ]
        );
        assert!(dir.path().join("marker.txt").exists());
    }
}
