use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every artifact the CLI writes.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, library
/// version, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    crate::io::ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "giftwrap": giftwrap::VERSION,
        "tag": payload.tag,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or(OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run
/// time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/output/hull.json"));
        assert_eq!(derived, Path::new("/tmp/output/hull.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_tag_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"eps": 1e-9})).with_tag(Some("square".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "square");
        assert_eq!(parsed["params"]["eps"], 1e-9);
        assert_eq!(parsed["giftwrap"], giftwrap::VERSION);
    }
}
