//! Effective settings for one invocation.
//!
//! Resolved from CLI flags first, then `QUICKSTRUCT_*` environment
//! variables, then built-in defaults. Nothing is ever written back.

use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_ROOT: &str = "QUICKSTRUCT_ROOT";
pub const ENV_CONFIRM_OVERWRITE: &str = "QUICKSTRUCT_CONFIRM_OVERWRITE";
pub const ENV_EDITOR: &str = "QUICKSTRUCT_EDITOR";
pub const ENV_NO_WAIT: &str = "QUICKSTRUCT_NO_WAIT";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub roots: Vec<String>,
    pub confirm_overwrite: bool,
    pub dry_run: bool,
    pub editor: Option<String>,
    pub no_wait: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Existing workspace directories, first one is the scaffold target.
    pub roots: Vec<PathBuf>,
    pub confirm_overwrite: bool,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Keep progress notifications up for their full duration.
    pub wait: bool,
}

impl Settings {
    /// Resolve against the process environment and working directory.
    pub fn from_env(overrides: SettingsOverrides) -> Self {
        let cwd = env::current_dir().ok();
        Self::resolve(overrides, |key| env::var(key).ok(), cwd.as_deref())
    }

    pub fn resolve(
        overrides: SettingsOverrides,
        lookup: impl Fn(&str) -> Option<String>,
        cwd: Option<&Path>,
    ) -> Self {
        let env_string = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let env_flag = |key: &str| env_string(key).map(|v| is_truthy(&v)).unwrap_or(false);

        let raw_roots: Vec<String> = if !overrides.roots.is_empty() {
            overrides.roots
        } else if let Some(value) = env_string(ENV_ROOT) {
            env::split_paths(&value)
                .map(|p| p.to_string_lossy().into_owned())
                .collect()
        } else {
            cwd.map(|p| vec![p.to_string_lossy().into_owned()])
                .unwrap_or_default()
        };

        let editor = overrides
            .editor
            .or_else(|| env_string(ENV_EDITOR))
            .or_else(|| env_string("VISUAL"))
            .or_else(|| env_string("EDITOR"));

        Self {
            roots: resolve_roots(&raw_roots),
            confirm_overwrite: overrides.confirm_overwrite || env_flag(ENV_CONFIRM_OVERWRITE),
            dry_run: overrides.dry_run,
            editor,
            wait: !(overrides.no_wait || env_flag(ENV_NO_WAIT)),
        }
    }
}

/// Expand `~` and keep only entries that are existing directories.
pub fn resolve_roots(raw: &[String]) -> Vec<PathBuf> {
    raw.iter()
        .map(|r| PathBuf::from(shellexpand::tilde(r).into_owned()))
        .filter(|p| {
            let is_dir = p.is_dir();
            if !is_dir {
                log_status!("workspace", "Ignoring {} (not a directory)", p.display());
            }
            is_dir
        })
        .collect()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes" | "y"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_cwd_and_waiting() {
        let temp = TempDir::new().unwrap();
        let s = Settings::resolve(SettingsOverrides::default(), lookup(&[]), Some(temp.path()));
        assert_eq!(s.roots, vec![temp.path().to_path_buf()]);
        assert!(s.wait);
        assert!(!s.confirm_overwrite);
        assert_eq!(s.editor, None);
    }

    #[test]
    fn no_cwd_means_no_workspace() {
        let s = Settings::resolve(SettingsOverrides::default(), lookup(&[]), None);
        assert!(s.roots.is_empty());
    }

    #[test]
    fn flag_roots_win_over_env_root() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let overrides = SettingsOverrides {
            roots: vec![a.path().display().to_string()],
            ..Default::default()
        };
        let s = Settings::resolve(
            overrides,
            lookup(&[(ENV_ROOT, &b.path().display().to_string())]),
            None,
        );
        assert_eq!(s.roots, vec![a.path().to_path_buf()]);
    }

    #[test]
    fn env_root_used_without_flags() {
        let b = TempDir::new().unwrap();
        let s = Settings::resolve(
            SettingsOverrides::default(),
            lookup(&[(ENV_ROOT, &b.path().display().to_string())]),
            None,
        );
        assert_eq!(s.roots, vec![b.path().to_path_buf()]);
    }

    #[test]
    fn missing_roots_are_dropped() {
        let roots = resolve_roots(&["/definitely/not/here/quickstruct".to_string()]);
        assert!(roots.is_empty());
    }

    #[test]
    fn editor_precedence() {
        let s = Settings::resolve(
            SettingsOverrides::default(),
            lookup(&[("EDITOR", "vim"), ("VISUAL", "code -r")]),
            None,
        );
        assert_eq!(s.editor.as_deref(), Some("code -r"));

        let s = Settings::resolve(
            SettingsOverrides::default(),
            lookup(&[("EDITOR", "vim"), (ENV_EDITOR, "subl")]),
            None,
        );
        assert_eq!(s.editor.as_deref(), Some("subl"));

        let overrides = SettingsOverrides {
            editor: Some("zed".to_string()),
            ..Default::default()
        };
        let s = Settings::resolve(overrides, lookup(&[(ENV_EDITOR, "subl")]), None);
        assert_eq!(s.editor.as_deref(), Some("zed"));
    }

    #[test]
    fn env_flags_are_truthy_strings() {
        let s = Settings::resolve(
            SettingsOverrides::default(),
            lookup(&[(ENV_CONFIRM_OVERWRITE, "yes"), (ENV_NO_WAIT, "1")]),
            None,
        );
        assert!(s.confirm_overwrite);
        assert!(!s.wait);

        let s = Settings::resolve(
            SettingsOverrides::default(),
            lookup(&[(ENV_CONFIRM_OVERWRITE, "off")]),
            None,
        );
        assert!(!s.confirm_overwrite);
    }
}
