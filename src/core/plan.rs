//! Planned filesystem writes for one section.
//!
//! Nothing touches the disk until every prompt has resolved and `apply`
//! is called. A failed write stops the plan; earlier files stay on disk.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::template::{self, SectionContext};
use crate::utils::io;

pub const SECTIONS_DIR: &str = "sections";
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Stylesheet,
    Script,
    Template,
}

impl FileKind {
    /// Title of the progress notification shown after the file is opened.
    pub fn notification(&self, slug: &str) -> String {
        match self {
            FileKind::Stylesheet => format!("CSS {} File created and linked in liquid", slug),
            FileKind::Script => format!("Js {} File created and linked in liquid", slug),
            FileKind::Template => format!("Liquid File {} Created", slug),
        }
    }

    pub fn display_duration(&self) -> Duration {
        match self {
            FileKind::Stylesheet | FileKind::Script => Duration::from_millis(200),
            FileKind::Template => Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub kind: FileKind,
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenFile {
    pub kind: FileKind,
    pub path: String,
    pub bytes: usize,
    pub overwritten: bool,
}

#[derive(Debug, Clone)]
pub struct WritePlan {
    dirs: Vec<PathBuf>,
    writes: Vec<PlannedWrite>,
}

impl WritePlan {
    /// Writes in feedback order: stylesheet, script, template.
    pub fn for_section(root: &Path, ctx: &SectionContext) -> Self {
        let sections = root.join(SECTIONS_DIR);
        let assets = root.join(ASSETS_DIR);
        let mut writes = Vec::new();

        if ctx.stylesheet.creates_asset() {
            writes.push(PlannedWrite {
                kind: FileKind::Stylesheet,
                path: assets.join(ctx.stylesheet_file()),
                contents: String::new(),
            });
        }

        if ctx.script.creates_asset() {
            writes.push(PlannedWrite {
                kind: FileKind::Script,
                path: assets.join(ctx.script_file()),
                contents: String::new(),
            });
        }

        writes.push(PlannedWrite {
            kind: FileKind::Template,
            path: sections.join(ctx.template_file()),
            contents: template::render(ctx),
        });

        Self {
            dirs: vec![sections, assets],
            writes,
        }
    }

    pub fn writes(&self) -> &[PlannedWrite] {
        &self.writes
    }

    /// Targets that already exist and would be replaced.
    pub fn existing(&self) -> Vec<&PlannedWrite> {
        self.writes.iter().filter(|w| w.path.exists()).collect()
    }

    /// Describe the plan without writing anything.
    pub fn preview(&self) -> Vec<WrittenFile> {
        self.writes
            .iter()
            .map(|w| WrittenFile {
                kind: w.kind,
                path: w.path.display().to_string(),
                bytes: w.contents.len(),
                overwritten: w.path.exists(),
            })
            .collect()
    }

    pub fn apply(&self) -> Result<Vec<WrittenFile>> {
        for dir in &self.dirs {
            io::ensure_dir(dir)?;
        }

        let mut written: Vec<WrittenFile> = Vec::with_capacity(self.writes.len());
        for write in &self.writes {
            let overwritten = write.path.exists();
            io::write_file(&write.path, &write.contents).map_err(|err| {
                err.with_written(written.iter().map(|f| f.path.clone()).collect())
            })?;

            log_status!("write", "{}", write.path.display());
            written.push(WrittenFile {
                kind: write.kind,
                path: write.path.display().to_string(),
                bytes: write.contents.len(),
                overwritten,
            });
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{ScriptStrategy, StylesheetStrategy};
    use std::fs;
    use tempfile::TempDir;

    fn ctx(stylesheet: StylesheetStrategy, script: ScriptStrategy) -> SectionContext {
        SectionContext::new("hero", stylesheet, script)
    }

    #[test]
    fn plan_orders_assets_before_template() {
        let plan = WritePlan::for_section(
            Path::new("/theme"),
            &ctx(StylesheetStrategy::Lazy, ScriptStrategy::Defer),
        );
        let kinds: Vec<_> = plan.writes().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![FileKind::Stylesheet, FileKind::Script, FileKind::Template]
        );
        assert_eq!(
            plan.writes()[0].path,
            Path::new("/theme/assets/hero-stylesheet.css")
        );
        assert_eq!(
            plan.writes()[1].path,
            Path::new("/theme/assets/hero-javascript.js")
        );
        assert_eq!(plan.writes()[2].path, Path::new("/theme/sections/hero.liquid"));
    }

    #[test]
    fn skipped_assets_are_not_planned() {
        let plan = WritePlan::for_section(
            Path::new("/theme"),
            &ctx(StylesheetStrategy::Skip, ScriptStrategy::Skip),
        );
        assert_eq!(plan.writes().len(), 1);
        assert_eq!(plan.writes()[0].kind, FileKind::Template);
    }

    #[test]
    fn apply_creates_dirs_and_empty_assets() {
        let temp = TempDir::new().unwrap();
        let plan = WritePlan::for_section(
            temp.path(),
            &ctx(StylesheetStrategy::Preload, ScriptStrategy::Async),
        );

        let written = plan.apply().unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|f| !f.overwritten));
        let css = fs::read_to_string(temp.path().join("assets/hero-stylesheet.css")).unwrap();
        let js = fs::read_to_string(temp.path().join("assets/hero-javascript.js")).unwrap();
        assert!(css.is_empty());
        assert!(js.is_empty());
        let liquid = fs::read_to_string(temp.path().join("sections/hero.liquid")).unwrap();
        assert!(liquid.contains("<div class=\"hero\">"));
    }

    #[test]
    fn apply_creates_both_dirs_even_without_assets() {
        let temp = TempDir::new().unwrap();
        let plan = WritePlan::for_section(
            temp.path(),
            &ctx(StylesheetStrategy::Skip, ScriptStrategy::Skip),
        );

        plan.apply().unwrap();

        assert!(temp.path().join("assets").is_dir());
        assert!(temp.path().join("sections").is_dir());
    }

    #[test]
    fn apply_reports_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sections")).unwrap();
        fs::write(temp.path().join("sections/hero.liquid"), "old").unwrap();
        let plan = WritePlan::for_section(
            temp.path(),
            &ctx(StylesheetStrategy::Skip, ScriptStrategy::Skip),
        );

        assert_eq!(plan.existing().len(), 1);
        let written = plan.apply().unwrap();
        assert!(written[0].overwritten);
    }

    #[test]
    fn failed_write_lists_files_already_written() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("assets")).unwrap();
        // A directory where the script file should go makes that write fail.
        fs::create_dir_all(temp.path().join("assets/hero-javascript.js")).unwrap();
        let plan = WritePlan::for_section(
            temp.path(),
            &ctx(StylesheetStrategy::Lazy, ScriptStrategy::Defer),
        );

        let err = plan.apply().unwrap_err();

        assert_eq!(err.code.as_str(), "file.write_failed");
        let written = err.details["written"].as_array().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].as_str().unwrap().ends_with("hero-stylesheet.css"));
        assert!(!temp.path().join("sections/hero.liquid").exists());
    }

    #[test]
    fn notification_titles_and_durations() {
        assert_eq!(
            FileKind::Stylesheet.notification("hero"),
            "CSS hero File created and linked in liquid"
        );
        assert_eq!(FileKind::Template.notification("hero"), "Liquid File hero Created");
        assert_eq!(FileKind::Script.display_duration(), Duration::from_millis(200));
        assert_eq!(FileKind::Template.display_duration(), Duration::from_millis(2000));
    }
}
