//! Load strategies for the optional stylesheet and script assets.
//!
//! Each strategy decides two things at once: whether the asset file is
//! created, and which tag (if any) the template emits for it.

use serde::Serialize;

/// One entry in a choice prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylesheetStrategy {
    Lazy,
    Preload,
    RenderBlocking,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptStrategy {
    Defer,
    Async,
    RenderBlocking,
    Skip,
}

pub const STYLESHEET_PLACEHOLDER: &str =
    "Select how you want to handle the stylesheet for this section:";

pub const SCRIPT_PLACEHOLDER: &str =
    "Select JS loading options • (descriptions explain each mode)";

impl StylesheetStrategy {
    pub const ALL: [StylesheetStrategy; 4] = [
        StylesheetStrategy::Lazy,
        StylesheetStrategy::Preload,
        StylesheetStrategy::RenderBlocking,
        StylesheetStrategy::Skip,
    ];

    pub fn option(&self) -> ChoiceOption {
        match self {
            StylesheetStrategy::Lazy => ChoiceOption {
                value: "lazy",
                label: "Lazy Loaded",
                description: "Recommended for non first fold content",
            },
            StylesheetStrategy::Preload => ChoiceOption {
                value: "preload",
                label: "Pre Loaded",
                description: "Recommended for first fold content",
            },
            StylesheetStrategy::RenderBlocking => ChoiceOption {
                value: "render-blocking",
                label: "Render Blocking",
                description: "Not recommended",
            },
            StylesheetStrategy::Skip => ChoiceOption {
                value: "skip",
                label: "Skip CSS",
                description: "Who needs CSS anyway? ;)",
            },
        }
    }

    pub fn options() -> Vec<ChoiceOption> {
        Self::ALL.iter().map(|s| s.option()).collect()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.option().value == value)
    }

    /// A cancelled picker falls through to the same outcome as an explicit skip.
    pub fn or_skip(choice: Option<Self>) -> Self {
        choice.unwrap_or(StylesheetStrategy::Skip)
    }

    pub fn creates_asset(&self) -> bool {
        !matches!(self, StylesheetStrategy::Skip)
    }
}

impl ScriptStrategy {
    pub const ALL: [ScriptStrategy; 4] = [
        ScriptStrategy::Defer,
        ScriptStrategy::Async,
        ScriptStrategy::RenderBlocking,
        ScriptStrategy::Skip,
    ];

    pub fn option(&self) -> ChoiceOption {
        match self {
            ScriptStrategy::Defer => ChoiceOption {
                value: "defer",
                label: "Defer",
                description: "Downloads the script in parallel with HTML parsing but waits to execute until the HTML is fully loaded (maintains order).",
            },
            ScriptStrategy::Async => ChoiceOption {
                value: "async",
                label: "Async",
                description: "Downloads the script in parallel with HTML parsing and executes it immediately once ready (order not guaranteed).",
            },
            ScriptStrategy::RenderBlocking => ChoiceOption {
                value: "render-blocking",
                label: "Render Blocking",
                description: "Not recommended! Blocks the main thread until the script is downloaded and executed, delaying page rendering.",
            },
            ScriptStrategy::Skip => ChoiceOption {
                value: "skip",
                label: "Skip JavaScript",
                description: "No JS will be added. Your page will load so fast, it might time-travel!",
            },
        }
    }

    pub fn options() -> Vec<ChoiceOption> {
        Self::ALL.iter().map(|s| s.option()).collect()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.option().value == value)
    }

    pub fn or_skip(choice: Option<Self>) -> Self {
        choice.unwrap_or(ScriptStrategy::Skip)
    }

    pub fn creates_asset(&self) -> bool {
        !matches!(self, ScriptStrategy::Skip)
    }

    /// Attribute placed on the `<script>` tag. Render blocking is the browser default.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            ScriptStrategy::Async => Some("async"),
            ScriptStrategy::Defer => Some("defer"),
            ScriptStrategy::RenderBlocking | ScriptStrategy::Skip => None,
        }
    }
}
