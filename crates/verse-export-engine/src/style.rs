use serde::Serialize;

/// Highlight colour used for inline code.
pub const HIGHLIGHT_YELLOW: &str = "yellow";

/// Formatting of a single text run.
///
/// Every attribute is optional: `None` means the attribute is not set at this
/// level and is inherited from the enclosing style when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superscript: Option<bool>,
    /// Hex RGB colour without the leading `#`, e.g. `2779AA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RunStyle {
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    pub fn superscript() -> Self {
        Self {
            superscript: Some(true),
            ..Self::default()
        }
    }

    pub fn highlighted(color: impl Into<String>) -> Self {
        Self {
            highlight: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Returns a new style where every attribute set in `delta` overrides `self`.
    pub fn merged(&self, delta: &RunStyle) -> RunStyle {
        RunStyle {
            bold: delta.bold.or(self.bold),
            italic: delta.italic.or(self.italic),
            highlight: delta.highlight.clone().or_else(|| self.highlight.clone()),
            font_size: delta.font_size.or(self.font_size),
            superscript: delta.superscript.or(self.superscript),
            color: delta.color.clone().or_else(|| self.color.clone()),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    pub fn is_superscript(&self) -> bool {
        self.superscript.unwrap_or(false)
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_additive() {
        let merged = RunStyle::bold().merged(&RunStyle::italic());
        assert!(merged.is_bold());
        assert!(merged.is_italic());
        assert!(!merged.is_superscript());
    }

    #[test]
    fn test_merge_child_wins_on_conflict() {
        let parent = RunStyle::colored("2779AA").with_font_size(14);
        let child = RunStyle {
            font_size: Some(12),
            bold: Some(false),
            ..RunStyle::default()
        };

        let merged = parent.merged(&child);

        assert_eq!(merged.font_size, Some(12));
        assert_eq!(merged.bold, Some(false));
        assert_eq!(merged.color.as_deref(), Some("2779AA"));
    }

    #[test]
    fn test_merge_leaves_parent_untouched() {
        let parent = RunStyle::bold();
        let _ = parent.merged(&RunStyle::highlighted(HIGHLIGHT_YELLOW));
        assert_eq!(parent, RunStyle::bold());
    }

    #[test]
    fn test_default_is_plain() {
        assert!(RunStyle::default().is_plain());
        assert!(!RunStyle::superscript().is_plain());
    }
}
