use std::fmt;
use std::str::FromStr;

/// Display density of a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Compact grid tile, no detail fields
    Block,
    /// Row with release year and genre
    List,
    /// Album detail page with every field and the tracklist
    Detail,
}

#[allow(clippy::derivable_impls)]
impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Block
    }
}

/// Where a card is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    /// Unfiltered catalog browse/search list
    All,
    /// Inside someone's collection
    Collection,
}

#[allow(clippy::derivable_impls)]
impl Default for PageContext {
    fn default() -> Self {
        PageContext::All
    }
}

/// What the card's action icon does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Plus icon: add the release to one of the viewer's collections
    Add,
    /// Minus icon: remove the release from the collection being viewed
    Remove,
}

/// Icon button size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSize {
    Small,
    Large,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Block => "block",
            ViewMode::List => "list",
            ViewMode::Detail => "detail",
        }
    }
}

impl PageContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::All => "all",
            PageContext::Collection => "collection",
        }
    }

    /// Add on the browse page, remove inside a collection.
    pub fn action_kind(&self) -> ActionKind {
        match self {
            PageContext::All => ActionKind::Add,
            PageContext::Collection => ActionKind::Remove,
        }
    }
}

impl ActionKind {
    /// Icon name used by the renderer ("plus" / "minus")
    pub fn icon(&self) -> &'static str {
        match self {
            ActionKind::Add => "plus",
            ActionKind::Remove => "minus",
        }
    }

    /// Dialog the action opens in the collection UI
    pub fn dialog(&self) -> &'static str {
        match self {
            ActionKind::Add => "add-item",
            ActionKind::Remove => "delete-item",
        }
    }
}

impl ActionSize {
    /// Rendered icon edge length in pixels
    pub fn pixels(&self) -> u32 {
        match self {
            ActionSize::Small => 16,
            ActionSize::Large => 32,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised view mode or page context string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for ViewMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(ViewMode::Block),
            "list" => Ok(ViewMode::List),
            "detail" => Ok(ViewMode::Detail),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

impl FromStr for PageContext {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PageContext::All),
            "collection" => Ok(PageContext::Collection),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
