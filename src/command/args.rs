//! Parsed argument model for spatial search commands

/// Command variant selected by the leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Bounding-rectangle intersection search. The only active variant.
    Rect,
    /// Containment search. Reserved: carried in the model for
    /// forward-compatible parsing, never produced by the parser, and no
    /// filtering semantics are defined for it.
    Within,
}

impl CommandKind {
    /// Returns the lowercase command keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Rect => "rect",
            CommandKind::Within => "within",
        }
    }
}

/// Parsed arguments for a rectangle search.
///
/// Built once by [`parse`](super::parse) and never mutated afterwards. The
/// `*_on` flags distinguish "option absent" from a zero or empty option
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct RectArgs {
    /// Which command variant was issued
    pub kind: CommandKind,
    /// Name of the spatial index to query
    pub index: String,
    /// Geometry payload, interpreted by the index collaborator
    pub bounds: String,
    /// True if a MATCH pattern was supplied (an empty pattern is valid)
    pub match_on: bool,
    /// Glob pattern applied to candidate keys
    pub pattern: String,
    /// True if a LIMIT was supplied
    pub limit_on: bool,
    /// Cap on accepted results
    pub limit: u64,
    /// True if a SKIP was supplied
    pub skip_on: bool,
    /// Number of matching candidates to discard before accepting
    pub skip: u64,
    /// Reserved flag, functionally inert
    pub with_values: bool,
    /// Reserved flag for the disabled containment variant
    pub within: bool,
}

impl RectArgs {
    pub(super) fn new(index: &str, bounds: &str) -> Self {
        Self {
            kind: CommandKind::Rect,
            index: index.to_string(),
            bounds: bounds.to_string(),
            match_on: false,
            pattern: String::new(),
            limit_on: false,
            limit: 0,
            skip_on: false,
            skip: 0,
            with_values: false,
            within: false,
        }
    }
}
