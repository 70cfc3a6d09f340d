//! Input validation
//!
//! Decides whether a user-entered path should be handed to the creator at
//! all. Validation is advisory: it looks at the filesystem once, and the
//! creator re-checks what it must when it actually runs.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::parser::{is_separator, parse_path};
use crate::error::{ParseError, Rejection};
use crate::infra::filesystem;

/// Outcome of validating one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Empty input: the user cancelled, nothing to do
    NoOp,
    /// Input may be created
    Pass,
    /// Input is refused for the given reason
    Rejected(Rejection),
}

impl Validation {
    /// Whether creation may proceed
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Rejection reason, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// Human-readable rejection message, `None` for pass and no-op
    pub fn message(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }
}

fn drive_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\\/]?[a-zA-Z]:").unwrap())
}

fn forbidden_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"|?*\x00-\x1F]"#).unwrap())
}

fn reserved_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(con|prn|aux|nul|com[1-9]|lpt[1-9])(\..*)?$").unwrap())
}

/// Whether `input` uses absolute syntax on any supported platform
///
/// Covers native absolute paths, rooted paths starting with `/` or `\`, and
/// drive-letter forms such as `C:\`, `c:/`, `/c:\` and `\c:\`.
pub fn is_absolute_input(input: &str) -> bool {
    Path::new(input).is_absolute()
        || input.starts_with(is_separator)
        || drive_prefix().is_match(input)
}

/// Whether a single path component is acceptable on every platform
pub fn is_valid_component(name: &str) -> bool {
    !forbidden_chars().is_match(name) && !reserved_name().is_match(name)
}

/// Validate `raw_input` against `base_dir`
///
/// Checks, in order: empty input, absolute syntax, escaping the base
/// directory, an existing target, and illegal characters or names.
pub async fn validate(base_dir: &Path, raw_input: &str) -> Validation {
    let input = raw_input.trim();
    if input.is_empty() {
        return Validation::NoOp;
    }

    if is_absolute_input(input) {
        return Validation::Rejected(Rejection::AbsolutePath {
            input: input.to_string(),
        });
    }

    let parsed = match parse_path(base_dir, input) {
        Ok(parsed) => parsed,
        Err(ParseError::InvalidInput) => return Validation::NoOp,
        Err(ParseError::EscapesBase { input }) => {
            return Validation::Rejected(Rejection::OutsideBase {
                input,
                base: base_dir.to_path_buf(),
            });
        }
    };

    if filesystem::path_exists(parsed.target()).await {
        return Validation::Rejected(Rejection::AlreadyExists {
            path: parsed.target().to_path_buf(),
        });
    }

    let all_valid = parsed
        .segments()
        .iter()
        .map(String::as_str)
        .chain(parsed.filename())
        .all(is_valid_component);
    if !all_valid {
        return Validation::Rejected(Rejection::InvalidSyntax {
            path: parsed.target().to_path_buf(),
        });
    }

    Validation::Pass
}
