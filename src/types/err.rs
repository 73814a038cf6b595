//! Error types used in the library.
//!
//! - Syntax errors are fatal to the formula in which they occur, though never to a proof.
//! - Parse warnings note a malformed line of a proof, after which parsing continues.
//! - Validation errors note a line which fails to follow from the lines it cites, and every line is checked.
//! - Solver errors note a failure to obtain an answer from a SAT backend.
//!   These are expected from time to time, and are read as 'no countermodel available'.
//! - Config errors note a request for a value outside the bounds of an option.

use crate::structures::rule::Rule;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax(SyntaxError),
    Parse(ParseWarning),
    Validation(ValidationError),
    Cnf(CnfError),
    Solver(SolverError),
    Config(ConfigError),

    /// Some input could not be read.
    Io(String),
}

/// A formula could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// The index of the offending character in the normalized text.
    pub position: usize,

    /// The offending character, or none at the end of the text.
    pub found: Option<char>,
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found {
            Some(character) => write!(
                f,
                "Unexpected '{character}' at position {}",
                self.position
            ),
            None => write!(f, "Unexpected end of formula at position {}", self.position),
        }
    }
}

/// A line of a proof is malformed, though parsing continues.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseWarning {
    /// A line without a `:` separating a formula from its justification.
    /// The line is skipped, and so is identified by its line in the text.
    MissingJustification { text_line: usize, text: String },

    /// A token of a citation list which is neither a number nor a range.
    MalformedCitation { line: usize, token: String },

    /// A range of citations which does not end before the line citing it.
    CitationRangeOutOfBounds { line: usize, token: String },

    /// A `show` line not followed by a more deeply indented block.
    ShowWithoutBlock { line: usize },

    /// A formula which does not parse.
    FormulaSyntax {
        line: usize,
        text: String,
        error: SyntaxError,
    },
}

impl From<ParseWarning> for ErrorKind {
    fn from(e: ParseWarning) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingJustification { text_line, text } => write!(
                f,
                "Text line {text_line}: missing ':' justification in \"{text}\" (line skipped)"
            ),
            Self::MalformedCitation { line, token } => {
                write!(f, "Line {line}: unreadable citation \"{token}\" (ignored)")
            }
            Self::CitationRangeOutOfBounds { line, token } => {
                write!(f, "Line {line}: citation range \"{token}\" reaches past the line (ignored)")
            }
            Self::ShowWithoutBlock { line } => {
                write!(f, "Line {line}: show is not followed by an indented block")
            }
            Self::FormulaSyntax { line, text, error } => {
                write!(f, "Line {line}: cannot parse \"{text}\": {error}")
            }
        }
    }
}

/// A line which fails validation, or a failure of the proof as a whole when no line is given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub line: Option<usize>,
    pub kind: ValidationErrorKind,
}

/// Ways in which a proof may fail validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    /// A cited line is not accessible, as it is later, missing, or inside a closed subproof.
    InaccessibleCitation { cited: usize },

    /// A rule code which is not the code of any rule.
    UnknownRule { code: String },

    /// The wrong number of lines were cited.
    CitationCount {
        rule: Rule,
        expected: usize,
        found: usize,
    },

    /// The formula of the line does not follow by the rule from the cited lines.
    RuleMismatch { rule: Rule, reason: String },

    AssumptionOutsideSubproof,

    /// A QED line with no open show line to close.
    QedWithoutShow,

    /// A closing rule used on a line which is not a QED line.
    ClosingRuleOutsideQed { rule: Rule },

    /// A show line which is never closed.
    UnclosedShow,

    /// No line at the top level establishes the conclusion.
    ConclusionNotEstablished { conclusion: String },
}

impl From<ValidationError> for ErrorKind {
    fn from(e: ValidationError) -> Self {
        ErrorKind::Validation(e)
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InaccessibleCitation { cited } => {
                write!(f, "cites line {cited}, which is not accessible")
            }
            Self::UnknownRule { code } => write!(f, "unknown rule \"{code}\""),
            Self::CitationCount {
                rule,
                expected,
                found,
            } => write!(
                f,
                "{rule} requires {expected} cited line(s), but {found} were cited"
            ),
            Self::RuleMismatch { rule, reason } => write!(f, "invalid use of {rule}: {reason}"),
            Self::AssumptionOutsideSubproof => write!(f, "assumption outside of a subproof"),
            Self::QedWithoutShow => write!(f, "closes a subproof, but no show line is open"),
            Self::ClosingRuleOutsideQed { rule } => {
                write!(f, "{rule} may only be used to close a subproof")
            }
            Self::UnclosedShow => write!(f, "show line is never closed"),
            Self::ConclusionNotEstablished { conclusion } => {
                write!(f, "Conclusion {conclusion} is not established")
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Noted errors when building a CNF instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CnfError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<CnfError> for ErrorKind {
    fn from(e: CnfError) -> Self {
        ErrorKind::Cnf(e)
    }
}

impl std::fmt::Display for CnfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

/// Noted errors when calling on a SAT backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// The solver executable could not be started.
    Unavailable(String),

    /// The solver did not finish before the deadline, and was killed.
    Timeout,

    /// Some failure to read or write a file, or to wait on the solver.
    Io(String),

    /// The output of the solver could not be read.
    MalformedOutput(String),

    Cnf(CnfError),
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}

impl From<CnfError> for SolverError {
    fn from(e: CnfError) -> Self {
        SolverError::Cnf(e)
    }
}

impl From<std::io::Error> for SolverError {
    fn from(e: std::io::Error) -> Self {
        SolverError::Io(e.to_string())
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "solver unavailable: {reason}"),
            Self::Timeout => write!(f, "solver timed out"),
            Self::Io(reason) => write!(f, "solver i/o failure: {reason}"),
            Self::MalformedOutput(reason) => write!(f, "unreadable solver output: {reason}"),
            Self::Cnf(e) => write!(f, "{e}"),
        }
    }
}

/// Noted errors when configuring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of an option, given as text.
    OutOfBounds {
        option: &'static str,
        min: String,
        max: String,
    },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { option, min, max } => {
                write!(f, "{option} requires a value between {min} and {max}")
            }
        }
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.to_string())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Cnf(e) => write!(f, "{e}"),
            Self::Solver(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Io(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
