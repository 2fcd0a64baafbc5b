/// Reasons a pattern is rejected at compile time.
/// Positions are code-point indices into the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// `%` is the last symbol of the pattern
    TrailingEscape { position: usize },
    /// `[` without a matching unescaped `]`
    UnterminatedSet { position: usize },
    /// Pattern is longer than `CompileOption::max_pattern_len`
    PatternTooLong { length: usize, limit: usize },
}

impl CompileError {
    pub fn position(&self) -> Option<usize> {
        match self {
            CompileError::TrailingEscape { position }
            | CompileError::UnterminatedSet { position } => Some(*position),
            CompileError::PatternTooLong { .. } => None,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::TrailingEscape { position } => {
                write!(f, "malformed pattern (ends with '%' at {})", position)
            }
            CompileError::UnterminatedSet { position } => {
                write!(f, "malformed pattern (missing ']' for set at {})", position)
            }
            CompileError::PatternTooLong { length, limit } => {
                write!(f, "pattern too long ({} symbols, limit {})", length, limit)
            }
        }
    }
}

impl std::error::Error for CompileError {}
