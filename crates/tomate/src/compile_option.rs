/// Limits applied while compiling a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOption {
    /// Maximum pattern length in code points
    pub max_pattern_len: usize,
}

impl Default for CompileOption {
    fn default() -> Self {
        Self {
            max_pattern_len: 1 << 16,
        }
    }
}
