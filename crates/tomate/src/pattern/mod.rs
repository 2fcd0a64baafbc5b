// Lua-style string patterns, compiled to a flat instruction list
// and matched anchored at a caller-supplied offset.
//
// Pattern syntax:
// - `.` any character except NUL
// - `%n %a %d %s %l %u %w` line break, letter, digit, whitespace,
//   lowercase, uppercase, alphanumeric-or-underscore (ASCII only)
// - `%N %A %D %S %W` negated forms (there are none for `%l` / `%u`)
// - `%x` for any other `x` matches `x` literally
// - `[set]`, `[^set]` with literals, `%x` escapes and `a-z` ranges
// - Suffixes: `*` greedy, `+` greedy one or more, `-` minimal, `?` optional
//
// Not supported: captures, anchors, alternation, backtracking.

mod cache;
mod class;
mod error;
mod matcher;
mod parser;

pub use cache::PatternCache;
pub use class::{CharClass, Instruction, Quantifier, match_set, matches_class};
pub use error::CompileError;
pub use matcher::{MatchResult, Span, match_chars, match_pattern};
pub use parser::{CompiledPattern, compile, compile_with};
