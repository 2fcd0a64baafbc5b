// Tomate
// A small Lua-style pattern compiler and anchored, non-backtracking matcher

#[cfg(test)]
mod test;

pub mod compile_option;
pub mod pattern;

#[cfg(feature = "serde")]
pub mod serde;

pub use compile_option::CompileOption;
pub use pattern::{
    CharClass, CompileError, CompiledPattern, Instruction, MatchResult, PatternCache, Quantifier,
    Span, compile, compile_with, match_chars, match_pattern,
};
