// Pattern compiler
// Turns pattern text into a flat, immutable instruction sequence

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::class::{CharClass, Instruction, Quantifier};
use super::error::CompileError;
use crate::compile_option::CompileOption;

/// A compiled pattern. Owns its source text because `Set` instructions
/// refer back into it by span instead of copying their members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: SmolStr,
    symbols: Box<[char]>,
    instructions: Vec<Instruction>,
}

impl CompiledPattern {
    /// The pattern text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Decoded pattern text; `Set` spans index into this.
    pub(crate) fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Raw member list of a `Set` instruction.
    ///
    /// `None` for other classes, and for a `Set` whose span lies outside
    /// this pattern's text (an instruction taken from another pattern).
    pub fn set_members(&self, inst: &Instruction) -> Option<String> {
        match inst.class {
            CharClass::Set { start, end } => Some(self.symbols.get(start..end)?.iter().collect()),
            _ => None,
        }
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for CompiledPattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

/// Compile a pattern with the default limits
pub fn compile(pattern: &str) -> Result<CompiledPattern, CompileError> {
    compile_with(pattern, &CompileOption::default())
}

/// Compile a pattern
pub fn compile_with(pattern: &str, option: &CompileOption) -> Result<CompiledPattern, CompileError> {
    let symbols: Box<[char]> = pattern.chars().collect();
    if symbols.len() > option.max_pattern_len {
        let err = CompileError::PatternTooLong {
            length: symbols.len(),
            limit: option.max_pattern_len,
        };
        log::debug!("rejected pattern: {}", err);
        return Err(err);
    }

    let mut instructions = Vec::new();
    let mut pos = 0;
    while pos < symbols.len() {
        let (inst, next) = parse_item(&symbols, pos).inspect_err(|err| {
            log::debug!("rejected pattern {:?}: {}", pattern, err);
        })?;
        instructions.push(inst);
        pos = next;
    }

    log::trace!(
        "compiled pattern {:?} into {} instructions",
        pattern,
        instructions.len()
    );

    Ok(CompiledPattern {
        source: SmolStr::new(pattern),
        symbols,
        instructions,
    })
}

/// Parse one class plus its optional quantifier suffix.
/// Returns the instruction and the index just past it.
fn parse_item(symbols: &[char], pos: usize) -> Result<(Instruction, usize), CompileError> {
    let (class, negate, next) = parse_class(symbols, pos)?;

    let (quantifier, next) = match symbols.get(next).copied().and_then(Quantifier::from_suffix) {
        Some(quantifier) => (quantifier, next + 1),
        None => (Quantifier::Single, next),
    };

    Ok((
        Instruction {
            class,
            negate,
            quantifier,
        },
        next,
    ))
}

fn parse_class(symbols: &[char], pos: usize) -> Result<(CharClass, bool, usize), CompileError> {
    match symbols[pos] {
        '.' => Ok((CharClass::Any, false, pos + 1)),
        '[' => parse_set(symbols, pos),
        '%' => {
            let escaped = *symbols
                .get(pos + 1)
                .ok_or(CompileError::TrailingEscape { position: pos })?;
            let (class, negate) = CharClass::from_escape(escaped);
            Ok((class, negate, pos + 2))
        }
        c => Ok((CharClass::Literal(c), false, pos + 1)),
    }
}

/// `pos` points at `[`. The body ends at the first `]` not preceded by `%`.
fn parse_set(symbols: &[char], pos: usize) -> Result<(CharClass, bool, usize), CompileError> {
    let unterminated = CompileError::UnterminatedSet { position: pos };

    let mut start = pos + 1;
    let negate = symbols.get(start) == Some(&'^');
    if negate {
        start += 1;
    }

    let mut end = start;
    loop {
        match symbols.get(end) {
            None => return Err(unterminated),
            Some(']') => break,
            Some('%') => {
                if end + 1 >= symbols.len() {
                    return Err(unterminated);
                }
                end += 2;
            }
            Some(_) => end += 1,
        }
    }

    Ok((CharClass::Set { start, end }, negate, end + 1))
}
