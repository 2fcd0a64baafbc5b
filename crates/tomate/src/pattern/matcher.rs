// Pattern matcher
// Anchored, non-backtracking walk over the instruction sequence.
// All offsets and lengths are in code points.

use std::ops::Range;

use super::class::{Instruction, Quantifier};
use super::parser::CompiledPattern;

/// A matched region `[start, start + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slice the matched text out of `text`, mapping code points to bytes.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut bounds = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .skip(self.start);
        let from = bounds.next()?;
        let to = if self.len == 0 {
            from
        } else {
            bounds.nth(self.len - 1)?
        };
        Some(&text[from..to])
    }
}

/// Outcome of one anchored match attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    /// Every instruction was satisfied
    Matched(Span),
    /// An instruction failed after `consumed` characters; not a valid span
    Failed { start: usize, consumed: usize },
    /// The start offset was at or past the end of the input
    OutOfRange,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            MatchResult::Matched(span) => Some(*span),
            _ => None,
        }
    }

    pub fn start(&self) -> Option<usize> {
        match self {
            MatchResult::Matched(span) => Some(span.start),
            MatchResult::Failed { start, .. } => Some(*start),
            MatchResult::OutOfRange => None,
        }
    }

    /// Characters consumed, whether or not the match succeeded
    pub fn consumed(&self) -> Option<usize> {
        match self {
            MatchResult::Matched(span) => Some(span.len),
            MatchResult::Failed { consumed, .. } => Some(*consumed),
            MatchResult::OutOfRange => None,
        }
    }
}

/// Match `pattern` against `text` anchored at code-point offset `start`.
pub fn match_pattern(pattern: &CompiledPattern, text: &str, start: usize) -> MatchResult {
    let text_chars: Vec<char> = text.chars().collect();
    match_chars(pattern, &text_chars, start)
}

/// Same as [`match_pattern`] over already decoded input, for callers that
/// try many offsets of one text.
pub fn match_chars(pattern: &CompiledPattern, text: &[char], start: usize) -> MatchResult {
    if start >= text.len() {
        return MatchResult::OutOfRange;
    }

    let insts = pattern.instructions();
    let set_source = pattern.symbols();
    let mut pos = start;

    for (index, inst) in insts.iter().enumerate() {
        let next = insts.get(index + 1);
        match match_item(inst, next, &text[pos..], set_source) {
            Some(size) => pos += size,
            None => {
                return MatchResult::Failed {
                    start,
                    consumed: pos - start,
                };
            }
        }
    }

    MatchResult::Matched(Span {
        start,
        len: pos - start,
    })
}

/// How many characters of `rest` one instruction consumes, or `None` if it
/// cannot be satisfied. `next` is the following instruction, consulted by
/// `Minimal` as a one-character lookahead.
fn match_item(
    inst: &Instruction,
    next: Option<&Instruction>,
    rest: &[char],
    set_source: &[char],
) -> Option<usize> {
    let accepts = |c: char| inst.accepts(c, set_source);

    match inst.quantifier {
        Quantifier::Single => match rest.first() {
            Some(&c) if accepts(c) => Some(1),
            _ => None,
        },
        Quantifier::ZeroOrMore => Some(rest.iter().take_while(|&&c| accepts(c)).count()),
        Quantifier::OneOrMore => match rest.iter().take_while(|&&c| accepts(c)).count() {
            0 => None,
            size => Some(size),
        },
        Quantifier::Minimal => {
            let mut size = 0;
            while size < rest.len() && accepts(rest[size]) {
                size += 1;
                // stop as soon as the following instruction could take over
                if let (Some(next), Some(&c)) = (next, rest.get(size)) {
                    if next.accepts(c, set_source) {
                        break;
                    }
                }
            }
            Some(size)
        }
        Quantifier::Optional => match rest.first() {
            Some(&c) if accepts(c) => Some(1),
            _ => Some(0),
        },
    }
}
