// Character classes and quantifiers for compiled patterns
// Classification is ASCII-only; any other code point is an opaque symbol

use std::fmt;

/// What a single input character must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Exact code point (`x`, `%x`)
    Literal(char),
    /// Anything but NUL (`.`)
    Any,
    /// `\n` or `\r` (`%n`)
    LineBreak,
    /// ASCII letter (`%a`)
    Letter,
    /// ASCII digit (`%d`)
    Digit,
    /// Space, tab, `\n`, `\r` (`%s`)
    Whitespace,
    /// `a-z` (`%l`)
    Lowercase,
    /// `A-Z` (`%u`)
    Uppercase,
    /// ASCII letter, digit or underscore (`%w`)
    AlphaNum,
    /// Custom set `[...]`. `start..end` indexes the set body inside the
    /// decoded pattern text, brackets and leading `^` excluded.
    Set { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Single,     // exactly one
    ZeroOrMore, // *
    OneOrMore,  // +
    Minimal,    // - (one-token lookahead, not backtracking)
    Optional,   // ?
}

/// One compiled pattern step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub class: CharClass,
    pub negate: bool,
    pub quantifier: Quantifier,
}

impl Quantifier {
    /// Map a suffix symbol to its quantifier; `None` leaves the symbol for the next item.
    #[inline]
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            '-' => Some(Quantifier::Minimal),
            '?' => Some(Quantifier::Optional),
            _ => None,
        }
    }

    pub fn suffix(self) -> Option<char> {
        match self {
            Quantifier::Single => None,
            Quantifier::ZeroOrMore => Some('*'),
            Quantifier::OneOrMore => Some('+'),
            Quantifier::Minimal => Some('-'),
            Quantifier::Optional => Some('?'),
        }
    }
}

impl CharClass {
    /// Resolve the letter after `%`. Returns the class and its negate flag.
    /// Letters outside the shorthand table escape themselves.
    pub fn from_escape(c: char) -> (Self, bool) {
        match c {
            'n' => (CharClass::LineBreak, false),
            'N' => (CharClass::LineBreak, true),
            'a' => (CharClass::Letter, false),
            'A' => (CharClass::Letter, true),
            'd' => (CharClass::Digit, false),
            'D' => (CharClass::Digit, true),
            's' => (CharClass::Whitespace, false),
            'S' => (CharClass::Whitespace, true),
            'l' => (CharClass::Lowercase, false),
            'u' => (CharClass::Uppercase, false),
            'w' => (CharClass::AlphaNum, false),
            'W' => (CharClass::AlphaNum, true),
            other => (CharClass::Literal(other), false),
        }
    }
}

/// Predicate of `class` alone, before the instruction's negate flag.
/// `set_source` is the decoded pattern text that `Set` spans index into;
/// a span that does not fit it matches nothing.
#[inline]
pub fn matches_class(class: CharClass, c: char, set_source: &[char]) -> bool {
    match class {
        CharClass::Literal(ch) => c == ch,
        CharClass::Any => c != '\0',
        CharClass::LineBreak => c == '\n' || c == '\r',
        CharClass::Letter => c.is_ascii_alphabetic(),
        CharClass::Digit => c.is_ascii_digit(),
        CharClass::Whitespace => matches!(c, ' ' | '\t' | '\n' | '\r'),
        CharClass::Lowercase => c.is_ascii_lowercase(),
        CharClass::Uppercase => c.is_ascii_uppercase(),
        CharClass::AlphaNum => c.is_ascii_alphanumeric() || c == '_',
        CharClass::Set { start, end } => set_source
            .get(start..end)
            .is_some_and(|body| match_set(c, body)),
    }
}

impl Instruction {
    /// Full predicate: `negate XOR class(c)`.
    #[inline]
    pub fn accepts(&self, c: char, set_source: &[char]) -> bool {
        self.negate != matches_class(self.class, c, set_source)
    }
}

/// Scan a set body left to right: `%x` is a literal `x`, `a-z` an inclusive
/// range, anything else a literal. The first hit wins.
pub fn match_set(c: char, body: &[char]) -> bool {
    let mut i = 0;
    while i < body.len() {
        let hit = if body[i] == '%' && i + 1 < body.len() {
            i += 1;
            c == body[i]
        } else if i + 2 < body.len() && body[i + 1] == '-' {
            let hit = c >= body[i] && c <= body[i + 2];
            i += 2;
            hit
        } else {
            c == body[i]
        };

        if hit {
            return true;
        }
        i += 1;
    }
    false
}

/// Symbols that must be escaped to be read as a literal item.
fn needs_escape(c: char) -> bool {
    matches!(c, '%' | '.' | '[' | ']' | '*' | '+' | '-' | '?')
}

impl Instruction {
    /// Render this instruction back to pattern syntax. `Set` bodies are
    /// copied from `set_source`; a span that does not fit it is `fmt::Error`.
    pub fn write_syntax(&self, f: &mut impl fmt::Write, set_source: &[char]) -> fmt::Result {
        match self.class {
            CharClass::Literal(c) if needs_escape(c) => write!(f, "%{}", c)?,
            CharClass::Literal(c) => f.write_char(c)?,
            CharClass::Any => f.write_char('.')?,
            CharClass::Set { start, end } => {
                f.write_char('[')?;
                if self.negate {
                    f.write_char('^')?;
                }
                for c in set_source.get(start..end).ok_or(fmt::Error)? {
                    f.write_char(*c)?;
                }
                f.write_char(']')?;
            }
            CharClass::LineBreak => self.write_shorthand(f, 'n')?,
            CharClass::Letter => self.write_shorthand(f, 'a')?,
            CharClass::Digit => self.write_shorthand(f, 'd')?,
            CharClass::Whitespace => self.write_shorthand(f, 's')?,
            CharClass::Lowercase => self.write_shorthand(f, 'l')?,
            CharClass::Uppercase => self.write_shorthand(f, 'u')?,
            CharClass::AlphaNum => self.write_shorthand(f, 'w')?,
        }
        if let Some(suffix) = self.quantifier.suffix() {
            f.write_char(suffix)?;
        }
        Ok(())
    }

    fn write_shorthand(&self, f: &mut impl fmt::Write, letter: char) -> fmt::Result {
        let letter = if self.negate {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        write!(f, "%{}", letter)
    }
}
