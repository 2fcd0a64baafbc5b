// Tests for the pattern compiler
use crate::*;

#[test]
fn test_shorthand_classes() {
    let pat = compile("%n%N%a%A%d%D%s%S%l%u%w%W").unwrap();
    let classes: Vec<(CharClass, bool)> = pat
        .instructions()
        .iter()
        .map(|i| (i.class, i.negate))
        .collect();
    assert_eq!(
        classes,
        vec![
            (CharClass::LineBreak, false),
            (CharClass::LineBreak, true),
            (CharClass::Letter, false),
            (CharClass::Letter, true),
            (CharClass::Digit, false),
            (CharClass::Digit, true),
            (CharClass::Whitespace, false),
            (CharClass::Whitespace, true),
            (CharClass::Lowercase, false),
            (CharClass::Uppercase, false),
            (CharClass::AlphaNum, false),
            (CharClass::AlphaNum, true),
        ]
    );
}

#[test]
fn test_escaped_reserved_characters() {
    let pat = compile("%%%.%[%*%+%-%?").unwrap();
    let literals: Vec<CharClass> = pat.instructions().iter().map(|i| i.class).collect();
    assert_eq!(
        literals,
        "%.[*+-?".chars().map(CharClass::Literal).collect::<Vec<_>>()
    );
    assert!(pat
        .instructions()
        .iter()
        .all(|i| i.quantifier == Quantifier::Single && !i.negate));
}

#[test]
fn test_escape_takes_quantifier() {
    let pat = compile("%.*").unwrap();
    assert_eq!(pat.len(), 1);
    assert_eq!(pat.instructions()[0].class, CharClass::Literal('.'));
    assert_eq!(pat.instructions()[0].quantifier, Quantifier::ZeroOrMore);
}

#[test]
fn test_double_suffix() {
    // the second suffix has nothing to attach to and becomes a literal item
    let pat = compile("a**").unwrap();
    assert_eq!(pat.len(), 2);
    assert_eq!(pat.instructions()[0].quantifier, Quantifier::ZeroOrMore);
    assert_eq!(pat.instructions()[1].class, CharClass::Literal('*'));
    assert_eq!(pat.instructions()[1].quantifier, Quantifier::Single);
}

#[test]
fn test_unicode_pattern_spans() {
    let pat = compile("é[à-ü]+").unwrap();
    assert_eq!(pat.len(), 2);
    let set = pat.instructions()[1];
    assert_eq!(set.class, CharClass::Set { start: 2, end: 5 });
    assert_eq!(pat.set_members(&set).as_deref(), Some("à-ü"));
    assert_eq!(pat.set_members(&pat.instructions()[0]), None);

    // a set instruction from a longer pattern does not fit this one
    let short = compile("x").unwrap();
    assert_eq!(short.set_members(&set), None);
}

#[test]
fn test_instruction_syntax_round_trip() {
    for source in ["%d+%.%d*", "[^a-z]*x?", "%S-%n", ".%W%%"] {
        let pat = compile(source).unwrap();
        let mut rendered = String::new();
        for inst in pat.instructions() {
            inst.write_syntax(&mut rendered, pat.symbols()).unwrap();
        }
        assert_eq!(rendered, source);
    }
}

#[test]
fn test_compile_error_display() {
    let err = compile("abc%").unwrap_err();
    assert_eq!(err.position(), Some(3));
    assert_eq!(err.to_string(), "malformed pattern (ends with '%' at 3)");

    let err = compile("x[a-z").unwrap_err();
    assert_eq!(err.position(), Some(1));
    assert_eq!(err.to_string(), "malformed pattern (missing ']' for set at 1)");

    let err = compile_with("abcd", &CompileOption { max_pattern_len: 2 }).unwrap_err();
    assert_eq!(err.position(), None);
    assert_eq!(err.to_string(), "pattern too long (4 symbols, limit 2)");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "pattern too long (4 symbols, limit 2)");
}

#[test]
fn test_empty_pattern() {
    let pat = compile("").unwrap();
    assert!(pat.is_empty());
    assert_eq!(pat.source(), "");
}
