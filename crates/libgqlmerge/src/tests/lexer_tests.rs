//! Tests for `SdlLexer`: token classification, literals, comments, and
//! lexical errors.

use crate::tests::utils::lex_first;
use crate::tests::utils::lex_kinds;
use crate::token::SdlTokenKind;
use crate::token_source::SdlLexer;
use crate::LexicalErrorKind;

fn name(text: &str) -> SdlTokenKind {
    SdlTokenKind::Name(text.to_string())
}

// =============================================================================
// Punctuation and keywords
// =============================================================================

/// Every single-character punctuator lexes to its own kind.
#[test]
fn punctuators() {
    assert_eq!(
        lex_kinds("( ) { } [ ] | : , = ! @ & $ * /"),
        vec![
            SdlTokenKind::ParenOpen,
            SdlTokenKind::ParenClose,
            SdlTokenKind::CurlyBraceOpen,
            SdlTokenKind::CurlyBraceClose,
            SdlTokenKind::SquareBracketOpen,
            SdlTokenKind::SquareBracketClose,
            SdlTokenKind::Pipe,
            SdlTokenKind::Colon,
            SdlTokenKind::Comma,
            SdlTokenKind::Equals,
            SdlTokenKind::Bang,
            SdlTokenKind::At,
            SdlTokenKind::Ampersand,
            SdlTokenKind::Dollar,
            SdlTokenKind::Star,
            SdlTokenKind::Slash,
            SdlTokenKind::Eof,
        ],
    );
}

/// `.` and `...` are distinct tokens.
#[test]
fn dot_and_ellipsis() {
    assert_eq!(
        lex_kinds(". ..."),
        vec![SdlTokenKind::Dot, SdlTokenKind::Ellipsis, SdlTokenKind::Eof],
    );
}

/// A sign not followed by a digit is its own punctuator.
#[test]
fn lone_signs_are_punctuators() {
    assert_eq!(
        lex_kinds("- +"),
        vec![SdlTokenKind::Minus, SdlTokenKind::Plus, SdlTokenKind::Eof],
    );
}

/// All reserved words are reclassified; near-misses stay names.
#[test]
fn keywords_are_reclassified() {
    assert_eq!(
        lex_kinds(
            "directive enum extend implements input interface on repeatable scalar schema \
             type union types"
        ),
        vec![
            SdlTokenKind::Directive,
            SdlTokenKind::Enum,
            SdlTokenKind::Extend,
            SdlTokenKind::Implements,
            SdlTokenKind::Input,
            SdlTokenKind::Interface,
            SdlTokenKind::On,
            SdlTokenKind::Repeatable,
            SdlTokenKind::Scalar,
            SdlTokenKind::Schema,
            SdlTokenKind::Type,
            SdlTokenKind::Union,
            name("types"),
            SdlTokenKind::Eof,
        ],
    );
}

/// Names may start with `_` and contain digits.
#[test]
fn names() {
    assert_eq!(
        lex_kinds("_id user2 CamelCase"),
        vec![name("_id"), name("user2"), name("CamelCase"), SdlTokenKind::Eof],
    );
}

// =============================================================================
// Numbers
// =============================================================================

/// Integers are canonicalized: `+` dropped, leading zeros stripped, `-0`
/// printed as `0`.
#[test]
fn integers_are_canonicalized() {
    assert_eq!(
        lex_kinds("42 +7 007 -0 -12"),
        vec![
            SdlTokenKind::IntValue("42".to_string()),
            SdlTokenKind::IntValue("7".to_string()),
            SdlTokenKind::IntValue("7".to_string()),
            SdlTokenKind::IntValue("0".to_string()),
            SdlTokenKind::IntValue("-12".to_string()),
            SdlTokenKind::Eof,
        ],
    );
}

/// Integers are not limited to a machine word.
#[test]
fn big_integers() {
    assert_eq!(
        lex_first("123456789012345678901234567890").kind,
        SdlTokenKind::IntValue("123456789012345678901234567890".to_string()),
    );
}

/// Fractions and exponents make float tokens, kept as raw text.
#[test]
fn floats_keep_raw_text() {
    assert_eq!(
        lex_kinds("1.5 -2e10 3.0E-2"),
        vec![
            SdlTokenKind::FloatValue("1.5".to_string()),
            SdlTokenKind::FloatValue("-2e10".to_string()),
            SdlTokenKind::FloatValue("3.0E-2".to_string()),
            SdlTokenKind::Eof,
        ],
    );
}

/// A number directly followed by a letter is an invalid token.
#[test]
fn number_followed_by_letter_is_an_error() {
    let token = lex_first("1a");
    match token.kind {
        SdlTokenKind::Error { kind, message, .. } => {
            assert_eq!(
                kind,
                LexicalErrorKind::InvalidTokenAdjacency {
                    after: "1".to_string(),
                    found: 'a',
                },
            );
            assert_eq!(message, "Invalid token after `1`: unexpected `a`");
        },
        other => panic!("expected an error token, got {other:?}"),
    }
}

/// Values may be followed directly by any of `( ) [ ] { } : ! ,`.
#[test]
fn value_terminators_are_accepted() {
    assert_eq!(
        lex_kinds("[ID!]"),
        vec![
            SdlTokenKind::SquareBracketOpen,
            name("ID"),
            SdlTokenKind::Bang,
            SdlTokenKind::SquareBracketClose,
            SdlTokenKind::Eof,
        ],
    );
    assert_eq!(
        lex_kinds("f(a:1,b:2)"),
        vec![
            name("f"),
            SdlTokenKind::ParenOpen,
            name("a"),
            SdlTokenKind::Colon,
            SdlTokenKind::IntValue("1".to_string()),
            SdlTokenKind::Comma,
            name("b"),
            SdlTokenKind::Colon,
            SdlTokenKind::IntValue("2".to_string()),
            SdlTokenKind::ParenClose,
            SdlTokenKind::Eof,
        ],
    );
}

/// A name followed by `%` is rejected.
#[test]
fn name_followed_by_invalid_character() {
    assert!(matches!(
        lex_first("Foo%").kind,
        SdlTokenKind::Error {
            kind: LexicalErrorKind::InvalidTokenAdjacency { found: '%', .. },
            ..
        }
    ));
}

// =============================================================================
// Strings and comments
// =============================================================================

/// Strings keep their quotes and escapes; `\"` does not close them.
#[test]
fn strings_keep_raw_text() {
    assert_eq!(
        lex_first(r#""a \"quoted\" word""#).kind,
        SdlTokenKind::StringValue(r#""a \"quoted\" word""#.to_string()),
    );
}

/// A string that reaches a newline is unterminated.
#[test]
fn unterminated_string_at_newline() {
    let token = lex_first("\"abc\ndef\"");
    match token.kind {
        SdlTokenKind::Error { kind, error_notes, .. } => {
            assert_eq!(kind, LexicalErrorKind::UnterminatedString);
            assert_eq!(error_notes.len(), 2);
        },
        other => panic!("expected an error token, got {other:?}"),
    }
    assert_eq!(token.span.line(), 1);
    assert_eq!(token.span.column(), 1);
}

/// Block strings span lines and keep their delimiters.
#[test]
fn block_strings() {
    let source = "\"\"\"\nMulti\nline\n\"\"\"";
    assert_eq!(
        lex_first(source).kind,
        SdlTokenKind::BlockString(source.to_string()),
    );
}

/// `\"""` inside a block string does not close it.
#[test]
fn block_string_escaped_triple_quote() {
    let source = r#""""a \""" b""""#;
    assert_eq!(
        lex_first(source).kind,
        SdlTokenKind::BlockString(source.to_string()),
    );
}

/// `\r\n` and lone `\r` inside a block string are stored as `\n`, and
/// positions after it still count each break once.
#[test]
fn block_string_line_breaks_are_normalized() {
    let tokens: Vec<_> =
        SdlLexer::from_text("\"\"\"\r\nMulti\rline\r\n\"\"\"\r\nscalar", "crlf.graphql").collect();
    assert_eq!(
        tokens[0].kind,
        SdlTokenKind::BlockString("\"\"\"\nMulti\nline\n\"\"\"".to_string()),
    );
    assert_eq!(tokens[1].kind, SdlTokenKind::Scalar);
    assert_eq!((tokens[1].span.line(), tokens[1].span.column()), (5, 1));
}

/// A comment ends before `\r\n` without keeping the `\r`.
#[test]
fn comment_before_crlf() {
    assert_eq!(
        lex_kinds("# windows\r\nscalar"),
        vec![
            SdlTokenKind::LineComment("# windows".to_string()),
            SdlTokenKind::Scalar,
            SdlTokenKind::Eof,
        ],
    );
}

/// A block string that reaches EOF is an error.
#[test]
fn unterminated_block_string() {
    assert!(matches!(
        lex_first("\"\"\"never closed").kind,
        SdlTokenKind::Error {
            kind: LexicalErrorKind::UnterminatedBlockString,
            ..
        }
    ));
}

/// A comment runs to the end of the line and includes its `#`.
#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(
        lex_kinds("# hello world\nscalar"),
        vec![
            SdlTokenKind::LineComment("# hello world".to_string()),
            SdlTokenKind::Scalar,
            SdlTokenKind::Eof,
        ],
    );
}

/// Characters that start no token are errors.
#[test]
fn unexpected_character() {
    let token = lex_first("%");
    match token.kind {
        SdlTokenKind::Error { kind, message, .. } => {
            assert_eq!(kind, LexicalErrorKind::UnexpectedCharacter { found: '%' });
            assert_eq!(message, "Unexpected character `%`");
        },
        other => panic!("expected an error token, got {other:?}"),
    }
}

// =============================================================================
// Positions and iteration
// =============================================================================

/// Lines and columns advance across `\n`, `\r\n` and `\r`.
#[test]
fn positions_track_line_breaks() {
    let tokens: Vec<_> = SdlLexer::from_text("a\nb\r\nc\rd", "pos.graphql").collect();
    let positions: Vec<(usize, usize)> = tokens
        .iter()
        .map(|token| (token.span.line(), token.span.column()))
        .collect();
    assert_eq!(positions, vec![(1, 1), (2, 1), (3, 1), (4, 1), (4, 2)]);
}

/// Spans carry the file name they were lexed from.
#[test]
fn spans_carry_file_name() {
    let token = SdlLexer::from_text("  scalar", "types/a.graphql")
        .next()
        .expect("token");
    assert_eq!(token.span.to_string(), "types/a.graphql:1:3");
}

/// The lexer yields exactly one `Eof` and then stops.
#[test]
fn iteration_ends_after_eof() {
    let mut lexer = SdlLexer::from_text("", "empty.graphql");
    assert_eq!(lexer.next().map(|t| t.kind), Some(SdlTokenKind::Eof));
    assert!(lexer.next().is_none());
}

/// Any character iterator can feed the lexer.
#[test]
fn lexes_from_lazy_char_iterator() {
    let chars = "scalar Date".chars().collect::<Vec<_>>().into_iter();
    let kinds: Vec<_> = SdlLexer::new(chars, "lazy.graphql").map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![SdlTokenKind::Scalar, name("Date"), SdlTokenKind::Eof],
    );
}

/// A leading byte-order mark is skipped.
#[test]
fn bom_is_skipped() {
    assert_eq!(
        lex_kinds("\u{FEFF}scalar"),
        vec![SdlTokenKind::Scalar, SdlTokenKind::Eof],
    );
}
