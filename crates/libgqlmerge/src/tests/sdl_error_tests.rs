//! Tests for `SdlError` construction and formatting.

use crate::ast::DefinitionCategory;
use crate::ConflictKind;
use crate::SdlError;
use crate::SdlErrorClass;
use crate::SdlErrorKind;
use crate::SdlErrorNoteKind;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxErrorKind;

fn span(file: &str, line: usize, col: usize, len: usize) -> SourceSpan {
    SourceSpan::new(
        file.into(),
        SourcePosition::new(line, col, 0),
        SourcePosition::new(line, col + len, 0),
    )
}

fn syntax_error() -> SdlError {
    SdlError::new(
        SdlErrorKind::Syntax(SyntaxErrorKind::UnexpectedToken {
            expected: vec!["`:`".to_string()],
            found: "String".to_string(),
        }),
        "expected `:`, found `String`",
        span("schema.graphql", 1, 7, 6),
    )
}

/// Lexical and syntax errors are prefixed with their location.
#[test]
fn oneline_syntax_error() {
    let err = syntax_error();
    assert_eq!(err.class(), SdlErrorClass::Syntax);
    assert_eq!(
        err.format_oneline(),
        "schema.graphql:2:8: expected `:`, found `String`",
    );
    assert_eq!(err.to_string(), err.format_oneline());
}

/// The detailed form shows the offending line with a caret underline.
#[test]
fn detailed_with_source_snippet() {
    let err = syntax_error();
    let source = "type User {\n  name String\n}";
    assert_eq!(
        err.format_detailed(Some(source)),
        "error: expected `:`, found `String`\n\
         \x20 --> schema.graphql:2:8\n\
         \x20  |\n\
         \x202 |   name String\n\
         \x20  |        ^^^^^^\n",
    );
}

/// Snippet lines are found the way the lexer counts them, so `\r\n` and a
/// lone `\r` both end a line.
#[test]
fn detailed_snippet_with_cr_line_breaks() {
    let err = syntax_error();
    let expected = "error: expected `:`, found `String`\n\
                    \x20 --> schema.graphql:2:8\n\
                    \x20  |\n\
                    \x202 |   name String\n\
                    \x20  |        ^^^^^^\n";
    assert_eq!(err.format_detailed(Some("type User {\r  name String\r}")), expected);
    assert_eq!(err.format_detailed(Some("type User {\r\n  name String\r\n}")), expected);

    let mixed = crate::parse_str("# a\r\ntype User {\r  name String\n}", "mixed.graphql")
        .expect_err("missing colon");
    assert_eq!(mixed.span().to_string(), "mixed.graphql:3:8");
    let detailed = mixed.format_detailed(Some("# a\r\ntype User {\r  name String\n}"));
    assert!(detailed.contains(" 3 |   name String\n"));
}

/// Without source text only the location is shown.
#[test]
fn detailed_without_source() {
    let mut err = syntax_error();
    err.add_help("add a `:` between the field name and its type");
    assert_eq!(
        err.format_detailed(None),
        "error: expected `:`, found `String`\n\
         \x20 --> schema.graphql:2:8\n\
         \x20  = help: add a `:` between the field name and its type\n",
    );
    assert_eq!(err.notes()[0].kind, SdlErrorNoteKind::Help);
}

/// Conflicts keep both spans and note the earlier definition.
#[test]
fn conflict_error() {
    let earlier = span("a.graphql", 0, 5, 1);
    let later = span("b.graphql", 3, 5, 1);
    let err = SdlError::conflict(
        ConflictKind::DuplicateDefinition {
            category: DefinitionCategory::Type,
            name: "A".to_string(),
        },
        format!("Duplicated Type: A({earlier}) and ({later})"),
        later.clone(),
        earlier.clone(),
    );
    assert_eq!(err.class(), SdlErrorClass::Conflict);
    assert_eq!(err.to_string(), "Duplicated Type: A(a.graphql:1:6) and (b.graphql:4:6)");
    assert_eq!(err.span(), &later);
    assert_eq!(err.related_span(), Some(&earlier));
    assert_eq!(err.notes().len(), 1);
    assert_eq!(err.notes()[0].message, "previously defined at a.graphql:1:6");
    assert_eq!(err.notes()[0].span.as_ref(), Some(&earlier));
}

/// Note snippets only render when the note points into the same file.
#[test]
fn note_snippet_same_file_only() {
    let earlier = span("a.graphql", 0, 7, 1);
    let later = span("a.graphql", 1, 7, 1);
    let err = SdlError::conflict(
        ConflictKind::DuplicateDefinition {
            category: DefinitionCategory::Scalar,
            name: "S".to_string(),
        },
        "Duplicated Scalar: S(a.graphql:1:8) and (a.graphql:2:8)",
        later,
        earlier,
    );
    let detailed = err.format_detailed(Some("scalar S\nscalar S @x"));
    assert!(detailed.contains("   = note: previously defined at a.graphql:1:8\n"));
    assert!(detailed.contains("      1 | scalar S\n"));

    let cross_file = SdlError::conflict(
        ConflictKind::DuplicateDefinition {
            category: DefinitionCategory::Scalar,
            name: "S".to_string(),
        },
        "Duplicated Scalar: S(a.graphql:1:8) and (b.graphql:2:8)",
        span("b.graphql", 1, 7, 1),
        span("a.graphql", 0, 7, 1),
    );
    let detailed = cross_file.format_detailed(Some("scalar T\nscalar S @x"));
    assert!(!detailed.contains("1 | scalar T"));
}

/// Error kinds render a short category-prefixed description.
#[test]
fn kind_display() {
    assert_eq!(
        SdlErrorKind::Conflict(ConflictKind::ExtensionWithoutBase {
            name: "Ghost".to_string(),
        })
        .to_string(),
        "merge conflict: extension of undefined type `Ghost`",
    );
    assert_eq!(
        SdlErrorKind::Syntax(SyntaxErrorKind::UnknownSchemaKey {
            key: "queries".to_string(),
        })
        .to_string(),
        "syntax error: unknown schema key: `queries`",
    );
}
