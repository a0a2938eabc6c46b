use crate::ast::Arg;
use crate::ast::DefaultValue;
use crate::ast::Directive;
use crate::ast::DirectiveArg;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumDef;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::InputDef;
use crate::ast::InterfaceDef;
use crate::ast::RootOperation;
use crate::ast::ScalarDef;
use crate::ast::SchemaBlock;
use crate::ast::TypeDef;
use crate::ast::TypeRef;
use crate::ast::UnionDef;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token_source::SdlLexer;
use crate::token_source::SdlTokenSource;
use crate::SdlError;
use crate::SdlErrorKind;
use crate::SdlErrorNote;
use crate::SdlTokenStream;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxErrorKind;
use std::str::Chars;
use std::sync::Arc;

// =============================================================================
// Main parser struct
// =============================================================================

/// A fail-fast recursive descent parser for SDL documents.
///
/// Generic over the token source, so text can be parsed from an in-memory
/// buffer ([`SdlParser::new`]) or from any lazily-produced character stream
/// wrapped in an [`SdlLexer`].
///
/// The first lexical or syntax error aborts parsing; no partial document is
/// returned.
///
/// # Usage
///
/// ```
/// use libgqlmerge::SdlParser;
///
/// let parser = SdlParser::new("type Query { hello: String }", "schema.graphql");
/// let doc = parser.parse_document().unwrap();
/// assert_eq!(doc.type_defs[0].fields[0].name, "hello");
/// ```
pub struct SdlParser<TTokenSource: SdlTokenSource> {
    /// The underlying token stream with lookahead support.
    token_stream: SdlTokenStream<TTokenSource>,

    /// File label used for spans the token source cannot supply.
    file_name: Arc<str>,

    /// End position of the most recently consumed token. Used to anchor
    /// EOF errors and to decide whether a `#` comment trails the previous
    /// token on the same line.
    last_end_position: Option<SourcePosition>,

    /// `#` comments read past the end of a body-less definition. They
    /// describe the next definition.
    carried_descriptions: Vec<String>,
}

impl<'src> SdlParser<SdlLexer<Chars<'src>>> {
    /// Creates a new parser over an already-read text buffer.
    pub fn new(source: &'src str, file_name: impl Into<Arc<str>>) -> Self {
        let file_name = file_name.into();
        Self::from_token_source(SdlLexer::new(source.chars(), file_name.clone()), file_name)
    }
}

impl<TTokenSource: SdlTokenSource> SdlParser<TTokenSource> {
    /// Maximum nesting depth for bracketed list literals.
    ///
    /// Prevents stack overflow from adversarial inputs like `[[[[[...`.
    const MAX_LIST_DEPTH: usize = 32;

    const DEFINITION_KEYWORDS: &[&str] = &[
        "`schema`",
        "`directive`",
        "`scalar`",
        "`enum`",
        "`interface`",
        "`union`",
        "`input`",
        "`type`",
        "`extend`",
    ];

    /// Creates a new parser from a token source.
    pub fn from_token_source(
        token_source: TTokenSource,
        file_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            token_stream: SdlTokenStream::new(token_source),
            file_name: file_name.into(),
            last_end_position: None,
            carried_descriptions: Vec::new(),
        }
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, expected_kind: &SdlTokenKind) -> Result<SdlToken, SdlError> {
        if self.peek_is(expected_kind) {
            return self.consume_expected();
        }
        let expected = format!("`{}`", expected_kind.display());
        Err(self.unexpected(&[expected.as_str()]))
    }

    /// Expects a name and returns its text along with its source span.
    ///
    /// SDL keywords are accepted here: `type`, `input`, `on`, etc. are
    /// valid field, argument, enum value and type names.
    fn expect_name(&mut self, what: &str) -> Result<(String, SourceSpan), SdlError> {
        let is_name = self
            .token_stream
            .peek()
            .is_some_and(|token| token.kind.as_name().is_some());
        if !is_name {
            return Err(self.unexpected(&[what]));
        }

        let token = self.consume_expected()?;
        let name = token.kind.as_name().unwrap_or_default().to_string();
        Ok((name, token.span))
    }

    /// Expects a scalar literal (string, block string, number, or name) and
    /// returns its text.
    fn expect_literal(&mut self) -> Result<String, SdlError> {
        let is_literal = self
            .token_stream
            .peek()
            .is_some_and(|token| token.kind.as_literal().is_some());
        if !is_literal {
            return Err(self.unexpected(&["value"]));
        }

        let token = self.consume_expected()?;
        Ok(token.kind.as_literal().unwrap_or_default().to_string())
    }

    /// Checks if the current token matches the given kind without consuming.
    fn peek_is(&mut self, kind: &SdlTokenKind) -> bool {
        match self.token_stream.peek() {
            Some(token) => token.kind == *kind,
            None => false,
        }
    }

    /// Consumes the next token if it matches `kind`.
    fn consume_if(&mut self, kind: &SdlTokenKind) -> bool {
        if self.peek_is(kind) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    /// Commas are insignificant separators wherever they appear between
    /// list entries.
    fn skip_commas(&mut self) {
        while self.consume_if(&SdlTokenKind::Comma) {}
    }

    /// Builds the error for "the next token is not what we wanted".
    ///
    /// A lexer `Error` token in that position is reported as the lexical
    /// error it carries rather than as a syntax error.
    fn unexpected(&mut self, expected: &[&str]) -> SdlError {
        let expected_display = match expected {
            [single] => single.to_string(),
            many => format!("one of {}", many.join(", ")),
        };
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        let eof_span = self.eof_span();

        match self.token_stream.peek() {
            None => SdlError::new(
                SdlErrorKind::Syntax(SyntaxErrorKind::UnexpectedEof { expected }),
                format!("expected {expected_display}, found end of input"),
                eof_span,
            ),
            Some(SdlToken {
                kind: SdlTokenKind::Error { kind, message, error_notes },
                span,
            }) => SdlError::with_notes(
                SdlErrorKind::Lexical(kind.clone()),
                message.clone(),
                span.clone(),
                error_notes.clone(),
            ),
            Some(SdlToken { kind: SdlTokenKind::Eof, span }) => SdlError::new(
                SdlErrorKind::Syntax(SyntaxErrorKind::UnexpectedEof { expected }),
                format!("expected {expected_display}, found end of input"),
                span.clone(),
            ),
            Some(token) => {
                let found = token.kind.display();
                SdlError::new(
                    SdlErrorKind::Syntax(SyntaxErrorKind::UnexpectedToken {
                        expected,
                        found: found.clone(),
                    }),
                    format!("expected {expected_display}, found `{found}`"),
                    token.span.clone(),
                )
            },
        }
    }

    /// Like [`unexpected()`](Self::unexpected), with a note pointing at the
    /// `{` that is still open when the source runs out.
    fn unexpected_in_braces(&mut self, expected: &[&str], open_span: &SourceSpan) -> SdlError {
        let mut error = self.unexpected(expected);
        if matches!(
            error.kind(),
            SdlErrorKind::Syntax(SyntaxErrorKind::UnexpectedEof { .. })
        ) {
            error = SdlError::with_notes(
                error.kind().clone(),
                error.message(),
                error.span().clone(),
                smallvec::smallvec![SdlErrorNote::general_with_span(
                    "`{` opened here",
                    open_span.clone(),
                )],
            );
        }
        error
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token from the stream and tracks its end position.
    fn consume_token(&mut self) -> Option<SdlToken> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive);
        }
        token
    }

    /// Consumes a token the caller has already peeked at.
    fn consume_expected(&mut self) -> Result<SdlToken, SdlError> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&["a token"])),
        }
    }

    /// Returns a span for EOF errors, anchored to the end of the last
    /// consumed token if available.
    fn eof_span(&self) -> SourceSpan {
        let pos = self.last_end_position.unwrap_or_default();
        SourceSpan::new(self.file_name.clone(), pos, pos)
    }

    // =========================================================================
    // Descriptions and comments
    // =========================================================================

    /// Collects the string, block string and `#` comment tokens that precede
    /// a definition, member, or argument, in source order.
    fn parse_descriptions(&mut self) -> Vec<String> {
        let mut descriptions = std::mem::take(&mut self.carried_descriptions);
        loop {
            let description = match self.token_stream.peek() {
                Some(token) => token.kind.as_description().map(str::to_string),
                None => None,
            };
            match description {
                Some(text) => {
                    self.consume_token();
                    descriptions.push(text);
                },
                None => return descriptions,
            }
        }
    }

    /// Consumes a `#` comment that starts on the line where the previous
    /// token ended. A comment on a later line is left in place: it
    /// describes whatever follows.
    fn parse_trailing_comments(&mut self) -> Vec<String> {
        self.skip_commas();
        let trailing = match (self.token_stream.peek(), self.last_end_position) {
            (Some(SdlToken { kind: SdlTokenKind::LineComment(text), span }), Some(end))
                if span.start_inclusive.line() == end.line() =>
            {
                Some(text.clone())
            },
            _ => None,
        };
        match trailing {
            Some(text) => {
                self.consume_token();
                vec![text]
            },
            None => Vec::new(),
        }
    }

    /// Consumes consecutive `#` comments where the grammar expects
    /// something else, such as between `:` and a type.
    fn parse_interleaved_comments(&mut self) -> Vec<String> {
        let mut comments = Vec::new();
        loop {
            let text = match self.token_stream.peek() {
                Some(SdlToken { kind: SdlTokenKind::LineComment(text), .. }) => text.clone(),
                _ => return comments,
            };
            self.consume_token();
            comments.push(text);
        }
    }

    /// Consumes `#` comments between a definition header and its `{`.
    ///
    /// When a body follows, all of them belong to the definition. Otherwise
    /// only a comment on the header's last line does, and the rest are
    /// carried over as descriptions of the next definition.
    fn parse_comments_before_body(&mut self) -> Vec<String> {
        let header_end_line = self.last_end_position.map(|pos| pos.line());
        let first_on_header_line = matches!(
            self.token_stream.peek(),
            Some(SdlToken { kind: SdlTokenKind::LineComment(_), span })
                if Some(span.start_inclusive.line()) == header_end_line
        );
        let mut comments = self.parse_interleaved_comments();
        if comments.is_empty() || self.peek_is(&SdlTokenKind::CurlyBraceOpen) {
            return comments;
        }

        let own = if first_on_header_line {
            vec![comments.remove(0)]
        } else {
            Vec::new()
        };
        self.carried_descriptions = comments;
        own
    }

    fn drop_dangling_descriptions(&self, descriptions: Vec<String>) {
        if !descriptions.is_empty() {
            log::trace!(
                "{}: dropping {} description(s) with nothing to describe",
                self.eof_span(),
                descriptions.len(),
            );
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a bracketed list of literals. Nested lists are rendered into a
    /// single element, joined with `nested_separator`.
    fn parse_list_literal(
        &mut self,
        nested_separator: &str,
        depth: usize,
    ) -> Result<Vec<String>, SdlError> {
        let open = self.expect(&SdlTokenKind::SquareBracketOpen)?;
        if depth >= Self::MAX_LIST_DEPTH {
            return Err(SdlError::new(
                SdlErrorKind::Syntax(SyntaxErrorKind::NestingTooDeep {
                    max_depth: Self::MAX_LIST_DEPTH,
                }),
                format!("list literal nested deeper than {} levels", Self::MAX_LIST_DEPTH),
                open.span,
            ));
        }

        let mut values = Vec::new();
        loop {
            self.skip_commas();
            if self.peek_is(&SdlTokenKind::SquareBracketClose) {
                break;
            }
            if self.peek_is(&SdlTokenKind::SquareBracketOpen) {
                let nested = self.parse_list_literal(nested_separator, depth + 1)?;
                values.push(format!("[{}]", nested.join(nested_separator)));
            } else if self.token_stream.peek().is_some_and(|t| t.kind.as_literal().is_some()) {
                values.push(self.expect_literal()?);
            } else {
                return Err(self.unexpected(&["value", "`]`"]));
            }
        }
        self.expect(&SdlTokenKind::SquareBracketClose)?;
        Ok(values)
    }

    /// Parses the literal after `=`: `= 10`, `= ADMIN`, `= [A, B]`.
    fn parse_default_value(&mut self) -> Result<DefaultValue, SdlError> {
        self.expect(&SdlTokenKind::Equals)?;
        if self.peek_is(&SdlTokenKind::SquareBracketOpen) {
            Ok(DefaultValue {
                values: self.parse_list_literal(", ", 0)?,
                is_list: true,
            })
        } else {
            Ok(DefaultValue {
                values: vec![self.expect_literal()?],
                is_list: false,
            })
        }
    }

    fn parse_optional_default_value(&mut self) -> Result<Option<DefaultValue>, SdlError> {
        if self.peek_is(&SdlTokenKind::Equals) {
            Ok(Some(self.parse_default_value()?))
        } else {
            Ok(None)
        }
    }

    // =========================================================================
    // Types, directives and arguments
    // =========================================================================

    /// Parses `Name`, `Name!`, `[Name]`, `[Name!]`, `[Name]!` or `[Name!]!`.
    fn parse_type_ref(&mut self) -> Result<TypeRef, SdlError> {
        if self.consume_if(&SdlTokenKind::SquareBracketOpen) {
            let (name, _) = self.expect_name("type name")?;
            let nullable = !self.consume_if(&SdlTokenKind::Bang);
            self.expect(&SdlTokenKind::SquareBracketClose)?;
            let list_nullable = !self.consume_if(&SdlTokenKind::Bang);
            Ok(TypeRef::list(name, nullable, list_nullable))
        } else {
            let (name, _) = self.expect_name("type name")?;
            let nullable = !self.consume_if(&SdlTokenKind::Bang);
            Ok(TypeRef::named(name, nullable))
        }
    }

    /// Parses zero or more `@name(arg: value, ...)` applications.
    fn parse_directives(&mut self) -> Result<Vec<Directive>, SdlError> {
        let mut directives = Vec::new();
        while self.consume_if(&SdlTokenKind::At) {
            let mut descriptions = self.parse_descriptions();
            let (name, _) = self.expect_name("directive name")?;

            let mut args = Vec::new();
            if self.consume_if(&SdlTokenKind::ParenOpen) {
                loop {
                    self.skip_commas();
                    descriptions.extend(self.parse_descriptions());
                    self.skip_commas();
                    if self.peek_is(&SdlTokenKind::ParenClose) {
                        break;
                    }

                    let (arg_name, _) = self.expect_name("directive argument name")?;
                    self.expect(&SdlTokenKind::Colon)?;
                    let arg = if self.peek_is(&SdlTokenKind::SquareBracketOpen) {
                        DirectiveArg {
                            name: arg_name,
                            values: self.parse_list_literal(",", 0)?,
                            is_list: true,
                        }
                    } else {
                        DirectiveArg {
                            name: arg_name,
                            values: vec![self.expect_literal()?],
                            is_list: false,
                        }
                    };
                    args.push(arg);
                }
                self.expect(&SdlTokenKind::ParenClose)?;
            }

            directives.push(Directive {
                name,
                args,
                descriptions,
            });
        }
        Ok(directives)
    }

    /// Parses a parenthesized argument definition list.
    fn parse_arg_defs(&mut self) -> Result<Vec<Arg>, SdlError> {
        self.expect(&SdlTokenKind::ParenOpen)?;
        let mut args = Vec::new();
        loop {
            self.skip_commas();
            let descriptions = self.parse_descriptions();
            self.skip_commas();
            if self.peek_is(&SdlTokenKind::ParenClose) {
                self.drop_dangling_descriptions(descriptions);
                break;
            }
            args.push(self.parse_arg_def(descriptions)?);
        }
        self.expect(&SdlTokenKind::ParenClose)?;
        Ok(args)
    }

    fn parse_arg_def(&mut self, mut descriptions: Vec<String>) -> Result<Arg, SdlError> {
        let (name, _) = self.expect_name("argument name")?;
        self.expect(&SdlTokenKind::Colon)?;
        descriptions.extend(self.parse_interleaved_comments());
        let type_ref = self.parse_type_ref()?;
        let default_value = self.parse_optional_default_value()?;
        let directives = self.parse_directives()?;
        Ok(Arg {
            name,
            type_ref,
            default_value,
            directives,
            descriptions,
        })
    }

    // =========================================================================
    // Fields and enum values
    // =========================================================================

    /// Parses `{ field ... }`, or nothing when the body is omitted.
    fn parse_optional_fields(&mut self) -> Result<Vec<Field>, SdlError> {
        if !self.peek_is(&SdlTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        let open = self.expect(&SdlTokenKind::CurlyBraceOpen)?;

        let mut fields = Vec::new();
        loop {
            self.skip_commas();
            let descriptions = self.parse_descriptions();
            if self.peek_is(&SdlTokenKind::CurlyBraceClose) {
                self.drop_dangling_descriptions(descriptions);
                break;
            }
            if self.token_stream.peek().is_some_and(|t| t.kind.as_name().is_none()) {
                return Err(self.unexpected_in_braces(&["field name", "`}`"], &open.span));
            }
            fields.push(self.parse_field(descriptions)?);
        }
        self.expect(&SdlTokenKind::CurlyBraceClose)?;
        Ok(fields)
    }

    fn parse_field(&mut self, descriptions: Vec<String>) -> Result<Field, SdlError> {
        let (name, span) = self.expect_name("field name")?;
        let args = if self.peek_is(&SdlTokenKind::ParenOpen) {
            self.parse_arg_defs()?
        } else {
            Vec::new()
        };
        self.expect(&SdlTokenKind::Colon)?;
        let mut comments = self.parse_interleaved_comments();
        let type_ref = self.parse_type_ref()?;
        let default_value = self.parse_optional_default_value()?;
        let directives = self.parse_directives()?;
        comments.extend(self.parse_trailing_comments());
        Ok(Field {
            name,
            args,
            type_ref,
            default_value,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    fn parse_optional_enum_values(&mut self) -> Result<Vec<EnumValue>, SdlError> {
        if !self.peek_is(&SdlTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        let open = self.expect(&SdlTokenKind::CurlyBraceOpen)?;

        let mut values = Vec::new();
        loop {
            self.skip_commas();
            let descriptions = self.parse_descriptions();
            if self.peek_is(&SdlTokenKind::CurlyBraceClose) {
                self.drop_dangling_descriptions(descriptions);
                break;
            }
            if self.token_stream.peek().is_some_and(|t| t.kind.as_name().is_none()) {
                return Err(self.unexpected_in_braces(&["enum value", "`}`"], &open.span));
            }
            let (name, _) = self.expect_name("enum value")?;
            let directives = self.parse_directives()?;
            let comments = self.parse_trailing_comments();
            values.push(EnumValue {
                name,
                directives,
                descriptions,
                comments,
            });
        }
        self.expect(&SdlTokenKind::CurlyBraceClose)?;
        Ok(values)
    }

    // =========================================================================
    // Schema block and directive definitions
    // =========================================================================

    /// Parses `schema { query: Q mutation: M subscription: S }`.
    fn parse_schema_block(&mut self, descriptions: Vec<String>) -> Result<SchemaBlock, SdlError> {
        let schema_token = self.expect(&SdlTokenKind::Schema)?;
        let mut block = SchemaBlock {
            query: None,
            mutation: None,
            subscription: None,
            descriptions,
            span: schema_token.span,
        };
        let comments = self.parse_interleaved_comments();
        block.descriptions.extend(comments);
        let open = self.expect(&SdlTokenKind::CurlyBraceOpen)?;

        loop {
            self.skip_commas();
            let inner_descriptions = self.parse_descriptions();
            block.descriptions.extend(inner_descriptions);
            if self.peek_is(&SdlTokenKind::CurlyBraceClose) {
                break;
            }
            if self.token_stream.peek().is_some_and(|t| t.kind.as_name().is_none()) {
                return Err(self.unexpected_in_braces(
                    &["`query`", "`mutation`", "`subscription`", "`}`"],
                    &open.span,
                ));
            }

            let (key, key_span) = self.expect_name("schema key")?;
            let Some(operation) = RootOperation::from_key(&key) else {
                return Err(SdlError::new(
                    SdlErrorKind::Syntax(SyntaxErrorKind::UnknownSchemaKey { key: key.clone() }),
                    format!(
                        "unknown schema key `{key}`; expected `query`, `mutation`, or \
                         `subscription`"
                    ),
                    key_span,
                ));
            };
            self.expect(&SdlTokenKind::Colon)?;
            let comments = self.parse_interleaved_comments();
            block.descriptions.extend(comments);
            let (type_name, _) = self.expect_name("root type name")?;

            let slot = block.root_type_mut(operation);
            if slot.is_some() {
                return Err(SdlError::new(
                    SdlErrorKind::Syntax(SyntaxErrorKind::DuplicateSchemaKey { key: key.clone() }),
                    format!("schema key `{key}` is set more than once"),
                    key_span,
                ));
            }
            *slot = Some(type_name);
        }

        self.expect(&SdlTokenKind::CurlyBraceClose)?;
        Ok(block)
    }

    /// Parses `directive @name(args) [repeatable] on [|] LOC | LOC ...`.
    fn parse_directive_definition(
        &mut self,
        descriptions: Vec<String>,
    ) -> Result<DirectiveDefinition, SdlError> {
        self.expect(&SdlTokenKind::Directive)?;
        self.expect(&SdlTokenKind::At)?;
        let (name, span) = self.expect_name("directive name")?;
        let args = if self.peek_is(&SdlTokenKind::ParenOpen) {
            self.parse_arg_defs()?
        } else {
            Vec::new()
        };
        let repeatable = self.consume_if(&SdlTokenKind::Repeatable);
        self.expect(&SdlTokenKind::On)?;

        self.consume_if(&SdlTokenKind::Pipe);
        let mut locations = Vec::new();
        loop {
            let (location, _) = self.expect_name("directive location")?;
            locations.push(location);
            if !self.consume_if(&SdlTokenKind::Pipe) {
                break;
            }
        }

        let comments = self.parse_trailing_comments();
        Ok(DirectiveDefinition {
            name,
            args,
            repeatable,
            locations,
            descriptions,
            comments,
            span,
        })
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    fn parse_scalar(&mut self, descriptions: Vec<String>) -> Result<ScalarDef, SdlError> {
        self.expect(&SdlTokenKind::Scalar)?;
        let (name, span) = self.expect_name("scalar name")?;
        let directives = self.parse_directives()?;
        let comments = self.parse_trailing_comments();
        Ok(ScalarDef {
            name,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    fn parse_enum(&mut self, descriptions: Vec<String>) -> Result<EnumDef, SdlError> {
        self.expect(&SdlTokenKind::Enum)?;
        let (name, span) = self.expect_name("enum name")?;
        let directives = self.parse_directives()?;
        let mut comments = self.parse_comments_before_body();
        let values = self.parse_optional_enum_values()?;
        comments.extend(self.parse_trailing_comments());
        Ok(EnumDef {
            name,
            values,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    fn parse_interface(&mut self, descriptions: Vec<String>) -> Result<InterfaceDef, SdlError> {
        self.expect(&SdlTokenKind::Interface)?;
        let (name, span) = self.expect_name("interface name")?;
        let directives = self.parse_directives()?;
        let mut comments = self.parse_comments_before_body();
        let fields = self.parse_optional_fields()?;
        comments.extend(self.parse_trailing_comments());
        Ok(InterfaceDef {
            name,
            fields,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    /// Parses `union Name @directive = [|] A | B`. The `= ...` member list
    /// may be omitted.
    fn parse_union(&mut self, descriptions: Vec<String>) -> Result<UnionDef, SdlError> {
        self.expect(&SdlTokenKind::Union)?;
        let (name, span) = self.expect_name("union name")?;
        let directives = self.parse_directives()?;

        let mut members = Vec::new();
        if self.consume_if(&SdlTokenKind::Equals) {
            self.consume_if(&SdlTokenKind::Pipe);
            loop {
                let (member, _) = self.expect_name("union member type")?;
                members.push(member);
                if !self.consume_if(&SdlTokenKind::Pipe) {
                    break;
                }
            }
        }

        let comments = self.parse_trailing_comments();
        Ok(UnionDef {
            name,
            members,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    fn parse_input(&mut self, descriptions: Vec<String>) -> Result<InputDef, SdlError> {
        self.expect(&SdlTokenKind::Input)?;
        let (name, span) = self.expect_name("input name")?;
        let directives = self.parse_directives()?;
        let mut comments = self.parse_comments_before_body();
        let fields = self.parse_optional_fields()?;
        comments.extend(self.parse_trailing_comments());
        Ok(InputDef {
            name,
            fields,
            directives,
            descriptions,
            comments,
            span,
        })
    }

    /// Parses `implements [&] A & B`. Repeated interface names are kept once,
    /// at their first position.
    fn parse_implements(&mut self) -> Result<Vec<String>, SdlError> {
        let mut implements: Vec<String> = Vec::new();
        if !self.consume_if(&SdlTokenKind::Implements) {
            return Ok(implements);
        }

        self.consume_if(&SdlTokenKind::Ampersand);
        loop {
            let (interface, _) = self.expect_name("interface name")?;
            if !implements.contains(&interface) {
                implements.push(interface);
            }
            if !self.consume_if(&SdlTokenKind::Ampersand) {
                break;
            }
        }
        Ok(implements)
    }

    /// Parses `type Name implements A & B @directive { fields }`. The caller
    /// has already consumed `extend` when `is_extension` is set.
    fn parse_type_def(
        &mut self,
        descriptions: Vec<String>,
        is_extension: bool,
    ) -> Result<TypeDef, SdlError> {
        self.expect(&SdlTokenKind::Type)?;
        let (name, span) = self.expect_name("type name")?;
        let implements = self.parse_implements()?;
        let directives = self.parse_directives()?;
        let mut comments = self.parse_comments_before_body();
        let fields = self.parse_optional_fields()?;
        comments.extend(self.parse_trailing_comments());
        Ok(TypeDef {
            name,
            implements,
            fields,
            directives,
            descriptions,
            comments,
            is_extension,
            span,
        })
    }

    fn parse_extension(&mut self, descriptions: Vec<String>) -> Result<TypeDef, SdlError> {
        self.expect(&SdlTokenKind::Extend)?;
        if !self.peek_is(&SdlTokenKind::Type) {
            return Err(self.unexpected(&["`type`"]));
        }
        self.parse_type_def(descriptions, true)
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Parses every top-level definition until end of input.
    pub fn parse_document(mut self) -> Result<Document, SdlError> {
        let mut document = Document::default();

        loop {
            let descriptions = self.parse_descriptions();

            if self.peek_is(&SdlTokenKind::Eof) {
                self.drop_dangling_descriptions(descriptions);
                break;
            } else if self.peek_is(&SdlTokenKind::Schema) {
                document.schema_blocks.push(self.parse_schema_block(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Directive) {
                document
                    .directive_definitions
                    .push(self.parse_directive_definition(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Scalar) {
                document.scalars.push(self.parse_scalar(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Enum) {
                document.enums.push(self.parse_enum(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Interface) {
                document.interfaces.push(self.parse_interface(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Union) {
                document.unions.push(self.parse_union(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Input) {
                document.inputs.push(self.parse_input(descriptions)?);
            } else if self.peek_is(&SdlTokenKind::Type) {
                document.type_defs.push(self.parse_type_def(descriptions, false)?);
            } else if self.peek_is(&SdlTokenKind::Extend) {
                document.type_defs.push(self.parse_extension(descriptions)?);
            } else {
                return Err(self.unexpected(Self::DEFINITION_KEYWORDS));
            }
        }

        Ok(document)
    }
}
