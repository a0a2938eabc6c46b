use crate::ast::Arg;
use crate::SourceSpan;

/// `directive @name(args) [repeatable] on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub args: Vec<Arg>,
    pub repeatable: bool,
    /// Location keywords in declaration order (e.g. `FIELD_DEFINITION`).
    pub locations: Vec<String>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
