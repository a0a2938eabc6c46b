use crate::ast::Directive;
use crate::SourceSpan;

/// `union Name @directive = A | B | C`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDef {
    pub name: String,
    pub members: Vec<String>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
