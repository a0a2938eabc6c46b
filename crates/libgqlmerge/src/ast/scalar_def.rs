use crate::ast::Directive;
use crate::SourceSpan;

/// `scalar Name @directive`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDef {
    pub name: String,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
