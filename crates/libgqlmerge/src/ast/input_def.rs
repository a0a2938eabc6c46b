use crate::ast::Directive;
use crate::ast::Field;
use crate::SourceSpan;

/// `input Name @directive { field: Type = default ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputDef {
    pub name: String,
    pub fields: Vec<Field>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
