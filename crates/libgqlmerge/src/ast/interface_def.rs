use crate::ast::Directive;
use crate::ast::Field;
use crate::SourceSpan;

/// `interface Name @directive { field(args): Type ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDef {
    pub name: String,
    pub fields: Vec<Field>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
