use crate::ast::Directive;
use crate::SourceSpan;

/// `enum Name @directive { VALUE ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<EnumValue>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
}
