use crate::ast::Arg;
use crate::ast::DefaultValue;
use crate::ast::Directive;
use crate::ast::TypeRef;
use crate::SourceSpan;

/// A field of a type, interface or input:
/// `name(args): Type = default @directive # comment`.
///
/// `args` is only populated for type and interface fields and
/// `default_value` only for input fields, but the parser accepts both
/// everywhere and the printer renders whatever is present.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub args: Vec<Arg>,
    pub type_ref: TypeRef,
    pub default_value: Option<DefaultValue>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    pub span: SourceSpan,
}
