use crate::ast::Directive;
use crate::ast::TypeRef;

/// An argument definition, as found in field and directive-definition
/// argument lists: `name: Type = default @directive`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arg {
    pub name: String,
    pub type_ref: TypeRef,
    pub default_value: Option<DefaultValue>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
}

/// The literal after `=` in an argument or input-field definition.
///
/// Either a single literal (`= 10`, `= ADMIN`, `= "x"`) or a bracketed list
/// of literals (`= [A, B]`). Literal text is kept as written, except that
/// integers are canonicalized by the lexer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefaultValue {
    pub values: Vec<String>,
    pub is_list: bool,
}
