use crate::ast::Directive;
use crate::ast::Field;
use crate::SourceSpan;

/// `type Name implements A & B @directive { field(args): Type ... }`, or the
/// same prefixed with `extend`.
///
/// Root operation types (`Query`, `Mutation`, `Subscription`, or whatever the
/// schema block names) are ordinary `TypeDef`s; the merge engine accumulates
/// their fields across files and the printer emits them first.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDef {
    pub name: String,
    /// Interface names, deduplicated, in declaration order.
    pub implements: Vec<String>,
    pub fields: Vec<Field>,
    pub directives: Vec<Directive>,
    pub descriptions: Vec<String>,
    pub comments: Vec<String>,
    /// Set for `extend type` fragments. Never set after merge.
    pub is_extension: bool,
    pub span: SourceSpan,
}
