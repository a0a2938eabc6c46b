use crate::ast::Arg;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumDef;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::InputDef;
use crate::ast::InterfaceDef;
use crate::ast::ScalarDef;
use crate::ast::TypeDef;
use crate::ast::UnionDef;

/// Equality in the merge sense: every field takes part except descriptions,
/// trailing comments and source spans.
///
/// Two same-named definitions that are structurally equal are duplicates of
/// one another and get merged. Anything else is a conflict.
///
/// Each implementation lists the compared fields explicitly, so adding a
/// field to an AST type means deciding here whether it counts.
pub trait StructuralEq {
    fn structurally_eq(&self, other: &Self) -> bool;
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.structurally_eq(b))
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.as_slice().structurally_eq(other.as_slice())
    }
}

impl StructuralEq for Directive {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl StructuralEq for Arg {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_ref == other.type_ref
            && self.default_value == other.default_value
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for Field {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.args.structurally_eq(&other.args)
            && self.type_ref == other.type_ref
            && self.default_value == other.default_value
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for EnumValue {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for DirectiveDefinition {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.args.structurally_eq(&other.args)
            && self.repeatable == other.repeatable
            && self.locations == other.locations
    }
}

impl StructuralEq for ScalarDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for EnumDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.values.structurally_eq(&other.values)
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for InterfaceDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.fields.structurally_eq(&other.fields)
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for UnionDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.members == other.members
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for InputDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.fields.structurally_eq(&other.fields)
            && self.directives.structurally_eq(&other.directives)
    }
}

impl StructuralEq for TypeDef {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.implements == other.implements
            && self.fields.structurally_eq(&other.fields)
            && self.directives.structurally_eq(&other.directives)
            && self.is_extension == other.is_extension
    }
}
