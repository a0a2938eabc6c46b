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

/// Folds the human-readable text of a structurally equal duplicate into
/// `self`.
///
/// Descriptions and comments are only ever appended, in encounter order.
/// Children are absorbed pairwise, which is sound because structural
/// equality already guarantees both sides have the same shape.
pub trait Absorb {
    fn absorb(&mut self, other: Self);
}

fn absorb_pairwise<T: Absorb>(into: &mut [T], from: Vec<T>) {
    for (target, incoming) in into.iter_mut().zip(from) {
        target.absorb(incoming);
    }
}

/// Merges directive applications by name.
///
/// A same-named application already present gains the incoming arguments it
/// lacks (compared by name, values and list-ness) plus its descriptions.
/// Any other application is appended.
pub fn merge_directives(into: &mut Vec<Directive>, from: Vec<Directive>) {
    for incoming in from {
        match into.iter_mut().find(|d| d.name == incoming.name) {
            Some(existing) => {
                for arg in incoming.args {
                    if !existing.args.contains(&arg) {
                        existing.args.push(arg);
                    }
                }
                existing.descriptions.extend(incoming.descriptions);
            },
            None => into.push(incoming),
        }
    }
}

/// Combines same-named applications within one directive list, keeping the
/// position of the first one.
pub fn combine_repeated_directives(directives: &mut Vec<Directive>) {
    if directives.len() < 2 {
        return;
    }
    let own = std::mem::take(directives);
    merge_directives(directives, own);
}

pub(crate) fn combine_in_args(args: &mut [Arg]) {
    for arg in args {
        combine_repeated_directives(&mut arg.directives);
    }
}

pub(crate) fn combine_in_fields(fields: &mut [Field]) {
    for field in fields {
        combine_in_args(&mut field.args);
        combine_repeated_directives(&mut field.directives);
    }
}

impl Absorb for Arg {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for Field {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.args, other.args);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for EnumValue {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for DirectiveDefinition {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.args, other.args);
    }
}

impl Absorb for ScalarDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for EnumDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.values, other.values);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for InterfaceDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.fields, other.fields);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for UnionDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for InputDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.fields, other.fields);
        merge_directives(&mut self.directives, other.directives);
    }
}

impl Absorb for TypeDef {
    fn absorb(&mut self, other: Self) {
        self.descriptions.extend(other.descriptions);
        self.comments.extend(other.comments);
        absorb_pairwise(&mut self.fields, other.fields);
        merge_directives(&mut self.directives, other.directives);
    }
}
