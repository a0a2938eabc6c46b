use crate::ast::DefinitionCategory;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumDef;
use crate::ast::InputDef;
use crate::ast::InterfaceDef;
use crate::ast::ScalarDef;
use crate::ast::TypeDef;
use crate::ast::UnionDef;
use crate::merge::absorb::combine_in_args;
use crate::merge::absorb::combine_in_fields;
use crate::merge::combine_repeated_directives;
use crate::merge::Absorb;
use crate::merge::StructuralEq;
use crate::SourceSpan;

/// A named top-level definition that the dedup pass can fold by name.
pub trait MergeableDefinition: Absorb + StructuralEq + Send + Sized {
    /// The namespace this definition's name lives in.
    const CATEGORY: DefinitionCategory;

    fn name(&self) -> &str;

    /// Where the definition's name appears, for conflict diagnostics.
    fn span(&self) -> &SourceSpan;

    /// Collapses repeated directive applications on this definition and on
    /// each of its members.
    fn normalize_directives(&mut self);
}

impl MergeableDefinition for DirectiveDefinition {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Directive;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_in_args(&mut self.args);
    }
}

impl MergeableDefinition for EnumDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Enum;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
        for value in &mut self.values {
            combine_repeated_directives(&mut value.directives);
        }
    }
}

impl MergeableDefinition for InputDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Input;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
        combine_in_fields(&mut self.fields);
    }
}

impl MergeableDefinition for InterfaceDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Interface;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
        combine_in_fields(&mut self.fields);
    }
}

impl MergeableDefinition for ScalarDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Scalar;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
    }
}

impl MergeableDefinition for TypeDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Type;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
        combine_in_fields(&mut self.fields);
    }
}

impl MergeableDefinition for UnionDef {
    const CATEGORY: DefinitionCategory = DefinitionCategory::Union;

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> &SourceSpan {
        &self.span
    }

    fn normalize_directives(&mut self) {
        combine_repeated_directives(&mut self.directives);
    }
}
