use crate::ast::DirectiveDefinition;
use crate::ast::EnumDef;
use crate::ast::InputDef;
use crate::ast::InterfaceDef;
use crate::ast::ScalarDef;
use crate::ast::SchemaBlock;
use crate::ast::TypeDef;
use crate::ast::UnionDef;

// =========================================================
// Document
// =========================================================

/// Root AST node: every top-level definition found in one source file (or,
/// after merging, across all source files), grouped by category.
///
/// Within each category, entries keep their declaration order. The parser
/// creates one `Document` per file; [`merge()`](crate::merge()) consumes them
/// and produces the unified one, in which every name is unique per category
/// and no `TypeDef` is an extension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub schema_blocks: Vec<SchemaBlock>,
    pub directive_definitions: Vec<DirectiveDefinition>,
    pub scalars: Vec<ScalarDef>,
    pub enums: Vec<EnumDef>,
    pub interfaces: Vec<InterfaceDef>,
    pub unions: Vec<UnionDef>,
    pub inputs: Vec<InputDef>,
    pub type_defs: Vec<TypeDef>,
}

impl Document {
    /// Total number of top-level definitions, schema blocks included.
    pub fn definition_count(&self) -> usize {
        self.schema_blocks.len()
            + self.directive_definitions.len()
            + self.scalars.len()
            + self.enums.len()
            + self.interfaces.len()
            + self.unions.len()
            + self.inputs.len()
            + self.type_defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition_count() == 0
    }

    /// Moves every definition of `other` to the end of the matching category
    /// list of `self`, preserving order.
    pub fn append(&mut self, other: Document) {
        self.schema_blocks.extend(other.schema_blocks);
        self.directive_definitions.extend(other.directive_definitions);
        self.scalars.extend(other.scalars);
        self.enums.extend(other.enums);
        self.interfaces.extend(other.interfaces);
        self.unions.extend(other.unions);
        self.inputs.extend(other.inputs);
        self.type_defs.extend(other.type_defs);
    }
}
