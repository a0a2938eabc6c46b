use crate::ast::Arg;
use crate::ast::DefaultValue;
use crate::ast::Directive;
use crate::ast::DirectiveArg;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumDef;
use crate::ast::Field;
use crate::ast::InputDef;
use crate::ast::InterfaceDef;
use crate::ast::RootOperation;
use crate::ast::ScalarDef;
use crate::ast::SchemaBlock;
use crate::ast::TypeDef;
use crate::ast::UnionDef;
use crate::merge::root_type_names;

/// Renders a [`Document`] back into SDL text.
///
/// Output is a pure function of the document and the indent unit:
///
/// - the schema block (only when it names a root type), then directive
///   definitions, root operation types (query, mutation, subscription),
///   the remaining object types, scalars, enums, interfaces, unions and
///   inputs;
/// - one blank line between top-level blocks and a single trailing newline;
/// - only the first description and the first trailing comment of each
///   node are printed;
/// - argument and directive-argument lists with more than two entries are
///   wrapped one entry per line;
/// - directives are sorted by name, descending.
///
/// ```
/// use libgqlmerge::SdlSerializer;
///
/// let doc = libgqlmerge::parse_str("scalar Date", "a.graphql").unwrap();
/// assert_eq!(SdlSerializer::new("  ").serialize(&doc), "scalar Date\n");
/// ```
pub struct SdlSerializer<'indent> {
    buf: String,
    indent_unit: &'indent str,
}

impl<'indent> SdlSerializer<'indent> {
    /// Lists with more entries than this are wrapped one entry per line.
    const MAX_INLINE_ENTRIES: usize = 2;

    pub fn new(indent_unit: &'indent str) -> Self {
        Self {
            buf: String::new(),
            indent_unit,
        }
    }

    pub fn serialize(mut self, document: &Document) -> String {
        if let Some(block) = document.schema_blocks.first()
            && block.has_root_types()
        {
            self.begin_block();
            self.write_schema_block(block);
        }

        for def in &document.directive_definitions {
            self.begin_block();
            self.write_directive_definition(def);
        }

        for def in ordered_type_defs(document) {
            self.begin_block();
            self.write_type_def(def);
        }

        for def in &document.scalars {
            self.begin_block();
            self.write_scalar(def);
        }

        for def in &document.enums {
            self.begin_block();
            self.write_enum(def);
        }

        for def in &document.interfaces {
            self.begin_block();
            self.write_interface(def);
        }

        for def in &document.unions {
            self.begin_block();
            self.write_union(def);
        }

        for def in &document.inputs {
            self.begin_block();
            self.write_input(def);
        }

        self.buf
    }

    // =========================================================================
    // Layout helpers
    // =========================================================================

    /// Separates top-level blocks by a blank line. Every block ends in `\n`.
    fn begin_block(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push_str(self.indent_unit);
        }
    }

    fn write_descriptions(&mut self, descriptions: &[String], depth: usize) {
        if let Some(first) = descriptions.first() {
            self.write_indent(depth);
            self.buf.push_str(first);
            self.buf.push('\n');
        }
    }

    fn write_comments(&mut self, comments: &[String]) {
        if let Some(first) = comments.first() {
            self.buf.push(' ');
            self.buf.push_str(first);
        }
    }

    // =========================================================================
    // Directives, arguments and values
    // =========================================================================

    /// Writes ` @b(...) @a` for the directives of a node at `depth`.
    fn write_directives(&mut self, directives: &[Directive], depth: usize) {
        let mut sorted: Vec<&Directive> = directives.iter().collect();
        sorted.sort_by(|a, b| b.name.cmp(&a.name));

        for directive in sorted {
            self.buf.push_str(" @");
            self.buf.push_str(&directive.name);
            if directive.args.is_empty() {
                continue;
            }

            self.buf.push('(');
            if directive.args.len() > Self::MAX_INLINE_ENTRIES {
                self.buf.push('\n');
                for arg in &directive.args {
                    self.write_indent(depth + 1);
                    self.write_directive_arg(arg);
                    self.buf.push('\n');
                }
                self.write_indent(depth);
            } else {
                for (i, arg) in directive.args.iter().enumerate() {
                    if i > 0 {
                        self.buf.push_str(", ");
                    }
                    self.write_directive_arg(arg);
                }
            }
            self.buf.push(')');
        }
    }

    fn write_directive_arg(&mut self, arg: &DirectiveArg) {
        self.buf.push_str(&arg.name);
        self.buf.push_str(": ");
        let values = arg.values.join(",");
        if arg.is_list {
            self.buf.push('[');
            self.buf.push_str(&values);
            self.buf.push(']');
        } else {
            self.buf.push_str(&values);
        }
    }

    fn write_default_value(&mut self, default_value: Option<&DefaultValue>) {
        let Some(default_value) = default_value else {
            return;
        };
        self.buf.push_str(" = ");
        let values = default_value.values.join(", ");
        if default_value.is_list {
            self.buf.push('[');
            self.buf.push_str(&values);
            self.buf.push(']');
        } else {
            self.buf.push_str(&values);
        }
    }

    /// Writes a parenthesized argument list for an owner sitting at
    /// `owner_depth`. Wrapped entries go one level deeper and the closing
    /// `)` lines up with the owner.
    fn write_args(&mut self, args: &[Arg], owner_depth: usize) {
        if args.is_empty() {
            return;
        }

        // A described argument cannot share a line: `#` descriptions would
        // swallow the rest of it.
        let wrap = args.len() > Self::MAX_INLINE_ENTRIES
            || args.iter().any(|arg| !arg.descriptions.is_empty());

        self.buf.push('(');
        if wrap {
            self.buf.push('\n');
            for arg in args {
                self.write_descriptions(&arg.descriptions, owner_depth + 1);
                self.write_indent(owner_depth + 1);
                self.write_arg(arg, owner_depth + 1);
                self.buf.push('\n');
            }
            self.write_indent(owner_depth);
        } else {
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    self.buf.push_str(", ");
                }
                self.write_arg(arg, owner_depth);
            }
        }
        self.buf.push(')');
    }

    fn write_arg(&mut self, arg: &Arg, depth: usize) {
        self.buf.push_str(&arg.name);
        self.buf.push_str(": ");
        self.buf.push_str(&arg.type_ref.to_string());
        self.write_default_value(arg.default_value.as_ref());
        self.write_directives(&arg.directives, depth);
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Writes `{ ... }` around `fields`, or nothing for an empty body.
    fn write_fields(&mut self, fields: &[Field]) {
        if fields.is_empty() {
            return;
        }
        self.buf.push_str(" {\n");
        for field in fields {
            self.write_field(field);
        }
        self.buf.push('}');
    }

    fn write_field(&mut self, field: &Field) {
        self.write_descriptions(&field.descriptions, 1);
        self.write_indent(1);
        self.buf.push_str(&field.name);
        self.write_args(&field.args, 1);
        self.buf.push_str(": ");
        self.buf.push_str(&field.type_ref.to_string());
        self.write_default_value(field.default_value.as_ref());
        self.write_directives(&field.directives, 1);
        self.write_comments(&field.comments);
        self.buf.push('\n');
    }

    // =========================================================================
    // Top-level definitions
    // =========================================================================

    fn write_schema_block(&mut self, block: &SchemaBlock) {
        self.write_descriptions(&block.descriptions, 0);
        self.buf.push_str("schema {\n");
        for operation in RootOperation::ALL {
            if let Some(type_name) = block.root_type(operation) {
                self.write_indent(1);
                self.buf.push_str(operation.key());
                self.buf.push_str(": ");
                self.buf.push_str(type_name);
                self.buf.push('\n');
            }
        }
        self.buf.push_str("}\n");
    }

    fn write_directive_definition(&mut self, def: &DirectiveDefinition) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("directive @");
        self.buf.push_str(&def.name);
        self.write_args(&def.args, 0);
        if def.repeatable {
            self.buf.push_str(" repeatable");
        }
        self.buf.push_str(" on ");
        self.buf.push_str(&def.locations.join(" | "));
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_type_def(&mut self, def: &TypeDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("type ");
        self.buf.push_str(&def.name);
        if !def.implements.is_empty() {
            self.buf.push_str(" implements ");
            self.buf.push_str(&def.implements.join(" & "));
        }
        self.write_directives(&def.directives, 0);
        self.write_fields(&def.fields);
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_scalar(&mut self, def: &ScalarDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("scalar ");
        self.buf.push_str(&def.name);
        self.write_directives(&def.directives, 0);
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_enum(&mut self, def: &EnumDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("enum ");
        self.buf.push_str(&def.name);
        self.write_directives(&def.directives, 0);
        if !def.values.is_empty() {
            self.buf.push_str(" {\n");
            for value in &def.values {
                self.write_descriptions(&value.descriptions, 1);
                self.write_indent(1);
                self.buf.push_str(&value.name);
                self.write_directives(&value.directives, 1);
                self.write_comments(&value.comments);
                self.buf.push('\n');
            }
            self.buf.push('}');
        }
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_interface(&mut self, def: &InterfaceDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("interface ");
        self.buf.push_str(&def.name);
        self.write_directives(&def.directives, 0);
        self.write_fields(&def.fields);
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_union(&mut self, def: &UnionDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("union ");
        self.buf.push_str(&def.name);
        self.write_directives(&def.directives, 0);
        if !def.members.is_empty() {
            self.buf.push_str(" = ");
            self.buf.push_str(&def.members.join(" | "));
        }
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }

    fn write_input(&mut self, def: &InputDef) {
        self.write_descriptions(&def.descriptions, 0);
        self.buf.push_str("input ");
        self.buf.push_str(&def.name);
        self.write_directives(&def.directives, 0);
        self.write_fields(&def.fields);
        self.write_comments(&def.comments);
        self.buf.push('\n');
    }
}

/// Object types in output order: the root operation types first (query,
/// mutation, subscription), then every other type in document order.
fn ordered_type_defs(document: &Document) -> Vec<&TypeDef> {
    let root_names = root_type_names(document.schema_blocks.first());
    let mut ordered: Vec<&TypeDef> = Vec::with_capacity(document.type_defs.len());

    for (i, root_name) in root_names.iter().enumerate() {
        // One type may serve several operations.
        if root_names[..i].contains(root_name) {
            continue;
        }
        ordered.extend(document.type_defs.iter().filter(|def| &def.name == root_name));
    }
    for def in &document.type_defs {
        if !root_names.contains(&def.name) {
            ordered.push(def);
        }
    }
    ordered
}
