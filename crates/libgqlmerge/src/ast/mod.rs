//! AST types for parsed SDL documents.
//!
//! One [`Document`] is produced per source file. Every node owns its strings,
//! so documents can be moved across threads and into the merge engine
//! without borrowing from the source text.
//!
//! Top-level definitions carry a [`SourceSpan`](crate::SourceSpan) pointing
//! at their name. Spans, descriptions and trailing comments are metadata:
//! they are excluded from the structural equality the merge engine uses to
//! tell duplicates from conflicts.
//!
//! Descriptions and comments are stored as the raw text of the tokens they
//! came from (quotes and `#` included), so they can be re-emitted verbatim.
//!
//! # Example
//!
//! ```rust
//! let doc = libgqlmerge::parse_str("type A { id: ID! }", "a.graphql").unwrap();
//! assert_eq!(doc.type_defs[0].name, "A");
//! ```

mod arg;
mod definition_category;
mod directive;
mod directive_definition;
mod document;
mod enum_def;
mod field;
mod input_def;
mod interface_def;
mod scalar_def;
mod schema_block;
mod type_def;
mod type_ref;
mod union_def;

pub use arg::Arg;
pub use arg::DefaultValue;
pub use definition_category::DefinitionCategory;
pub use directive::Directive;
pub use directive::DirectiveArg;
pub use directive_definition::DirectiveDefinition;
pub use document::Document;
pub use enum_def::EnumDef;
pub use enum_def::EnumValue;
pub use field::Field;
pub use input_def::InputDef;
pub use interface_def::InterfaceDef;
pub use scalar_def::ScalarDef;
pub use schema_block::RootOperation;
pub use schema_block::SchemaBlock;
pub use type_def::TypeDef;
pub use type_ref::TypeRef;
pub use union_def::UnionDef;
