//! The merge/dedup engine: folds many per-file [`Document`]s into one in
//! which every name is unique within its category.

mod absorb;
mod dedup;
mod mergeable_definition;
mod schema_block_reducer;
mod structural_eq;
mod type_def_folder;

pub use absorb::combine_repeated_directives;
pub use absorb::merge_directives;
pub use absorb::Absorb;
pub use dedup::dedup_definitions;
pub use mergeable_definition::MergeableDefinition;
pub use schema_block_reducer::reduce_schema_blocks;
pub use schema_block_reducer::root_type_names;
pub use structural_eq::StructuralEq;
pub use type_def_folder::fold_type_defs;

use crate::ast::Document;
use crate::SdlError;

/// Merges per-file documents into a single document.
///
/// Definitions are concatenated per category in document order, then each
/// category is deduplicated independently (in parallel, on the rayon pool).
/// The schema blocks are reduced first since the resulting root type names
/// decide which object types accumulate fields across files.
///
/// The output order of every category depends only on the input order. If
/// several categories fail, the reported error is the first one in
/// [`Document`] field order.
pub fn merge(documents: Vec<Document>) -> Result<Document, SdlError> {
    let mut combined = Document::default();
    for document in documents {
        combined.append(document);
    }
    let Document {
        schema_blocks,
        directive_definitions,
        scalars,
        enums,
        interfaces,
        unions,
        inputs,
        type_defs,
    } = combined;

    let schema_block = reduce_schema_blocks(schema_blocks)?;
    let root_names = root_type_names(schema_block.as_ref());

    let ((directive_definitions, scalars), ((enums, interfaces), ((unions, inputs), type_defs))) =
        rayon::join(
            || {
                rayon::join(
                    || dedup_definitions(directive_definitions),
                    || dedup_definitions(scalars),
                )
            },
            || {
                rayon::join(
                    || rayon::join(|| dedup_definitions(enums), || dedup_definitions(interfaces)),
                    || {
                        rayon::join(
                            || rayon::join(|| dedup_definitions(unions), || dedup_definitions(inputs)),
                            || fold_type_defs(type_defs, &root_names),
                        )
                    },
                )
            },
        );

    let directive_definitions = directive_definitions?;
    let scalars = scalars?;
    let enums = enums?;
    let interfaces = interfaces?;
    let unions = unions?;
    let inputs = inputs?;
    let type_defs = type_defs?;

    Ok(Document {
        schema_blocks: schema_block.into_iter().collect(),
        directive_definitions,
        scalars,
        enums,
        interfaces,
        unions,
        inputs,
        type_defs,
    })
}
