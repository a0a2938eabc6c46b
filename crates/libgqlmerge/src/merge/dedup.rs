use crate::ast::DefinitionCategory;
use crate::merge::MergeableDefinition;
use crate::ConflictKind;
use crate::SdlError;
use crate::SourceSpan;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Deduplicates one category of definitions by name.
///
/// The first occurrence of a name keeps its position. Later occurrences
/// must be structurally equal to it; they are absorbed and dropped.
/// The first unequal pair aborts with a conflict.
pub fn dedup_definitions<T: MergeableDefinition>(
    definitions: Vec<T>,
) -> Result<Vec<T>, SdlError> {
    let input_len = definitions.len();
    let merged = definitions.into_iter().try_fold(
        IndexMap::<String, T>::with_capacity(input_len),
        |mut seen, mut definition| {
            definition.normalize_directives();
            match seen.entry(definition.name().to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                },
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    if !existing.structurally_eq(&definition) {
                        return Err(duplicate_definition_error(
                            T::CATEGORY,
                            existing.name(),
                            existing.span(),
                            definition.span(),
                        ));
                    }
                    log::trace!(
                        "merging duplicate {} `{}` from {} into {}",
                        T::CATEGORY,
                        existing.name(),
                        definition.span(),
                        existing.span(),
                    );
                    existing.absorb(definition);
                },
            }
            Ok(seen)
        },
    )?;

    log::debug!(
        "{}: {input_len} definition(s) merged into {}",
        T::CATEGORY,
        merged.len(),
    );
    Ok(merged.into_values().collect())
}

/// Builds the `Duplicated <Category>: <name>(<earlier>) and (<later>)`
/// conflict.
pub fn duplicate_definition_error(
    category: DefinitionCategory,
    name: &str,
    earlier: &SourceSpan,
    later: &SourceSpan,
) -> SdlError {
    let mut err = SdlError::conflict(
        ConflictKind::DuplicateDefinition {
            category,
            name: name.to_string(),
        },
        format!("Duplicated {category}: {name}({earlier}) and ({later})"),
        later.clone(),
        earlier.clone(),
    );
    err.add_help("make both definitions identical or rename one of them");
    err
}
