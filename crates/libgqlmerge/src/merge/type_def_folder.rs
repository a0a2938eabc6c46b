use crate::ast::DefinitionCategory;
use crate::ast::Field;
use crate::ast::TypeDef;
use crate::merge::dedup::duplicate_definition_error;
use crate::merge::merge_directives;
use crate::merge::Absorb;
use crate::merge::MergeableDefinition;
use crate::merge::StructuralEq;
use crate::ConflictKind;
use crate::SdlError;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Deduplicates object types, folding `extend type` fragments and repeated
/// root operation types into their base definition.
///
/// Non-extension definitions are moved ahead of every extension (stably),
/// so an extension always finds its base if one exists in any file.
/// `root_type_names` are the type names the merged schema block (or the
/// defaults) assigns to query, mutation and subscription; same-named
/// definitions of those accumulate fields instead of being compared whole.
pub fn fold_type_defs(
    type_defs: Vec<TypeDef>,
    root_type_names: &[String],
) -> Result<Vec<TypeDef>, SdlError> {
    let input_len = type_defs.len();
    let (bases, extensions): (Vec<TypeDef>, Vec<TypeDef>) =
        type_defs.into_iter().partition(|def| !def.is_extension);

    let merged = bases.into_iter().chain(extensions).try_fold(
        IndexMap::<String, TypeDef>::with_capacity(input_len),
        |mut seen, mut def| {
            def.normalize_directives();
            match seen.entry(def.name.clone()) {
                Entry::Vacant(entry) => {
                    if def.is_extension {
                        let mut err = SdlError::conflict_without_related(
                            ConflictKind::ExtensionWithoutBase {
                                name: def.name.clone(),
                            },
                            format!(
                                "Extension of undefined type: {}({})",
                                def.name, def.span,
                            ),
                            def.span,
                        );
                        err.add_help(format!("define `type {}` in one of the input files", def.name));
                        return Err(err);
                    }
                    entry.insert(def);
                },
                Entry::Occupied(mut entry) => {
                    let base = entry.get_mut();
                    if def.is_extension || root_type_names.contains(&def.name) {
                        log::trace!(
                            "folding `{}` fragment from {} into {}",
                            def.name,
                            def.span,
                            base.span,
                        );
                        fold_fragment(base, def)?;
                    } else if base.structurally_eq(&def) {
                        log::trace!(
                            "merging duplicate type `{}` from {} into {}",
                            def.name,
                            def.span,
                            base.span,
                        );
                        base.absorb(def);
                    } else {
                        return Err(duplicate_definition_error(
                            DefinitionCategory::Type,
                            &base.name,
                            &base.span,
                            &def.span,
                        ));
                    }
                },
            }
            Ok(seen)
        },
    )?;

    log::debug!(
        "{}: {input_len} definition(s) merged into {}",
        DefinitionCategory::Type,
        merged.len(),
    );
    Ok(merged.into_values().collect())
}

/// Appends a fragment's interfaces, directives, fields and text to `base`.
fn fold_fragment(base: &mut TypeDef, fragment: TypeDef) -> Result<(), SdlError> {
    for interface in fragment.implements {
        if !base.implements.contains(&interface) {
            base.implements.push(interface);
        }
    }
    merge_directives(&mut base.directives, fragment.directives);
    merge_fields(&base.name, &mut base.fields, fragment.fields)?;
    base.descriptions.extend(fragment.descriptions);
    base.comments.extend(fragment.comments);
    Ok(())
}

/// Appends `incoming` fields to `fields`. A field whose name is already
/// present must be structurally equal to it and is absorbed; otherwise the
/// two are a `Duplicated Field` conflict named `Type.field`.
fn merge_fields(
    type_name: &str,
    fields: &mut Vec<Field>,
    incoming: Vec<Field>,
) -> Result<(), SdlError> {
    for field in incoming {
        match fields.iter_mut().find(|existing| existing.name == field.name) {
            Some(existing) if existing.structurally_eq(&field) => existing.absorb(field),
            Some(existing) => {
                return Err(duplicate_definition_error(
                    DefinitionCategory::Field,
                    &format!("{type_name}.{}", existing.name),
                    &existing.span,
                    &field.span,
                ));
            },
            None => fields.push(field),
        }
    }
    Ok(())
}
