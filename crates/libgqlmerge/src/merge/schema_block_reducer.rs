use crate::ast::RootOperation;
use crate::ast::SchemaBlock;
use crate::ConflictKind;
use crate::SdlError;
use crate::SourceSpan;

/// Reduces every `schema { ... }` block to one.
///
/// The first block supplies the initial root type names. A later block may
/// fill in an operation that is still unset; naming a different type for an
/// operation that is already set is a conflict citing both blocks.
/// Descriptions are concatenated in encounter order.
pub fn reduce_schema_blocks(
    blocks: Vec<SchemaBlock>,
) -> Result<Option<SchemaBlock>, SdlError> {
    let mut blocks = blocks.into_iter();
    let Some(mut reduced) = blocks.next() else {
        return Ok(None);
    };

    // Which block set each operation, indexed like `RootOperation::ALL`.
    let mut origins: [Option<SourceSpan>; 3] = RootOperation::ALL
        .map(|op| reduced.root_type(op).map(|_| reduced.span.clone()));

    for block in blocks {
        for (index, operation) in RootOperation::ALL.into_iter().enumerate() {
            let Some(incoming) = block.root_type(operation) else {
                continue;
            };
            let Some(current) = reduced.root_type(operation).map(str::to_string) else {
                *reduced.root_type_mut(operation) = Some(incoming.to_string());
                origins[index] = Some(block.span.clone());
                continue;
            };
            if current != incoming {
                let origin = origins[index].clone().unwrap_or_else(|| reduced.span.clone());
                return Err(SdlError::conflict(
                    ConflictKind::RootOperationMismatch {
                        operation: operation.key().to_string(),
                        first: current.clone(),
                        second: incoming.to_string(),
                    },
                    format!(
                        "Conflicting schema {operation}: {current}({origin}) and {incoming}({})",
                        block.span,
                    ),
                    block.span.clone(),
                    origin,
                ));
            }
        }
        reduced.descriptions.extend(block.descriptions);
    }

    Ok(Some(reduced))
}

/// The type names acting as query, mutation and subscription roots.
pub fn root_type_names(schema_block: Option<&SchemaBlock>) -> Vec<String> {
    RootOperation::ALL
        .iter()
        .map(|op| {
            schema_block
                .and_then(|block| block.root_type(*op))
                .unwrap_or(op.default_type_name())
                .to_string()
        })
        .collect()
}
