use std::fmt;

/// The per-category namespaces the merge engine deduplicates in.
///
/// The `Display` form is the word used in conflict messages
/// (`Duplicated Type: ...`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionCategory {
    Directive,
    Enum,
    Field,
    Input,
    Interface,
    Scalar,
    Type,
    Union,
}

impl fmt::Display for DefinitionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Directive => "Directive",
            Self::Enum => "Enum",
            Self::Field => "Field",
            Self::Input => "Input",
            Self::Interface => "Interface",
            Self::Scalar => "Scalar",
            Self::Type => "Type",
            Self::Union => "Union",
        })
    }
}
