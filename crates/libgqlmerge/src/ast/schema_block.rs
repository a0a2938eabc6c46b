use crate::SourceSpan;
use std::fmt;

/// `schema { query: Q mutation: M subscription: S }`
///
/// Any subset of the three root operations may be set. Many blocks (one per
/// file, typically) are reduced to a single block during merge.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaBlock {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub descriptions: Vec<String>,
    pub span: SourceSpan,
}

impl SchemaBlock {
    pub fn root_type(&self, operation: RootOperation) -> Option<&str> {
        match operation {
            RootOperation::Query => self.query.as_deref(),
            RootOperation::Mutation => self.mutation.as_deref(),
            RootOperation::Subscription => self.subscription.as_deref(),
        }
    }

    pub fn root_type_mut(&mut self, operation: RootOperation) -> &mut Option<String> {
        match operation {
            RootOperation::Query => &mut self.query,
            RootOperation::Mutation => &mut self.mutation,
            RootOperation::Subscription => &mut self.subscription,
        }
    }

    /// Whether any root operation is set. A block with none is not printed.
    pub fn has_root_types(&self) -> bool {
        RootOperation::ALL
            .iter()
            .any(|op| self.root_type(*op).is_some())
    }
}

/// The three root operations a schema block can name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}

impl RootOperation {
    /// All operations in printing order.
    pub const ALL: [RootOperation; 3] = [
        RootOperation::Query,
        RootOperation::Mutation,
        RootOperation::Subscription,
    ];

    /// Parses a schema-block key (`query`, `mutation`, `subscription`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// The root type name used when no schema block names one.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for RootOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
