/// A directive application: `@name(arg: value, ...)`.
///
/// Any description-bearing tokens found in front of the directive name or
/// its argument names are collected into `descriptions`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub args: Vec<DirectiveArg>,
    pub descriptions: Vec<String>,
}

/// One `name: value` pair of a directive application.
///
/// `values` holds a single literal unless `is_list` is set, in which case it
/// holds the list's elements. Nested lists are stored pre-rendered as one
/// element (e.g. `"[a,b]"`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirectiveArg {
    pub name: String,
    pub values: Vec<String>,
    pub is_list: bool,
}
