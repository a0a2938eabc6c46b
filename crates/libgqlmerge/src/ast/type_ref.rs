use std::fmt;

/// A type reference such as `String`, `ID!`, `[Int]` or `[String!]!`.
///
/// Only a single level of list wrapping is modeled. Element and list
/// nullability are independent:
///
/// | Text         | `nullable` | `is_list` | `list_nullable` |
/// |--------------|------------|-----------|-----------------|
/// | `String`     | `true`     | `false`   | `false`         |
/// | `String!`    | `false`    | `false`   | `false`         |
/// | `[String]`   | `true`     | `true`    | `true`          |
/// | `[String!]!` | `false`    | `true`    | `false`         |
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TypeRef {
    /// The named (innermost) type.
    pub name: String,
    /// Nullability of the named type (the element, for lists).
    pub nullable: bool,
    pub is_list: bool,
    /// Nullability of the list container. Always `false` when `!is_list`.
    pub list_nullable: bool,
}

impl TypeRef {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
            is_list: false,
            list_nullable: false,
        }
    }

    pub fn list(name: impl Into<String>, nullable: bool, list_nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
            is_list: true,
            list_nullable,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list {
            f.write_str("[")?;
        }
        f.write_str(&self.name)?;
        if !self.nullable {
            f.write_str("!")?;
        }
        if self.is_list {
            f.write_str("]")?;
            if !self.list_nullable {
                f.write_str("!")?;
            }
        }
        Ok(())
    }
}
