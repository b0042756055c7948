use std::collections::BTreeMap;

use crate::interpreter::semantic::types::Type;

/// Maps declared variable names to their inferred types.
///
/// The table is flat: there are no nested scopes, and binding a name that is
/// already present replaces its type. Entries iterate in name order.
///
/// # Example
/// ```
/// use foxl::interpreter::semantic::{symbol_table::SymbolTable, types::Type};
///
/// let mut table = SymbolTable::new();
/// table.bind("x", Type::Int);
/// table.bind("x", Type::Float);
/// assert_eq!(table.lookup("x"), Some(Type::Float));
/// assert_eq!(table.lookup("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Type>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `ty`, returning the type it had before, if any.
    pub fn bind(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.symbols.insert(name.into(), ty)
    }

    /// Returns the type bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).copied()
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Whether no name is bound at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over `(name, type)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Type)> {
        self.symbols.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

impl<S: Into<String>> FromIterator<(S, Type)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (S, Type)>>(iter: T) -> Self {
        Self { symbols: iter.into_iter()
                            .map(|(name, ty)| (name.into(), ty))
                            .collect(), }
    }
}
