//! Concurrent storage for runtime types.
//!
//! The registry follows the storage split used throughout this codebase:
//! lock-free primary storage keyed by token (`SkipMap`) with a concurrent
//! hash map for the full-name index (`DashMap`). Row identifiers are handed
//! out per table from atomic counters, so builders on any number of threads
//! can allocate member tokens without coordination.

use std::sync::atomic::{AtomicU32, Ordering};

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use strum::{EnumCount as _, IntoEnumIterator};

use crate::{
    metadata::{
        token::{TableId, Token},
        typesystem::RuntimeTypeRc,
    },
    Error, Result,
};

/// Concurrent, token-keyed storage for [`crate::metadata::typesystem::RuntimeType`] instances.
pub struct TypeRegistry {
    /// Primary storage, ordered by token
    types: SkipMap<Token, RuntimeTypeRc>,
    /// Full name -> token index
    fullname_index: DashMap<String, Token>,
    /// Next row id per table, indexed by [`TableId`] iteration order
    next_rids: [AtomicU32; TableId::COUNT],
}

impl TypeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: SkipMap::new(),
            fullname_index: DashMap::new(),
            next_rids: std::array::from_fn(|_| AtomicU32::new(1)),
        }
    }

    /// Allocate the next token for the given table.
    ///
    /// # Panics
    /// Panics if the table's row space (24 bits) is exhausted.
    #[must_use]
    pub fn next_token(&self, table: TableId) -> Token {
        let slot = TableId::iter()
            .position(|candidate| candidate == table)
            .unwrap_or_default();

        let rid = self.next_rids[slot].fetch_add(1, Ordering::Relaxed);
        assert!(rid <= 0x00FF_FFFF, "row space exhausted for {:?}", table);

        Token::from_parts(table, rid)
    }

    /// Register a type under its token.
    ///
    /// # Errors
    /// Returns [`Error::TypeInsert`] if a type with the same token is already
    /// registered.
    pub fn insert(&self, new_type: &RuntimeTypeRc) -> Result<()> {
        if self.types.contains_key(&new_type.token) {
            return Err(Error::TypeInsert(new_type.token));
        }

        self.types.get_or_insert(new_type.token, new_type.clone());
        self.fullname_index
            .insert(new_type.fullname(), new_type.token);
        Ok(())
    }

    /// Look up a type by token.
    #[must_use]
    pub fn get(&self, token: &Token) -> Option<RuntimeTypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Look up a type by its full name (`Namespace.Name`).
    #[must_use]
    pub fn get_by_fullname(&self, fullname: &str) -> Option<RuntimeTypeRc> {
        self.fullname_index
            .get(fullname)
            .and_then(|token| self.get(token.value()))
    }

    /// All registered types, in token order.
    #[must_use]
    pub fn all_types(&self) -> Vec<RuntimeTypeRc> {
        self.types
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::typesystem::{RuntimeType, TypeFlavor};
    use std::sync::Arc;

    fn class(token: Token, name: &str) -> RuntimeTypeRc {
        Arc::new(RuntimeType::new(
            token,
            TypeFlavor::Class,
            "MyApp".to_string(),
            name.to_string(),
            None,
        ))
    }

    #[test]
    fn test_next_token_is_per_table() {
        let registry = TypeRegistry::new();

        let first_type = registry.next_token(TableId::TypeDef);
        let first_field = registry.next_token(TableId::Field);
        let second_type = registry.next_token(TableId::TypeDef);

        assert_eq!(first_type, Token::new(0x02000001));
        assert_eq!(first_field, Token::new(0x04000001));
        assert_eq!(second_type, Token::new(0x02000002));
    }

    #[test]
    fn test_insert_and_lookup() {
        let registry = TypeRegistry::new();
        let token = registry.next_token(TableId::TypeDef);
        let ty = class(token, "Person");

        registry.insert(&ty).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get(&token).unwrap(), &ty));
        assert!(Arc::ptr_eq(
            &registry.get_by_fullname("MyApp.Person").unwrap(),
            &ty
        ));
        assert!(registry.get_by_fullname("MyApp.Missing").is_none());
    }

    #[test]
    fn test_insert_duplicate_token_fails() {
        let registry = TypeRegistry::new();
        let token = registry.next_token(TableId::TypeDef);

        registry.insert(&class(token, "First")).unwrap();
        let result = registry.insert(&class(token, "Second"));

        assert!(matches!(result, Err(Error::TypeInsert(t)) if t == token));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_all_types_in_token_order() {
        let registry = TypeRegistry::new();
        for name in ["A", "B", "C"] {
            let token = registry.next_token(TableId::TypeDef);
            registry.insert(&class(token, name)).unwrap();
        }

        let names: Vec<String> = registry
            .all_types()
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
