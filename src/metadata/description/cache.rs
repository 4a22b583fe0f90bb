use dashmap::DashMap;
use rayon::prelude::*;

use crate::{
    metadata::{
        description::{TypeDescription, TypeDescriptionRc},
        token::Token,
        typesystem::{RuntimeTypeRef, TypeRegistry},
    },
    Error, Result,
};

use std::sync::Arc;

/// Compute-once, read-many storage for [`TypeDescription`] instances.
///
/// Holds at most one description per type token. Construction of a
/// description is expensive (a full member scan), so callers are expected to
/// go through [`DescriptionCache::get_or_build`] instead of constructing
/// directly. The cache itself provides no deduplication of concurrent
/// construction: two threads may both build for the same type, the first
/// inserted result wins, and both callers converge on the same shared
/// description. Discovery is deterministic, so the racing results are
/// interchangeable.
pub struct DescriptionCache {
    descriptions: DashMap<Token, TypeDescriptionRc>,
}

impl DescriptionCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        DescriptionCache {
            descriptions: DashMap::new(),
        }
    }

    /// Look up a cached description by type token.
    #[must_use]
    pub fn get(&self, token: &Token) -> Option<TypeDescriptionRc> {
        self.descriptions.get(token).map(|entry| entry.value().clone())
    }

    /// Returns the description for the referenced type, building it on first use.
    ///
    /// # Errors
    /// Returns [`Error::TypeMissing`] if the reference no longer resolves,
    /// and propagates [`Error::ContractViolation`] from construction. Nothing
    /// is cached on failure, so a later call with a fixed type declaration
    /// starts fresh.
    pub fn get_or_build(&self, object_type: &RuntimeTypeRef) -> Result<TypeDescriptionRc> {
        let token = object_type.token().ok_or(Error::TypeMissing)?;

        if let Some(existing) = self.descriptions.get(&token) {
            return Ok(existing.value().clone());
        }

        let description = Arc::new(TypeDescription::new(object_type)?);
        let entry = self.descriptions.entry(token).or_insert(description);
        Ok(entry.value().clone())
    }

    /// Pre-builds descriptions for every type in the registry, in parallel.
    ///
    /// # Errors
    /// Returns the first construction error encountered; descriptions built
    /// before the failure stay cached.
    pub fn warm(&self, registry: &TypeRegistry) -> Result<()> {
        registry
            .all_types()
            .par_iter()
            .try_for_each(|object_type| {
                self.get_or_build(&RuntimeTypeRef::new(object_type))
                    .map(|_| ())
            })
    }

    /// Number of cached descriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl Default for DescriptionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::signatures::TypeSignature;
    use crate::metadata::typesystem::TypeBuilder;

    #[test]
    fn test_get_or_build_caches_one_description() {
        let registry = Arc::new(TypeRegistry::new());
        let person = TypeBuilder::new(registry)
            .class("MyApp", "Person")
            .auto_property("Name", TypeSignature::String)
            .build()
            .unwrap();
        let cache = DescriptionCache::new();

        let first = cache.get_or_build(&RuntimeTypeRef::new(&person)).unwrap();
        let second = cache.get_or_build(&RuntimeTypeRef::new(&person)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&cache.get(&person.token).unwrap(), &first));
    }

    #[test]
    fn test_warm_builds_every_registered_type() {
        let registry = Arc::new(TypeRegistry::new());
        for name in ["A", "B", "C"] {
            TypeBuilder::new(registry.clone())
                .class("MyApp", name)
                .field("value", TypeSignature::I4)
                .build()
                .unwrap();
        }
        let cache = DescriptionCache::new();

        cache.warm(&registry).unwrap();

        assert_eq!(cache.len(), 3);
        for ty in registry.all_types() {
            assert!(cache.get(&ty.token).is_some());
        }
    }

    #[test]
    fn test_nothing_cached_on_failure() {
        let registry = Arc::new(TypeRegistry::new());
        let broken = TypeBuilder::new(registry)
            .class("MyApp", "Broken")
            .field("value", TypeSignature::I4)
            .field("value", TypeSignature::I8)
            .build()
            .unwrap();
        let cache = DescriptionCache::new();

        assert!(cache
            .get_or_build(&RuntimeTypeRef::new(&broken))
            .is_err());
        assert!(cache.is_empty());
    }
}
