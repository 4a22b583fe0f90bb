//! Runtime type model.
//!
//! A [`RuntimeType`] is the immutable, owned description a contract scan
//! reflects over: token identity, namespace and name, an optional base type,
//! and the fields, properties, and custom attributes declared directly on it.
//! Types are shared as [`RuntimeTypeRc`] handles; back-edges and caller-held
//! handles use the weak [`RuntimeTypeRef`] wrapper so a dropped type is
//! observable instead of leaking through reference cycles.
//!
//! # Key Components
//!
//! - [`RuntimeType`] - the type itself, with binding-flag member enumeration
//! - [`RuntimeTypeRef`] - weak reference wrapper with `upgrade`/`is_valid`
//! - [`TypeRegistry`] - concurrent token-keyed storage and row-id allocation
//! - [`TypeBuilder`] - fluent declaration of new types

mod builder;
mod registry;

pub use builder::*;
pub use registry::*;

use std::{
    fmt,
    sync::{Arc, OnceLock, Weak},
};

use crate::metadata::{
    attributes::{self, CustomAttributeList},
    members::{BindingFlags, FieldList, FieldRc, PropertyList, PropertyRc},
    token::Token,
};

/// A reference-counted pointer to a `RuntimeType`
pub type RuntimeTypeRc = Arc<RuntimeType>;
/// A vector that holds a list of `RuntimeType`
pub type RuntimeTypeList = Arc<boxcar::Vec<RuntimeTypeRc>>;

/// The category of a runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFlavor {
    /// Reference type
    Class,
    /// Value type
    ValueType,
    /// Interface
    Interface,
}

/// A type as the contract scan sees it.
///
/// Member lists hold only members declared directly on this type; base
/// members are reachable through the `base` edge when an enumeration asks
/// for them.
pub struct RuntimeType {
    /// Token
    pub token: Token,
    /// The category of this type
    pub flavor: TypeFlavor,
    /// Namespace (can be empty)
    pub namespace: String,
    /// Name
    pub name: String,
    /// This type's base aka 'extends'
    base: OnceLock<RuntimeTypeRef>,
    /// All fields declared directly on this type
    pub fields: FieldList,
    /// All properties declared directly on this type
    pub properties: PropertyList,
    /// All custom attributes this type has
    pub custom_attributes: CustomAttributeList,
}

impl RuntimeType {
    /// Create a new instance of a `RuntimeType` with empty member lists.
    #[must_use]
    pub fn new(
        token: Token,
        flavor: TypeFlavor,
        namespace: String,
        name: String,
        base: Option<&RuntimeTypeRc>,
    ) -> Self {
        let base_lock = OnceLock::new();
        if let Some(base_value) = base {
            base_lock.set(RuntimeTypeRef::new(base_value)).ok();
        }

        RuntimeType {
            token,
            flavor,
            namespace,
            name,
            base: base_lock,
            fields: Arc::new(boxcar::Vec::new()),
            properties: Arc::new(boxcar::Vec::new()),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// The full name of this type (`Namespace.Name`, or just `Name` without a namespace).
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// The base type, if one was declared and is still alive.
    #[must_use]
    pub fn base(&self) -> Option<RuntimeTypeRc> {
        self.base.get().and_then(RuntimeTypeRef::upgrade)
    }

    /// Sets the base type; has no effect if one was already set.
    pub fn set_base(&self, base: &RuntimeTypeRc) {
        self.base.set(RuntimeTypeRef::new(base)).ok();
    }

    /// Whether this type carries a custom attribute with the given simple name.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        attributes::has_attribute_named(&self.custom_attributes, name)
    }

    /// Properties matching the binding flags, in declaration order.
    ///
    /// Without [`BindingFlags::DECLARED_ONLY`] the base chain is walked,
    /// derived type first.
    #[must_use]
    pub fn properties(&self, binding: BindingFlags) -> Vec<PropertyRc> {
        let mut matching = Vec::new();
        for (_, property) in self.properties.iter() {
            if property.is_visible(binding) {
                matching.push(property.clone());
            }
        }

        if !binding.contains(BindingFlags::DECLARED_ONLY) {
            let mut ancestor = self.base();
            while let Some(base_type) = ancestor {
                for (_, property) in base_type.properties.iter() {
                    if property.is_visible(binding) {
                        matching.push(property.clone());
                    }
                }
                ancestor = base_type.base();
            }
        }

        matching
    }

    /// Fields matching the binding flags, in declaration order.
    ///
    /// Without [`BindingFlags::DECLARED_ONLY`] the base chain is walked,
    /// derived type first.
    #[must_use]
    pub fn fields(&self, binding: BindingFlags) -> Vec<FieldRc> {
        let mut matching = Vec::new();
        for (_, field) in self.fields.iter() {
            if field.is_visible(binding) {
                matching.push(field.clone());
            }
        }

        if !binding.contains(BindingFlags::DECLARED_ONLY) {
            let mut ancestor = self.base();
            while let Some(base_type) = ancestor {
                for (_, field) in base_type.fields.iter() {
                    if field.is_visible(binding) {
                        matching.push(field.clone());
                    }
                }
                ancestor = base_type.base();
            }
        }

        matching
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fullname())
    }
}

/// A smart reference to a `RuntimeType` that automatically handles weak references
/// to prevent circular reference memory leaks while providing a clean API.
///
/// This is also the crate's rendition of a possibly-absent type handle: a
/// dangling reference is the reflection equivalent of a null type argument.
#[derive(Clone, Debug)]
pub struct RuntimeTypeRef {
    weak_ref: Weak<RuntimeType>,
}

impl RuntimeTypeRef {
    /// Create a new `RuntimeTypeRef` from a strong reference
    #[must_use]
    pub fn new(strong_ref: &RuntimeTypeRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<RuntimeTypeRc> {
        self.weak_ref.upgrade()
    }

    /// Check if the referenced type is still alive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weak_ref.strong_count() > 0
    }

    /// Get the token of the referenced type (if still alive)
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.upgrade().map(|t| t.token)
    }

    /// Get the name of the referenced type (if still alive)
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.upgrade().map(|t| t.name.clone())
    }

    /// Get the full name of the referenced type (if still alive)
    #[must_use]
    pub fn fullname(&self) -> Option<String> {
        self.upgrade().map(|t| t.fullname())
    }
}

impl From<RuntimeTypeRc> for RuntimeTypeRef {
    fn from(strong_ref: RuntimeTypeRc) -> Self {
        Self::new(&strong_ref)
    }
}
