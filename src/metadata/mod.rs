//! Runtime type model and serialization contract metadata.
//!
//! This module carries both halves of the crate: the reflection substrate
//! (types, members, attributes) and the contract metadata computed over it.
//!
//! # Key Components
//!
//! - [`typesystem`] - [`typesystem::RuntimeType`], the registry, and the
//!   fluent builder used to declare types
//! - [`members`] - owned representations of fields, properties, and their
//!   accessor methods
//! - [`attributes`] - custom attribute values, matched by simple name
//! - [`description`] - per-type serialization contract discovery, validation,
//!   and name lookup
//! - [`token`] - table/row identity used to key types and members
//! - [`signatures`] - member type shapes consumed by marshalling code
//!
//! # Examples
//!
//! ```rust
//! use sercontract::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let point = TypeBuilder::new(registry.clone())
//!     .value_type("MyApp.Data", "Point")
//!     .field("x", TypeSignature::I4)
//!     .field("y", TypeSignature::I4)
//!     .build()?;
//!
//! let description = TypeDescription::new(&RuntimeTypeRef::new(&point))?;
//! assert_eq!(description.members().len(), 2);
//! # Ok::<(), sercontract::Error>(())
//! ```

/// Implementation of custom attribute values and name-based matching
pub mod attributes;
/// Implementation of serialization contract discovery, validation, and lookup
pub mod description;
/// Implementation of the owned member model (fields, properties, accessors)
pub mod members;
/// Implementation of member type shapes
pub mod signatures;
/// Implementation of table/row identity tokens
pub mod token;
/// Implementation of the runtime type model, registry, and builder
pub mod typesystem;
