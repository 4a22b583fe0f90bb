//! Serialization contract discovery, validation, and lookup.
//!
//! A [`TypeDescription`] is computed once per type and answers three
//! questions for a serializer: which members participate in (de)serialization
//! given the type's contract mode, in what fixed order they are exposed, and
//! how a member is resolved by serialized name in O(1).
//!
//! Contract markers are attribute values matched by *simple name* only
//! (see [`crate::metadata::attributes`]): a marker named
//! [`DATA_CONTRACT_ATTRIBUTE_NAME`] on the type switches it to opt-in mode,
//! and per-member markers named [`DATA_MEMBER_ATTRIBUTE_NAME`] /
//! [`IGNORE_DATA_MEMBER_ATTRIBUTE_NAME`] control inclusion.
//!
//! # Examples
//!
//! ```rust
//! use sercontract::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let settings = TypeBuilder::new(registry.clone())
//!     .class("MyApp", "Settings")
//!     .attribute(CustomAttribute::new(DATA_CONTRACT_ATTRIBUTE_NAME))
//!     .property("Theme", TypeSignature::String, |property| {
//!         property.attribute(CustomAttribute::new(DATA_MEMBER_ATTRIBUTE_NAME))
//!     })
//!     .auto_property("Transient", TypeSignature::String)
//!     .build()?;
//!
//! // Opt-in: only the marked property participates
//! let description = TypeDescription::new(&RuntimeTypeRef::new(&settings))?;
//! assert_eq!(description.members().len(), 1);
//! assert!(description.try_get_member("Theme").is_some());
//! assert!(description.try_get_member("Transient").is_none());
//! # Ok::<(), sercontract::Error>(())
//! ```

mod cache;
mod member;
mod typedescription;

pub use cache::*;
pub use member::*;
pub use typedescription::*;

/// Simple name of the marker that switches a type to opt-in serialization.
pub const DATA_CONTRACT_ATTRIBUTE_NAME: &str = "DataContractAttribute";
/// Simple name of the marker that explicitly includes a member.
pub const DATA_MEMBER_ATTRIBUTE_NAME: &str = "DataMemberAttribute";
/// Simple name of the marker that explicitly excludes a member.
pub const IGNORE_DATA_MEMBER_ATTRIBUTE_NAME: &str = "IgnoreDataMemberAttribute";

/// Named argument on the include marker that overrides the serialized name.
pub const NAME_NAMED_ARGUMENT: &str = "Name";

/// How a type's members are selected for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMode {
    /// Only members carrying the include marker participate
    OptIn,
    /// Every eligible member participates unless it carries the ignore marker
    OptOut,
}
