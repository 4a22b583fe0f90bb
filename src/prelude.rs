//! # sercontract Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the sercontract library. Import this module to get quick access to
//! the essential types for declaring runtime types and computing their
//! serialization contracts.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all sercontract operations
pub use crate::Error;

/// The result type used throughout sercontract
pub use crate::Result;

// ================================================================================================
// Identity
// ================================================================================================

/// Metadata token type for referencing types and members
pub use crate::metadata::token::{TableId, Token};

// ================================================================================================
// Type System
// ================================================================================================

/// Runtime type model, registry, and builder
pub use crate::metadata::typesystem::{
    FieldBuilder, PropertyBuilder, RuntimeType, RuntimeTypeList, RuntimeTypeRc, RuntimeTypeRef,
    TypeBuilder, TypeFlavor, TypeRegistry,
};

// ================================================================================================
// Members, Signatures, and Attributes
// ================================================================================================

/// Owned member representations and binding flags
pub use crate::metadata::members::{
    BindingFlags, Field, FieldList, FieldRc, Method, MethodRc, Property, PropertyList, PropertyRc,
};

/// Member type shapes
pub use crate::metadata::signatures::{SignatureProperty, TypeSignature};

/// Custom attribute values
pub use crate::metadata::attributes::{
    CustomAttribute, CustomAttributeArgument, CustomAttributeList, CustomAttributeNamedArgument,
    CustomAttributeRc,
};

// ================================================================================================
// Serialization Contracts
// ================================================================================================

/// Contract discovery, validation, and lookup
pub use crate::metadata::description::{
    ContractMode, DataMemberDescription, DescriptionCache, FieldDescription, PropertyDescription,
    TypeDescription, TypeDescriptionRc, DATA_CONTRACT_ATTRIBUTE_NAME, DATA_MEMBER_ATTRIBUTE_NAME,
    IGNORE_DATA_MEMBER_ATTRIBUTE_NAME, NAME_NAMED_ARGUMENT,
};
