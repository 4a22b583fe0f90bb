use thiserror::Error;

use crate::metadata::token::Token;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is raised synchronously while a description or type is being
/// built, never during lookup. Lookup by serialized name reports absence
/// through `Option`, not through this type.
///
/// # Error Categories
///
/// ## Contract Errors
/// - [`Error::TypeMissing`] - The type reference handed to a constructor no longer resolves
/// - [`Error::ContractViolation`] - A type's member set cannot form a valid contract
///
/// ## Type System Errors
/// - [`Error::TypeInsert`] - Failed to register new type in the registry
/// - [`Error::TypeNotFound`] - Requested type not found in the registry
/// - [`Error::TypeError`] - General type system operation error
///
/// # Examples
///
/// ```rust
/// use sercontract::{Error, metadata::description::TypeDescription};
/// use sercontract::metadata::typesystem::{RuntimeType, RuntimeTypeRef, TypeFlavor};
/// use sercontract::metadata::token::Token;
/// use std::sync::Arc;
///
/// let ty = Arc::new(RuntimeType::new(
///     Token::new(0x0200_0001),
///     TypeFlavor::Class,
///     "MyApp".to_string(),
///     "Orphan".to_string(),
///     None,
/// ));
/// let type_ref = RuntimeTypeRef::new(&ty);
/// drop(ty);
///
/// match TypeDescription::new(&type_ref) {
///     Err(Error::TypeMissing) => eprintln!("type reference is gone"),
///     Err(e) => eprintln!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The type reference passed to a constructor does not resolve to a live type.
    ///
    /// A [`crate::metadata::typesystem::RuntimeTypeRef`] is a weak handle; when
    /// the underlying type has been dropped (or was never provided), no
    /// description can be produced. The caller holds the fix - pass a valid
    /// reference. No partial state is created.
    #[error("Type reference is no longer valid or was not provided")]
    TypeMissing,

    /// The type's member declarations cannot produce a valid contract.
    ///
    /// Raised when a discovered member resolves to an empty serialized name,
    /// or when two discovered members share the same serialized name. The
    /// violation aborts construction entirely - no partially valid
    /// description is ever observable.
    ///
    /// # Fields
    ///
    /// * `type_name` - Full name of the offending type
    /// * `violation` - What the type's members violated
    #[error("Type contract violation - '{type_name}': {violation}")]
    ContractViolation {
        /// Full name of the offending type
        type_name: String,
        /// What the type's members violated
        violation: String,
    },

    /// Failed to insert new type into `TypeRegistry`.
    ///
    /// Raised when registering a type whose token is already taken.
    ///
    /// The associated [`Token`] identifies which type caused the failure.
    #[error("Failed to insert new type into TypeRegistry - {0}")]
    TypeInsert(Token),

    /// Failed to find type in `TypeRegistry`.
    ///
    /// The associated [`Token`] identifies which type was not found.
    #[error("Failed to find type in TypeRegistry - {0}")]
    TypeNotFound(Token),

    /// General error during type system usage.
    ///
    /// Covers builder misuse and other type construction failures that don't
    /// fit the more specific variants.
    #[error("{0}")]
    TypeError(String),
}
