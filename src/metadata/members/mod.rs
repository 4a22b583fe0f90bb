//! Owned member model: fields, properties, and their accessor methods.
//!
//! Member visibility is answered through [`BindingFlags`], mirroring the
//! reflection flags a serializer passes when enumerating members. A field
//! carries access and staticness in its own flags word; a property derives
//! both from its accessor methods, since that is where they live in metadata.

use bitflags::bitflags;

mod field;
mod method;
mod property;

pub use field::*;
pub use method::*;
pub use property::*;

bitflags! {
    /// Binding flags that select which members an enumeration returns.
    ///
    /// Numeric values follow `System.Reflection.BindingFlags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BindingFlags: u32 {
        /// Only members declared directly on the type, no base walk
        const DECLARED_ONLY = 0x0002;
        /// Instance members
        const INSTANCE = 0x0004;
        /// Static members
        const STATIC = 0x0008;
        /// Publicly accessible members
        const PUBLIC = 0x0010;
        /// Non-public members
        const NON_PUBLIC = 0x0020;
    }
}

/// Whether a member with the given access/staticness matches the binding flags.
pub(crate) fn binding_matches(binding: BindingFlags, is_public: bool, is_static: bool) -> bool {
    let visibility = if is_public {
        binding.contains(BindingFlags::PUBLIC)
    } else {
        binding.contains(BindingFlags::NON_PUBLIC)
    };
    let scope = if is_static {
        binding.contains(BindingFlags::STATIC)
    } else {
        binding.contains(BindingFlags::INSTANCE)
    };

    visibility && scope
}
