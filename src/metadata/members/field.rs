use std::sync::Arc;

use crate::metadata::{
    attributes::CustomAttributeList,
    members::{binding_matches, BindingFlags},
    signatures::TypeSignature,
    token::Token,
};

/// A reference to a field
pub type FieldRc = Arc<Field>;
/// A vector that holds a list of `Field`
pub type FieldList = Arc<boxcar::Vec<FieldRc>>;

#[allow(non_snake_case)]
/// All possible flags for `FieldAttributes`
pub mod FieldAttributes {
    /// These 3 bits contain one of the following values:
    pub const FIELD_ACCESS_MASK: u32 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u32 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by sub-types only in this Assembly
    pub const FAM_AND_ASSEM: u32 = 0x0002;
    /// Accessibly by anyone in the Assembly
    pub const ASSEMBLY: u32 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u32 = 0x0004;
    /// Accessibly by sub-types anywhere, plus anyone in assembly
    pub const FAM_OR_ASSEM: u32 = 0x0005;
    /// Accessibly by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
    /// Field can only be initialized, not written to after init
    pub const INIT_ONLY: u32 = 0x0020;
    /// Value is compile time constant
    pub const LITERAL: u32 = 0x0040;
    /// Reserved (to indicate this field should not be serialized when type is remoted)
    pub const NOT_SERIALIZED: u32 = 0x0080;
    /// Field is special
    pub const SPECIAL_NAME: u32 = 0x0200;
}

/// A field declared on a [`crate::metadata::typesystem::RuntimeType`].
pub struct Field {
    /// Token
    pub token: Token,
    /// a 2-byte bitmask of type `FieldAttributes`, §II.23.1.5
    pub flags: u32,
    /// The name of this field
    pub name: String,
    /// The declared type of this field
    pub signature: TypeSignature,
    /// Custom attributes attached to this field
    pub custom_attributes: CustomAttributeList,
}

impl Field {
    /// Whether the field's access bits grant public visibility.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.flags & FieldAttributes::FIELD_ACCESS_MASK == FieldAttributes::PUBLIC
    }

    /// Whether the field is static.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags & FieldAttributes::STATIC != 0
    }

    /// Whether the field can only be assigned during initialization.
    #[must_use]
    pub fn is_init_only(&self) -> bool {
        self.flags & FieldAttributes::INIT_ONLY != 0
    }

    /// Whether the field is a compile time constant.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.flags & FieldAttributes::LITERAL != 0
    }

    /// Whether this field is returned by an enumeration with the given binding flags.
    #[must_use]
    pub fn is_visible(&self, binding: BindingFlags) -> bool {
        binding_matches(binding, self.is_public(), self.is_static())
    }
}
