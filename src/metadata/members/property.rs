use std::sync::{Arc, OnceLock};

use crate::metadata::{
    attributes::CustomAttributeList,
    members::{binding_matches, BindingFlags, MethodRc},
    signatures::SignatureProperty,
    token::Token,
};

/// A reference to a `Property`
pub type PropertyRc = Arc<Property>;
/// A vector that holds a list of `Property`
pub type PropertyList = Arc<boxcar::Vec<PropertyRc>>;

#[allow(non_snake_case)]
/// All possible flags for `PropertyAttributes`
pub mod PropertyAttributes {
    /// Property is special
    pub const SPECIAL_NAME: u32 = 0x0200;
    /// Runtime (metadata internal APIs) should check name encoding
    pub const RT_SPECIAL_NAME: u32 = 0x0400;
    /// Property has default
    pub const HAS_DEFAULT: u32 = 0x1000;
}

/// A property declared on a [`crate::metadata::typesystem::RuntimeType`].
///
/// Access and staticness are not encoded in the property's own flags word;
/// they are derived from whichever accessor methods exist.
pub struct Property {
    /// Token
    pub token: Token,
    /// a 2-byte bitmask of type `PropertyAttributes`, §II.23.1.14
    pub flags: u32,
    /// The name of this property
    pub name: String,
    /// Signature (type definition) of this property
    pub signature: SignatureProperty,
    /// The `Method` that sets this property
    pub fn_setter: OnceLock<MethodRc>,
    /// The `Method` that retrieves this property
    pub fn_getter: OnceLock<MethodRc>,
    /// Custom attributes attached to this property
    pub custom_attributes: CustomAttributeList,
}

impl Property {
    /// Whether this property takes index parameters.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.signature.is_indexer()
    }

    /// Whether a getter exists.
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.fn_getter.get().is_some()
    }

    /// Whether a setter exists.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.fn_setter.get().is_some()
    }

    /// Whether this property is returned by an enumeration with the given binding flags.
    ///
    /// A property matches when any of its accessors matches.
    #[must_use]
    pub fn is_visible(&self, binding: BindingFlags) -> bool {
        self.accessors()
            .any(|accessor| binding_matches(binding, accessor.is_public(), accessor.is_static()))
    }

    fn accessors(&self) -> impl Iterator<Item = &MethodRc> {
        self.fn_getter.get().into_iter().chain(self.fn_setter.get())
    }
}
