use std::sync::Arc;

use crate::metadata::token::Token;

/// A reference to a method
pub type MethodRc = Arc<Method>;

#[allow(non_snake_case)]
/// All possible flags for `MethodAttributes`
pub mod MethodAttributes {
    /// These 3 bits contain one of the following values:
    pub const MEMBER_ACCESS_MASK: u32 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u32 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by sub-types only in this Assembly
    pub const FAM_AND_ASSEM: u32 = 0x0002;
    /// Accessibly by anyone in the Assembly
    pub const ASSEM: u32 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u32 = 0x0004;
    /// Accessibly by sub-types anywhere, plus anyone in assembly
    pub const FAM_OR_ASSEM: u32 = 0x0005;
    /// Accessibly by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
    /// Method cannot be overridden
    pub const FINAL: u32 = 0x0020;
    /// Method is virtual
    pub const VIRTUAL: u32 = 0x0040;
    /// Method is special (property accessors are)
    pub const SPECIAL_NAME: u32 = 0x0800;
}

/// A method declared on a runtime type.
///
/// The contract core only sees methods as property accessors: a property's
/// visibility and staticness live on its getter/setter, not on the property
/// entry itself.
pub struct Method {
    /// Token
    pub token: Token,
    /// a 2-byte bitmask of type `MethodAttributes`, §II.23.1.10
    pub flags: u32,
    /// The name of this method
    pub name: String,
}

impl Method {
    /// Whether the method's access bits grant public visibility.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.flags & MethodAttributes::MEMBER_ACCESS_MASK == MethodAttributes::PUBLIC
    }

    /// Whether the method is static.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags & MethodAttributes::STATIC != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_access_bits() {
        let getter = Method {
            token: Token::new(0x06000001),
            flags: MethodAttributes::PUBLIC | MethodAttributes::SPECIAL_NAME,
            name: "get_Name".to_string(),
        };
        assert!(getter.is_public());
        assert!(!getter.is_static());

        let hidden = Method {
            token: Token::new(0x06000002),
            flags: MethodAttributes::PRIVATE | MethodAttributes::STATIC,
            name: "get_Instance".to_string(),
        };
        assert!(!hidden.is_public());
        assert!(hidden.is_static());
    }
}
