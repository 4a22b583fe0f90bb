//! Member type shapes.
//!
//! A [`TypeSignature`] describes the declared type of a field or property the
//! way a signature blob would, reduced to the owned form: primitive flavors,
//! strings, object references, named classes and value types, and
//! single-dimensional arrays. Marshalling code consumes these shapes; the
//! contract core only stores them and, for properties, uses the parameter
//! list to recognize indexers.

/// The type shape of a single field, property, or index parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeSignature {
    /// No type (used as the default placeholder)
    #[default]
    Void,
    /// Boolean value
    Boolean,
    /// Character value (16-bit Unicode)
    Char,
    /// Signed 8-bit integer
    I1,
    /// Unsigned 8-bit integer
    U1,
    /// Signed 16-bit integer
    I2,
    /// Unsigned 16-bit integer
    U2,
    /// Signed 32-bit integer
    I4,
    /// Unsigned 32-bit integer
    U4,
    /// Signed 64-bit integer
    I8,
    /// Unsigned 64-bit integer
    U8,
    /// 32-bit floating point
    R4,
    /// 64-bit floating point
    R8,
    /// UTF-8 string
    String,
    /// Object reference
    Object,
    /// Class reference (full name)
    Class(String),
    /// Value type reference (full name)
    ValueType(String),
    /// Single-dimensional array with zero lower bound
    SzArray(Box<TypeSignature>),
}

impl TypeSignature {
    /// Check if this is a primitive type
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeSignature::Void
                | TypeSignature::Boolean
                | TypeSignature::Char
                | TypeSignature::I1
                | TypeSignature::U1
                | TypeSignature::I2
                | TypeSignature::U2
                | TypeSignature::I4
                | TypeSignature::U4
                | TypeSignature::I8
                | TypeSignature::U8
                | TypeSignature::R4
                | TypeSignature::R8
                | TypeSignature::String
                | TypeSignature::Object
        )
    }

    /// Check if this is a reference type
    #[must_use]
    pub fn is_reference_type(&self) -> bool {
        matches!(
            self,
            TypeSignature::String
                | TypeSignature::Object
                | TypeSignature::Class(_)
                | TypeSignature::SzArray(_)
        )
    }
}

/// Signature (type definition) of a property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureProperty {
    /// Indicates the passing of a 'this' pointer
    pub has_this: bool,
    /// The type of this property
    pub base: TypeSignature,
    /// The index parameters of this property
    pub params: Vec<TypeSignature>,
}

impl SignatureProperty {
    /// An indexer is a property that takes one or more index parameters.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        !self.params.is_empty()
    }
}
