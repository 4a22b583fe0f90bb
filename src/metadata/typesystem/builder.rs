//! Builder for runtime type declarations.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for declaring
//! runtime types with properties, fields, and custom attributes. It allocates tokens from a
//! shared [`TypeRegistry`], synthesizes property accessor methods, and registers the finished
//! type.
//!
//! # Example
//!
//! ```rust
//! use sercontract::metadata::typesystem::{TypeBuilder, TypeRegistry};
//! use sercontract::metadata::signatures::TypeSignature;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let person = TypeBuilder::new(registry.clone())
//!     .class("MyApp.Data", "Person")
//!     .auto_property("Name", TypeSignature::String)
//!     .field("age", TypeSignature::I4)
//!     .build()?;
//! assert_eq!(person.fullname(), "MyApp.Data.Person");
//! # Ok::<(), sercontract::Error>(())
//! ```

use std::sync::Arc;

use crate::{
    metadata::{
        attributes::CustomAttribute,
        members::{
            Field, FieldAttributes, FieldRc, Method, MethodAttributes, Property,
            PropertyRc,
        },
        signatures::{SignatureProperty, TypeSignature},
        token::TableId,
        typesystem::{RuntimeType, RuntimeTypeRc, TypeFlavor, TypeRegistry},
    },
    Error, Result,
};

/// Provides a fluent API for declaring runtime types.
pub struct TypeBuilder {
    /// Type registry for storing the types
    registry: Arc<TypeRegistry>,
    flavor: TypeFlavor,
    namespace: String,
    name: String,
    base: Option<RuntimeTypeRc>,
    attributes: Vec<CustomAttribute>,
    properties: Vec<PropertyBuilder>,
    fields: Vec<FieldBuilder>,
}

impl TypeBuilder {
    /// Create a new builder with the given registry
    ///
    /// ## Arguments
    /// * 'registry' - The type registry to allocate tokens from and register into
    #[must_use]
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        TypeBuilder {
            registry,
            flavor: TypeFlavor::Class,
            namespace: String::new(),
            name: String::new(),
            base: None,
            attributes: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Start building a class with the given name
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for the class type
    /// * 'name'      - Name for the class type
    #[must_use]
    pub fn class(mut self, namespace: &str, name: &str) -> Self {
        self.flavor = TypeFlavor::Class;
        self.namespace = namespace.to_string();
        self.name = name.to_string();
        self
    }

    /// Start building a value type with the given name
    #[must_use]
    pub fn value_type(mut self, namespace: &str, name: &str) -> Self {
        self.flavor = TypeFlavor::ValueType;
        self.namespace = namespace.to_string();
        self.name = name.to_string();
        self
    }

    /// Start building an interface with the given name
    #[must_use]
    pub fn interface(mut self, namespace: &str, name: &str) -> Self {
        self.flavor = TypeFlavor::Interface;
        self.namespace = namespace.to_string();
        self.name = name.to_string();
        self
    }

    /// Set the base type
    #[must_use]
    pub fn extends(mut self, base: &RuntimeTypeRc) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Attach a custom attribute to the type
    #[must_use]
    pub fn attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a public instance property with getter and setter
    ///
    /// ## Arguments
    /// * 'name'      - Name of the property
    /// * 'signature' - The property's declared type
    #[must_use]
    pub fn auto_property(self, name: &str, signature: TypeSignature) -> Self {
        self.property(name, signature, |property| property)
    }

    /// Add a property, configured through the closure
    ///
    /// ## Arguments
    /// * 'name'      - Name of the property
    /// * 'signature' - The property's declared type
    /// * 'configure' - Receives a [`PropertyBuilder`] preset to public/instance/get+set
    #[must_use]
    pub fn property<F>(mut self, name: &str, signature: TypeSignature, configure: F) -> Self
    where
        F: FnOnce(PropertyBuilder) -> PropertyBuilder,
    {
        self.properties
            .push(configure(PropertyBuilder::new(name, signature)));
        self
    }

    /// Add a public instance field
    #[must_use]
    pub fn field(self, name: &str, signature: TypeSignature) -> Self {
        self.field_with(name, signature, |field| field)
    }

    /// Add a field, configured through the closure
    #[must_use]
    pub fn field_with<F>(mut self, name: &str, signature: TypeSignature, configure: F) -> Self
    where
        F: FnOnce(FieldBuilder) -> FieldBuilder,
    {
        self.fields
            .push(configure(FieldBuilder::new(name, signature)));
        self
    }

    /// Build the type, register it, and return the shared handle.
    ///
    /// Members keep the order they were added in: that order is the
    /// declaration order contract discovery preserves.
    ///
    /// # Errors
    /// Returns an error if no type name was set or if registration fails.
    pub fn build(self) -> Result<RuntimeTypeRc> {
        let TypeBuilder {
            registry,
            flavor,
            namespace,
            name,
            base,
            attributes,
            properties,
            fields,
        } = self;

        if name.is_empty() {
            return Err(Error::TypeError(
                "A type name must be set before build".to_string(),
            ));
        }

        let token = registry.next_token(TableId::TypeDef);
        let new_type = Arc::new(RuntimeType::new(
            token,
            flavor,
            namespace,
            name,
            base.as_ref(),
        ));

        for attribute in attributes {
            new_type.custom_attributes.push(Arc::new(attribute));
        }
        for property in properties {
            new_type.properties.push(property.build(&registry));
        }
        for field in fields {
            new_type.fields.push(field.build(&registry));
        }

        registry.insert(&new_type)?;
        Ok(new_type)
    }
}

/// Configures a single property before the owning type is built.
pub struct PropertyBuilder {
    name: String,
    signature: TypeSignature,
    index_params: Vec<TypeSignature>,
    attributes: Vec<CustomAttribute>,
    has_getter: bool,
    has_setter: bool,
    is_public: bool,
    is_static: bool,
}

impl PropertyBuilder {
    fn new(name: &str, signature: TypeSignature) -> Self {
        PropertyBuilder {
            name: name.to_string(),
            signature,
            index_params: Vec::new(),
            attributes: Vec::new(),
            has_getter: true,
            has_setter: true,
            is_public: true,
            is_static: false,
        }
    }

    /// Attach a custom attribute to the property
    #[must_use]
    pub fn attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Drop the setter, leaving a read-only property
    #[must_use]
    pub fn get_only(mut self) -> Self {
        self.has_setter = false;
        self
    }

    /// Drop the getter, leaving a write-only property
    #[must_use]
    pub fn set_only(mut self) -> Self {
        self.has_getter = false;
        self
    }

    /// Make the accessors non-public
    #[must_use]
    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Make the accessors static
    #[must_use]
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Add an index parameter, turning the property into an indexer
    #[must_use]
    pub fn index_param(mut self, signature: TypeSignature) -> Self {
        self.index_params.push(signature);
        self
    }

    fn build(self, registry: &TypeRegistry) -> PropertyRc {
        let access = if self.is_public {
            MethodAttributes::PUBLIC
        } else {
            MethodAttributes::PRIVATE
        };
        let mut accessor_flags = access | MethodAttributes::SPECIAL_NAME;
        if self.is_static {
            accessor_flags |= MethodAttributes::STATIC;
        }

        let property = Property {
            token: registry.next_token(TableId::Property),
            flags: 0,
            name: self.name,
            signature: SignatureProperty {
                has_this: !self.is_static,
                base: self.signature,
                params: self.index_params,
            },
            fn_setter: std::sync::OnceLock::new(),
            fn_getter: std::sync::OnceLock::new(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        };
        for attribute in self.attributes {
            property.custom_attributes.push(Arc::new(attribute));
        }

        if self.has_getter {
            property
                .fn_getter
                .set(Arc::new(Method {
                    token: registry.next_token(TableId::MethodDef),
                    flags: accessor_flags,
                    name: format!("get_{}", property.name),
                }))
                .ok();
        }
        if self.has_setter {
            property
                .fn_setter
                .set(Arc::new(Method {
                    token: registry.next_token(TableId::MethodDef),
                    flags: accessor_flags,
                    name: format!("set_{}", property.name),
                }))
                .ok();
        }

        Arc::new(property)
    }
}

/// Configures a single field before the owning type is built.
pub struct FieldBuilder {
    name: String,
    signature: TypeSignature,
    attributes: Vec<CustomAttribute>,
    is_public: bool,
    is_static: bool,
    init_only: bool,
}

impl FieldBuilder {
    fn new(name: &str, signature: TypeSignature) -> Self {
        FieldBuilder {
            name: name.to_string(),
            signature,
            attributes: Vec::new(),
            is_public: true,
            is_static: false,
            init_only: false,
        }
    }

    /// Attach a custom attribute to the field
    #[must_use]
    pub fn attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Make the field non-public
    #[must_use]
    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Make the field static
    #[must_use]
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the field as assignable only during initialization
    #[must_use]
    pub fn init_only(mut self) -> Self {
        self.init_only = true;
        self
    }

    fn build(self, registry: &TypeRegistry) -> FieldRc {
        let mut flags = if self.is_public {
            FieldAttributes::PUBLIC
        } else {
            FieldAttributes::PRIVATE
        };
        if self.is_static {
            flags |= FieldAttributes::STATIC;
        }
        if self.init_only {
            flags |= FieldAttributes::INIT_ONLY;
        }

        let field = Field {
            token: registry.next_token(TableId::Field),
            flags,
            name: self.name,
            signature: self.signature,
            custom_attributes: Arc::new(boxcar::Vec::new()),
        };
        for attribute in self.attributes {
            field.custom_attributes.push(Arc::new(attribute));
        }

        Arc::new(field)
    }
}
