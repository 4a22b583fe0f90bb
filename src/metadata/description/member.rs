use crate::metadata::{
    attributes::{self, CustomAttributeList},
    description::{DATA_MEMBER_ATTRIBUTE_NAME, NAME_NAMED_ARGUMENT},
    members::{FieldRc, PropertyRc},
    token::Token,
};

/// Resolves the serialized name of a member.
///
/// An include marker with a string `Name` argument overrides the declared
/// member name; otherwise the declared name is used as-is. The result may be
/// empty (an explicit empty override), which discovery rejects.
fn resolved_name(declared: &str, custom_attributes: &CustomAttributeList) -> String {
    attributes::find_by_name(custom_attributes, DATA_MEMBER_ATTRIBUTE_NAME)
        .and_then(|attribute| attribute.string_named_arg(NAME_NAMED_ARGUMENT))
        .unwrap_or(declared)
        .to_string()
}

/// A field-backed data member.
pub struct FieldDescription {
    name: String,
    field: FieldRc,
}

impl FieldDescription {
    pub(crate) fn new(field: &FieldRc) -> Self {
        FieldDescription {
            name: resolved_name(&field.name, &field.custom_attributes),
            field: field.clone(),
        }
    }

    /// The serialized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying declared field.
    #[must_use]
    pub fn field(&self) -> &FieldRc {
        &self.field
    }

    /// A field value can always be read.
    #[must_use]
    pub fn can_read(&self) -> bool {
        true
    }

    /// Whether the field accepts writes after initialization.
    #[must_use]
    pub fn can_write(&self) -> bool {
        !self.field.is_init_only() && !self.field.is_literal()
    }
}

/// A property-backed data member.
pub struct PropertyDescription {
    name: String,
    property: PropertyRc,
}

impl PropertyDescription {
    pub(crate) fn new(property: &PropertyRc) -> Self {
        PropertyDescription {
            name: resolved_name(&property.name, &property.custom_attributes),
            property: property.clone(),
        }
    }

    /// The serialized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying declared property.
    #[must_use]
    pub fn property(&self) -> &PropertyRc {
        &self.property
    }

    /// Whether the property has a getter.
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.property.can_read()
    }

    /// Whether the property has a setter.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.property.can_write()
    }
}

/// A single member participating in serialization.
///
/// The two variants differ only in how a value is eventually read or written
/// by marshalling code; discovery, naming, and lookup treat them uniformly.
pub enum DataMemberDescription {
    /// Backed by a declared field
    Field(FieldDescription),
    /// Backed by a declared property
    Property(PropertyDescription),
}

impl DataMemberDescription {
    /// The serialized name used as the lookup key.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            DataMemberDescription::Field(field) => field.name(),
            DataMemberDescription::Property(property) => property.name(),
        }
    }

    /// The declared name of the underlying member (for diagnostics).
    #[must_use]
    pub fn member_name(&self) -> &str {
        match self {
            DataMemberDescription::Field(field) => &field.field().name,
            DataMemberDescription::Property(property) => &property.property().name,
        }
    }

    /// The token of the underlying member.
    #[must_use]
    pub fn member_token(&self) -> Token {
        match self {
            DataMemberDescription::Field(field) => field.field().token,
            DataMemberDescription::Property(property) => property.property().token,
        }
    }

    /// Whether the member's value can be read.
    #[must_use]
    pub fn can_read(&self) -> bool {
        match self {
            DataMemberDescription::Field(field) => field.can_read(),
            DataMemberDescription::Property(property) => property.can_read(),
        }
    }

    /// Whether the member's value can be written.
    #[must_use]
    pub fn can_write(&self) -> bool {
        match self {
            DataMemberDescription::Field(field) => field.can_write(),
            DataMemberDescription::Property(property) => property.can_write(),
        }
    }

    /// The underlying field, when field-backed.
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldRc> {
        match self {
            DataMemberDescription::Field(field) => Some(field.field()),
            DataMemberDescription::Property(_) => None,
        }
    }

    /// The underlying property, when property-backed.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyRc> {
        match self {
            DataMemberDescription::Field(_) => None,
            DataMemberDescription::Property(property) => Some(property.property()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::attributes::{
        CustomAttribute, CustomAttributeArgument, CustomAttributeNamedArgument,
    };
    use crate::metadata::members::{Field, FieldAttributes};
    use crate::metadata::signatures::TypeSignature;
    use std::sync::Arc;

    fn field_with_attributes(name: &str, attributes: Vec<CustomAttribute>) -> FieldRc {
        let field = Field {
            token: Token::new(0x04000001),
            flags: FieldAttributes::PUBLIC,
            name: name.to_string(),
            signature: TypeSignature::String,
            custom_attributes: Arc::new(boxcar::Vec::new()),
        };
        for attribute in attributes {
            field.custom_attributes.push(Arc::new(attribute));
        }
        Arc::new(field)
    }

    #[test]
    fn test_resolved_name_defaults_to_declared() {
        let field = field_with_attributes("value", Vec::new());
        let description = FieldDescription::new(&field);
        assert_eq!(description.name(), "value");
    }

    #[test]
    fn test_resolved_name_honors_override() {
        let marker = CustomAttribute::new(DATA_MEMBER_ATTRIBUTE_NAME).with_named_arg(
            CustomAttributeNamedArgument::property(
                NAME_NAMED_ARGUMENT,
                "System.String",
                CustomAttributeArgument::String("renamed".to_string()),
            ),
        );
        let field = field_with_attributes("value", vec![marker]);
        let description = FieldDescription::new(&field);
        assert_eq!(description.name(), "renamed");
    }

    #[test]
    fn test_resolved_name_ignores_other_markers() {
        let unrelated = CustomAttribute::new("JsonPropertyAttribute").with_named_arg(
            CustomAttributeNamedArgument::property(
                NAME_NAMED_ARGUMENT,
                "System.String",
                CustomAttributeArgument::String("nope".to_string()),
            ),
        );
        let field = field_with_attributes("value", vec![unrelated]);
        let description = FieldDescription::new(&field);
        assert_eq!(description.name(), "value");
    }

    #[test]
    fn test_field_member_capabilities() {
        let field = field_with_attributes("value", Vec::new());
        let member = DataMemberDescription::Field(FieldDescription::new(&field));

        assert!(member.can_read());
        assert!(member.can_write());
        assert_eq!(member.member_name(), "value");
        assert!(member.as_field().is_some());
        assert!(member.as_property().is_none());
    }

    #[test]
    fn test_init_only_field_is_read_only() {
        let field = Arc::new(Field {
            token: Token::new(0x04000001),
            flags: FieldAttributes::PUBLIC | FieldAttributes::INIT_ONLY,
            name: "id".to_string(),
            signature: TypeSignature::I8,
            custom_attributes: Arc::new(boxcar::Vec::new()),
        });
        let description = FieldDescription::new(&field);
        assert!(description.can_read());
        assert!(!description.can_write());
    }
}
