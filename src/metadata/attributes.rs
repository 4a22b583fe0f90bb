//! Custom attribute values and name-based matching.
//!
//! Attributes are stored on types and members as parsed values with the
//! attribute type's *simple* name. All marker matching in this crate compares
//! that simple name only, never a resolved type identity, which tolerates the
//! same logical marker being defined in more than one module. Two unrelated
//! markers with a colliding name will both match; that trade-off is kept.

use std::sync::Arc;

/// A reference-counted pointer to a `CustomAttribute`
pub type CustomAttributeRc = Arc<CustomAttribute>;
/// A vector that holds a list of `CustomAttribute` instances for storage on parent objects
pub type CustomAttributeList = Arc<boxcar::Vec<CustomAttributeRc>>;

/// A parsed custom attribute value with arguments and named arguments.
#[derive(Debug, Clone)]
pub struct CustomAttribute {
    /// Simple name of the attribute type (e.g. `DataMemberAttribute`)
    pub name: String,
    /// Fixed arguments from the constructor signature
    pub fixed_args: Vec<CustomAttributeArgument>,
    /// Named arguments (fields and properties)
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

impl CustomAttribute {
    /// Creates an attribute with the given simple type name and no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        CustomAttribute {
            name: name.into(),
            fixed_args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Appends a fixed constructor argument.
    #[must_use]
    pub fn with_fixed_arg(mut self, value: CustomAttributeArgument) -> Self {
        self.fixed_args.push(value);
        self
    }

    /// Appends a named argument.
    #[must_use]
    pub fn with_named_arg(mut self, arg: CustomAttributeNamedArgument) -> Self {
        self.named_args.push(arg);
        self
    }

    /// Looks up a named argument holding a string value.
    ///
    /// Returns `None` when no argument with that name exists or when its
    /// value is not a string.
    #[must_use]
    pub fn string_named_arg(&self, name: &str) -> Option<&str> {
        self.named_args
            .iter()
            .find(|arg| arg.name == name)
            .and_then(|arg| match &arg.value {
                CustomAttributeArgument::String(value) => Some(value.as_str()),
                _ => None,
            })
    }
}

/// A single custom attribute argument value.
#[derive(Debug, Clone)]
pub enum CustomAttributeArgument {
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 8-bit integer
    I1(i8),
    /// Unsigned 8-bit integer
    U1(u8),
    /// Signed 16-bit integer
    I2(i16),
    /// Unsigned 16-bit integer
    U2(u16),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Type reference (as string)
    Type(String),
    /// Array of arguments
    Array(Vec<CustomAttributeArgument>),
    /// Enum value (base type + value)
    Enum(String, Box<CustomAttributeArgument>),
}

/// A named argument (field or property) in a custom attribute.
#[derive(Debug, Clone)]
pub struct CustomAttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Type of the argument
    pub arg_type: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}

impl CustomAttributeNamedArgument {
    /// Creates a property-style named argument.
    #[must_use]
    pub fn property(
        name: impl Into<String>,
        arg_type: impl Into<String>,
        value: CustomAttributeArgument,
    ) -> Self {
        CustomAttributeNamedArgument {
            is_field: false,
            name: name.into(),
            arg_type: arg_type.into(),
            value,
        }
    }
}

/// Finds the first attribute whose simple name equals `name`.
#[must_use]
pub fn find_by_name<'a>(
    attributes: &'a CustomAttributeList,
    name: &str,
) -> Option<&'a CustomAttributeRc> {
    attributes
        .iter()
        .find_map(|(_, attribute)| (attribute.name == name).then_some(attribute))
}

/// Whether any attribute in the list carries the given simple name.
#[must_use]
pub fn has_attribute_named(attributes: &CustomAttributeList, name: &str) -> bool {
    find_by_name(attributes, name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute_list(names: &[&str]) -> CustomAttributeList {
        let list: CustomAttributeList = Arc::new(boxcar::Vec::new());
        for name in names {
            list.push(Arc::new(CustomAttribute::new(*name)));
        }
        list
    }

    #[test]
    fn test_find_by_name_exact_match() {
        let list = attribute_list(&["SerializableAttribute", "DataMemberAttribute"]);

        assert!(find_by_name(&list, "DataMemberAttribute").is_some());
        assert!(find_by_name(&list, "DataMember").is_none());
        assert!(find_by_name(&list, "datamemberattribute").is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let list: CustomAttributeList = Arc::new(boxcar::Vec::new());
        list.push(Arc::new(
            CustomAttribute::new("DataMemberAttribute").with_fixed_arg(
                CustomAttributeArgument::I4(1),
            ),
        ));
        list.push(Arc::new(CustomAttribute::new("DataMemberAttribute")));

        let found = find_by_name(&list, "DataMemberAttribute").unwrap();
        assert_eq!(found.fixed_args.len(), 1);
    }

    #[test]
    fn test_has_attribute_named() {
        let list = attribute_list(&["IgnoreDataMemberAttribute"]);
        assert!(has_attribute_named(&list, "IgnoreDataMemberAttribute"));
        assert!(!has_attribute_named(&list, "DataMemberAttribute"));
    }

    #[test]
    fn test_string_named_arg() {
        let attribute = CustomAttribute::new("DataMemberAttribute")
            .with_named_arg(CustomAttributeNamedArgument::property(
                "Name",
                "System.String",
                CustomAttributeArgument::String("renamed".to_string()),
            ))
            .with_named_arg(CustomAttributeNamedArgument::property(
                "Order",
                "System.Int32",
                CustomAttributeArgument::I4(3),
            ));

        assert_eq!(attribute.string_named_arg("Name"), Some("renamed"));
        assert_eq!(attribute.string_named_arg("Order"), None);
        assert_eq!(attribute.string_named_arg("Missing"), None);
    }
}
