use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use crate::{
    metadata::{
        attributes::{self, CustomAttributeList},
        description::{
            ContractMode, DataMemberDescription, FieldDescription, PropertyDescription,
            DATA_CONTRACT_ATTRIBUTE_NAME, DATA_MEMBER_ATTRIBUTE_NAME,
            IGNORE_DATA_MEMBER_ATTRIBUTE_NAME,
        },
        members::BindingFlags,
        token::Token,
        typesystem::{RuntimeTypeRc, RuntimeTypeRef},
    },
    Error, Result,
};

/// A reference-counted pointer to a `TypeDescription`
pub type TypeDescriptionRc = Arc<TypeDescription>;

/// Members a contract scan considers: declared directly on the type,
/// instance-scoped, publicly accessible.
const CONTRACT_BINDING: BindingFlags = BindingFlags::DECLARED_ONLY
    .union(BindingFlags::INSTANCE)
    .union(BindingFlags::PUBLIC);

/// The serialization contract of a single type.
///
/// Construction performs full member discovery and validation eagerly; the
/// result is immutable and safe to share across threads for the lifetime of
/// the type. The ordered member sequence and the name index are always
/// consistent views of the same set.
pub struct TypeDescription {
    /// The described type
    object_type: RuntimeTypeRc,
    /// Eligible members: properties first, then fields, each group in declaration order
    members: Vec<DataMemberDescription>,
    /// Serialized name -> index into `members`
    members_by_name: HashMap<String, usize>,
}

impl TypeDescription {
    /// Builds the serialization contract for the referenced type.
    ///
    /// # Errors
    /// Returns [`Error::TypeMissing`] if the reference no longer resolves,
    /// and [`Error::ContractViolation`] if a discovered member resolves to an
    /// empty serialized name or two members share one. On error, no partially
    /// valid description is produced.
    pub fn new(object_type: &RuntimeTypeRef) -> Result<Self> {
        let Some(object_type) = object_type.upgrade() else {
            return Err(Error::TypeMissing);
        };

        let members = Self::find_members(&object_type)?;
        let mut members_by_name = HashMap::with_capacity(members.len());
        for (index, member) in members.iter().enumerate() {
            members_by_name.insert(member.name().to_string(), index);
        }

        Ok(TypeDescription {
            object_type,
            members,
            members_by_name,
        })
    }

    fn find_members(object_type: &RuntimeTypeRc) -> Result<Vec<DataMemberDescription>> {
        let mode = if object_type.has_attribute(DATA_CONTRACT_ATTRIBUTE_NAME) {
            ContractMode::OptIn
        } else {
            ContractMode::OptOut
        };

        let mut members = Vec::new();
        let mut member_names = HashSet::new();

        for property in object_type.properties(CONTRACT_BINDING) {
            if property.is_indexer() {
                continue;
            }
            if !Self::is_included(mode, &property.custom_attributes) {
                continue;
            }
            Self::accept(
                object_type,
                &mut members,
                &mut member_names,
                DataMemberDescription::Property(PropertyDescription::new(&property)),
            )?;
        }

        for field in object_type.fields(CONTRACT_BINDING) {
            if !Self::is_included(mode, &field.custom_attributes) {
                continue;
            }
            Self::accept(
                object_type,
                &mut members,
                &mut member_names,
                DataMemberDescription::Field(FieldDescription::new(&field)),
            )?;
        }

        Ok(members)
    }

    /// Inclusion rule, evaluated per member.
    ///
    /// Opt-in includes a member iff it carries the include marker; the ignore
    /// marker is not consulted. Opt-out includes a member unless it carries
    /// the ignore marker.
    fn is_included(mode: ContractMode, custom_attributes: &CustomAttributeList) -> bool {
        match mode {
            ContractMode::OptIn => {
                attributes::has_attribute_named(custom_attributes, DATA_MEMBER_ATTRIBUTE_NAME)
            }
            ContractMode::OptOut => !attributes::has_attribute_named(
                custom_attributes,
                IGNORE_DATA_MEMBER_ATTRIBUTE_NAME,
            ),
        }
    }

    /// Validates and appends a discovered member, fail-fast.
    fn accept(
        object_type: &RuntimeTypeRc,
        members: &mut Vec<DataMemberDescription>,
        member_names: &mut HashSet<String>,
        member: DataMemberDescription,
    ) -> Result<()> {
        if member.name().is_empty() {
            return Err(Error::ContractViolation {
                type_name: object_type.fullname(),
                violation: format!(
                    "member '{}' resolves to an empty serialized name",
                    member.member_name()
                ),
            });
        }

        if !member_names.insert(member.name().to_string()) {
            let existing = members
                .iter()
                .find(|m| m.name() == member.name())
                .map(DataMemberDescription::member_name)
                .unwrap_or_default();
            return Err(Error::ContractViolation {
                type_name: object_type.fullname(),
                violation: format!(
                    "duplicate serialized name '{}' ('{}.{}' and '{}.{}')",
                    member.name(),
                    object_type.name,
                    existing,
                    object_type.name,
                    member.member_name()
                ),
            });
        }

        members.push(member);
        Ok(())
    }

    /// The described type.
    #[must_use]
    pub fn object_type(&self) -> &RuntimeTypeRc {
        &self.object_type
    }

    /// Token of the described type.
    #[must_use]
    pub fn token(&self) -> Token {
        self.object_type.token
    }

    /// The eligible members as a read-only ordered view: properties before
    /// fields, each group in declaration order.
    #[must_use]
    pub fn members(&self) -> &[DataMemberDescription] {
        &self.members
    }

    /// Looks up a member by its exact serialized name.
    ///
    /// Absence is a normal outcome, not an error.
    #[must_use]
    pub fn try_get_member(&self, name: &str) -> Option<&DataMemberDescription> {
        self.members_by_name
            .get(name)
            .map(|&index| &self.members[index])
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.object_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::signatures::TypeSignature;
    use crate::metadata::typesystem::{TypeBuilder, TypeRegistry};

    #[test]
    fn test_empty_type_yields_empty_description() {
        let registry = Arc::new(TypeRegistry::new());
        let empty = TypeBuilder::new(registry)
            .class("MyApp", "Empty")
            .build()
            .unwrap();

        let description = TypeDescription::new(&RuntimeTypeRef::new(&empty)).unwrap();
        assert!(description.members().is_empty());
        assert!(description.try_get_member("anything").is_none());
    }

    #[test]
    fn test_dangling_reference_fails() {
        let loose = Arc::new(crate::metadata::typesystem::RuntimeType::new(
            Token::new(0x02ffffff),
            crate::metadata::typesystem::TypeFlavor::Class,
            "MyApp".to_string(),
            "Loose".to_string(),
            None,
        ));
        let loose_ref = RuntimeTypeRef::new(&loose);
        drop(loose);

        assert!(!loose_ref.is_valid());
        assert!(matches!(
            TypeDescription::new(&loose_ref),
            Err(Error::TypeMissing)
        ));
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let registry = Arc::new(TypeRegistry::new());
        let person = TypeBuilder::new(registry)
            .class("MyApp", "Person")
            .auto_property("Name", TypeSignature::String)
            .build()
            .unwrap();

        let description = TypeDescription::new(&RuntimeTypeRef::new(&person)).unwrap();
        assert!(description.try_get_member("Name").is_some());
        assert!(description.try_get_member("name").is_none());
        assert!(description.try_get_member("Nam").is_none());
    }

    #[test]
    fn test_display_passes_through_type_name() {
        let registry = Arc::new(TypeRegistry::new());
        let person = TypeBuilder::new(registry)
            .class("MyApp.Data", "Person")
            .build()
            .unwrap();

        let description = TypeDescription::new(&RuntimeTypeRef::new(&person)).unwrap();
        assert_eq!(description.to_string(), person.to_string());
        assert_eq!(description.to_string(), "MyApp.Data.Person");
    }
}
