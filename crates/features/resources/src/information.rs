use crate::error::RegistryError;
use crate::resource::Resource;
use japi_domain::resource::ResourceInformation;
use std::collections::BTreeSet;

/// Derives and validates [`ResourceInformation`] from a [`Resource`] impl.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceInformationBuilder;

impl ResourceInformationBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    /// Returns [`RegistryError::InvalidInformation`] when the type name is empty
    /// or contains `/`, the id field is empty, or relationships are malformed
    /// (empty names or targets, duplicates, or clashing with the id field).
    pub fn build<T: Resource>(&self) -> Result<ResourceInformation, RegistryError> {
        let information = ResourceInformation {
            resource_type: T::TYPE.to_owned(),
            id_field: T::ID_FIELD.to_owned(),
            id_kind: T::ID_KIND,
            relationships: T::relationships(),
        };
        validate(&information)?;
        Ok(information)
    }
}

fn validate(information: &ResourceInformation) -> Result<(), RegistryError> {
    let invalid = |message: String| RegistryError::InvalidInformation {
        message: message.into(),
        context: Some(information.resource_type.clone().into()),
    };

    if information.resource_type.trim().is_empty() || information.resource_type.contains('/') {
        return Err(invalid(format!(
            "resource type '{}' must be a non-empty path segment",
            information.resource_type
        )));
    }
    if information.id_field.is_empty() {
        return Err(invalid("id field name is empty".to_owned()));
    }

    let mut seen = BTreeSet::new();
    for relationship in &information.relationships {
        if relationship.name.is_empty() || relationship.target_type.is_empty() {
            return Err(invalid("relationship name and target type must be set".to_owned()));
        }
        if relationship.name == information.id_field {
            return Err(invalid(format!("relationship '{}' shadows the id", relationship.name)));
        }
        if !seen.insert(relationship.name.as_str()) {
            return Err(invalid(format!("relationship '{}' declared twice", relationship.name)));
        }
    }

    Ok(())
}
