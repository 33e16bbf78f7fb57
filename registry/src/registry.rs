use crate::{Attribute, AttributeType, Category};
use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute set exported by a single resource
pub type Attributes = BTreeMap<Attribute, AttributeType>;

/// Mapping of category -> resource name -> attribute name -> value type
///
/// Mirrors the generated declaration of provisioned resource attributes.
/// Ordered maps throughout, so emitting the declaration is byte-stable
/// across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    categories: BTreeMap<Category, BTreeMap<String, Attributes>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry with the function category present
    pub fn new() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(Category::Function, BTreeMap::new());

        Registry { categories }
    }

    /// The registry of currently provisioned functions
    pub fn builtin() -> Self {
        let base = [
            Attribute::Arn,
            Attribute::LambdaExecutionRole,
            Attribute::Name,
            Attribute::Region,
        ];

        let with_role_arn = [
            Attribute::Arn,
            Attribute::LambdaExecutionRole,
            Attribute::LambdaExecutionRoleArn,
            Attribute::Name,
            Attribute::Region,
        ];

        let scheduled = [
            Attribute::Arn,
            Attribute::CloudWatchEventRule,
            Attribute::LambdaExecutionRole,
            Attribute::LambdaExecutionRoleArn,
            Attribute::Name,
            Attribute::Region,
        ];

        let mut functions = BTreeMap::new();
        functions.insert("ExportDynamoToS3".to_string(), attributes(&with_role_arn));
        functions.insert(
            "FoodSentinelleGraphGeneratored".to_string(),
            attributes(&scheduled),
        );
        functions.insert(
            "SentimentIntensityAnalyzed".to_string(),
            attributes(&with_role_arn),
        );
        functions.insert("apiGetRestaurant".to_string(), attributes(&base));
        functions.insert("apiGetRestaurants".to_string(), attributes(&base));
        functions.insert("apiGetVisuals".to_string(), attributes(&base));

        let mut categories = BTreeMap::new();
        categories.insert(Category::Function, functions);

        Registry { categories }
    }

    /// Look up the value type of one attribute of one resource
    ///
    /// Any reference to a resource or attribute absent from the registry is
    /// rejected with an error naming the offending identifier.
    pub fn attribute(
        &self,
        category: Category,
        resource: &str,
        attribute: Attribute,
    ) -> eyre::Result<AttributeType> {
        let resources = self
            .categories
            .get(&category)
            .ok_or_else(|| eyre::eyre!("Unknown resource category: {category}"))?;

        let attributes = resources
            .get(resource)
            .ok_or_else(|| eyre::eyre!("Unknown {category} resource: {resource}"))?;

        attributes
            .get(&attribute)
            .copied()
            .ok_or_else(|| eyre::eyre!("Resource {resource} has no attribute {attribute}"))
    }

    /// All resources of a category, in name order
    pub fn resources(&self, category: Category) -> impl Iterator<Item = (&String, &Attributes)> {
        self.categories.get(&category).into_iter().flatten()
    }

    /// Categories present in the registry, in key order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Register one function resource
    pub fn insert_function(&mut self, name: &str, attributes: Attributes) -> eyre::Result<()> {
        if attributes.is_empty() {
            return Err(eyre::eyre!("Resource {name} has no attributes"));
        }

        let functions = self.categories.entry(Category::Function).or_default();

        if functions.contains_key(name) {
            return Err(eyre::eyre!("Duplicate function resource: {name}"));
        }

        functions.insert(name.to_string(), attributes);
        Ok(())
    }

    /// Check the shape invariants of the registry
    ///
    /// Category keys, attribute names and value types are closed enums, so
    /// the only property left to check at runtime is that no resource comes
    /// with an empty attribute set.
    pub fn validate(&self) -> eyre::Result<()> {
        for (category, resources) in &self.categories {
            for (name, attributes) in resources {
                if attributes.is_empty() {
                    return Err(eyre::eyre!(
                        "Resource {name} in category {category} has no attributes"
                    ));
                }
            }
        }

        Ok(())
    }
}

fn attributes(names: &[Attribute]) -> Attributes {
    names
        .iter()
        .map(|name| (*name, AttributeType::String))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_exactly_the_provisioned_functions() {
        let registry = Registry::builtin();

        assert_eq!(
            registry.categories().collect::<Vec<_>>(),
            vec![Category::Function]
        );

        let names: Vec<&String> = registry
            .resources(Category::Function)
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            names,
            vec![
                "ExportDynamoToS3",
                "FoodSentinelleGraphGeneratored",
                "SentimentIntensityAnalyzed",
                "apiGetRestaurant",
                "apiGetRestaurants",
                "apiGetVisuals",
            ]
        );
    }

    #[test]
    fn builtin_attribute_sets_match_provisioning() {
        let registry = Registry::builtin();

        let attribute_names = |resource: &str| -> Vec<String> {
            registry
                .resources(Category::Function)
                .find(|(name, _)| name.as_str() == resource)
                .map(|(_, attributes)| attributes.keys().map(Attribute::to_string).collect())
                .unwrap()
        };

        assert_eq!(
            attribute_names("FoodSentinelleGraphGeneratored"),
            vec![
                "Arn",
                "CloudWatchEventRule",
                "LambdaExecutionRole",
                "LambdaExecutionRoleArn",
                "Name",
                "Region",
            ]
        );

        assert_eq!(
            attribute_names("ExportDynamoToS3"),
            vec![
                "Arn",
                "LambdaExecutionRole",
                "LambdaExecutionRoleArn",
                "Name",
                "Region",
            ]
        );

        for resource in ["apiGetRestaurant", "apiGetRestaurants", "apiGetVisuals"] {
            assert_eq!(
                attribute_names(resource),
                vec!["Arn", "LambdaExecutionRole", "Name", "Region"]
            );
        }
    }

    #[test]
    fn accepts_attribute_present_on_the_resource() {
        let registry = Registry::builtin();

        let value_type = registry
            .attribute(Category::Function, "apiGetVisuals", Attribute::Region)
            .unwrap();

        assert_eq!(value_type, AttributeType::String);
    }

    #[test]
    fn rejects_attribute_absent_from_the_resource() {
        let registry = Registry::builtin();

        let error = registry
            .attribute(
                Category::Function,
                "apiGetRestaurant",
                Attribute::CloudWatchEventRule,
            )
            .unwrap_err();

        assert!(error.to_string().contains("apiGetRestaurant"));
        assert!(error.to_string().contains("CloudWatchEventRule"));
    }

    #[test]
    fn rejects_unknown_resource() {
        let registry = Registry::builtin();

        let error = registry
            .attribute(Category::Function, "apiDeleteRestaurant", Attribute::Arn)
            .unwrap_err();

        assert!(error.to_string().contains("apiDeleteRestaurant"));
    }

    #[test]
    fn rejects_duplicate_function() {
        let mut registry = Registry::new();
        let attributes = attributes(&[Attribute::Arn]);

        registry
            .insert_function("ExportDynamoToS3", attributes.clone())
            .unwrap();

        let error = registry
            .insert_function("ExportDynamoToS3", attributes)
            .unwrap_err();

        assert!(error.to_string().contains("Duplicate"));
    }

    #[test]
    fn rejects_empty_attribute_set() {
        let mut registry = Registry::new();
        let error = registry
            .insert_function("apiGetNothing", Attributes::new())
            .unwrap_err();

        assert!(error.to_string().contains("apiGetNothing"));
    }

    #[test]
    fn validate_flags_resource_without_attributes() {
        let registry: Registry =
            serde_json::from_str(r#"{"function": {"apiGetNothing": {}}}"#).unwrap();

        let error = registry.validate().unwrap_err();
        assert!(error.to_string().contains("apiGetNothing"));
    }

    #[test]
    fn json_round_trip_is_identity() {
        let registry = Registry::builtin();
        let json = serde_json::to_string(&registry).unwrap();
        let parsed: Registry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, registry);
    }
}
