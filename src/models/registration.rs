use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, INDEX_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;
use serde::{Deserialize, Serialize};

const TEMPLATES_TAG: &str = "templates";

const REGISTRATION: Schema = Schema {
    name: "registration",
    attributes: &[TEMPLATES_TAG],
    resources: &[INDEX_TAG, "registry", "substance", UPDATE_TAG, DESTROY_TAG],
};

/// The request which produced a substance.
#[derive(Debug, Clone)]
pub struct Registration(Document);

impl Resource for Registration {
    const KIND: Kind = Kind::Registration;
    const SCHEMA: &'static Schema = &REGISTRATION;

    fn from_document(document: Document) -> Self {
        Self(document)
    }

    fn document(&self) -> &Document {
        &self.0
    }

    fn into_document(self) -> Document {
        self.0
    }
}

impl Item for Registration {}

/// One component of a substance to be registered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComponentTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

impl ComponentTemplate {
    pub fn new(serialization: impl Into<String>, multiplier: f64) -> Self {
        Self {
            serialization: Some(serialization.into()),
            multiplier: Some(multiplier),
        }
    }
}

impl Registration {
    /// Component templates. Entries which are not objects are skipped.
    pub fn templates(&self) -> Vec<ComponentTemplate> {
        self.0
            .attribute(TEMPLATES_TAG)
            .and_then(|v| v.as_array())
            .map(|templates| {
                templates
                    .iter()
                    .filter_map(|t| serde_json::from_value(t.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }

    pub fn substance_link(&self) -> Option<Link> {
        self.0.link("substance")
    }
}

/// Request body for creating or updating a [Registration].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegistrationAttributes {
    pub templates: Vec<ComponentTemplate>,
}

impl RegistrationAttributes {
    /// A registration of a single component.
    pub fn single(serialization: impl Into<String>, multiplier: f64) -> Self {
        Self {
            templates: vec![ComponentTemplate::new(serialization, multiplier)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::tests::{block, doc};
    use serde_json::json;

    #[test]
    fn test_registration() {
        let registration: Registration = doc(json!({
            "registration": {
                "templates": [
                    {"serialization": "CCO", "multiplier": 1},
                    {"serialization": "O", "multiplier": 0.5},
                    "garbage"
                ]
            },
            "registry": block("registry"),
            "substance": block("substance"),
            "index": block("index")
        }));
        assert_eq!(
            registration.templates(),
            vec![
                ComponentTemplate::new("CCO", 1.0),
                ComponentTemplate::new("O", 0.5)
            ]
        );
        assert!(registration.registry_link().is_some());
        assert!(registration.substance_link().is_some());
        assert!(registration.index_link().is_some());
    }

    #[test]
    fn test_no_templates() {
        let registration: Registration = doc(json!({"registration": {}}));
        assert!(registration.templates().is_empty());
    }

    #[test]
    fn test_serialize_attributes() {
        assert_eq!(
            serde_json::to_value(RegistrationAttributes::single("CCO", 2.0)).unwrap(),
            json!({"templates": [{"serialization": "CCO", "multiplier": 2.0}]})
        );
    }
}
