use crate::model::Model;
use serde::{Deserialize, Deserializer};

/// `Dog` model of the OpenAPI Petstore.
///
/// JSON always carries `className`, `color` and `breed` only when they are set. An empty string
/// and an absent value are the same state: setters store an empty string as unset, and getters
/// return `""` for an unset field.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Dog {
    #[serde(rename = "className")]
    class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "empty_as_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "empty_as_none")]
    breed: Option<String>,
}

fn non_empty(value: String) -> Option<String> { Some(value).filter(|s| !s.is_empty()) }

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

impl Default for Dog {
    fn default() -> Self { Dog::new(Dog::DEFAULT_CLASS_NAME) }
}

impl Dog {
    pub const DEFAULT_CLASS_NAME: &'static str = "Dog";

    pub fn new(class_name: impl Into<String>) -> Self {
        Dog { class_name: class_name.into(), color: None, breed: None }
    }

    pub fn class_name(&self) -> &str { &self.class_name }

    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.set_class_name(class_name);
        self
    }

    pub fn color(&self) -> &str { self.color.as_deref().unwrap_or_default() }

    pub fn has_color(&self) -> bool { self.color.is_some() }

    pub fn set_color(&mut self, color: impl Into<String>) { self.color = non_empty(color.into()); }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.set_color(color);
        self
    }

    pub fn reset_color(&mut self) { self.color = None; }

    pub fn breed(&self) -> &str { self.breed.as_deref().unwrap_or_default() }

    pub fn has_breed(&self) -> bool { self.breed.is_some() }

    pub fn set_breed(&mut self, breed: impl Into<String>) { self.breed = non_empty(breed.into()); }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.set_breed(breed);
        self
    }

    pub fn reset_breed(&mut self) { self.breed = None; }
}

/// XML descriptor of [`Dog`]: every element is written, unset fields as empty elements
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename = "Dog")]
pub struct DogXml {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub breed: String,
}

impl From<&Dog> for DogXml {
    fn from(dog: &Dog) -> Self {
        DogXml {
            class_name: dog.class_name.clone(),
            color: dog.color().into(),
            breed: dog.breed().into(),
        }
    }
}

impl From<DogXml> for Dog {
    fn from(xml: DogXml) -> Self {
        Dog { class_name: xml.class_name, color: non_empty(xml.color), breed: non_empty(xml.breed) }
    }
}

impl Model for Dog {
    const NAME: &'static str = "Dog";

    type Xml = DogXml;

    fn to_xml_repr(&self) -> DogXml { self.into() }
}
