use {
    serde::{Deserialize, Deserializer, Serialize},
    serde_json::{Map, Value},
};

/// The whole document, as read from disk.
///
/// The flattened map also pins the root to a JSON object; a top-level array
/// is rejected instead of being read as a tuple struct.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<Brand>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Brand {
    pub name: String,

    #[serde(default)]
    pub models: Vec<Model>,

    /// Anything else stored on the brand, re-emitted as is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outer `None` is an absent key, `Some(None)` an explicit `null`; both are
/// written back the way they were read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Model {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub model_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year: Option<Option<i64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl Model {
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_ref()?.as_deref()
    }

    pub fn year(&self) -> Option<i64> {
        self.year.flatten()
    }
}

#[cfg(test)]
impl Brand {
    pub fn new(name: impl Into<String>, models: Vec<Model>) -> Self {
        Self {
            name: name.into(),
            models,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
impl Model {
    pub fn new(model_name: impl Into<String>, year: Option<i64>) -> Self {
        Self {
            model_name: Some(Some(model_name.into())),
            year: year.map(Some),
            extra: Map::new(),
        }
    }
}
