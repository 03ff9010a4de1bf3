//! Typed tree of groups and datasets

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the attribute holding a node's NeXus class
pub const NX_CLASS: &str = "NX_class";

/// Name of the attribute holding a dataset's units
pub const UNITS: &str = "units";

/// A group, dataset, or stream module in the document tree
///
/// Groups carry a `name` and `children`, while datasets carry a `module` and
/// a [Config] holding their name, values, and type. Keys that are not
/// modelled here, such as stream settings from a baseline, are kept in
/// `extra` so that documents survive a read/write cycle intact. Explicit
/// `null` values are kept in `extra` as well, leaving the matching field
/// `None`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Node {
    /// Group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node type, `group` for groups
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Writer module, `dataset` for static leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Leaf content for modules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
    /// Child nodes of a group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Attributes such as `NX_class` and `units`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    /// Any other keys, kept as they were read
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Node {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> core::result::Result<Self, Self::Error> {
        Ok(Self {
            name: take(&mut map, "name")?,
            kind: take(&mut map, "type")?,
            module: take(&mut map, "module")?,
            config: take(&mut map, "config")?,
            children: take(&mut map, "children")?,
            attributes: take(&mut map, "attributes")?,
            extra: map,
        })
    }
}

/// Leaf content of a dataset or stream module
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Config {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> core::result::Result<Self, Self::Error> {
        Ok(Self {
            name: take(&mut map, "name")?,
            values: take(&mut map, "values")?,
            dtype: take(&mut map, "type")?,
            extra: map,
        })
    }
}

/// Move a modelled key out of `map`, leaving an explicit `null` in place
fn take<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
) -> core::result::Result<Option<T>, serde_json::Error> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => match map.remove(key) {
            Some(value) => serde_json::from_value(value).map(Some),
            None => Ok(None),
        },
    }
}

/// Named attribute of a node, e.g. `NX_class` or `units`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Attribute {
    /// Attribute with no extra keys
    pub fn new<V: Into<Value>>(name: &str, values: V) -> Self {
        Self {
            name: name.to_string(),
            values: values.into(),
            extra: Map::new(),
        }
    }
}

impl Node {
    /// Empty group with the given name
    pub fn group(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            kind: Some("group".to_string()),
            children: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Dataset leaf with values and a type tag such as `int32` or `float`
    ///
    /// ```rust
    /// # use nxgeom_nexus::Node;
    /// let node = Node::dataset("detector_number", vec![0, 1, 2], "int32");
    /// assert_eq!(node.label(), Some("detector_number"));
    /// assert_eq!(node.module.as_deref(), Some("dataset"));
    /// ```
    pub fn dataset<V: Into<Value>>(name: &str, values: V, dtype: &str) -> Self {
        Self {
            module: Some("dataset".to_string()),
            config: Some(Config {
                name: Some(name.to_string()),
                values: Some(values.into()),
                dtype: Some(dtype.to_string()),
                extra: Map::new(),
            }),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute<V: Into<Value>>(mut self, name: &str, values: V) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .push(Attribute::new(name, values));
        self
    }

    /// Add a `units` attribute
    pub fn with_units(self, units: &str) -> Self {
        self.with_attribute(UNITS, units)
    }

    /// Add an `NX_class` attribute
    pub fn with_class(self, class: &str) -> Self {
        self.with_attribute(NX_CLASS, class)
    }

    /// Append a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Group name, or the dataset name for leaves
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.config.as_ref().and_then(|c| c.name.as_deref()))
    }

    /// Value of an attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes
            .as_ref()?
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.values)
    }

    /// The `NX_class` attribute as a string
    pub fn nx_class(&self) -> Option<&str> {
        self.attribute(NX_CLASS)?.as_str()
    }

    /// First direct child with a matching label
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children
            .as_ref()?
            .iter()
            .find(|c| c.label() == Some(name))
    }

    /// Every dataset config named `name` in this subtree, depth first
    pub fn datasets<'a>(&'a self, name: &str, found: &mut Vec<&'a Config>) {
        if let Some(config) = &self.config {
            if config.name.as_deref() == Some(name) {
                found.push(config);
            }
        }

        for child in self.children.iter().flatten() {
            child.datasets(name, found);
        }
    }
}

/// Root of an instrument document, `{"children": [...]}`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Group at a path of names, taking the first match at each level
    ///
    /// Only group `name` keys are matched, so a dataset sharing a name with
    /// a group on the path is never chosen.
    ///
    /// ```rust
    /// # use nxgeom_nexus::{Document, Node, Error};
    /// let mut doc = Document {
    ///     children: vec![Node::group("entry").with_child(Node::group("instrument"))],
    ///     ..Default::default()
    /// };
    ///
    /// assert!(doc.locate_mut(&["entry", "instrument"]).is_ok());
    /// assert!(matches!(
    ///     doc.locate_mut(&["entry", "sample"]),
    ///     Err(Error::MissingNode { .. })
    /// ));
    /// ```
    pub fn locate_mut(&mut self, path: &[&str]) -> Result<&mut Node> {
        let missing = |depth: usize| Error::MissingNode {
            path: path[..=depth].join("/"),
        };

        let (first, rest) = path.split_first().ok_or(Error::MissingNode {
            path: String::new(),
        })?;

        let mut node = self
            .children
            .iter_mut()
            .find(|c| c.name.as_deref() == Some(*first))
            .ok_or_else(|| missing(0))?;

        for (depth, name) in rest.iter().enumerate() {
            node = node
                .children
                .iter_mut()
                .flatten()
                .find(|c| c.name.as_deref() == Some(*name))
                .ok_or_else(|| missing(depth + 1))?;
        }

        Ok(node)
    }

    /// Append a subtree to the children of the node at `path`
    pub fn splice(&mut self, path: &[&str], subtree: Node) -> Result<()> {
        let parent = self.locate_mut(path)?;
        parent.children.get_or_insert_with(Vec::new).push(subtree);
        Ok(())
    }

    /// Every dataset config named `name` in the document, depth first
    pub fn datasets(&self, name: &str) -> Vec<&Config> {
        let mut found = Vec::new();
        for child in &self.children {
            child.datasets(name, &mut found);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dataset_layout() {
        let node = Node::dataset("x_pixel_offset", vec![0.5, 1.5], "float").with_units("m");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "module": "dataset",
                "config": {"name": "x_pixel_offset", "values": [0.5, 1.5], "type": "float"},
                "attributes": [{"name": "units", "values": "m"}]
            })
        );
    }

    #[test]
    fn group_layout() {
        let node = Node::group("instrument").with_class("NXinstrument");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "instrument",
                "type": "group",
                "children": [],
                "attributes": [{"name": "NX_class", "values": "NXinstrument"}]
            })
        );
        assert_eq!(node.nx_class(), Some("NXinstrument"));
    }

    #[test]
    fn unknown_keys_survive() {
        let text = r#"{
            "children": [{
                "module": "f142",
                "config": {"source": "motor", "topic": "odin_motion", "dtype": "double"}
            }],
            "comment": "kept"
        }"#;
        let doc: Document = serde_json::from_str(text).unwrap();
        assert_eq!(doc.extra["comment"], "kept");

        let config = doc.children[0].config.as_ref().unwrap();
        assert_eq!(config.name, None);
        assert_eq!(config.extra["topic"], "odin_motion");

        let back: Document = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn explicit_nulls_survive() {
        let text = r#"{"children":[{"module":"dataset","config":{"name":"depends_on","values":null,"type":"string"}}]}"#;
        let doc: Document = serde_json::from_str(text).unwrap();

        let config = doc.children[0].config.as_ref().unwrap();
        assert_eq!(config.name.as_deref(), Some("depends_on"));
        assert_eq!(config.values, None);

        let written = serde_json::to_value(&doc).unwrap();
        let read: Value = serde_json::from_str(text).unwrap();
        assert_eq!(written, read);
    }

    #[test]
    fn null_node_keys_survive() {
        let text = r#"{"name":"sample","type":"group","children":null,"attributes":null}"#;
        let node: Node = serde_json::from_str(text).unwrap();
        assert_eq!(node.children, None);

        let read: Value = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), read);
    }

    #[test]
    fn mistyped_keys_are_errors() {
        let text = r#"{"name":"sample","children":"none"}"#;
        assert!(serde_json::from_str::<Node>(text).is_err());
    }

    #[test]
    fn locate_skips_datasets() {
        let mut doc = Document {
            children: vec![Node::group("entry")
                .with_child(Node::dataset("instrument", "BIFROST", "string"))
                .with_child(Node::group("instrument").with_class("NXinstrument"))],
            ..Default::default()
        };

        let instrument = doc.locate_mut(&["entry", "instrument"]).unwrap();
        assert_eq!(instrument.nx_class(), Some("NXinstrument"));
    }

    #[test]
    fn child_by_dataset_name() {
        let group = Node::group("detector")
            .with_child(Node::dataset("detector_number", vec![1], "int32"))
            .with_child(Node::group("pixel_shape"));
        assert!(group.child("detector_number").is_some());
        assert!(group.child("pixel_shape").is_some());
        assert!(group.child("depends_on").is_none());
    }

    #[test]
    fn missing_path_is_reported() {
        let mut doc = Document {
            children: vec![Node::group("entry")],
            ..Default::default()
        };
        match doc.splice(&["entry", "instrument"], Node::group("detector")) {
            Err(Error::MissingNode { path }) => assert_eq!(path, "entry/instrument"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn splice_creates_children() {
        let mut instrument = Node::group("instrument");
        instrument.children = None;
        let mut doc = Document {
            children: vec![Node::group("entry").with_child(instrument)],
            ..Default::default()
        };

        doc.splice(&["entry", "instrument"], Node::group("detector"))
            .unwrap();
        let instrument = doc.locate_mut(&["entry", "instrument"]).unwrap();
        assert_eq!(instrument.children.as_ref().unwrap().len(), 1);
    }
}
