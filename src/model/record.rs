//! Serde types for the raw hierarchical record (a person and their categorised items).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of a node. Items may carry an explicit one in the record, every
/// other node is numbered the first time the graph is flattened. The two
/// spaces never overlap: whatever a record spells as an id, text or number,
/// decodes as [`NodeId::Named`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum NodeId {
	/// Handed out by the graph's counter.
	Assigned(u32),
	/// Taken from the record.
	Named(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for NodeId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match RawId::deserialize(deserializer)? {
			RawId::Text(text) => NodeId::Named(text),
			RawId::Number(n) => NodeId::Named(n.to_string()),
		})
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Assigned(n) => write!(f, "{n}"),
			NodeId::Named(name) => f.write_str(name),
		}
	}
}

impl From<&str> for NodeId {
	fn from(name: &str) -> Self {
		NodeId::Named(name.to_owned())
	}
}

/// Top level of the record document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Record {
	/// The root entity and everything under it.
	pub person: Person,
}

/// The root entity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Person {
	/// Label of the root node.
	#[serde(default)]
	pub name: Option<String>,
	/// In document order; each becomes one category node.
	#[serde(default)]
	pub categories: Vec<Category>,
	/// Everything else, kept as-is.
	#[serde(flatten)]
	pub fields: BTreeMap<String, Value>,
}

/// A named group of items, e.g. `education` or `positions`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Category {
	/// Key used to look up the label rule for the items.
	pub name: String,
	/// Label of the category node itself.
	#[serde(rename = "displayAs", default)]
	pub display_as: Option<String>,
	/// Children of the category node.
	#[serde(default)]
	pub items: Vec<Item>,
}

/// Reference from one item to another by identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
	/// Explicit id of the referenced item.
	pub id: NodeId,
}

/// One entry of a category. Apart from the few fields the graph reads, its
/// fields are free-form and only matter to label rules.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Item {
	/// Explicit id other items can target.
	#[serde(default)]
	pub id: Option<NodeId>,
	/// Default label source.
	#[serde(default)]
	pub name: Option<String>,
	/// Other items this one points at.
	#[serde(default)]
	pub targets: Vec<Target>,
	/// Every other field, read by label rules.
	#[serde(flatten)]
	pub fields: BTreeMap<String, Value>,
}

impl Item {
	/// Text value of a named field. Strings, numbers and booleans have a text
	/// form, anything else (or a missing field) does not.
	pub fn field(&self, key: &str) -> Option<String> {
		match key {
			"name" => return self.name.clone(),
			"id" => return self.id.as_ref().map(NodeId::to_string),
			_ => {}
		}
		match self.fields.get(key)? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	/// Builder used by tests and demo data.
	pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.fields.insert(key.to_owned(), value.into());
		self
	}
}

/// Decodes a record from its JSON text.
pub fn parse_record(text: &str) -> Result<Record, serde_json::Error> {
	serde_json::from_str(text)
}
