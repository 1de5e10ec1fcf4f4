//! Per-category rules that turn an item into its display label.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::record::Item;

/// Field every item falls back to when its category has no rule.
pub const DEFAULT_LABEL_FIELD: &str = "name";

type LabelFn = dyn Fn(&Item) -> Option<String> + Send + Sync;

/// How the label of an item is computed. `None` from [`LabelRule::apply`]
/// means a blank label, which the renderer tolerates.
#[derive(Clone)]
pub enum LabelRule {
	/// Text of a single field.
	Field(String),
	/// `{field}` placeholders substituted with field text. Blank if any
	/// referenced field is missing.
	Template(String),
	/// Arbitrary function of the item.
	Custom(Arc<LabelFn>),
}

impl LabelRule {
	/// Shorthand for [`LabelRule::Field`].
	pub fn field(name: &str) -> Self {
		LabelRule::Field(name.to_owned())
	}

	/// Shorthand for [`LabelRule::Template`].
	pub fn template(template: &str) -> Self {
		LabelRule::Template(template.to_owned())
	}

	/// Wraps a closure as [`LabelRule::Custom`].
	pub fn custom(f: impl Fn(&Item) -> Option<String> + Send + Sync + 'static) -> Self {
		LabelRule::Custom(Arc::new(f))
	}

	/// Label for `item`, or `None` for a blank one.
	pub fn apply(&self, item: &Item) -> Option<String> {
		match self {
			LabelRule::Field(name) => item.field(name),
			LabelRule::Template(template) => render_template(template, item),
			LabelRule::Custom(f) => f(item),
		}
	}
}

impl fmt::Debug for LabelRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LabelRule::Field(name) => f.debug_tuple("Field").field(name).finish(),
			LabelRule::Template(template) => f.debug_tuple("Template").field(template).finish(),
			LabelRule::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

fn render_template(template: &str, item: &Item) -> Option<String> {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		let Some(len) = rest[open + 1..].find('}') else {
			break;
		};
		out.push_str(&rest[..open]);
		let key = &rest[open + 1..open + 1 + len];
		out.push_str(&item.field(key)?);
		rest = &rest[open + len + 2..];
	}
	out.push_str(rest);
	Some(out)
}

/// Serializable form of a rule, as it appears in settings files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelRuleConfig {
	/// `{"field": "short_title"}`
	Field(String),
	/// `{"template": "{degree}, {major}"}`
	Template(String),
}

impl From<LabelRuleConfig> for LabelRule {
	fn from(config: LabelRuleConfig) -> Self {
		match config {
			LabelRuleConfig::Field(name) => LabelRule::Field(name),
			LabelRuleConfig::Template(template) => LabelRule::Template(template),
		}
	}
}

/// Label rules keyed by category name. Passed to
/// [`convert`](super::graph::convert); there is no shared registry.
#[derive(Clone, Debug)]
pub struct LabelFormats {
	rules: HashMap<String, LabelRule>,
}

impl Default for LabelFormats {
	fn default() -> Self {
		let mut formats = Self::empty();
		formats.set("education", LabelRule::template("{degree}, {major} ({end})"));
		formats.set("positions", LabelRule::field("short_title"));
		formats.set("accomplishments", LabelRule::field("description"));
		formats
	}
}

impl LabelFormats {
	/// No rules at all; every item uses its `name` field.
	pub fn empty() -> Self {
		Self {
			rules: HashMap::new(),
		}
	}

	/// Installs or replaces the rule of a category.
	pub fn set(&mut self, category: &str, rule: LabelRule) {
		self.rules.insert(category.to_owned(), rule);
	}

	/// Drops a category's rule so its items fall back to `name`.
	pub fn remove(&mut self, category: &str) -> Option<LabelRule> {
		self.rules.remove(category)
	}

	/// The rule installed for a category.
	pub fn rule(&self, category: &str) -> Option<&LabelRule> {
		self.rules.get(category)
	}

	/// Label of an item of `category`, using the `name` field when no rule is set.
	pub fn label_for(&self, category: &str, item: &Item) -> Option<String> {
		match self.rule(category) {
			Some(rule) => rule.apply(item),
			None => item.field(DEFAULT_LABEL_FIELD),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn degree() -> Item {
		Item::default()
			.with_field("degree", "BS")
			.with_field("major", "CS")
			.with_field("end", "2001")
	}

	#[test]
	fn default_education_template() {
		let formats = LabelFormats::default();
		assert_eq!(
			formats.label_for("education", &degree()).as_deref(),
			Some("BS, CS (2001)")
		);
	}

	#[test]
	fn template_with_missing_field_is_blank() {
		let item = Item::default().with_field("degree", "BS");
		assert_eq!(LabelRule::template("{degree}, {major}").apply(&item), None);
	}

	#[test]
	fn unclosed_placeholder_is_literal() {
		assert_eq!(
			LabelRule::template("{degree} {oops").apply(&degree()).as_deref(),
			Some("BS {oops")
		);
	}

	#[test]
	fn unknown_category_falls_back_to_name() {
		let item = Item {
			name: Some("Acme".into()),
			..Item::default()
		};
		let formats = LabelFormats::default();
		assert_eq!(formats.label_for("companies", &item).as_deref(), Some("Acme"));
		assert_eq!(formats.label_for("companies", &degree()), None);
	}

	#[test]
	fn set_and_remove_rules() {
		let mut formats = LabelFormats::default();
		formats.set("education", LabelRule::custom(|item| item.field("major")));
		assert_eq!(formats.label_for("education", &degree()).as_deref(), Some("CS"));

		assert!(formats.remove("education").is_some());
		assert_eq!(formats.label_for("education", &degree()), None);
	}
}
