//! Settings for the graph view.

use std::collections::BTreeMap;

use force_graph::SimulationParameters;
use serde::{Deserialize, Serialize};

use crate::model::{LabelFormats, LabelRuleConfig};

/// Layout, simulation and label settings. Every field has a default, so a
/// settings document only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
	/// Where the record is fetched from.
	pub record_url: String,
	/// Canvas size used when the container has none.
	pub width: f64,
	/// See [`Self::width`].
	pub height: f64,
	/// Label lines are wrapped at this many characters.
	pub line_wrap: usize,
	/// Repulsion between nodes.
	pub force_charge: f32,
	/// Pull along edges.
	pub force_spring: f32,
	/// Cap on the force applied to a node per step.
	pub force_max: f32,
	/// Velocity scale of the simulation.
	pub node_speed: f32,
	/// Velocity kept each step, in `0..1`.
	pub damping_factor: f32,
	/// Overrides on top of the default label rules, keyed by category.
	pub labels: BTreeMap<String, LabelRuleConfig>,
}

impl Default for GraphSettings {
	fn default() -> Self {
		Self {
			record_url: "resume.json".into(),
			width: 1050.0,
			height: 900.0,
			line_wrap: 35,
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.88,
			labels: BTreeMap::new(),
		}
	}
}

impl GraphSettings {
	/// Decodes settings, filling missing keys with defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Default label rules with [`Self::labels`] applied on top.
	pub fn label_formats(&self) -> LabelFormats {
		let mut formats = LabelFormats::default();
		for (category, rule) in &self.labels {
			formats.set(category, rule.clone().into());
		}
		formats
	}

	/// Parameters for a new force simulation.
	pub fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::Item;

	#[test]
	fn partial_json_keeps_defaults() {
		let settings = GraphSettings::from_json(r#"{"line_wrap": 20, "record_url": "/data/cv.json"}"#).unwrap();
		assert_eq!(settings.line_wrap, 20);
		assert_eq!(settings.record_url, "/data/cv.json");
		assert_eq!(settings.width, 1050.0);
		assert_eq!(settings.height, 900.0);
	}

	#[test]
	fn label_overrides_apply_on_top_of_defaults() {
		let settings = GraphSettings::from_json(
			r#"{"labels": {"positions": {"template": "{short_title} @ {company}"}, "skills": {"field": "title"}}}"#,
		)
		.unwrap();
		let formats = settings.label_formats();
		let position = Item::default()
			.with_field("short_title", "Engineer")
			.with_field("company", "Acme");
		assert_eq!(
			formats.label_for("positions", &position).as_deref(),
			Some("Engineer @ Acme")
		);
		let skill = Item::default().with_field("title", "Rust");
		assert_eq!(formats.label_for("skills", &skill).as_deref(), Some("Rust"));
		assert!(formats.rule("education").is_some());
	}

	#[test]
	fn malformed_settings_are_rejected() {
		assert!(GraphSettings::from_json(r#"{"width": "wide"}"#).is_err());
	}
}
