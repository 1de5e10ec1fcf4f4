use crate::model::{EdgeKind, NodeId, ResumeGraph};

use super::scale;

/// A visible node with everything the canvas needs to draw it.
#[derive(Clone, Debug)]
pub struct GraphNode {
	/// Model id, stable across rebuilds.
	pub id: NodeId,
	/// Label wrapped into lines.
	pub lines: Vec<String>,
	/// Picks the colour.
	pub group: u32,
	/// World-space radius, also the hit-test radius.
	pub radius: f64,
	/// Emphasis flags copied from the model.
	pub highlight: bool,
	/// See [`Self::highlight`].
	pub suppress: bool,
}

/// A drawn edge.
#[derive(Clone, Debug)]
pub struct GraphLink {
	/// Start of the edge.
	pub source: NodeId,
	/// End of the edge.
	pub target: NodeId,
	/// Reference edges are drawn dashed.
	pub kind: EdgeKind,
}

/// What the canvas draws: the visible nodes and the current edges.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Post-order, root last.
	pub nodes: Vec<GraphNode>,
	/// Containment links first, then references.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Snapshot of the model as of its last update.
	pub fn from_model(model: &ResumeGraph, line_wrap: usize) -> Self {
		let nodes = model
			.visible_nodes()
			.filter_map(|node| {
				Some(GraphNode {
					id: node.id()?.clone(),
					lines: scale::wrap_label(node.label.as_deref(), line_wrap),
					group: node.group,
					radius: scale::node_radius(node),
					highlight: node.highlight(),
					suppress: node.suppress(),
				})
			})
			.collect();
		let links = model
			.edges()
			.iter()
			.map(|edge| GraphLink {
				source: edge.source.clone(),
				target: edge.target.clone(),
				kind: edge.kind,
			})
			.collect();
		Self { nodes, links }
	}
}
