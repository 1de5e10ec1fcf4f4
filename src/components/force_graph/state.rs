use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::debug;

use super::types::{GraphData, GraphLink};
use crate::config::GraphSettings;
use crate::model::{EdgeKind, NodeId, Record, ResumeGraph};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Pointer travel (screen pixels) after which a press counts as a drag, not a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Per-node data carried through the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: NodeId,
	pub lines: Vec<String>,
	pub color: String,
	pub radius: f64,
	pub highlight: bool,
	pub suppress: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub highlight_t: f64,
	/// Emphasis of the last hover is still fading out.
	pub fading: bool,
	delay_t: f64,
}

/// Canvas state: the model, its mirrored simulation and pointer interaction.
pub struct ForceGraphState {
	pub model: ResumeGraph,
	pub graph: ForceGraph<NodeInfo, EdgeKind>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	settings: GraphSettings,
}

impl ForceGraphState {
	pub fn new(record: &Record, settings: &GraphSettings, width: f64, height: f64) -> Self {
		let model = ResumeGraph::new(record, &settings.label_formats());
		let mut state = Self {
			model,
			graph: ForceGraph::new(settings.simulation()),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			settings: settings.clone(),
		};
		state.rebuild();
		state
	}

	/// Mirrors the model's visible nodes and edges into a fresh simulation.
	/// Nodes that were already on screen keep their position; newly revealed
	/// ones start next to their parent.
	pub fn rebuild(&mut self) {
		let data = GraphData::from_model(&self.model, self.settings.line_wrap);

		let mut previous: HashMap<NodeId, (f32, f32, bool)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});
		let parents: HashMap<&NodeId, &NodeId> = data
			.links
			.iter()
			.filter(|l| l.kind == EdgeKind::Containment)
			.map(|l| (&l.target, &l.source))
			.collect();

		let mut graph = ForceGraph::new(self.settings.simulation());
		let mut index = HashMap::new();
		let count = data.nodes.len().max(1) as f64;
		for (i, node) in data.nodes.iter().enumerate() {
			let (x, y, is_anchor) = match previous.get(&node.id) {
				Some(&known) => known,
				None => match parents.get(&node.id).and_then(|p| previous.get(*p)) {
					Some(&(px, py, _)) => {
						let angle = (i as f64) * 2.0 * PI / count;
						(
							px + (30.0 * angle.cos()) as f32,
							py + (30.0 * angle.sin()) as f32,
							false,
						)
					}
					None => {
						let angle = (i as f64) * 2.0 * PI / count;
						(
							(100.0 * angle.cos()) as f32,
							(100.0 * angle.sin()) as f32,
							false,
						)
					}
				},
			};
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					id: node.id.clone(),
					lines: node.lines.clone(),
					color: COLORS[node.group as usize % COLORS.len()].into(),
					radius: node.radius,
					highlight: node.highlight,
					suppress: node.suppress,
				},
			});
			index.insert(node.id.clone(), idx);
		}

		for GraphLink { source, target, kind } in &data.links {
			if let (Some(&src), Some(&tgt)) = (index.get(source), index.get(target)) {
				graph.add_edge(src, tgt, EdgeData { user_data: *kind });
			}
		}

		debug!(
			"rebuilt simulation with {} nodes and {} links",
			data.nodes.len(),
			data.links.len()
		);
		self.graph = graph;
		self.hover = HoverState::default();
		self.drag = DragState::default();
	}

	/// Copies the model's highlight and suppress flags onto the drawn nodes.
	pub fn refresh_emphasis(&mut self) {
		let model = &self.model;
		self.graph.visit_nodes_mut(|node| {
			let info = &mut node.data.user_data;
			if let Some(n) = model.node(&info.id) {
				info.highlight = n.highlight();
				info.suppress = n.suppress();
			}
		});
	}

	/// Model id of a simulation node.
	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<NodeId> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// radius is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Primary click on a node: expand or collapse it.
	pub fn click(&mut self, idx: DefaultNodeIdx) {
		let Some(id) = self.node_id(idx) else {
			return;
		};
		self.model.clear_highlight();
		if self.model.toggle(&id) {
			self.rebuild();
		}
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();
		self.hover.node = node;

		match node.and_then(|idx| self.node_id(idx)) {
			Some(id) => {
				if !was_hovering {
					self.hover.delay_t = 0.0;
				}
				self.model.clear_highlight();
				self.model.set_highlight(&id);
				self.hover.fading = false;
				self.refresh_emphasis();
			}
			None => {
				// Drawn flags stay until the fade-out finishes in `tick`.
				self.model.clear_highlight();
				self.hover.fading = was_hovering;
			}
		}
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.fading
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				if self.hover.fading {
					self.hover.fading = false;
					self.refresh_emphasis();
				}
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
