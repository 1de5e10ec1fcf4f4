//! Collapsible hierarchy of a [`Record`] and the edges derived from its visible part.

use std::collections::HashSet;

use log::{debug, trace};

use super::labels::LabelFormats;
use super::node::{Node, NodeKind};
use super::record::{NodeId, Record};

/// Category tag of the root node.
pub const ROOT_CATEGORY: &str = "person";

/// Why two nodes are connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeKind {
	/// Parent to visible child.
	#[default]
	Containment,
	/// An item's target that is currently visible.
	Reference,
}

/// Directed connection between two visible nodes. Derived, never stored on nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Parent, or the referencing item.
	pub source: NodeId,
	/// Child, or the referenced item.
	pub target: NodeId,
	/// Containment or reference.
	pub kind: EdgeKind,
}

impl Edge {
	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &NodeId) -> bool {
		&self.source == id || &self.target == id
	}
}

/// Builds the node tree: the root (group 0), then one category node per
/// category in document order (groups 1, 2, ...) holding its items.
///
/// An explicit id already used by an earlier item is dropped, and the later
/// item is numbered like any other node.
pub fn convert(record: &Record, labels: &LabelFormats) -> Node {
	let person = &record.person;
	let mut taken = HashSet::new();
	let categories = person
		.categories
		.iter()
		.zip(1..)
		.map(|(category, group)| {
			let items = category
				.items
				.iter()
				.map(|item| {
					Node::new(
						NodeKind::Item,
						&category.name,
						group,
						labels.label_for(&category.name, item),
					)
					.with_id(item.id.clone().filter(|id| {
						let fresh = taken.insert(id.clone());
						if !fresh {
							debug!("duplicate id {id} in category {}", category.name);
						}
						fresh
					}))
					.with_targets(item.targets.iter().map(|t| t.id.clone()).collect())
				})
				.collect();
			Node::new(
				NodeKind::Category,
				&category.name,
				group,
				category.display_as.clone(),
			)
			.with_children(items)
		})
		.collect();

	Node::new(NodeKind::Root, ROOT_CATEGORY, 0, person.name.clone()).with_children(categories)
}

/// Numbers every visible node that has no identifier yet, children before parents.
fn assign_ids(node: &mut Node, next_id: &mut u32) {
	for child in node.children_mut() {
		assign_ids(child, next_id);
	}
	if node.id.is_none() {
		*next_id += 1;
		node.id = Some(NodeId::Assigned(*next_id));
	}
}

fn collect_visible<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
	for child in node.children() {
		collect_visible(child, out);
	}
	out.push(node);
}

/// Visible nodes in post-order (children before their parent, root last).
pub fn visible_nodes(root: &Node) -> Vec<&Node> {
	let mut out = Vec::new();
	collect_visible(root, &mut out);
	out
}

/// Parent-to-child edges of the visible tree.
pub fn tree_links(visible: &[&Node]) -> Vec<Edge> {
	visible
		.iter()
		.flat_map(|parent| {
			parent.children().iter().filter_map(move |child| {
				Some(Edge {
					source: parent.id()?.clone(),
					target: child.id()?.clone(),
					kind: EdgeKind::Containment,
				})
			})
		})
		.collect()
}

/// Edges for every target that resolves to a node in `visible`. Targets that
/// are hidden or absent produce nothing.
pub fn resolve_cross_links(visible: &[&Node]) -> Vec<Edge> {
	let mut edges = Vec::new();
	for node in visible {
		let Some(source) = node.id() else {
			continue;
		};
		for target in &node.targets {
			if visible.iter().any(|n| n.id() == Some(target)) {
				edges.push(Edge {
					source: source.clone(),
					target: target.clone(),
					kind: EdgeKind::Reference,
				});
			} else {
				trace!("target {target} of node {source} is not visible");
			}
		}
	}
	edges
}

/// Edges into or out of `id`.
pub fn connected_edges<'a>(id: &NodeId, edges: &'a [Edge]) -> Vec<&'a Edge> {
	edges.iter().filter(|e| e.touches(id)).collect()
}

/// Edges ending at `id`.
pub fn incoming_edges<'a>(id: &NodeId, edges: &'a [Edge]) -> Vec<&'a Edge> {
	edges.iter().filter(|e| &e.target == id).collect()
}

/// Edges starting at `id`.
pub fn outgoing_edges<'a>(id: &NodeId, edges: &'a [Edge]) -> Vec<&'a Edge> {
	edges.iter().filter(|e| &e.source == id).collect()
}

fn apply_emphasis(node: &mut Node, highlighted: &HashSet<&NodeId>, suppressed: &HashSet<&NodeId>) {
	if let Some(id) = &node.id {
		node.highlight |= highlighted.contains(id);
		node.suppress |= suppressed.contains(id);
	}
	for child in node.all_children_mut() {
		apply_emphasis(child, highlighted, suppressed);
	}
}

fn reset_emphasis(node: &mut Node) {
	node.highlight = false;
	node.suppress = false;
	for child in node.all_children_mut() {
		reset_emphasis(child);
	}
}

/// The hierarchy plus its current visible node order and edge set.
#[derive(Clone, Debug)]
pub struct ResumeGraph {
	root: Node,
	next_id: u32,
	order: Vec<NodeId>,
	edges: Vec<Edge>,
}

impl ResumeGraph {
	/// Converts the record and applies the initial view: every category collapsed.
	pub fn new(record: &Record, labels: &LabelFormats) -> Self {
		let mut graph = Self::from_root(convert(record, labels));
		graph.update();
		graph.start_view();
		graph.update();
		graph
	}

	/// Wraps an already built tree without touching its visibility.
	pub fn from_root(root: Node) -> Self {
		Self {
			root,
			next_id: 0,
			order: Vec::new(),
			edges: Vec::new(),
		}
	}

	/// Root of the tree (the person).
	pub fn root(&self) -> &Node {
		&self.root
	}

	/// Visible nodes, numbering any that have never been seen.
	pub fn flatten(&mut self) -> Vec<&Node> {
		assign_ids(&mut self.root, &mut self.next_id);
		visible_nodes(&self.root)
	}

	/// Re-flattens and rebuilds every edge: containment first, then references.
	pub fn update(&mut self) {
		assign_ids(&mut self.root, &mut self.next_id);
		let visible = visible_nodes(&self.root);
		let mut edges = tree_links(&visible);
		edges.extend(resolve_cross_links(&visible));
		self.order = visible.iter().filter_map(|n| n.id().cloned()).collect();
		debug!("graph updated: {} nodes, {} edges", self.order.len(), edges.len());
		self.edges = edges;
	}

	/// Collapses every top-level category.
	pub fn start_view(&mut self) {
		for category in self.root.children_mut() {
			category.collapse();
		}
	}

	/// Expands or collapses a node and rebuilds the edges. Returns whether the
	/// node existed and had children.
	pub fn toggle(&mut self, id: &NodeId) -> bool {
		let changed = self.root.find_mut(id).is_some_and(Node::toggle);
		if changed {
			debug!("toggled node {id}");
			self.update();
		}
		changed
	}

	/// Marks the endpoints of edges touching `focal` as highlighted and the
	/// endpoints of every other edge as suppressed.
	pub fn set_highlight(&mut self, focal: &NodeId) {
		let mut highlighted = HashSet::new();
		let mut suppressed = HashSet::new();
		for edge in &self.edges {
			let set = if edge.touches(focal) {
				&mut highlighted
			} else {
				&mut suppressed
			};
			set.insert(&edge.source);
			set.insert(&edge.target);
		}
		apply_emphasis(&mut self.root, &highlighted, &suppressed);
	}

	/// Resets highlight and suppress on every node, hidden ones included.
	pub fn clear_highlight(&mut self) {
		reset_emphasis(&mut self.root);
	}

	/// Any node, visible or not.
	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.root.find(id)
	}

	/// Visible nodes as of the last update.
	pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> {
		self.order.iter().filter_map(|id| self.node(id))
	}

	/// Ids of [`Self::visible_nodes`], same order.
	pub fn visible_ids(&self) -> &[NodeId] {
		&self.order
	}

	/// Containment edges followed by reference edges, as of the last update.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}
}
