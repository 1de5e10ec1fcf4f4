//! Tree node with its collapse state and transient emphasis flags.

use super::record::NodeId;

/// Which level of the record a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// The person.
	Root,
	/// One per record category, child of the root.
	Category,
	/// An entry of a category; never has children.
	Item,
}

/// A node of the hierarchy. Children are owned for the node's whole life;
/// collapsing only hides them.
#[derive(Clone, Debug)]
pub struct Node {
	pub(crate) id: Option<NodeId>,
	/// Display text; `None` renders blank.
	pub label: Option<String>,
	/// Category name, or `person` for the root.
	pub category: String,
	/// Level in the hierarchy.
	pub kind: NodeKind,
	/// Colour group: 0 for the root, then one per category.
	pub group: u32,
	/// Ids this node references; resolved into edges only while visible.
	pub targets: Vec<NodeId>,
	children: Vec<Node>,
	expanded: bool,
	pub(crate) highlight: bool,
	pub(crate) suppress: bool,
}

impl Node {
	/// Expanded node without an id or children.
	pub fn new(kind: NodeKind, category: &str, group: u32, label: Option<String>) -> Self {
		Self {
			id: None,
			label,
			category: category.to_owned(),
			kind,
			group,
			targets: Vec::new(),
			children: Vec::new(),
			expanded: true,
			highlight: false,
			suppress: false,
		}
	}

	/// Explicit id from the record, if any.
	pub fn with_id(mut self, id: Option<NodeId>) -> Self {
		self.id = id;
		self
	}

	/// Cross-references to other items.
	pub fn with_targets(mut self, targets: Vec<NodeId>) -> Self {
		self.targets = targets;
		self
	}

	/// Owned children, initially shown.
	pub fn with_children(mut self, children: Vec<Node>) -> Self {
		self.children = children;
		self
	}

	/// `None` until the node has been flattened once (unless the record named it).
	pub fn id(&self) -> Option<&NodeId> {
		self.id.as_ref()
	}

	/// Children currently shown.
	pub fn children(&self) -> &[Node] {
		if self.expanded { &self.children } else { &[] }
	}

	/// Children currently collapsed away.
	pub fn hidden_children(&self) -> &[Node] {
		if self.expanded { &[] } else { &self.children }
	}

	pub(crate) fn children_mut(&mut self) -> &mut [Node] {
		if self.expanded {
			&mut self.children
		} else {
			&mut []
		}
	}

	/// Every child regardless of visibility.
	pub(crate) fn all_children_mut(&mut self) -> &mut [Node] {
		&mut self.children
	}

	/// No children at all, shown or hidden.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Has children and they are hidden.
	pub fn is_collapsed(&self) -> bool {
		!self.is_leaf() && !self.expanded
	}

	/// Touches the focal node's edges.
	pub fn highlight(&self) -> bool {
		self.highlight
	}

	/// Touches an edge away from the focal node.
	pub fn suppress(&self) -> bool {
		self.suppress
	}

	/// Flips visibility of the children. Leaves are left alone; returns
	/// whether anything changed.
	pub fn toggle(&mut self) -> bool {
		if self.is_leaf() {
			return false;
		}
		self.expanded = !self.expanded;
		true
	}

	/// Hides the children; no-op for leaves.
	pub fn collapse(&mut self) {
		if !self.is_leaf() {
			self.expanded = false;
		}
	}

	pub(crate) fn find(&self, id: &NodeId) -> Option<&Node> {
		if self.id.as_ref() == Some(id) {
			return Some(self);
		}
		self.children.iter().find_map(|child| child.find(id))
	}

	pub(crate) fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
		if self.id.as_ref() == Some(id) {
			return Some(self);
		}
		self.children.iter_mut().find_map(|child| child.find_mut(id))
	}
}
