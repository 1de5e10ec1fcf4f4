//! Visual scales: node size, label wrapping and how emphasis maps to alpha and width.

use crate::model::{Node, NodeKind};

/// Radius of the root and category nodes.
pub const PARENT_RADIUS: f64 = 15.0;
/// Radius of item nodes.
pub const LEAF_RADIUS: f64 = 10.0;
/// Vertical distance between wrapped label lines.
pub const LINE_HEIGHT: f64 = 13.0;

/// The root and categories are drawn larger than items, whether their
/// children are shown or not and even when a category has no items.
pub fn node_radius(node: &Node) -> f64 {
	match node.kind {
		NodeKind::Item => LEAF_RADIUS,
		NodeKind::Root | NodeKind::Category => PARENT_RADIUS,
	}
}

/// Greedy word wrap. Labels that fit are kept whole; a blank label becomes a
/// single space so every node still gets a text line.
pub fn wrap_label(label: Option<&str>, wrap: usize) -> Vec<String> {
	let text = match label {
		Some(text) if !text.is_empty() => text,
		_ => return vec![" ".to_owned()],
	};
	if text.chars().count() <= wrap {
		return vec![text.to_owned()];
	}

	let mut lines = Vec::new();
	let mut line = String::new();
	for word in text.split_whitespace() {
		let (line_len, word_len) = (line.chars().count(), word.chars().count());
		if !line.is_empty() && line_len + word_len >= wrap {
			lines.push(std::mem::take(&mut line).trim_end().to_owned());
		}
		line.push_str(word);
		line.push(' ');
	}
	if !line.is_empty() {
		lines.push(line.trim_end().to_owned());
	}
	lines
}

/// Styling class of an edge while a node is hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	/// Both ends touch the focal node's edges.
	Highlighted,
	/// Both ends are away from the focal node.
	Suppressed,
	/// No hover, or mixed ends.
	Normal,
}

/// An edge is highlighted when both ends are, suppressed when both ends are.
pub fn edge_emphasis(source: (bool, bool), target: (bool, bool)) -> Emphasis {
	let ((sh, ss), (th, ts)) = (source, target);
	if sh && th {
		Emphasis::Highlighted
	} else if ss && ts {
		Emphasis::Suppressed
	} else {
		Emphasis::Normal
	}
}

/// Stroke opacity of an edge.
pub fn edge_alpha(emphasis: Emphasis) -> f64 {
	match emphasis {
		Emphasis::Suppressed => 0.25,
		Emphasis::Highlighted | Emphasis::Normal => 0.5,
	}
}

/// Stroke width of an edge relative to the base width.
pub fn edge_width(emphasis: Emphasis, base: f64) -> f64 {
	match emphasis {
		Emphasis::Highlighted => base + 1.0,
		Emphasis::Suppressed => (base - 1.0).max(1.0),
		Emphasis::Normal => base,
	}
}

/// Suppressed nodes fade out unless they are also highlighted.
pub fn node_alpha(highlight: bool, suppress: bool) -> f64 {
	if !highlight && suppress { 0.2 } else { 1.0 }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn radius_depends_on_kind() {
		let leaf = Node::new(NodeKind::Item, "education", 1, None);
		let mut parent = Node::new(NodeKind::Category, "education", 1, None).with_children(vec![leaf.clone()]);
		assert_eq!(node_radius(&leaf), LEAF_RADIUS);
		assert_eq!(node_radius(&parent), PARENT_RADIUS);
		parent.toggle();
		assert_eq!(node_radius(&parent), PARENT_RADIUS);
	}

	#[test]
	fn empty_category_is_drawn_as_a_parent() {
		let empty = Node::new(NodeKind::Category, "awards", 3, Some("Awards".into()));
		assert!(empty.is_leaf());
		assert_eq!(node_radius(&empty), PARENT_RADIUS);
		let root = Node::new(NodeKind::Root, "person", 0, None);
		assert_eq!(node_radius(&root), PARENT_RADIUS);
	}

	#[test]
	fn blank_and_short_labels() {
		assert_eq!(wrap_label(None, 35), [" "]);
		assert_eq!(wrap_label(Some(""), 35), [" "]);
		assert_eq!(wrap_label(Some("BS, CS (2001)"), 35), ["BS, CS (2001)"]);
	}

	#[test]
	fn long_labels_wrap_on_words() {
		let lines = wrap_label(Some("Designed a distributed task scheduler for research clusters"), 20);
		assert_eq!(lines, ["Designed a", "distributed task", "scheduler for", "research clusters"]);
	}

	#[test]
	fn overlong_word_gets_its_own_line() {
		let lines = wrap_label(Some("a supercalifragilistic word"), 10);
		assert_eq!(lines, ["a", "supercalifragilistic", "word"]);
	}

	#[test]
	fn emphasis_rules() {
		assert_eq!(edge_emphasis((true, false), (true, true)), Emphasis::Highlighted);
		assert_eq!(edge_emphasis((false, true), (false, true)), Emphasis::Suppressed);
		assert_eq!(edge_emphasis((true, true), (false, true)), Emphasis::Suppressed);
		assert_eq!(edge_emphasis((true, false), (false, false)), Emphasis::Normal);
		assert_eq!(edge_width(Emphasis::Suppressed, 1.0), 1.0);
		assert_eq!(edge_width(Emphasis::Highlighted, 1.0), 2.0);
		assert_eq!(edge_alpha(Emphasis::Suppressed), 0.25);
		assert_eq!(node_alpha(true, true), 1.0);
		assert_eq!(node_alpha(false, true), 0.2);
	}
}
