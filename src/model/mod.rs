//! Hierarchical graph model: a record turned into a collapsible node tree whose
//! visible part, plus resolved cross-references, makes up the rendered graph.

pub mod graph;
pub mod labels;
pub mod node;
pub mod record;

pub use graph::{Edge, EdgeKind, ResumeGraph, convert, resolve_cross_links, tree_links};
pub use labels::{LabelFormats, LabelRule, LabelRuleConfig};
pub use node::{Node, NodeKind};
pub use record::{Category, Item, NodeId, Person, Record, Target, parse_record};
