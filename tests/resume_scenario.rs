use resume_graph::components::force_graph::GraphData;
use resume_graph::model::{EdgeKind, LabelFormats, NodeId, NodeKind, ResumeGraph, parse_record};

const RECORD: &str = r#"{
	"person": {
		"name": "Rob",
		"categories": [
			{
				"name": "education",
				"displayAs": "Education",
				"items": [{ "degree": "BS", "major": "CS", "end": "2001" }]
			},
			{
				"name": "positions",
				"displayAs": "Positions",
				"items": [{ "short_title": "Engineer", "targets": [{ "id": "company1" }] }]
			}
		]
	}
}"#;

fn positions_id(graph: &ResumeGraph) -> NodeId {
	graph
		.visible_nodes()
		.find(|n| n.kind == NodeKind::Category && n.category == "positions")
		.and_then(|n| n.id().cloned())
		.unwrap()
}

#[test]
fn collapsed_start_then_expand_positions() {
	let record = parse_record(RECORD).unwrap();
	let mut graph = ResumeGraph::new(&record, &LabelFormats::default());

	let visible = graph.flatten();
	assert_eq!(visible.len(), 3);
	let kinds: Vec<_> = visible.iter().map(|n| n.kind).collect();
	assert_eq!(kinds, [NodeKind::Category, NodeKind::Category, NodeKind::Root]);
	assert!(resume_graph::model::resolve_cross_links(&visible).is_empty());

	let positions = positions_id(&graph);
	assert!(graph.toggle(&positions));

	let visible = graph.flatten();
	assert_eq!(visible.len(), 4);
	let item = visible.iter().find(|n| n.kind == NodeKind::Item).unwrap();
	assert_eq!(item.label.as_deref(), Some("Engineer"));
	assert_eq!(item.targets, [NodeId::from("company1")]);
	assert!(resume_graph::model::resolve_cross_links(&visible).is_empty());
	assert!(graph.edges().iter().all(|e| e.kind == EdgeKind::Containment));
	assert_eq!(graph.edges().len(), 3);
}

#[test]
fn ids_survive_collapse_and_expand() {
	let record = parse_record(RECORD).unwrap();
	let mut graph = ResumeGraph::new(&record, &LabelFormats::default());
	let before: Vec<_> = graph.flatten().iter().map(|n| n.id().cloned()).collect();
	let again: Vec<_> = graph.flatten().iter().map(|n| n.id().cloned()).collect();
	assert_eq!(before, again);

	let positions = positions_id(&graph);
	graph.toggle(&positions);
	let item_id = graph.node(&positions).unwrap().children()[0].id().cloned();
	graph.toggle(&positions);
	graph.toggle(&positions);
	assert_eq!(graph.node(&positions).unwrap().children()[0].id().cloned(), item_id);
	assert_eq!(graph.node(&positions).unwrap().children().len(), 1);
}

#[test]
fn education_label_uses_default_template() {
	let record = parse_record(RECORD).unwrap();
	let mut graph = ResumeGraph::new(&record, &LabelFormats::default());
	let education = graph
		.visible_nodes()
		.find(|n| n.category == "education")
		.and_then(|n| n.id().cloned())
		.unwrap();
	graph.toggle(&education);
	let labels: Vec<_> = graph
		.node(&education)
		.unwrap()
		.children()
		.iter()
		.map(|n| n.label.clone())
		.collect();
	assert_eq!(labels, [Some("BS, CS (2001)".to_owned())]);
}

#[test]
fn snapshot_reflects_visible_state() {
	let record = parse_record(RECORD).unwrap();
	let mut graph = ResumeGraph::new(&record, &LabelFormats::default());
	let data = GraphData::from_model(&graph, 35);
	assert_eq!(data.nodes.len(), 3);
	assert_eq!(data.links.len(), 2);
	assert!(data.nodes.iter().all(|n| n.radius == 15.0));

	let root = graph.root().id().cloned().unwrap();
	graph.set_highlight(&root);
	let data = GraphData::from_model(&graph, 35);
	assert!(data.nodes.iter().all(|n| n.highlight && !n.suppress));

	graph.clear_highlight();
	let data = GraphData::from_model(&graph, 35);
	assert!(data.nodes.iter().all(|n| !n.highlight && !n.suppress));
	let groups: Vec<_> = data.nodes.iter().map(|n| n.group).collect();
	assert_eq!(groups, [1, 2, 0]);
}

#[test]
fn empty_category_is_drawn_like_other_categories() {
	let record = parse_record(
		r#"{"person": {"name": "Rob", "categories": [
			{"name": "awards", "displayAs": "Awards"},
			{"name": "positions", "displayAs": "Positions", "items": [{"short_title": "Engineer"}]}
		]}}"#,
	)
	.unwrap();
	let mut graph = ResumeGraph::new(&record, &LabelFormats::default());
	let awards = graph
		.visible_nodes()
		.find(|n| n.category == "awards")
		.and_then(|n| n.id().cloned())
		.unwrap();
	assert!(!graph.toggle(&awards));

	let data = GraphData::from_model(&graph, 35);
	assert_eq!(data.nodes.len(), 3);
	assert!(data.nodes.iter().all(|n| n.radius == 15.0));
}
