use crate::model::RiskLevel;

/// A graph vertex supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub risk: RiskLevel,
}

/// A weighted edge between two node ids. Both endpoints must exist in the
/// accompanying node set; weight must be positive.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
