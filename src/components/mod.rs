pub mod network_graph;
pub mod profile_card;
pub mod radar_chart;
pub mod risk_badge;
