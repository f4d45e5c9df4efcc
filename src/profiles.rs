//! Fixed in-memory intelligence store: mock profile records, the mock
//! coordination-ring graph and the behavioral-DNA axes.
//!
//! Everything here is returned as owned data from plain functions; the
//! views take it at construction instead of reaching for ambient globals.

use crate::components::network_graph::{GraphData, GraphLink, GraphNode};
use crate::components::radar_chart::RadarAxis;
use crate::model::{Platform, Profile, RiskLevel};

/// The read-only profile collection shown on the dashboard.
pub fn mock_profiles() -> Vec<Profile> {
	vec![
		Profile {
			id: "1".into(),
			handle: "crypto_guru_42".into(),
			platform: Platform::Twitter,
			avatar: "https://picsum.photos/seed/p1/200/200".into(),
			follower_count: 15_400,
			following_count: 200,
			post_count: 120,
			risk_score: 88,
			risk_level: RiskLevel::High,
			tags: vec!["Automation".into(), "Scam Pattern".into(), "Coordinated".into()],
			bio: "Follow for the best daily alpha! \u{1f680} #Crypto #NFT #Web3".into(),
			behavioral_signature: "BSV-TX-882-991".into(),
			detected_at: "2023-11-20T10:30:00Z".into(),
			is_flagged: true,
		},
		Profile {
			id: "2".into(),
			handle: "sarah_j_doe".into(),
			platform: Platform::Instagram,
			avatar: "https://picsum.photos/seed/p2/200/200".into(),
			follower_count: 850,
			following_count: 920,
			post_count: 45,
			risk_score: 12,
			risk_level: RiskLevel::Low,
			tags: vec!["Authentic".into()],
			bio: "Photographer & Coffee lover. Traveling the world.".into(),
			behavioral_signature: "BSV-IG-012-441".into(),
			detected_at: "2023-11-19T14:20:00Z".into(),
			is_flagged: false,
		},
		Profile {
			id: "3".into(),
			handle: "urgent_news_today".into(),
			platform: Platform::Telegram,
			avatar: "https://picsum.photos/seed/p3/200/200".into(),
			follower_count: 45_000,
			following_count: 5,
			post_count: 5_000,
			risk_score: 95,
			risk_level: RiskLevel::Critical,
			tags: vec!["Misinformation".into(), "High Entropy".into(), "Botnet".into()],
			bio: "Breaking news from around the globe. Stay informed.".into(),
			behavioral_signature: "BSV-TG-995-121".into(),
			detected_at: "2023-11-21T08:15:00Z".into(),
			is_flagged: true,
		},
	]
}

/// The mock coordination ring rendered by the network graph panel.
pub fn coordination_ring() -> GraphData {
	let node = |id: &str, label: &str, risk| GraphNode {
		id: id.into(),
		label: label.into(),
		risk,
	};
	let link = |source: &str, target: &str, weight: f64| GraphLink {
		source: source.into(),
		target: target.into(),
		weight,
	};

	GraphData {
		nodes: vec![
			node("1", "Root Node", RiskLevel::Critical),
			node("2", "Bot A", RiskLevel::High),
			node("3", "Bot B", RiskLevel::High),
			node("4", "Amplifier 1", RiskLevel::Medium),
			node("5", "Amplifier 2", RiskLevel::Medium),
			node("6", "Sleeper 1", RiskLevel::Low),
		],
		links: vec![
			link("1", "2", 5.0),
			link("1", "3", 5.0),
			link("2", "4", 2.0),
			link("3", "5", 2.0),
			link("4", "6", 1.0),
			link("5", "6", 1.0),
			link("1", "6", 1.0),
		],
	}
}

/// Axes of the behavioral-DNA radar chart, with their mock scores.
pub fn behavioral_dna_axes() -> Vec<RadarAxis> {
	let axis = |label: &str, value: f64| RadarAxis {
		label: label.into(),
		value,
		max: 100.0,
	};
	vec![
		axis("Temporal Entropy", 85.0),
		axis("Linguistic Rhythm", 92.0),
		axis("Reaction Velocity", 78.0),
		axis("Content Stability", 45.0),
		axis("Network Motif", 90.0),
		axis("Automation Marker", 88.0),
	]
}

/// Headline tiles at the top of the dashboard.
pub fn dashboard_stats() -> Vec<(&'static str, &'static str)> {
	vec![
		("Total Scanned", "1.2M"),
		("Threats Blocked", "45.2K"),
		("Botnets Identified", "124"),
		("Network Confidence", "98.2%"),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::{Simulation, SimulationParams};

	#[test]
	fn coordination_ring_is_a_valid_simulation_input() {
		let ring = coordination_ring();
		assert!(Simulation::new(&ring, 800.0, 400.0, SimulationParams::default()).is_ok());
	}

	#[test]
	fn profile_scores_stay_in_range() {
		for profile in mock_profiles() {
			assert!(profile.risk_score <= 100);
		}
	}

	#[test]
	fn flagged_profiles_carry_elevated_risk() {
		for profile in mock_profiles() {
			if profile.is_flagged {
				assert!(profile.risk_level >= RiskLevel::High);
			}
		}
	}
}
