//! Domain types shared across the dashboard: risk classification, platforms,
//! profile records and the analysis-service wire types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered severity classification attached to profiles, graph nodes and
/// analysis findings. Derived `Ord` follows declaration order, so
/// `Low < Medium < High < Critical`.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
	#[default]
	Low,
	Medium,
	High,
	Critical,
}

impl RiskLevel {
	/// Fill color used for badges and graph nodes.
	pub fn color(self) -> &'static str {
		match self {
			RiskLevel::Low => "#22c55e",
			RiskLevel::Medium => "#eab308",
			RiskLevel::High => "#f97316",
			RiskLevel::Critical => "#ef4444",
		}
	}

	/// Uppercase display label, matching the wire encoding.
	pub fn label(self) -> &'static str {
		match self {
			RiskLevel::Low => "LOW",
			RiskLevel::Medium => "MEDIUM",
			RiskLevel::High => "HIGH",
			RiskLevel::Critical => "CRITICAL",
		}
	}
}

impl fmt::Display for RiskLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Social-media platform a profile was observed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Platform {
	#[default]
	Twitter,
	Instagram,
	Facebook,
	Telegram,
	LinkedIn,
}

impl Platform {
	/// All platforms, in the order the analyzer select control lists them.
	pub const ALL: [Platform; 5] = [
		Platform::Twitter,
		Platform::Instagram,
		Platform::Facebook,
		Platform::Telegram,
		Platform::LinkedIn,
	];

	/// Canonical display name, identical to the wire encoding.
	pub fn as_str(self) -> &'static str {
		match self {
			Platform::Twitter => "Twitter",
			Platform::Instagram => "Instagram",
			Platform::Facebook => "Facebook",
			Platform::Telegram => "Telegram",
			Platform::LinkedIn => "LinkedIn",
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Platform {
	type Err = UnknownPlatform;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Platform::ALL
			.into_iter()
			.find(|p| p.as_str() == s)
			.ok_or_else(|| UnknownPlatform(s.to_owned()))
	}
}

/// Error returned when parsing a platform name from the select control.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform `{0}`")]
pub struct UnknownPlatform(pub String);

/// A profile record from the read-only intelligence store.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
	pub id: String,
	pub handle: String,
	pub platform: Platform,
	pub avatar: String,
	pub follower_count: u64,
	pub following_count: u64,
	pub post_count: u64,
	/// Risk score in 0..=100.
	pub risk_score: u8,
	pub risk_level: RiskLevel,
	pub tags: Vec<String>,
	pub bio: String,
	/// Opaque cross-platform fingerprint id, produced by the analysis
	/// collaborator, never computed locally.
	pub behavioral_signature: String,
	pub detected_at: String,
	pub is_flagged: bool,
}

/// Structured result returned by the forensic-analysis collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
	/// Confidence score in 0..=100; low values indicate likely automation.
	pub trust_score: f64,
	pub findings: Vec<Finding>,
	pub coordinated_network_detected: bool,
	#[serde(default)]
	pub cross_platform_matches: Vec<PlatformMatch>,
}

/// A single categorized observation inside an [`AnalysisReport`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
	pub category: String,
	pub description: String,
	pub severity: RiskLevel,
}

/// A suspected same-actor identity on another platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMatch {
	pub handle: String,
	pub platform: Platform,
	pub confidence: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn risk_levels_are_ordered_by_severity() {
		assert!(RiskLevel::Low < RiskLevel::Medium);
		assert!(RiskLevel::Medium < RiskLevel::High);
		assert!(RiskLevel::High < RiskLevel::Critical);
	}

	#[test]
	fn risk_level_uses_uppercase_wire_names() {
		assert_eq!(
			serde_json::to_string(&RiskLevel::Critical).unwrap(),
			"\"CRITICAL\""
		);
		let parsed: RiskLevel = serde_json::from_str("\"MEDIUM\"").unwrap();
		assert_eq!(parsed, RiskLevel::Medium);
	}

	#[test]
	fn platform_round_trips_through_display() {
		for platform in Platform::ALL {
			assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
		}
		assert!("Friendster".parse::<Platform>().is_err());
	}

	#[test]
	fn analysis_report_uses_camel_case_keys() {
		let json = r#"{
			"trustScore": 42.0,
			"findings": [
				{"category": "Posting Entropy", "description": "burst posting", "severity": "HIGH"}
			],
			"coordinatedNetworkDetected": true,
			"crossPlatformMatches": [
				{"handle": "mirror_acct", "platform": "Telegram", "confidence": 0.82}
			]
		}"#;
		let report: AnalysisReport = serde_json::from_str(json).unwrap();
		assert_eq!(report.trust_score, 42.0);
		assert_eq!(report.findings[0].severity, RiskLevel::High);
		assert!(report.coordinated_network_detected);
		assert_eq!(report.cross_platform_matches[0].platform, Platform::Telegram);
	}

	#[test]
	fn cross_platform_matches_default_to_empty() {
		let json = r#"{"trustScore": 90, "findings": [], "coordinatedNetworkDetected": false}"#;
		let report: AnalysisReport = serde_json::from_str(json).unwrap();
		assert!(report.cross_platform_matches.is_empty());
	}
}
