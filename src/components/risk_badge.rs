use leptos::prelude::*;

use crate::model::RiskLevel;

/// Severity pill used on profile cards and analysis findings.
#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
	view! {
		<span
			class="risk-badge"
			style=format!(
				"background-color: {color}22; color: {color}; border: 1px solid {color};",
				color = level.color(),
			)
		>
			{level.label()}
		</span>
	}
}
