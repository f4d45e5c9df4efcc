//! Dashboard page: headline stats, the profile store, the coordination-ring
//! graph, the behavioral-DNA radar and the analyzer form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::components::network_graph::NetworkGraphCanvas;
use crate::components::profile_card::ProfileCard;
use crate::components::radar_chart::RadarChart;
use crate::components::risk_badge::RiskBadge;
use crate::config::{AppConfig, Theme};
use crate::model::{AnalysisReport, Platform};
use crate::profiles;
use crate::services::analysis::OfflineAnalysisClient;

/// The dashboard.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let theme = use_context::<RwSignal<Theme>>();

	let graph_data = Signal::derive(profiles::coordination_ring);
	let dna_axes = Signal::derive(profiles::behavioral_dna_axes);
	let stats = profiles::dashboard_stats();
	let profile_list = profiles::mock_profiles();

	let (handle, set_handle) = signal(String::new());
	let (platform, set_platform) = signal(Platform::Twitter);
	let (analyzing, set_analyzing) = signal(false);
	let (analysis, set_analysis) = signal(None::<Result<AnalysisReport, String>>);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let query = handle.get();
		let target = platform.get();
		set_analyzing.set(true);
		spawn_local(async move {
			let result = OfflineAnalysisClient.analyze(&query, target).await;
			if let Err(ref err) = result {
				warn!("analysis of `{query}` failed: {err}");
			}
			set_analysis.set(Some(result.map_err(|err| err.to_string())));
			set_analyzing.set(false);
		});
	};

	let stat_tiles = stats
		.into_iter()
		.map(|(label, value)| {
			view! {
				<div class="stat-tile">
					<span class="stat-value">{value}</span>
					<span class="stat-label">{label}</span>
				</div>
			}
		})
		.collect_view();

	let profile_cards = profile_list
		.into_iter()
		.map(|profile| view! { <ProfileCard profile=profile /> })
		.collect_view();

	let platform_options = Platform::ALL
		.into_iter()
		.map(|p| {
			view! {
				<option value=p.as_str() selected={p == Platform::Twitter}>
					{p.as_str()}
				</option>
			}
		})
		.collect_view();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="dashboard">
				<header class="dashboard-header">
					<h1>"Sentinel"</h1>
					<p class="subtitle">"Social-media threat intelligence (mock data)"</p>
					{theme
						.map(|theme| {
							view! {
								<button
									class="theme-toggle"
									on:click=move |_| theme.update(|t| *t = t.toggled())
								>
									{move || match theme.get() {
										Theme::Dark => "Switch to light",
										Theme::Light => "Switch to dark",
									}}
								</button>
							}
						})}
				</header>

				<section class="stats-grid">{stat_tiles}</section>

				<section class="panel">
					<h2>"Coordination Ring"</h2>
					<p class="panel-hint">"Drag nodes to reposition them."</p>
					<NetworkGraphCanvas data=graph_data height=400.0 params=config.forces />
				</section>

				<div class="panel-row">
					<section class="panel">
						<h2>"Flagged Profiles"</h2>
						<div class="profile-list">{profile_cards}</div>
					</section>

					<section class="panel">
						<h2>"Behavioral DNA"</h2>
						<RadarChart axes=dna_axes />
					</section>
				</div>

				<section class="panel">
					<h2>"Forensic Analyzer"</h2>
					<form class="analyzer-form" on:submit=on_submit>
						<input
							type="text"
							placeholder="handle, without the @"
							prop:value=handle
							on:input=move |ev| set_handle.set(event_target_value(&ev))
						/>
						<select on:change=move |ev| {
							if let Ok(p) = event_target_value(&ev).parse::<Platform>() {
								set_platform.set(p);
							}
						}>{platform_options}</select>
						<button type="submit" disabled=analyzing>
							{move || if analyzing.get() { "Analyzing..." } else { "Analyze" }}
						</button>
					</form>

					{move || {
						analysis
							.get()
							.map(|result| match result {
								Ok(report) => view! { <AnalysisResult report=report /> }.into_any(),
								Err(message) => {
									view! {
										<div class="analysis-error">
											<p>"Analysis failed: " {message}</p>
											<p class="panel-hint">
												"The service was not retried; submit again to try once more."
											</p>
										</div>
									}
										.into_any()
								}
							})
					}}
				</section>
			</div>
		</ErrorBoundary>
	}
}

/// Rendered analyzer response: trust score, findings and matches.
#[component]
fn AnalysisResult(report: AnalysisReport) -> impl IntoView {
	let findings = report
		.findings
		.into_iter()
		.map(|finding| {
			view! {
				<li class="finding">
					<RiskBadge level=finding.severity />
					<div>
						<strong>{finding.category}</strong>
						<p>{finding.description}</p>
					</div>
				</li>
			}
		})
		.collect_view();

	let matches = (!report.cross_platform_matches.is_empty()).then(|| {
		let rows = report
			.cross_platform_matches
			.into_iter()
			.map(|m| {
				view! {
					<li>
						"@" {m.handle} " on " {m.platform.as_str()} " ("
						{format!("{:.0}%", m.confidence * 100.0)} " confidence)"
					</li>
				}
			})
			.collect_view();
		view! {
			<div class="matches">
				<h3>"Cross-Platform Matches"</h3>
				<ul>{rows}</ul>
			</div>
		}
	});

	view! {
		<div class="analysis-result">
			<div class="trust-score">
				<span class="trust-score-value">{format!("{:.0}", report.trust_score)}</span>
				<span class="trust-score-label">"trust score / 100"</span>
			</div>
			{report
				.coordinated_network_detected
				.then(|| {
					view! {
						<p class="coordination-warning">
							"Coordinated network behavior detected"
						</p>
					}
				})}
			<ul class="findings">{findings}</ul>
			{matches}
		</div>
	}
}
