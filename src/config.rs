//! Explicit application configuration, passed in at construction instead of
//! living in process-wide mutable state.

use crate::components::network_graph::SimulationParams;

/// Visual theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	/// Value bound to the `data-theme` attribute on `<html>`.
	pub fn attr(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

/// Top-level configuration handed to the app when it is mounted.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppConfig {
	pub theme: Theme,
	/// Force constants for every network graph in the app.
	pub forces: SimulationParams,
}
