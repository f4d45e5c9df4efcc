use log::debug;

use super::sim::{GraphConfigError, Simulation, SimulationParams, Vec2};
use super::types::GraphData;

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 12.0;

/// Pointer-drag bookkeeping for the canvas session.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
}

/// Everything one mounted graph canvas owns: the simulation, the drag
/// overlay and the viewport dimensions. Never shared across views.
pub struct NetworkGraphState {
	pub sim: Simulation,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	/// Cleared exactly once, at view teardown.
	pub running: bool,
}

impl NetworkGraphState {
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		params: SimulationParams,
	) -> Result<Self, GraphConfigError> {
		let sim = Simulation::new(data, width, height, params)?;
		debug!(
			"network graph mounted: {} nodes, {} links, {width}x{height}",
			sim.nodes().len(),
			sim.links().len()
		);
		Ok(Self {
			sim,
			drag: DragState::default(),
			width,
			height,
			running: true,
		})
	}

	/// Advance the simulation one frame, unless the view has been torn down.
	pub fn tick(&mut self) {
		if self.running {
			self.sim.tick();
		}
	}

	/// Begin dragging the node under the pointer, if any. Pins it where it
	/// currently sits and reheats the simulation so neighbors react; the pin
	/// only starts following the pointer on subsequent move events, so
	/// mousedown alone never snaps a node.
	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		let Some(index) = self.sim.node_at(Vec2::new(x, y), HIT_RADIUS) else {
			return false;
		};
		self.drag = DragState {
			active: true,
			node: Some(index),
		};
		let at = self.sim.nodes()[index].position;
		self.sim.pin(index, at);
		self.sim.reheat();
		true
	}

	/// Follow the pointer mid-drag.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		if let Some(index) = self.drag.node.filter(|_| self.drag.active) {
			self.sim.move_pin(index, Vec2::new(x, y));
		}
	}

	/// Release the drag: the pin is removed and the system cools again.
	pub fn end_drag(&mut self) {
		if let Some(index) = self.drag.node.take() {
			self.sim.unpin(index);
			self.sim.cool();
		}
		self.drag.active = false;
	}

	/// Tear the session down. Guarantees no further position mutation even
	/// if a stray frame callback fires afterwards.
	pub fn shutdown(&mut self) {
		self.running = false;
		self.sim.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::{GraphLink, GraphNode};
	use super::*;
	use crate::model::RiskLevel;

	fn data() -> GraphData {
		GraphData {
			nodes: vec![
				GraphNode {
					id: "root".into(),
					label: "Root".into(),
					risk: RiskLevel::Critical,
				},
				GraphNode {
					id: "bot".into(),
					label: "Bot".into(),
					risk: RiskLevel::High,
				},
			],
			links: vec![GraphLink {
				source: "root".into(),
				target: "bot".into(),
				weight: 3.0,
			}],
		}
	}

	#[test]
	fn drag_pins_the_hit_node_and_release_unpins() {
		let mut state =
			NetworkGraphState::new(&data(), 800.0, 600.0, SimulationParams::default()).unwrap();
		let at = state.sim.nodes()[0].position;
		assert!(state.begin_drag(at.x, at.y));
		assert_eq!(state.drag.node, Some(0));
		assert!(state.sim.nodes()[0].pinned.is_some());

		state.drag_to(at.x + 30.0, at.y);
		state.tick();
		assert_eq!(state.sim.nodes()[0].position, Vec2::new(at.x + 30.0, at.y));

		state.end_drag();
		assert!(!state.drag.active);
		assert!(state.sim.nodes()[0].pinned.is_none());
	}

	#[test]
	fn mousedown_near_a_node_does_not_snap_it_to_the_pointer() {
		let mut state =
			NetworkGraphState::new(&data(), 800.0, 600.0, SimulationParams::default()).unwrap();
		let at = state.sim.nodes()[0].position;
		// hit within the hit radius, but off the node's exact center
		assert!(state.begin_drag(at.x + HIT_RADIUS / 2.0, at.y));
		assert_eq!(state.sim.nodes()[0].pinned, Some(at));
		state.tick();
		assert_eq!(state.sim.nodes()[0].position, at);
	}

	#[test]
	fn drag_on_empty_space_is_ignored() {
		let mut state =
			NetworkGraphState::new(&data(), 800.0, 600.0, SimulationParams::default()).unwrap();
		assert!(!state.begin_drag(5.0, 5.0));
		assert!(!state.drag.active);
	}

	#[test]
	fn shutdown_freezes_positions() {
		let mut state =
			NetworkGraphState::new(&data(), 800.0, 600.0, SimulationParams::default()).unwrap();
		state.tick();
		state.shutdown();
		let frozen: Vec<Vec2> = state.sim.nodes().iter().map(|n| n.position).collect();
		for _ in 0..10 {
			state.tick();
		}
		let after: Vec<Vec2> = state.sim.nodes().iter().map(|n| n.position).collect();
		assert_eq!(frozen, after);
	}
}
