//! Force-directed layout simulation.
//!
//! Three composable forces act each tick: pairwise repulsion, spring
//! attraction along links, and a weak pull toward the viewport center. The
//! whole system cools through a decaying `alpha` factor until it drops below
//! `alpha_min`, after which ticks are no-ops. Dragging a node pins it to an
//! explicit override position and reheats the system so neighbors react.
//!
//! The simulation is deliberately free of any rendering or browser
//! dependency; the canvas layer reads positions out of it each frame.

use std::collections::HashMap;
use std::f64::consts::PI;

use thiserror::Error;

use super::types::GraphData;
use crate::model::RiskLevel;

/// Radius of the deterministic initial placement circle around the center.
const INITIAL_RADIUS: f64 = 100.0;

/// Minimum squared distance used when two nodes coincide, so the repulsion
/// term stays finite and runs stay reproducible.
const MIN_DISTANCE_SQ: f64 = 1e-6;

/// Errors produced while validating graph input at configuration time.
/// None of these are recoverable at runtime; they indicate a caller bug.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphConfigError {
	#[error("link references unknown node id `{0}`")]
	UnknownNodeId(String),
	#[error("duplicate node id `{0}`")]
	DuplicateNodeId(String),
	// field must not be called `source`, thiserror reserves that name
	#[error("link `{from}` -> `{to}` has non-positive weight {weight}")]
	NonPositiveWeight {
		from: String,
		to: String,
		weight: f64,
	},
	#[error("viewport dimensions must be positive, got {width}x{height}")]
	BadViewport { width: f64, height: f64 },
}

/// A 2-D position, velocity or force accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	pub fn distance_to(self, other: Vec2) -> f64 {
		(other - self).length()
	}
}

impl std::ops::Add for Vec2 {
	type Output = Vec2;
	fn add(self, rhs: Vec2) -> Vec2 {
		Vec2::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl std::ops::Sub for Vec2 {
	type Output = Vec2;
	fn sub(self, rhs: Vec2) -> Vec2 {
		Vec2::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl std::ops::Mul<f64> for Vec2 {
	type Output = Vec2;
	fn mul(self, rhs: f64) -> Vec2 {
		Vec2::new(self.x * rhs, self.y * rhs)
	}
}

impl std::ops::AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Vec2) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl std::ops::SubAssign for Vec2 {
	fn sub_assign(&mut self, rhs: Vec2) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

/// Tunable force constants. The defaults are the dashboard's presentation
/// values, kept configurable rather than treated as truths.
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
	/// Many-body charge; negative values repel.
	pub repulsion_strength: f64,
	/// Spring rest length for links.
	pub link_distance: f64,
	/// Base spring stiffness, scaled per link by `weight.sqrt()`.
	pub link_strength: f64,
	/// Per-node pull toward the viewport center.
	pub center_strength: f64,
	/// Fraction of velocity shed each tick (friction).
	pub velocity_decay: f64,
	/// Alpha value below which the simulation is considered at rest.
	pub alpha_min: f64,
	/// Per-tick interpolation rate of alpha toward its target.
	pub alpha_decay: f64,
	/// Alpha target applied while a node is being dragged.
	pub reheat_target: f64,
}

impl Default for SimulationParams {
	fn default() -> Self {
		Self {
			repulsion_strength: -150.0,
			link_distance: 80.0,
			link_strength: 0.3,
			center_strength: 0.05,
			velocity_decay: 0.4,
			alpha_min: 0.001,
			// reaches alpha_min from 1.0 in roughly 300 ticks
			alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
			reheat_target: 0.3,
		}
	}
}

/// A node under simulation. Pinning is an explicit override; the general
/// position field is only ever advanced by integration.
#[derive(Clone, Debug)]
pub struct SimNode {
	pub id: String,
	pub label: String,
	pub risk: RiskLevel,
	pub position: Vec2,
	pub velocity: Vec2,
	pub pinned: Option<Vec2>,
}

/// A link with endpoints resolved to node indices at configuration time.
/// Storing indices rather than copied positions makes the endpoint
/// consistency invariant hold by construction.
#[derive(Clone, Copy, Debug)]
pub struct SimLink {
	pub source: usize,
	pub target: usize,
	pub weight: f64,
}

/// One layout session. Owned by a single rendering view; never shared.
#[derive(Debug)]
pub struct Simulation {
	nodes: Vec<SimNode>,
	links: Vec<SimLink>,
	params: SimulationParams,
	center: Vec2,
	alpha: f64,
	alpha_target: f64,
	stopped: bool,
}

impl Simulation {
	/// Validate the input and build a simulation with nodes placed
	/// deterministically on a circle around the viewport center.
	///
	/// Fails before any stepping on dangling link references, duplicate
	/// node ids, non-positive link weights or a degenerate viewport.
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		params: SimulationParams,
	) -> Result<Self, GraphConfigError> {
		if !(width > 0.0 && height > 0.0) {
			return Err(GraphConfigError::BadViewport { width, height });
		}

		let mut index = HashMap::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphConfigError::DuplicateNodeId(node.id.clone()));
			}
		}

		let resolve = |id: &str| {
			index
				.get(id)
				.copied()
				.ok_or_else(|| GraphConfigError::UnknownNodeId(id.to_owned()))
		};
		let links = data
			.links
			.iter()
			.map(|link| {
				if link.weight <= 0.0 {
					return Err(GraphConfigError::NonPositiveWeight {
						from: link.source.clone(),
						to: link.target.clone(),
						weight: link.weight,
					});
				}
				Ok(SimLink {
					source: resolve(&link.source)?,
					target: resolve(&link.target)?,
					weight: link.weight,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		let center = Vec2::new(width / 2.0, height / 2.0);
		let count = data.nodes.len().max(1);
		let nodes = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let angle = i as f64 * 2.0 * PI / count as f64;
				SimNode {
					id: node.id.clone(),
					label: node.label.clone(),
					risk: node.risk,
					position: center
						+ Vec2::new(INITIAL_RADIUS * angle.cos(), INITIAL_RADIUS * angle.sin()),
					velocity: Vec2::default(),
					pinned: None,
				}
			})
			.collect();

		Ok(Self {
			nodes,
			links,
			params,
			center,
			alpha: 1.0,
			alpha_target: 0.0,
			stopped: false,
		})
	}

	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	pub fn links(&self) -> &[SimLink] {
		&self.links
	}

	pub fn center(&self) -> Vec2 {
		self.center
	}

	/// Current endpoint positions of a link, always equal to the current
	/// positions of the referenced nodes.
	pub fn link_endpoints(&self, link: &SimLink) -> (Vec2, Vec2) {
		(
			self.nodes[link.source].position,
			self.nodes[link.target].position,
		)
	}

	/// Index of the first node within `radius` of `at`, if any.
	pub fn node_at(&self, at: Vec2, radius: f64) -> Option<usize> {
		self.nodes
			.iter()
			.position(|node| node.position.distance_to(at) < radius)
	}

	/// Whether further ticks can still move nodes.
	pub fn is_active(&self) -> bool {
		!self.stopped
			&& (self.alpha >= self.params.alpha_min || self.alpha_target >= self.params.alpha_min)
	}

	/// Advance one step. Returns `false` without touching any position once
	/// the simulation has stopped or cooled to rest.
	pub fn tick(&mut self) -> bool {
		if !self.is_active() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;

		self.apply_link_forces();
		self.apply_repulsion();
		self.apply_centering();
		self.integrate();
		true
	}

	/// Pin a node to an explicit position, as during a drag. The pin wins
	/// over every force until released.
	pub fn pin(&mut self, index: usize, at: Vec2) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.pinned = Some(at);
		}
	}

	/// Move an existing pin, as the pointer moves mid-drag.
	pub fn move_pin(&mut self, index: usize, at: Vec2) {
		if let Some(node) = self.nodes.get_mut(index) {
			if node.pinned.is_some() {
				node.pinned = Some(at);
			}
		}
	}

	/// Release a pinned node back to the forces.
	pub fn unpin(&mut self, index: usize) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.pinned = None;
		}
	}

	/// Inject kinetic energy for the duration of a drag.
	pub fn reheat(&mut self) {
		self.alpha_target = self.params.reheat_target;
	}

	/// Let the system decay back to rest after a drag ends.
	pub fn cool(&mut self) {
		self.alpha_target = 0.0;
	}

	/// Permanently halt the simulation. No tick after this call mutates any
	/// node position; used at view teardown.
	pub fn stop(&mut self) {
		self.stopped = true;
	}

	fn apply_link_forces(&mut self) {
		for i in 0..self.links.len() {
			let SimLink {
				source,
				target,
				weight,
			} = self.links[i];
			let delta = self.nodes[target].position - self.nodes[source].position;
			let distance = delta.length().max(MIN_DISTANCE_SQ.sqrt());
			let stiffness = self.params.link_strength * weight.sqrt();
			let displacement =
				(distance - self.params.link_distance) / distance * stiffness * self.alpha;
			// split evenly between the endpoints
			let shift = delta * (displacement * 0.5);
			self.nodes[target].velocity -= shift;
			self.nodes[source].velocity += shift;
		}
	}

	fn apply_repulsion(&mut self) {
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let delta = self.nodes[j].position - self.nodes[i].position;
				let distance_sq = (delta.x * delta.x + delta.y * delta.y).max(MIN_DISTANCE_SQ);
				// negative strength pushes the pair apart
				let force = self.params.repulsion_strength * self.alpha / distance_sq;
				self.nodes[i].velocity += delta * force;
				self.nodes[j].velocity -= delta * force;
			}
		}
	}

	fn apply_centering(&mut self) {
		let pull = self.params.center_strength * self.alpha;
		for node in &mut self.nodes {
			node.velocity += (self.center - node.position) * pull;
		}
	}

	fn integrate(&mut self) {
		let retain = 1.0 - self.params.velocity_decay;
		for node in &mut self.nodes {
			if let Some(at) = node.pinned {
				node.position = at;
				node.velocity = Vec2::default();
				continue;
			}
			node.velocity = node.velocity * retain;
			node.position += node.velocity;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::RiskLevel;

	fn node(id: &str) -> super::super::types::GraphNode {
		super::super::types::GraphNode {
			id: id.to_owned(),
			label: id.to_owned(),
			risk: RiskLevel::Low,
		}
	}

	fn link(source: &str, target: &str, weight: f64) -> super::super::types::GraphLink {
		super::super::types::GraphLink {
			source: source.to_owned(),
			target: target.to_owned(),
			weight,
		}
	}

	fn ring() -> GraphData {
		GraphData {
			nodes: vec![node("a"), node("b"), node("c"), node("d")],
			links: vec![
				link("a", "b", 5.0),
				link("b", "c", 2.0),
				link("c", "d", 1.0),
				link("d", "a", 1.0),
			],
		}
	}

	fn positions(sim: &Simulation) -> Vec<Vec2> {
		sim.nodes().iter().map(|n| n.position).collect()
	}

	#[test]
	fn dangling_link_fails_before_any_step() {
		let data = GraphData {
			nodes: vec![node("a")],
			links: vec![link("a", "ghost", 1.0)],
		};
		let err = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap_err();
		assert_eq!(err, GraphConfigError::UnknownNodeId("ghost".to_owned()));
	}

	#[test]
	fn duplicate_node_id_is_rejected() {
		let data = GraphData {
			nodes: vec![node("a"), node("a")],
			links: vec![],
		};
		let err = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap_err();
		assert_eq!(err, GraphConfigError::DuplicateNodeId("a".to_owned()));
	}

	#[test]
	fn non_positive_weight_is_rejected() {
		let data = GraphData {
			nodes: vec![node("a"), node("b")],
			links: vec![link("a", "b", 0.0)],
		};
		let err = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap_err();
		assert_eq!(
			err,
			GraphConfigError::NonPositiveWeight {
				from: "a".to_owned(),
				to: "b".to_owned(),
				weight: 0.0,
			}
		);
		// validation errors carry no wrapped cause
		assert!(std::error::Error::source(&err).is_none());
		assert_eq!(err.to_string(), "link `a` -> `b` has non-positive weight 0");
	}

	#[test]
	fn degenerate_viewport_is_rejected() {
		let data = ring();
		for (w, h) in [(0.0, 600.0), (800.0, 0.0), (-1.0, 600.0)] {
			assert!(matches!(
				Simulation::new(&data, w, h, SimulationParams::default()),
				Err(GraphConfigError::BadViewport { .. })
			));
		}
	}

	#[test]
	fn link_endpoints_track_node_positions_every_tick() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		for _ in 0..50 {
			sim.tick();
			for link in sim.links().to_vec() {
				let (source, target) = sim.link_endpoints(&link);
				assert_eq!(source, sim.nodes()[link.source].position);
				assert_eq!(target, sim.nodes()[link.target].position);
			}
		}
	}

	#[test]
	fn zero_links_converge_on_the_center_alone() {
		let data = GraphData {
			nodes: vec![node("a"), node("b"), node("c")],
			links: vec![],
		};
		let params = SimulationParams {
			repulsion_strength: 0.0,
			..SimulationParams::default()
		};
		let mut sim = Simulation::new(&data, 800.0, 600.0, params).unwrap();
		let center = sim.center();
		let initial: Vec<f64> = sim
			.nodes()
			.iter()
			.map(|n| n.position.distance_to(center))
			.collect();

		while sim.tick() {}

		for (node, start) in sim.nodes().iter().zip(initial) {
			let end = node.position.distance_to(center);
			assert!(
				end < start * 0.2,
				"node `{}` only moved from {start:.1} to {end:.1}",
				node.id
			);
		}
	}

	#[test]
	fn identical_inputs_produce_identical_position_sequences() {
		let data = ring();
		let mut a = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap();
		let mut b = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap();
		for tick in 0..200 {
			a.tick();
			b.tick();
			assert_eq!(positions(&a), positions(&b), "diverged at tick {tick}");
		}
	}

	#[test]
	fn pinned_node_holds_its_position_while_neighbors_react() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		let hold = Vec2::new(50.0, 50.0);
		sim.pin(0, hold);
		sim.reheat();
		let free_before = positions(&sim)[1..].to_vec();
		for _ in 0..10 {
			sim.tick();
			assert_eq!(sim.nodes()[0].position, hold);
		}
		assert_ne!(positions(&sim)[1..].to_vec(), free_before);
	}

	#[test]
	fn release_after_drag_cools_back_to_rest() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		sim.pin(0, Vec2::new(10.0, 10.0));
		sim.reheat();
		for _ in 0..30 {
			sim.tick();
		}
		sim.unpin(0);
		sim.cool();
		assert!(sim.is_active());

		let mut ticks = 0usize;
		while sim.tick() {
			ticks += 1;
			assert!(ticks < 10_000, "simulation failed to cool");
		}
		assert!(!sim.is_active());

		let at_rest = positions(&sim);
		sim.tick();
		assert_eq!(positions(&sim), at_rest);
	}

	#[test]
	fn reheat_wakes_a_cooled_simulation() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		while sim.tick() {}
		assert!(!sim.is_active());
		sim.reheat();
		assert!(sim.is_active());
		assert!(sim.tick());
	}

	#[test]
	fn stop_prevents_all_further_mutation() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		for _ in 0..5 {
			sim.tick();
		}
		let frozen = positions(&sim);
		sim.stop();
		for _ in 0..20 {
			assert!(!sim.tick());
		}
		assert_eq!(positions(&sim), frozen);

		// even a reheat must not revive a stopped session
		sim.reheat();
		assert!(!sim.tick());
		assert_eq!(positions(&sim), frozen);
	}

	#[test]
	fn move_pin_only_affects_pinned_nodes() {
		let mut sim = Simulation::new(&ring(), 800.0, 600.0, SimulationParams::default()).unwrap();
		let before = sim.nodes()[0].position;
		sim.move_pin(0, Vec2::new(1.0, 1.0));
		sim.tick();
		assert_ne!(sim.nodes()[0].pinned, Some(Vec2::new(1.0, 1.0)));
		// unpinned nodes keep integrating from where they were
		assert_ne!(sim.nodes()[0].position, before);
	}

	#[test]
	fn linked_nodes_settle_near_the_rest_distance() {
		let data = GraphData {
			nodes: vec![node("a"), node("b")],
			links: vec![link("a", "b", 1.0)],
		};
		let mut sim = Simulation::new(&data, 800.0, 600.0, SimulationParams::default()).unwrap();
		while sim.tick() {}
		let gap = sim.nodes()[0]
			.position
			.distance_to(sim.nodes()[1].position);
		// repulsion and centering tug against the spring, so allow slack
		assert!(
			(20.0..=200.0).contains(&gap),
			"settled at implausible distance {gap:.1}"
		);
	}
}
