mod component;
mod render;
pub mod sim;
mod state;
mod types;

pub use component::NetworkGraphCanvas;
pub use sim::{GraphConfigError, Simulation, SimulationParams};
pub use types::{GraphData, GraphLink, GraphNode};
