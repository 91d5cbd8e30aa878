//! Mounted-graph state: the force simulation plus view transform and
//! pointer bookkeeping. The simulation owns node positions; everything else
//! only reads them for hit-testing and painting.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::interaction::InteractionState;
use super::types::{GraphData, LinkWeight, Theme, TrustNode};

/// Node circle radius in world units.
pub const NODE_RADIUS: f64 = 5.0;
/// Hit-test radius in world units; scales with zoom like nodes do.
pub const HIT_RADIUS: f64 = 12.0;

/// Pan/zoom transform from graph space to screen space.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// In-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	pub moved: bool,
}

/// In-progress background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything one mounted trust graph needs between animation frames.
pub struct TrustGraphState {
	pub graph: ForceGraph<TrustNode, LinkWeight>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub interaction: InteractionState,
	pub theme: Theme,
	pub width: f64,
	pub height: f64,
	nodes_by_idx: HashMap<DefaultNodeIdx, TrustNode>,
}

impl TrustGraphState {
	/// Seed the simulation from a generated dataset, placing nodes on a
	/// circle around the graph origin; the view transform centers the origin
	/// on the canvas.
	pub fn new(data: &GraphData, theme: Theme, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut idx_by_id = HashMap::new();
		let mut nodes_by_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: node.clone(),
			});
			idx_by_id.insert(node.id.clone(), idx);
			nodes_by_idx.insert(idx, node.clone());
		}

		for link in &data.links {
			match (idx_by_id.get(&link.source), idx_by_id.get(&link.target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, EdgeData { user_data: link.weight });
				}
				// The generator prevents this at construction.
				_ => warn!("dropping dangling link {} -> {}", link.source, link.target),
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			interaction: InteractionState::default(),
			theme,
			width,
			height,
			nodes_by_idx,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (f64::from(node.x()) - gx, f64::from(node.y()) - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Dataset entry behind a simulation index.
	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<&TrustNode> {
		self.nodes_by_idx.get(&idx)
	}

	/// Update hover tracking from a hit-test result.
	pub fn set_hover(&mut self, idx: Option<DefaultNodeIdx>) {
		let id = idx.and_then(|i| self.nodes_by_idx.get(&i)).map(|n| n.id.clone());
		self.interaction.set_hover(id.as_deref());
	}

	/// Apply the click toggle to the node behind `idx`.
	pub fn toggle_select(&mut self, idx: DefaultNodeIdx) {
		if let Some(node) = self.nodes_by_idx.get(&idx) {
			let id = node.id.clone();
			self.interaction.toggle_select(&id);
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
