//! Interactive trust network graph: synthetic dataset generation, a force
//! simulation on a canvas, and hover/selection interaction.

mod component;
mod dataset;
mod interaction;
mod render;
mod state;
mod types;
mod viewport;

pub use component::TrustGraphCanvas;
pub use dataset::{DEFAULT_ROSTER, DatasetConfig, RosterMember, generate};
pub use interaction::{InteractionState, NodeStyle, status_color, style_for};
pub use types::{GraphData, LinkWeight, NodeDetails, NodeStatus, Theme, TrustLink, TrustNode};
pub use viewport::{Dimensions, ResizeSubscription, graph_dimensions};
