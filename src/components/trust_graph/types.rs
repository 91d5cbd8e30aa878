//! Data model for the trust network demo.

/// Classification of an entity in the trust network. Closed set, fixed at
/// creation; rendering resolves each variant to a theme color with a total
/// match, so an unknown status cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeStatus {
	/// Verified entity, rendered in the theme's trusted color.
	Trusted,
	/// Known-bad entity, rendered in the theme's flagged color.
	Flagged,
	/// Under observation, rendered in the theme's watchlist color.
	Watchlist,
}

impl NodeStatus {
	/// Human-readable form for legends and overlays.
	pub fn label(self) -> &'static str {
		match self {
			NodeStatus::Trusted => "Trusted",
			NodeStatus::Flagged => "Flagged",
			NodeStatus::Watchlist => "Watchlist",
		}
	}
}

/// Illustrative per-entity fields shown in the hover overlay. Never used in
/// any computation.
#[derive(Clone, Debug, Default)]
pub struct NodeDetails {
	/// Synthetic network address.
	pub ip: String,
	/// Masked identifier string.
	pub aadhaar: String,
	/// Abbreviated wallet addresses.
	pub wallets: Vec<String>,
	/// Curated role, present only for roster members.
	pub role: Option<String>,
}

/// A single entity in the trust graph.
#[derive(Clone, Debug)]
pub struct TrustNode {
	/// Unique id, stable for the session.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Trust classification.
	pub status: NodeStatus,
	/// Descriptive attributes for the overlay.
	pub details: NodeDetails,
}

/// Strength tag on a relationship; affects rendered line width only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkWeight {
	/// Random association.
	#[default]
	Ordinary,
	/// Curated roster pairing, drawn thicker.
	Reinforced,
}

impl LinkWeight {
	/// Base line width in world units before zoom compensation.
	pub fn line_width(self) -> f64 {
		match self {
			LinkWeight::Ordinary => 1.0,
			LinkWeight::Reinforced => 2.0,
		}
	}
}

/// A directed association between two entities. Both endpoints must resolve
/// to nodes in the same dataset; self-loops are never emitted.
#[derive(Clone, Debug)]
pub struct TrustLink {
	/// Id of the originating node.
	pub source: String,
	/// Id of the target node.
	pub target: String,
	/// Rendered strength.
	pub weight: LinkWeight,
}

/// Node and link sequences consumed by the simulation. Generated once per
/// component mount and dropped on unmount.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Entities, in generation order.
	pub nodes: Vec<TrustNode>,
	/// Relationships between them.
	pub links: Vec<TrustLink>,
}

/// Semantic colors supplied by the host page. The graph hardcodes no colors
/// beyond these roles and neutral canvas chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Fill for trusted nodes.
	pub trusted: String,
	/// Fill for flagged nodes.
	pub flagged: String,
	/// Fill for watchlist nodes.
	pub watchlist: String,
	/// Accent used for the selection ring.
	pub primary: String,
}

impl Default for Theme {
	fn default() -> Self {
		Theme {
			trusted: "#4ade80".into(),
			flagged: "#f87171".into(),
			watchlist: "#fcd34d".into(),
			primary: "#008080".into(),
		}
	}
}
