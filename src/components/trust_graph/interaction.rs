//! Hover and selection tracking, plus per-node style resolution.
//!
//! Label policy: a node's label is drawn only while it is hovered; the
//! current selection is shown as a ring in the theme's primary color.

use super::types::{NodeStatus, Theme, TrustNode};

/// Transient pointer state. Owned by one mounted graph, reset on remount,
/// mutated only by pointer and click events.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
	hovered: Option<String>,
	selected: Option<String>,
}

impl InteractionState {
	/// Replace the hovered node; `None` on pointer-leave.
	pub fn set_hover(&mut self, id: Option<&str>) {
		self.hovered = id.map(str::to_owned);
	}

	/// Click toggle: clicking the selected node clears the selection,
	/// clicking any other node replaces it.
	pub fn toggle_select(&mut self, id: &str) {
		self.selected = if self.selected.as_deref() == Some(id) {
			None
		} else {
			Some(id.to_string())
		};
	}

	/// Currently hovered node id, if any.
	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// Currently selected node id, if any.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Whether `id` is the hovered node.
	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}
}

/// Resolved visual style for one node at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	/// Circle fill color.
	pub fill: String,
	/// Ring color when selected.
	pub ring: Option<String>,
	/// Ring stroke width in screen units.
	pub ring_width: f64,
	/// Whether to draw the label box.
	pub label_visible: bool,
}

/// Total mapping from status to theme color. The closed enum guarantees
/// every node resolves; there is no fallback color.
pub fn status_color(status: NodeStatus, theme: &Theme) -> &str {
	match status {
		NodeStatus::Trusted => &theme.trusted,
		NodeStatus::Flagged => &theme.flagged,
		NodeStatus::Watchlist => &theme.watchlist,
	}
}

/// Pure style resolution, safe to call every animation frame.
pub fn style_for(node: &TrustNode, is_hovered: bool, is_selected: bool, theme: &Theme) -> NodeStyle {
	NodeStyle {
		fill: status_color(node.status, theme).to_string(),
		ring: is_selected.then(|| theme.primary.clone()),
		ring_width: if is_selected { 2.0 } else { 0.0 },
		label_visible: is_hovered,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::trust_graph::types::NodeDetails;

	fn node(id: &str, status: NodeStatus) -> TrustNode {
		TrustNode {
			id: id.to_string(),
			name: id.to_string(),
			status,
			details: NodeDetails::default(),
		}
	}

	#[test]
	fn select_toggle_law() {
		let mut state = InteractionState::default();
		state.toggle_select("x");
		assert_eq!(state.selected(), Some("x"));
		state.toggle_select("x");
		assert_eq!(state.selected(), None);

		state.toggle_select("x");
		state.toggle_select("y");
		assert_eq!(state.selected(), Some("y"));
	}

	#[test]
	fn hover_tracks_one_node_at_a_time() {
		let mut state = InteractionState::default();
		state.set_hover(Some("rohan"));
		assert!(state.is_hovered("rohan"));
		assert!(!state.is_hovered("guru"));
		assert!(!state.is_hovered("sarupa"));

		state.set_hover(None);
		assert_eq!(state.hovered(), None);
	}

	#[test]
	fn style_resolution_is_pure() {
		let theme = Theme::default();
		let n = node("a", NodeStatus::Watchlist);
		let first = style_for(&n, true, false, &theme);
		let second = style_for(&n, true, false, &theme);
		assert_eq!(first, second);
	}

	#[test]
	fn status_maps_totally_onto_theme() {
		let theme = Theme::default();
		assert_eq!(status_color(NodeStatus::Trusted, &theme), theme.trusted);
		assert_eq!(status_color(NodeStatus::Flagged, &theme), theme.flagged);
		assert_eq!(status_color(NodeStatus::Watchlist, &theme), theme.watchlist);
	}

	#[test]
	fn hovered_node_shows_label_selected_node_gets_ring() {
		let theme = Theme::default();
		let n = node("a", NodeStatus::Trusted);

		let hovered = style_for(&n, true, false, &theme);
		assert!(hovered.label_visible);
		assert_eq!(hovered.ring, None);

		let selected = style_for(&n, false, true, &theme);
		assert!(!selected.label_visible);
		assert_eq!(selected.ring.as_deref(), Some(theme.primary.as_str()));
		assert!(selected.ring_width > 0.0);
	}
}
