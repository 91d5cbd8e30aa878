//! Container measurement and the window resize subscription.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

/// Hard ceiling on the rendered graph height.
pub const MAX_GRAPH_HEIGHT: f64 = 500.0;

const VIEWPORT_HEIGHT_FRACTION: f64 = 0.6;

/// Canvas dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
	/// Content width of the hosting container.
	pub width: f64,
	/// Height, capped at `min(500, 0.6 * viewport height)`.
	pub height: f64,
}

/// Pure dimension rule; idempotent for unchanged inputs.
pub fn graph_dimensions(container_width: f64, viewport_height: f64) -> Dimensions {
	Dimensions {
		width: container_width,
		height: MAX_GRAPH_HEIGHT.min(VIEWPORT_HEIGHT_FRACTION * viewport_height),
	}
}

/// Measure the canvas's parent container. Returns `None` when the container
/// is not mounted yet; the caller skips that cycle and waits for the next
/// resize or mount event.
pub fn measure_container(canvas: &HtmlCanvasElement) -> Option<Dimensions> {
	let window = web_sys::window()?;
	let viewport_height = window.inner_height().ok()?.as_f64()?;
	let Some(parent) = canvas.parent_element() else {
		debug!("graph container not mounted yet, skipping measurement");
		return None;
	};
	Some(graph_dimensions(f64::from(parent.client_width()), viewport_height))
}

/// Owns a `resize` listener on the window. Dropping the subscription removes
/// the listener exactly once, so no callback can fire after the owning
/// component is torn down.
pub struct ResizeSubscription {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeSubscription {
	/// Register `handler` for window resize events.
	pub fn subscribe(handler: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::new(handler);
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.ok()?;
		Some(ResizeSubscription { window, callback })
	}
}

impl Drop for ResizeSubscription {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
		debug!("resize listener deregistered");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn measurement_is_idempotent() {
		let first = graph_dimensions(640.0, 900.0);
		let second = graph_dimensions(640.0, 900.0);
		assert_eq!(first, second);
	}

	#[test]
	fn height_is_capped_at_500() {
		let dims = graph_dimensions(1200.0, 2000.0);
		assert_eq!(dims.height, 500.0);
		assert_eq!(dims.width, 1200.0);
	}

	#[test]
	fn short_viewports_use_sixty_percent() {
		let dims = graph_dimensions(320.0, 700.0);
		assert_eq!(dims.height, 420.0);
	}
}
