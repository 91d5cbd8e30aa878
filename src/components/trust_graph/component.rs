use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::dataset::{self, DatasetConfig};
use super::render;
use super::state::TrustGraphState;
use super::types::{NodeStatus, Theme, TrustNode};
use super::viewport::{self, Dimensions, ResizeSubscription};

// Pointer presses that travel less than this are clicks, not drags.
const CLICK_SLOP: f64 = 3.0;

/// Interactive trust network graph. Generates its dataset once on mount,
/// animates a force simulation onto a canvas, and shows a detail overlay for
/// the hovered node. Clicking a node toggles a selection ring.
#[component]
pub fn TrustGraphCanvas(
	#[prop(optional)] config: DatasetConfig,
	#[prop(optional)] theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<TrustGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_sub: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));
	let running: Rc<Cell<bool>> = Rc::new(Cell::new(true));
	let hovered_node = RwSignal::new(None::<TrustNode>);

	let legend_theme = theme.clone();
	let (state_init, animate_init, resize_init, running_init) = (
		state.clone(),
		animate.clone(),
		resize_sub.clone(),
		running.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Dataset lifecycle is one generation per mount; ignore effect reruns.
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let dims = viewport::measure_container(&canvas).unwrap_or(Dimensions {
			width: 800.0,
			height: 500.0,
		});
		canvas.set_width(dims.width as u32);
		canvas.set_height(dims.height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
			.expect("canvas 2d context");

		let mut rng = SmallRng::from_entropy();
		let data = dataset::generate(&config, &mut rng);
		info!(
			"trust graph mounted: {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		*state_init.borrow_mut() =
			Some(TrustGraphState::new(&data, theme.clone(), dims.width, dims.height));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_init.borrow_mut() = ResizeSubscription::subscribe(move || {
			let Some(dims) = viewport::measure_container(&canvas_resize) else {
				return;
			};
			canvas_resize.set_width(dims.width as u32);
			canvas_resize.set_height(dims.height as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(dims.width, dims.height);
			}
			debug!("trust graph resized to {}x{}", dims.width, dims.height);
		});

		let (state_anim, animate_inner, running_anim) =
			(state_init.clone(), animate_init.clone(), running_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Some(window) = web_sys::window() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	});

	// Scoped teardown: stop the animation loop, release the resize listener
	// and drop the dataset with the component. The animation closure itself
	// is left in place in case a final queued frame still targets it; the
	// running flag makes that frame a no-op.
	let cleanup_handles =
		SendWrapper::new((state.clone(), resize_sub.clone(), running.clone()));
	on_cleanup(move || {
		let (state_cleanup, resize_cleanup, running_cleanup) = cleanup_handles.take();
		running_cleanup.set(false);
		*resize_cleanup.borrow_mut() = None;
		*state_cleanup.borrow_mut() = None;
		debug!("trust graph unmounted");
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.drag.moved = false;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active && !s.pan.active {
				let hit = s.node_at_position(x, y);
				let before = s.interaction.hovered().map(str::to_owned);
				s.set_hover(hit);
				let after = s.interaction.hovered().map(str::to_owned);
				if before != after {
					hovered_node.set(hit.and_then(|idx| s.node_info(idx)).cloned());
				}
			}

			if s.drag.active {
				let (dx, dy) = (
					(x - s.drag.start_x) / s.transform.k,
					(y - s.drag.start_y) / s.transform.k,
				);
				if dx.hypot(dy) * s.transform.k > CLICK_SLOP {
					s.drag.moved = true;
				}
				if s.drag.moved {
					if let Some(idx) = s.drag.node_idx {
						let (nx, ny) = (
							s.drag.node_start_x + dx as f32,
							s.drag.node_start_y + dy as f32,
						);
						s.graph.visit_nodes_mut(|node| {
							if node.index() == idx {
								node.data.x = nx;
								node.data.y = ny;
								node.data.is_anchor = true;
							}
						});
					}
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.drag.active && !s.drag.moved {
				if let Some(idx) = s.drag.node_idx {
					s.toggle_select(idx);
				}
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
		hovered_node.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<div class="trust-graph" style="position: relative;">
			<div class="trust-graph-legend" style="display: flex; gap: 1.5rem; margin-bottom: 0.75rem; font-size: 0.85rem;">
				<LegendEntry color=legend_theme.trusted.clone() status=NodeStatus::Trusted />
				<LegendEntry color=legend_theme.watchlist.clone() status=NodeStatus::Watchlist />
				<LegendEntry color=legend_theme.flagged.clone() status=NodeStatus::Flagged />
			</div>
			<canvas
				node_ref=canvas_ref
				class="trust-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab; border-radius: 12px;"
			/>
			{move || hovered_node.get().map(|node| view! { <NodeOverlay node=node /> })}
		</div>
	}
}

/// One colored dot plus status name in the legend row.
#[component]
fn LegendEntry(color: String, status: NodeStatus) -> impl IntoView {
	let dot = format!(
		"display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 50%; margin-right: 0.4rem; background-color: {color};"
	);
	view! {
		<span>
			<span style=dot></span>
			{status.label()}
		</span>
	}
}

/// Detail card for the hovered node.
#[component]
fn NodeOverlay(node: TrustNode) -> impl IntoView {
	view! {
		<div
			class="trust-graph-overlay"
			style="position: absolute; top: 3rem; right: 1rem; background: white; padding: 0.75rem 1rem; border-radius: 12px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15); font-size: 0.8rem; max-width: 16rem; pointer-events: none;"
		>
			<div style="font-weight: bold; margin-bottom: 0.25rem;">{node.name.clone()}</div>
			<div>"Status: " {node.status.label()}</div>
			{node.details.role.clone().map(|role| view! { <div>"Role: " {role}</div> })}
			<div>"IP: " {node.details.ip.clone()}</div>
			<div>"Aadhaar: " {node.details.aadhaar.clone()}</div>
			<div>
				"Wallets:"
				<ul style="margin: 0.25rem 0 0; padding-left: 1rem;">
					{node
						.details
						.wallets
						.iter()
						.map(|w| view! { <li>{w.clone()}</li> })
						.collect_view()}
				</ul>
			</div>
		</div>
	}
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		f64::from(ev.client_x()) - rect.left(),
		f64::from(ev.client_y()) - rect.top(),
	))
}
