//! Canvas painting. Reads positions out of the simulation and styles from
//! [`style_for`]; never mutates state, so it is safe to call every frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::interaction::style_for;
use super::state::{NODE_RADIUS, TrustGraphState};

const BACKGROUND: &str = "#F1F3F4";
const LINK_COLOR: &str = "#CCCCCC";
const LABEL_BOX: &str = "rgba(255, 255, 255, 0.8)";
const LABEL_TEXT: &str = "#1E2022";

pub fn render(state: &TrustGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &TrustGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_stroke_style_str(LINK_COLOR);

	state.graph.visit_edges(|n1, n2, edge| {
		ctx.set_line_width(edge.user_data.line_width() / k);
		ctx.begin_path();
		ctx.move_to(f64::from(n1.x()), f64::from(n1.y()));
		ctx.line_to(f64::from(n2.x()), f64::from(n2.y()));
		ctx.stroke();
	});
}

fn draw_nodes(state: &TrustGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let style = style_for(
			info,
			state.interaction.is_hovered(&info.id),
			state.interaction.is_selected(&info.id),
			&state.theme,
		);
		let (x, y) = (f64::from(node.x()), f64::from(node.y()));

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.fill);
		ctx.fill();

		if let Some(ring) = &style.ring {
			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 3.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(ring);
			ctx.set_line_width(style.ring_width / k);
			ctx.stroke();
		}

		if style.label_visible {
			draw_label(ctx, &info.name, x, y, k);
		}
	});
}

// Label in a backing box above the node, sized to the measured text and
// compensated for zoom so it stays readable.
fn draw_label(ctx: &CanvasRenderingContext2d, label: &str, x: f64, y: f64, k: f64) {
	let font_size = 12.0 / k.max(0.5);
	ctx.set_font(&format!("{font_size}px sans-serif"));
	let text_width = ctx
		.measure_text(label)
		.map(|m| m.width())
		.unwrap_or(font_size * label.len() as f64 * 0.6);
	let pad = font_size * 0.2;
	let (box_w, box_h) = (text_width + pad, font_size + pad);
	let label_y = y - 15.0 / k.max(0.5);

	ctx.set_fill_style_str(LABEL_BOX);
	ctx.fill_rect(x - box_w / 2.0, label_y - box_h / 2.0, box_w, box_h);

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(LABEL_TEXT);
	let _ = ctx.fill_text(label, x, label_y);
}
