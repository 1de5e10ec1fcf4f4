use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{self, Emphasis, LINE_HEIGHT};
use super::state::ForceGraphState;
use crate::model::EdgeKind;

const BASE_EDGE_WIDTH: f64 = 1.5;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap, arrow_size) = (8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = if state.has_active_highlight() {
		ease_out_cubic(state.hover.highlight_t)
	} else {
		0.0
	};

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (src, tgt) = (&n1.data.user_data, &n2.data.user_data);
		let emphasis = scale::edge_emphasis((src.highlight, src.suppress), (tgt.highlight, tgt.suppress));

		// Blend from the normal style towards the emphasised one as the hover eases in.
		let normal_alpha = scale::edge_alpha(Emphasis::Normal);
		let alpha = normal_alpha + (scale::edge_alpha(emphasis) - normal_alpha) * t;
		let width = BASE_EDGE_WIDTH
			+ (scale::edge_width(emphasis, BASE_EDGE_WIDTH) - BASE_EDGE_WIDTH) * t;

		ctx.set_stroke_style_str(&format!("rgba(194, 194, 194, {})", alpha));
		ctx.set_line_width(width / k);
		if edge.user_data == EdgeKind::Reference {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		let (ux, uy) = (dx / dist, dy / dist);
		let (r1, r2) = (src.radius, tgt.radius);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if edge.user_data == EdgeKind::Reference {
			ctx.set_fill_style_str(&format!("rgba(194, 194, 194, {})", alpha + 0.3));
			let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
			let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
			let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, k) = (state.has_active_highlight(), state.transform.k);
	let t = if has_highlight {
		ease_out_cubic(state.hover.highlight_t)
	} else {
		0.0
	};
	let font_px = 10.0 / k.max(0.5);

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let alpha = 1.0 - (1.0 - scale::node_alpha(info.highlight, info.suppress)) * t;
		let is_hovered = state.is_hovered(node.index());
		let radius = if is_hovered {
			info.radius * (1.0 + 0.2 * t)
		} else {
			info.radius
		};

		if is_hovered && t > 0.01 {
			let glow_radius = radius * (1.4 + 0.6 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.35 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(3.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.9));
		ctx.set_font(&format!("{}px sans-serif", font_px));
		for (line_no, line) in info.lines.iter().enumerate() {
			let dy = line_no as f64 * LINE_HEIGHT;
			let _ = ctx.fill_text(line, x + radius + 3.0, y + 3.0 + dy);
		}
	});
}
