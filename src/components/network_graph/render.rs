use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, NetworkGraphState};

pub fn render(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_links(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(148, 163, 184, 0.6)");
	for link in state.sim.links() {
		let (source, target) = state.sim.link_endpoints(link);
		ctx.set_line_width(link.weight.sqrt());
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	for node in state.sim.nodes() {
		let (x, y) = (node.position.x, node.position.y);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.risk.color());
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str("rgba(148, 163, 184, 0.9)");
		ctx.set_font("10px sans-serif");
		let _ = ctx.fill_text(&node.label, x + NODE_RADIUS + 3.0, y + 3.0);
	}
}
