//! Behavioral-DNA radar chart on a 2d canvas.

use std::f64::consts::PI;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One axis of the radar: label plus a score against its maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarAxis {
	pub label: String,
	pub value: f64,
	pub max: f64,
}

/// Point on axis `index` of `count`, at `fraction` of `radius` from the
/// center. Axis 0 points straight up; the rest follow clockwise.
fn axis_point(center: f64, radius: f64, fraction: f64, index: usize, count: usize) -> (f64, f64) {
	let angle = index as f64 * 2.0 * PI / count as f64 - PI / 2.0;
	(
		center + radius * fraction * angle.cos(),
		center + radius * fraction * angle.sin(),
	)
}

/// Static radar chart; drawn once per mount, no animation loop.
#[component]
pub fn RadarChart(
	#[prop(into)] axes: Signal<Vec<RadarAxis>>,
	#[prop(default = 280.0)] size: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size as u32);
		canvas.set_height(size as u32);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let axes = axes.get();
		if axes.is_empty() {
			return;
		}
		let count = axes.len();
		let center = size / 2.0;
		// leave room for the outer labels
		let radius = size / 2.0 - 36.0;

		ctx.clear_rect(0.0, 0.0, size, size);

		// grid rings
		ctx.set_stroke_style_str("rgba(148, 163, 184, 0.3)");
		ctx.set_line_width(1.0);
		for ring in 1..=4 {
			let fraction = ring as f64 / 4.0;
			ctx.begin_path();
			for index in 0..=count {
				let (x, y) = axis_point(center, radius, fraction, index % count, count);
				if index == 0 {
					ctx.move_to(x, y);
				} else {
					ctx.line_to(x, y);
				}
			}
			ctx.stroke();
		}

		// spokes and labels
		for (index, axis) in axes.iter().enumerate() {
			let (x, y) = axis_point(center, radius, 1.0, index, count);
			ctx.begin_path();
			ctx.move_to(center, center);
			ctx.line_to(x, y);
			ctx.stroke();

			let (lx, ly) = axis_point(center, radius + 18.0, 1.0, index, count);
			ctx.set_fill_style_str("rgba(148, 163, 184, 0.9)");
			ctx.set_font("10px sans-serif");
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&axis.label, lx, ly);
		}

		// data polygon
		ctx.begin_path();
		for (index, axis) in axes.iter().enumerate() {
			let fraction = (axis.value / axis.max).clamp(0.0, 1.0);
			let (x, y) = axis_point(center, radius, fraction, index, count);
			if index == 0 {
				ctx.move_to(x, y);
			} else {
				ctx.line_to(x, y);
			}
		}
		ctx.close_path();
		ctx.set_fill_style_str("rgba(99, 102, 241, 0.35)");
		ctx.fill();
		ctx.set_stroke_style_str("#6366f1");
		ctx.set_line_width(2.0);
		ctx.stroke();
	});

	view! { <canvas node_ref=canvas_ref class="radar-chart-canvas" /> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_axis_points_straight_up() {
		let (x, y) = axis_point(100.0, 80.0, 1.0, 0, 6);
		assert!((x - 100.0).abs() < 1e-9);
		assert!((y - 20.0).abs() < 1e-9);
	}

	#[test]
	fn zero_fraction_collapses_to_center() {
		for index in 0..6 {
			let (x, y) = axis_point(100.0, 80.0, 0.0, index, 6);
			assert!((x - 100.0).abs() < 1e-9);
			assert!((y - 100.0).abs() < 1e-9);
		}
	}
}
