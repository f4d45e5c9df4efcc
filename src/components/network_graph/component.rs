use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::sim::SimulationParams;
use super::state::NetworkGraphState;
use super::types::GraphData;

/// Interactive force-directed graph on a 2d canvas.
///
/// Width is read from the host surface at mount time; only the height is a
/// prop. The simulation starts when the canvas mounts; the frame loop checks
/// on every tick that the canvas is still in the document and shuts the
/// simulation down the moment it is not, so no background work outlives the
/// view.
#[component]
pub fn NetworkGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 400.0)] height: f64,
	#[prop(into, optional)] params: Option<SimulationParams>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let params = params.unwrap_or_default();

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let width = canvas
			.parent_element()
			.map(|parent| parent.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		match NetworkGraphState::new(&data.get(), width, height, params) {
			Ok(session) => *state_init.borrow_mut() = Some(session),
			Err(err) => {
				error!("network graph rejected its configuration: {err}");
				state_init.borrow_mut().take();
				return;
			}
		}

		// one frame loop per mounted canvas, even if the effect re-runs
		if animate_init.borrow().is_some() {
			return;
		}
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(ref mut session) = *state_anim.borrow_mut() else {
				return;
			};
			if !canvas.is_connected() {
				// view was torn down; stop and never reschedule
				session.shutdown();
				return;
			}
			if !session.running {
				return;
			}
			session.tick();
			render::render(session, &ctx);
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let offset = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = offset(&ev);
		if let Some(ref mut session) = *state_md.borrow_mut() {
			session.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = offset(&ev);
		if let Some(ref mut session) = *state_mm.borrow_mut() {
			session.drag_to(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut session) = *state_mu.borrow_mut() {
			session.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut session) = *state_ml.borrow_mut() {
			session.end_drag();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab; width: 100%;"
		/>
	}
}
