use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_shared::confetti::{ConfettiBurst, ConfettiShape};
use wheel_shared::Clock;
use yew::prelude::*;

use crate::config::PerformanceClock;
use crate::styles;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Properties, PartialEq)]
pub struct ConfettiCanvasProps {
    /// Timestamp of the latest win; each new value launches a burst.
    pub burst_at: Option<f64>,
}

#[function_component(ConfettiCanvas)]
pub fn confetti_canvas(props: &ConfettiCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Keep the overlay the size of the viewport
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                fit_to_viewport(&canvas);
            }
            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        fit_to_viewport(&canvas);
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.burst_at, move |burst_at| {
            let active = (*burst_at)
                .and(canvas_ref.cast::<HtmlCanvasElement>())
                .and_then(launch);
            // a newer burst or unmount stops this one
            move || drop(active)
        });
    }

    html! {
        <canvas id="fullscreen-confetti" ref={canvas_ref} class={styles::CONFETTI_LAYER} />
    }
}

fn viewport_size() -> (f64, f64) {
    window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
            (width, height)
        })
        .unwrap_or((800.0, 600.0))
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// A running confetti animation. Dropping it cancels the pending frame and
/// releases the frame callback.
struct ConfettiLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl Drop for ConfettiLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.frame_id.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback, frame_id: &Cell<Option<i32>>) {
    if let Some(window) = window() {
        if let Some(callback) = callback.borrow().as_ref() {
            frame_id.set(
                window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }
}

fn launch(canvas: HtmlCanvasElement) -> Option<ConfettiLoop> {
    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => {
            log::warn!("Confetti canvas has no 2d context");
            return None;
        }
    };

    fit_to_viewport(&canvas);
    let clock = PerformanceClock;
    let mut rng = SmallRng::from_entropy();
    let mut burst = ConfettiBurst::new(
        &mut rng,
        canvas.width() as f64,
        canvas.height() as f64,
        clock.now_ms(),
    );

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_id = Rc::new(Cell::new(None));
    let next_id = frame_id.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        next_id.set(None);
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);
        if (width, height) != (burst.width(), burst.height()) {
            burst.resize(width, height);
        }

        let now = clock.now_ms();
        if !burst.step(&mut rng, now) {
            context.clear_rect(0.0, 0.0, width, height);
            // breaks the closure's self reference
            f.borrow_mut().take();
            return;
        }

        if let Err(e) = draw(&context, &burst, now) {
            log::warn!("Failed to draw confetti: {:?}", e);
        }
        request_frame(&f, &next_id);
    }) as Box<dyn FnMut()>));

    request_frame(&g, &frame_id);
    Some(ConfettiLoop {
        frame_id,
        callback: g,
    })
}

fn draw(context: &CanvasRenderingContext2d, burst: &ConfettiBurst, now: f64) -> Result<(), JsValue> {
    context.clear_rect(0.0, 0.0, burst.width(), burst.height());
    let fade = burst.fade_alpha(now);

    for p in burst.particles.iter().filter(|p| p.is_visible(burst.width())) {
        context.save();
        context.translate(p.x, p.y)?;
        context.rotate(p.rotation)?;
        context.set_global_alpha(p.opacity * fade);
        context.set_fill_style_str(p.color);

        let half = p.size / 2.0;
        match p.shape {
            ConfettiShape::Rect => context.fill_rect(-half, -half, p.size, p.size),
            ConfettiShape::Triangle => {
                context.begin_path();
                context.move_to(0.0, -half);
                context.line_to(half, half);
                context.line_to(-half, half);
                context.close_path();
                context.fill();
            }
            ConfettiShape::Circle => {
                context.begin_path();
                context.arc(0.0, 0.0, half, 0.0, PI * 2.0)?;
                context.fill();
            }
        }
        context.restore();
    }
    Ok(())
}
