use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use wheel_shared::constants::CENTER_BUTTON_LABEL;
use wheel_shared::render::{SliceArc, WheelLayout};
use wheel_shared::Slice;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub angle: f64,
    pub slices: Rc<Vec<Slice>>,
    pub is_spinning: bool,
    /// Fired when the center "QUAY" button is clicked.
    pub on_center_click: Callback<()>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.angle, props.slices.clone()), move |(angle, slices)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match context_2d(&canvas) {
                    Some(context) => {
                        let layout = WheelLayout::new(
                            canvas.width() as f64,
                            canvas.height() as f64,
                            slices.len(),
                        );
                        if let Err(e) = draw_wheel(&context, &layout, slices, *angle) {
                            log::warn!("Failed to draw wheel: {:?}", e);
                        }
                    }
                    None => log::warn!("Canvas 2d context unavailable"),
                }
            }
            || ()
        });
    }

    let onclick = {
        let canvas_ref = canvas_ref.clone();
        let on_center_click = props.on_center_click.clone();
        let is_spinning = props.is_spinning;
        let slice_count = props.slices.len();
        Callback::from(move |e: MouseEvent| {
            if is_spinning {
                return;
            }
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let rect = canvas.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                // CSS may scale the canvas; map back to canvas pixels
                let x = (e.client_x() as f64 - rect.left()) * canvas.width() as f64 / rect.width();
                let y = (e.client_y() as f64 - rect.top()) * canvas.height() as f64 / rect.height();
                let layout =
                    WheelLayout::new(canvas.width() as f64, canvas.height() as f64, slice_count);
                if layout.hits_center_button(x, y) {
                    on_center_click.emit(());
                }
            }
        })
    };

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[500px] h-auto cursor-pointer"
                {onclick}
            />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn wedge(
    context: &CanvasRenderingContext2d,
    layout: &WheelLayout,
    arc: &SliceArc,
) -> Result<(), JsValue> {
    let c = layout.center;
    context.begin_path();
    context.move_to(c.x, c.y);
    context.arc(c.x, c.y, layout.radius, arc.start, arc.end)?;
    context.close_path();
    Ok(())
}

fn draw_label(
    context: &CanvasRenderingContext2d,
    layout: &WheelLayout,
    arc: &SliceArc,
    label: &str,
    font: &str,
    shadow_blur: f64,
    shadow_offset: f64,
) -> Result<(), JsValue> {
    let anchor = layout.label_anchor(arc);
    context.save();
    context.translate(anchor.position.x, anchor.position.y)?;
    context.rotate(anchor.rotation)?;
    context.set_fill_style_str("#fff");
    context.set_font(font);
    context.set_text_align("center");
    context.set_shadow_color("rgba(0, 0, 0, 0.8)");
    context.set_shadow_blur(shadow_blur);
    context.set_shadow_offset_x(shadow_offset);
    context.set_shadow_offset_y(shadow_offset);
    context.fill_text(label, 0.0, 0.0)?;
    context.restore();
    Ok(())
}

pub fn draw_wheel(
    context: &CanvasRenderingContext2d,
    layout: &WheelLayout,
    slices: &[Slice],
    angle: f64,
) -> Result<(), JsValue> {
    let c = layout.center;
    let width = c.x * 2.0;
    let height = c.y * 2.0;
    context.clear_rect(0.0, 0.0, width, height);

    // Slices with thick white borders
    for arc in layout.slice_arcs(angle) {
        let slice = &slices[arc.index];
        wedge(context, layout, &arc)?;
        context.set_fill_style_str(&slice.color);
        context.fill();
        context.set_stroke_style_str("#fff");
        context.set_line_width(5.0);
        context.stroke();
        draw_label(context, layout, &arc, &slice.label, "bold 14px system-ui, sans-serif", 4.0, 2.0)?;
    }

    // Center spin button
    let button_radius = layout.center_button_radius();
    context.save();
    context.begin_path();
    context.arc(c.x, c.y, button_radius, 0.0, 2.0 * PI)?;
    context.set_fill_style_str("#14532d");
    context.fill();
    context.set_stroke_style_str("#fff");
    context.set_line_width(4.0);
    context.stroke();
    context.set_fill_style_str("#fff");
    context.set_font("bold 24px system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);
    context.fill_text(CENTER_BUTTON_LABEL, c.x, c.y)?;
    context.restore();

    // Highlight whatever sits under the pointer
    if let Some(arc) = layout.highlighted_arc(angle) {
        context.save();

        // Glow fading out from the hub
        let glow = context.create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, layout.radius)?;
        glow.add_color_stop(0.0, "rgba(239, 68, 68, 0.3)")?;
        glow.add_color_stop(0.5, "rgba(239, 68, 68, 0.15)")?;
        glow.add_color_stop(1.0, "rgba(239, 68, 68, 0)")?;
        context.set_fill_style_canvas_gradient(&glow);
        wedge(context, layout, &arc)?;
        context.fill();

        wedge(context, layout, &arc)?;
        context.set_fill_style_str("#ef4444");
        context.fill();
        context.set_line_width(8.0);
        context.set_stroke_style_str("#fbbf24");
        context.set_shadow_color("#fbbf24");
        context.set_shadow_blur(25.0);
        context.stroke();
        context.restore();

        let label = &slices[arc.index].label;
        draw_label(context, layout, &arc, label, "bold 16px system-ui, sans-serif", 8.0, 3.0)?;
    }

    // Pointer at 12 o'clock
    let pointer = layout.pointer();
    context.save();
    context.set_shadow_color("rgba(0, 0, 0, 0.6)");
    context.set_shadow_blur(15.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(8.0);
    context.set_fill_style_str("#dc2626");
    context.begin_path();
    context.move_to(pointer.tip.x, pointer.tip.y);
    context.line_to(pointer.left.x, pointer.left.y);
    context.line_to(pointer.right.x, pointer.right.y);
    context.close_path();
    context.fill();
    context.set_shadow_blur(0.0);
    context.set_stroke_style_str("#fff");
    context.set_line_width(4.0);
    context.stroke();
    context.restore();

    Ok(())
}
