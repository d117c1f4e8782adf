use std::f64::consts::PI;

use shared::wheel::{render_wheel, Segment, WheelSurface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 400;

/// Canvas 2D backend for [`render_wheel`]. Angles arrive with the wheel
/// rotation already folded in, so every call draws in fixed canvas
/// coordinates.
struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            context,
            width,
            height,
            center_x,
            center_y,
            radius: center_x.min(center_y) - 10.0,
        }
    }
}

impl WheelSurface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_wedge(&mut self, start_angle: f64, end_angle: f64, color: &str) {
        self.context.begin_path();
        let _ = self.context.arc(
            self.center_x,
            self.center_y,
            self.radius,
            start_angle,
            end_angle,
        );
        self.context.line_to(self.center_x, self.center_y);
        self.context.set_fill_style_str(color);
        self.context.fill();
        self.context.set_stroke_style_str("#fff");
        self.context.set_line_width(3.0);
        self.context.stroke();
    }

    fn draw_text(&mut self, text: &str, mid_angle: f64, line: usize) {
        self.context.save();
        let _ = self.context.translate(self.center_x, self.center_y);
        let _ = self.context.rotate(mid_angle);
        self.context.set_text_align("center");
        self.context.set_fill_style_str("#fff");
        self.context.set_font("bold 14px Arial");
        self.context.set_shadow_color("rgba(0,0,0,0.5)");
        self.context.set_shadow_blur(3.0);
        let _ = self
            .context
            .fill_text(text, self.radius * 0.7, line as f64 * 18.0);
        self.context.restore();
    }

    fn fill_hub(&mut self) {
        self.context.begin_path();
        let _ = self
            .context
            .arc(self.center_x, self.center_y, 40.0, 0.0, 2.0 * PI);
        self.context.set_fill_style_str("#fff");
        self.context.fill();
        self.context.set_stroke_style_str("#333");
        self.context.set_line_width(3.0);
        self.context.stroke();
    }
}

/// Static pointer at angle 0, on top of the wheel, aimed at the slice
/// that ends up centered under it.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64) {
    context.begin_path();
    context.move_to(center_x + radius - 12.0, center_y);
    context.line_to(center_x + radius + 8.0, center_y - 10.0);
    context.line_to(center_x + radius + 8.0, center_y + 10.0);
    context.close_path();
    context.set_fill_style_str("#333");
    context.fill();
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub rotation: f64,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let segments = props.segments.clone();
        let rotation = props.rotation;

        use_effect_with((segments, rotation), move |(segments, rotation)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                let mut surface = CanvasSurface::new(&canvas, context);
                render_wheel(segments, *rotation, &mut surface);
                draw_pointer(
                    &surface.context,
                    surface.center_x,
                    surface.center_y,
                    surface.radius,
                );
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="max-w-full rounded-full shadow-xl"
        />
    }
}
