//! Full-window canvas running the textile particle field

use leptos::html;
use leptos::prelude::*;

#[component]
pub fn TextileCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let Err(err) = client::mount(canvas) {
                leptos::logging::warn!("textile canvas disabled: {}", err);
            }
        }
    });

    view! { <canvas class="textile-canvas" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(not(feature = "ssr"))]
mod client {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos::web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
    use wasm_bindgen::JsCast;

    use crate::core::textile::{Painter, Point, Rgb, TextileField, ThreadPath};
    use crate::ui::dom::{FrameLoop, Listener, hold, viewport_size};

    /// Canvas 2D backend for [`Painter`]
    struct CanvasPainter<'a> {
        ctx: &'a CanvasRenderingContext2d,
    }

    impl Painter for CanvasPainter<'_> {
        fn fade(&mut self, width: f64, height: f64, fill: &str) {
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }

        fn thread(&mut self, path: &ThreadPath, color: Rgb) {
            let ctx = self.ctx;
            ctx.begin_path();
            ctx.move_to(path.start.x, path.start.y);
            for curve in &path.curves {
                ctx.quadratic_curve_to(curve.control.x, curve.control.y, curve.end.x, curve.end.y);
            }
            ctx.set_stroke_style_str(&color.rgba(0.15));
            ctx.set_line_width(2.0);
            ctx.set_line_cap("round");
            ctx.stroke();
        }

        fn link(&mut self, from: Point, to: Point, color: Rgb, alpha: f64) {
            let ctx = self.ctx;
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.set_stroke_style_str(&color.rgba(alpha));
            ctx.set_line_width(1.0);
            ctx.stroke();
        }

        fn particle(&mut self, at: Point, radius: f64, color: Rgb) {
            let ctx = self.ctx;

            if let Ok(halo) = ctx.create_radial_gradient(at.x, at.y, 0.0, at.x, at.y, radius * 3.0) {
                let _ = halo.add_color_stop(0.0, &color.rgba(0.6));
                let _ = halo.add_color_stop(0.5, &color.rgba(0.3));
                let _ = halo.add_color_stop(1.0, &color.rgba(0.0));
                ctx.set_fill_style_canvas_gradient(&halo);
                ctx.begin_path();
                let _ = ctx.arc(at.x, at.y, radius * 3.0, 0.0, TAU);
                ctx.fill();
            }

            ctx.set_fill_style_str(&color.rgba(0.8));
            ctx.begin_path();
            let _ = ctx.arc(at.x, at.y, radius, 0.0, TAU);
            ctx.fill();
        }
    }

    /// Match the backing store to the viewport at the device pixel ratio
    fn fit(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
        let (width, height) = viewport_size().unwrap_or((800.0, 600.0));
        let ratio = leptos::web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        canvas.set_width((width * ratio) as u32);
        canvas.set_height((height * ratio) as u32);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));
        let _ = ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);

        (width, height)
    }

    pub(super) fn mount(canvas: HtmlCanvasElement) -> Result<(), String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| format!("{:?}", err))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "unexpected context type")?;

        let (width, height) = fit(&canvas, &ctx);
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let field = Rc::new(RefCell::new(TextileField::new(width, height, seed)));

        hold(FrameLoop::start({
            let field = field.clone();
            let ctx = ctx.clone();
            move |time_ms| {
                let mut painter = CanvasPainter { ctx: &ctx };
                field.borrow_mut().frame(time_ms * 0.001, &mut painter);
            }
        }));

        hold(Listener::new(window_event_listener(leptos::ev::pointermove, {
            let field = field.clone();
            move |ev| {
                let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
                field.borrow_mut().set_pointer(pointer);
            }
        })));

        hold(Listener::new(window_event_listener(leptos::ev::touchmove, {
            let field = field.clone();
            move |ev| {
                if let Some(touch) = ev.touches().get(0) {
                    let pointer = Point::new(touch.client_x() as f64, touch.client_y() as f64);
                    field.borrow_mut().set_pointer(pointer);
                }
            }
        })));

        // Leaving the window parks the pointer off-canvas
        hold(Listener::new(window_event_listener(leptos::ev::mouseout, {
            let field = field.clone();
            move |ev| {
                if ev.related_target().is_none() {
                    field.borrow_mut().park_pointer();
                }
            }
        })));

        // Lifting the finger parks it too
        hold(Listener::new(window_event_listener(leptos::ev::touchend, {
            let field = field.clone();
            move |_| field.borrow_mut().park_pointer()
        })));

        hold(Listener::new(window_event_listener(leptos::ev::resize, {
            let field = field.clone();
            move |_| {
                let (width, height) = fit(&canvas, &ctx);
                field.borrow_mut().resize(width, height);
            }
        })));

        Ok(())
    }
}
