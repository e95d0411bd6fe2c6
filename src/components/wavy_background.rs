//! Decorative animated wave background.
//!
//! Wraps its children in a container with an absolutely-positioned canvas
//! behind them. Every animation frame re-strokes three noise-driven curves
//! sized to the container; the canvas re-measures on window resize. If the
//! 2D context is unavailable the component renders its children over a
//! blank backdrop and never schedules a frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::wave::{
    WaveField, WaveFieldConfig, WaveSpeed, DEFAULT_BLUR_PX, DEFAULT_WAVE_OPACITY, WAVE_LAYERS,
};

#[derive(Properties, PartialEq)]
pub struct WavyBackgroundProps {
    /// Stroke palette; short palettes cycle across the three layers.
    #[prop_or_default]
    pub colors: Option<Vec<String>>,
    #[prop_or_default]
    pub wave_width: Option<f64>,
    #[prop_or_default]
    pub background_fill: Option<String>,
    #[prop_or(DEFAULT_BLUR_PX)]
    pub blur: f64,
    #[prop_or_default]
    pub speed: WaveSpeed,
    #[prop_or(DEFAULT_WAVE_OPACITY)]
    pub wave_opacity: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Everything that must be released when the component unmounts.
struct RendererHandle {
    window: web_sys::Window,
    resize: Closure<dyn FnMut()>,
    frame_id: Rc<Cell<i32>>,
    frame_callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RendererHandle {
    fn teardown(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = self.window.cancel_animation_frame(self.frame_id.get());
        self.frame_callback.borrow_mut().take();
    }
}

fn resize_to_container(container: &HtmlElement, canvas: &HtmlCanvasElement) {
    let rect = container.get_bounding_client_rect();
    canvas.set_width(rect.width() as u32);
    canvas.set_height(rect.height() as u32);
}

fn paint_frame(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, field: &mut WaveField) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);
    if let Some(fill) = field.config().background_fill.clone() {
        ctx.set_fill_style_str(&fill);
        ctx.fill_rect(0.0, 0.0, width, height);
    }

    field.advance();
    ctx.set_global_alpha(field.config().opacity);

    // Back to front.
    for layer in (0..WAVE_LAYERS).rev() {
        ctx.begin_path();
        ctx.move_to(0.0, WaveField::baseline(height));
        ctx.set_stroke_style_str(field.layer_color(layer));
        ctx.set_line_width(field.config().stroke_width);
        for (x, y) in field.layer_path(width, height, layer) {
            ctx.line_to(x, y);
        }
        ctx.stroke();
    }
}

fn start_renderer(
    container_ref: &NodeRef,
    canvas_ref: &NodeRef,
    config: WaveFieldConfig,
) -> Option<RendererHandle> {
    let container: HtmlElement = container_ref.cast()?;
    let canvas: HtmlCanvasElement = canvas_ref.cast()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let window = web_sys::window()?;

    resize_to_container(&container, &canvas);

    let resize = Closure::wrap(Box::new({
        let container = container.clone();
        let canvas = canvas.clone();
        move || resize_to_container(&container, &canvas)
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok()?;

    let seed = web_sys::js_sys::Date::now() as u64 as u32;
    let mut field = WaveField::new(config, seed);

    let frame_id = Rc::new(Cell::new(0));
    let frame_callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let frame_callback_inner = frame_callback.clone();
        let frame_id_inner = frame_id.clone();
        let window_inner = window.clone();
        let canvas = canvas.clone();
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            paint_frame(&ctx, &canvas, &mut field);
            // The next frame is only requested once this paint is done, so
            // frames never overlap.
            if let Some(callback) = frame_callback_inner.borrow().as_ref() {
                if let Ok(id) =
                    window_inner.request_animation_frame(callback.as_ref().unchecked_ref())
                {
                    frame_id_inner.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }

    if let Some(callback) = frame_callback.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            frame_id.set(id);
        }
    }

    Some(RendererHandle {
        window,
        resize,
        frame_id,
        frame_callback,
    })
}

#[function_component(WavyBackground)]
pub fn wavy_background(props: &WavyBackgroundProps) -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    let mut config = WaveFieldConfig::default();
    if let Some(colors) = props.colors.clone() {
        if !colors.is_empty() {
            config.colors = colors;
        }
    }
    if let Some(width) = props.wave_width {
        config.stroke_width = width;
    }
    config.background_fill = props.background_fill.clone();
    config.blur_px = props.blur;
    config.speed = props.speed;
    config.opacity = props.wave_opacity;

    let canvas_style = format!("filter: blur({}px);", config.blur_px);

    {
        let container_ref = container_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let handle = start_renderer(&container_ref, &canvas_ref, config);
                move || {
                    if let Some(handle) = handle {
                        handle.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={container_ref} class={classes!("wavy-background", props.container_class.clone())}>
            <canvas
                ref={canvas_ref}
                class="wavy-background-canvas"
                style={canvas_style}
            />
            <div class={classes!("wavy-background-content", props.class.clone())}>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .wavy-background {
                        position: relative;
                        width: 100%;
                        overflow: hidden;
                    }
                    .wavy-background-canvas {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .wavy-background-content {
                        position: relative;
                        z-index: 1;
                        height: 100%;
                    }
                "#}
            </style>
        </div>
    }
}
