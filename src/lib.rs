mod animation;
mod canvas;
pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod shapes;
pub mod surface;
mod utils;

pub use crate::canvas::CanvasSurface;
pub use crate::config::{FieldConfig, OriginPolicy};
pub use crate::field::ParticleField;
pub use crate::surface::{DrawCommand, Recorder, Surface};

use crate::animation::AnimationLoop;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

const DEFAULT_CANVAS_ID: &str = "particleCanvas";
const DEFAULT_CONTAINER_SELECTOR: &str = ".container";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Console timer for the enclosing scope: `console.time` on creation,
/// `console.timeEnd` on drop. The frame loop wraps every tick in one when
/// built with `--features frame-timing`.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Animated particle background bound to one canvas. Runs until `stop()` is
/// called or the object is freed.
#[wasm_bindgen]
pub struct ParticleBackground {
    animation: AnimationLoop,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Starts the background on the canvas with id `canvas_id`. Returns
    /// undefined when there is no such canvas or it has no 2d context.
    pub fn attach(canvas_id: &str) -> Result<Option<ParticleBackground>, JsValue> {
        ParticleBackground::attach_with(canvas_id, FieldConfig::default())
    }

    pub fn stop(&mut self) {
        self.animation.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }
}

impl ParticleBackground {
    pub fn pointer(&self) -> Option<[f64; 2]> {
        self.animation.pointer()
    }

    pub fn attach_with(canvas_id: &str, config: FieldConfig) -> Result<Option<ParticleBackground>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let canvas = match window.document().and_then(|d| d.get_element_by_id(canvas_id)) {
            Some(element) => match element.dyn_into::<HtmlCanvasElement>() {
                Ok(canvas) => canvas,
                Err(_) => return Ok(None),
            },
            None => return Ok(None),
        };
        let mut surface = match CanvasSurface::new(canvas)? {
            Some(surface) => surface,
            None => return Ok(None),
        };

        let mut rng = rand::thread_rng();
        let field = ParticleField::new(&mut surface, config, &mut rng);
        let animation = AnimationLoop::start(window, field, surface)?;
        Ok(Some(ParticleBackground { animation }))
    }
}

/// Page start-up: the particle background on `#particleCanvas`, and the
/// floating shapes in `.container` two seconds later.
#[wasm_bindgen]
pub fn start() -> Result<Option<ParticleBackground>, JsValue> {
    initialize();

    let background = ParticleBackground::attach(DEFAULT_CANVAS_ID)?;
    if let Some(window) = web_sys::window() {
        shapes::schedule_floating_shapes(
            &window,
            DEFAULT_CONTAINER_SELECTOR.to_owned(),
            shapes::SHAPES_DELAY_MS,
        )?;
    }
    Ok(background)
}
