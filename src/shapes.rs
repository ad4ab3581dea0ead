// Floating decorative discs layered behind the page content. The motion comes
// entirely from a css keyframe animation; this module only creates the elements.

use rand::Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Window};

pub const SHAPE_COUNT: usize = 5;
pub const SHAPES_DELAY_MS: i32 = 2000;
pub const KEYFRAMES_ID: &str = "floatKeyframes";

pub const KEYFRAMES_CSS: &str = "@keyframes float {
    0%, 100% { transform: translate(0, 0) rotate(0deg); opacity: 0.3; }
    25% { transform: translate(50px, -30px) rotate(90deg); opacity: 0.5; }
    50% { transform: translate(-30px, 50px) rotate(180deg); opacity: 0.3; }
    75% { transform: translate(30px, 30px) rotate(270deg); opacity: 0.5; }
}";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloatingShape {
    pub width_px: f64,
    pub height_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    // Negative, so every shape starts somewhere mid-animation
    pub delay_s: f64,
}

impl FloatingShape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> FloatingShape {
        FloatingShape {
            width_px: rng.gen::<f64>() * 30.0 + 10.0,
            height_px: rng.gen::<f64>() * 30.0 + 10.0,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            duration_s: rng.gen::<f64>() * 10.0 + 15.0,
            delay_s: rng.gen::<f64>() * -10.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {}px; height: {}px; \
             background: rgba(255, 255, 255, 0.1); border-radius: 50%; \
             left: {}%; top: {}%; \
             animation: float {}s ease-in-out infinite; animation-delay: {}s; \
             z-index: 2;",
            self.width_px, self.height_px, self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Appends the shapes to the first element matching `container_selector` in
/// one batch. Returns false, touching nothing, when there is no such element.
pub fn append_floating_shapes<R: Rng + ?Sized>(
    document: &Document,
    container_selector: &str,
    rng: &mut R,
) -> Result<bool, JsValue> {
    let container = match document.query_selector(container_selector)? {
        Some(container) => container,
        None => return Ok(false),
    };

    let fragment = document.create_document_fragment();
    for _ in 0..SHAPE_COUNT {
        let shape = document.create_element("div")?;
        shape.set_attribute("style", &FloatingShape::random(rng).style())?;
        fragment.append_child(&shape)?;
    }
    container.append_child(&fragment)?;

    install_keyframes(document)?;
    Ok(true)
}

// The keyframes rule is shared by every shape, add it only once
fn install_keyframes(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let head = match document.head() {
        Some(head) => head,
        None => return Ok(()),
    };
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(KEYFRAMES_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Adds the shapes once, `delay_ms` from now.
pub fn schedule_floating_shapes(window: &Window, container_selector: String, delay_ms: i32) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(move || {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let mut rng = rand::thread_rng();
        if let Err(err) = append_floating_shapes(&document, &container_selector, &mut rng) {
            console::error_1(&err);
        }
    });
    let callback = callback.unchecked_ref::<js_sys::Function>();
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms)
}
