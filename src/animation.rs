// Drives a ParticleField from requestAnimationFrame and feeds it the canvas's
// mouse events. Everything runs on the browser main thread, so the field and
// the surface are shared between callbacks through Rc<RefCell<_>>.

use crate::canvas::CanvasSurface;
use crate::config::OriginPolicy;
use crate::field::ParticleField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, EventTarget, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Scene {
    field: ParticleField,
    surface: CanvasSurface,
}

pub struct AnimationLoop {
    window: Window,
    target: EventTarget,
    scene: Rc<RefCell<Scene>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
}

impl AnimationLoop {
    /// Hooks up the pointer listeners and requests the first frame.
    pub fn start(window: Window, field: ParticleField, surface: CanvasSurface) -> Result<AnimationLoop, JsValue> {
        let target: EventTarget = surface.canvas.clone().into();
        let policy = field.config().origin_policy;
        let scene = Rc::new(RefCell::new(Scene { field, surface }));

        let mut animation = AnimationLoop {
            window,
            target,
            scene,
            frame_id: Rc::new(Cell::new(None)),
            frame_callback: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };
        animation.listen_pointer(policy)?;
        animation.schedule_frames()?;

        console::log_1(&"particle background started".into());
        Ok(animation)
    }

    /// Pointer position the field currently sees, in surface coordinates.
    pub fn pointer(&self) -> Option<[f64; 2]> {
        self.scene.borrow().field.pointer()
    }

    pub fn is_running(&self) -> bool {
        self.frame_id.get().is_some()
    }

    /// Cancels the pending frame and detaches every listener. Safe to call
    /// more than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                console::error_1(&err);
            }
            console::log_1(&"particle background stopped".into());
        }
        // Dropping the callback breaks its reference cycle with frame_callback
        self.frame_callback.borrow_mut().take();

        for (event, listener) in self.listeners.drain(..) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                console::error_1(&err);
            }
        }
    }

    fn listen_pointer(&mut self, policy: OriginPolicy) -> Result<(), JsValue> {
        let captured = self.scene.borrow().surface.client_origin();

        let scene = self.scene.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let mut scene = scene.borrow_mut();
            let origin = match policy {
                OriginPolicy::CapturedAtSetup => captured,
                OriginPolicy::PerEvent => scene.surface.client_origin(),
            };
            let client = [event.client_x() as f64, event.client_y() as f64];
            scene.field.pointer_moved(client, origin);
        }) as Box<dyn FnMut(MouseEvent)>);

        let scene = self.scene.clone();
        let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
            scene.borrow_mut().field.pointer_left();
        }) as Box<dyn FnMut(MouseEvent)>);

        for (event, listener) in vec![("mousemove", on_move), ("mouseleave", on_leave)] {
            self.target
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
            self.listeners.push((event, listener));
        }
        Ok(())
    }

    // Each frame ticks the field, then asks for the next frame
    fn schedule_frames(&mut self) -> Result<(), JsValue> {
        let scene = self.scene.clone();
        let window = self.window.clone();
        let frame_id = self.frame_id.clone();
        let next = self.frame_callback.clone();

        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                #[cfg(feature = "frame-timing")]
                let _timer = crate::Timer::new("ParticleField::tick");
                let mut scene = scene.borrow_mut();
                let Scene { field, surface } = &mut *scene;
                if let Err(err) = field.tick(surface) {
                    console::error_1(&err);
                }
            }

            // stop() may have run since this frame was requested
            if frame_id.get().is_none() {
                return;
            }
            if let Some(callback) = next.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(err) => {
                        frame_id.set(None);
                        console::error_1(&err);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match self.frame_callback.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_id.set(Some(first));
        Ok(())
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
