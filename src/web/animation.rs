//! `requestAnimationFrame` loop with an explicit stop handle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom;
use crate::{PageError, PageResult};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling frame callback.
///
/// Runs once per display refresh until `stop` is called or the handle is
/// dropped.
pub struct AnimationLoop {
    /// Id of the pending frame request; `None` once stopped
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start<F>(mut frame: F) -> PageResult<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = dom::window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        {
            let pending = pending.clone();
            let callback_ref = callback.clone();
            let window = window.clone();
            *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
                frame(time);

                // Stopped from inside the frame
                if pending.get().is_none() {
                    return;
                }
                if let Some(cb) = callback_ref.borrow().as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => {
                            log::error!("requestAnimationFrame failed: {:?}", e);
                            pending.set(None);
                        }
                    }
                }
            }));
        }

        let id = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or_else(|| PageError::Js("frame callback missing".into()))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(PageError::js)?
        };
        pending.set(Some(id));

        Ok(Self { pending, callback })
    }

    /// Cancel the pending frame and release the callback
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
            log::debug!("Animation loop stopped");
        }
        // Breaks the callback -> callback_ref cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
