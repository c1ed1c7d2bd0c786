//! Animated particle background

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use super::animation::AnimationLoop;
use super::canvas::CanvasSurface;
use super::dom;
use super::events::Listener;
use crate::field::{FieldState, Viewport, step};
use crate::renderer::draw_field;
use crate::settings::FieldSettings;
use crate::{PageError, PageResult};

struct Scene {
    state: FieldState,
    surface: CanvasSurface,
}

/// The running background: field state, frame loop and resize subscription
pub struct Background {
    scene: Rc<RefCell<Scene>>,
    _animation: AnimationLoop,
    _resize: Listener,
}

impl Background {
    /// Start the background on canvas `canvas_id`.
    ///
    /// A page without that canvas (or without 2D canvas support) simply has
    /// no background: returns `Ok(None)`.
    pub fn mount(
        document: &Document,
        canvas_id: &str,
        settings: &FieldSettings,
        seed: u64,
    ) -> PageResult<Option<Self>> {
        let Some(element) = document.get_element_by_id(canvas_id) else {
            log::debug!("No #{} on this page, background disabled", canvas_id);
            return Ok(None);
        };
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PageError::unexpected(canvas_id, "canvas"))?;
        let surface = match CanvasSurface::new(canvas) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("Background disabled: {}", e);
                return Ok(None);
            }
        };

        let window = dom::window()?;
        let viewport = viewport_of(&window);
        surface.resize(viewport);
        let state = FieldState::new(seed, viewport, settings.clone());
        log::info!(
            "Particle field: {} particles ({:?}) on {}x{}",
            state.particles().len(),
            state.density(),
            viewport.width,
            viewport.height
        );

        let scene = Rc::new(RefCell::new(Scene { state, surface }));

        let animation = {
            let scene = scene.clone();
            AnimationLoop::start(move |_time| {
                let mut scene = scene.borrow_mut();
                let Scene { state, surface } = &mut *scene;
                step(state);
                draw_field(surface, state);
            })?
        };

        let resize = {
            let scene = scene.clone();
            let window_ref = window.clone();
            Listener::new(&window, "resize", move |_event| {
                let viewport = viewport_of(&window_ref);
                let mut scene = scene.borrow_mut();
                scene.surface.resize(viewport);
                scene.state.resize(viewport);
                log::debug!(
                    "Resized to {}x{}, {} particles",
                    viewport.width,
                    viewport.height,
                    scene.state.particles().len()
                );
            })?
        };

        Ok(Some(Self {
            scene,
            _animation: animation,
            _resize: resize,
        }))
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().state.particles().len()
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}
