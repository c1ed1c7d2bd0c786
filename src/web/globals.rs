//! Functions installed on `window` for inline `onclick` markup
//!
//! Module exports are not visible to inline handlers, which resolve names
//! on the global object. Each function here is set with `Reflect::set` and
//! deleted again when the registry is dropped.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::{PageError, PageResult};

type GlobalFn = Closure<dyn FnMut(JsValue) -> JsValue>;

/// Named closures living on `window`
pub struct Globals {
    window: Window,
    installed: Vec<(&'static str, GlobalFn)>,
}

impl Globals {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
            installed: Vec::new(),
        }
    }

    /// Set `window[name]` to `f`. The single argument is whatever the
    /// handler passed first (`undefined` when called without one).
    pub fn define<F>(&mut self, name: &'static str, f: F) -> PageResult<()>
    where
        F: FnMut(JsValue) -> JsValue + 'static,
    {
        let closure: GlobalFn = Closure::new(f);
        let set = Reflect::set(&self.window, &JsValue::from_str(name), closure.as_ref())
            .map_err(PageError::js)?;
        if !set {
            return Err(PageError::Js(format!("window.{name} is read-only")));
        }
        self.installed.push((name, closure));
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.installed.iter().map(|(name, _)| *name)
    }
}

impl Drop for Globals {
    fn drop(&mut self) {
        for (name, _) in &self.installed {
            let _ = Reflect::delete_property(&self.window, &JsValue::from_str(name));
        }
    }
}
