//! Browser bindings
//!
//! Mounts the page once the module starts: background, navigation and
//! modals each own their DOM handles and event subscriptions. The mounted
//! page lives in a thread-local slot so the exported functions can reach
//! it, and the same functions are set on `window` for inline `onclick`
//! markup. `teardown()` drops both, which stops the frame loop and removes
//! every listener and global.

pub mod animation;
pub mod background;
pub mod canvas;
pub mod dom;
pub mod events;
pub mod globals;
pub mod modals;
pub mod navigation;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::modal::ModalKind;
use crate::{PageResult, Settings};
use background::Background;
use globals::Globals;
use modals::DocumentModals;
use navigation::Navigation;

/// Everything mounted on the page
///
/// Each part mounts independently; a part that fails to mount is logged
/// and left out so the rest of the page still works.
pub struct Page {
    background: Option<Background>,
    navigation: Option<Navigation>,
    modals: Option<DocumentModals>,
}

impl Page {
    pub fn mount(settings: &Settings, seed: u64) -> PageResult<Self> {
        let document = dom::document()?;

        let background =
            match Background::mount(&document, &settings.dom.canvas_id, &settings.field, seed) {
                Ok(background) => background,
                Err(e) => {
                    log::error!("Background failed to start: {}", e);
                    None
                }
            };

        let navigation = match Navigation::mount(&document, &settings.dom) {
            Ok(navigation) => {
                if !navigation.show_section(&settings.dom.home_section) {
                    log::warn!("Home section '{}' not found", settings.dom.home_section);
                }
                Some(navigation)
            }
            Err(e) => {
                log::error!("Navigation failed to mount: {}", e);
                None
            }
        };

        let modals = match DocumentModals::mount(&document, &settings.dom, &settings.documents) {
            Ok(modals) => Some(modals),
            Err(e) => {
                log::error!("Modals failed to mount: {}", e);
                None
            }
        };

        Ok(Self {
            background,
            navigation,
            modals,
        })
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    pub fn modals(&self) -> Option<&DocumentModals> {
        self.modals.as_ref()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static GLOBALS: RefCell<Option<Globals>> = const { RefCell::new(None) };
}

fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Expose the page functions on `window` for inline `onclick` handlers
pub fn install_globals(window: &web_sys::Window) -> PageResult<Globals> {
    let mut globals = Globals::new(window);
    globals.define("showSection", |id: JsValue| {
        let id = id.as_string().unwrap_or_default();
        JsValue::from_bool(show_section(&id))
    })?;
    globals.define("openResumeModal", |_| {
        open_resume_modal();
        JsValue::UNDEFINED
    })?;
    globals.define("closeResumeModal", |_| {
        close_resume_modal();
        JsValue::UNDEFINED
    })?;
    globals.define("openCertModal", |kind: JsValue| {
        let kind = kind.as_string().unwrap_or_default();
        JsValue::from_bool(open_cert_modal(&kind))
    })?;
    globals.define("closeCertModal", |_| {
        close_cert_modal();
        JsValue::UNDEFINED
    })?;
    Ok(globals)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Already installed if the host page initialised logging itself
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Portfolio page starting...");

    let settings = Settings::load();
    let seed = js_sys::Date::now() as u64;

    match Page::mount(&settings, seed) {
        Ok(page) => {
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            log::info!("Portfolio page ready");
        }
        Err(e) => {
            log::error!("Failed to mount page: {}", e);
            return;
        }
    }

    match dom::window().and_then(|window| install_globals(&window)) {
        Ok(globals) => GLOBALS.with(|slot| *slot.borrow_mut() = Some(globals)),
        Err(e) => log::error!("Failed to install window functions: {}", e),
    }
}

#[wasm_bindgen(js_name = showSection)]
pub fn show_section(id: &str) -> bool {
    with_page(|page| page.navigation().is_some_and(|nav| nav.show_section(id))).unwrap_or(false)
}

#[wasm_bindgen(js_name = openResumeModal)]
pub fn open_resume_modal() {
    with_page(|page| page.modals().map(|modals| modals.open_resume()));
}

#[wasm_bindgen(js_name = closeResumeModal)]
pub fn close_resume_modal() {
    with_page(|page| page.modals().map(|modals| modals.close(ModalKind::Resume)));
}

#[wasm_bindgen(js_name = openCertModal)]
pub fn open_cert_modal(kind: &str) -> bool {
    with_page(|page| page.modals().is_some_and(|modals| modals.open_certificate(kind)))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = closeCertModal)]
pub fn close_cert_modal() {
    with_page(|page| page.modals().map(|modals| modals.close(ModalKind::Certificate)));
}

/// Stop the background, remove every listener and the `window` functions
#[wasm_bindgen]
pub fn teardown() {
    let globals = GLOBALS.with(|slot| slot.borrow_mut().take());
    if let Some(globals) = globals {
        log::debug!("Removing {} window functions", globals.names().count());
        drop(globals);
    }

    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = page {
        if let Some(background) = page.background() {
            log::info!("Stopping background ({} particles)", background.particle_count());
        }
        drop(page);
        log::info!("Portfolio page torn down");
    }
}
