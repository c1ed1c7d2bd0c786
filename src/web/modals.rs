//! Resume and certificate overlays bound to the DOM

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, EventTarget};

use super::dom;
use super::events::Listener;
use crate::PageResult;
use crate::modal::{ModalKind, Modals};
use crate::settings::{DocumentSettings, DomSettings};

/// Elements making up one overlay
struct ModalView {
    backdrop: Element,
    frame: Element,
    download: Option<Element>,
    title: Option<Element>,
}

impl ModalView {
    /// Backdrop and frame are required; download link and title are optional
    fn find(
        document: &Document,
        backdrop_id: &str,
        frame_id: &str,
        download_id: Option<&str>,
        title_id: Option<&str>,
    ) -> Option<Self> {
        let view = Self {
            backdrop: dom::element(document, backdrop_id).ok()?,
            frame: dom::element(document, frame_id).ok()?,
            download: download_id.and_then(|id| document.get_element_by_id(id)),
            title: title_id.and_then(|id| document.get_element_by_id(id)),
        };
        Some(view)
    }

    fn is_backdrop(&self, target: Option<&EventTarget>) -> bool {
        let backdrop: &JsValue = self.backdrop.as_ref();
        target.is_some_and(|t| AsRef::<JsValue>::as_ref(t) == backdrop)
    }
}

struct Inner {
    modals: RefCell<Modals>,
    resume: Option<ModalView>,
    certificate: Option<ModalView>,
}

impl Inner {
    fn view(&self, kind: ModalKind) -> Option<&ModalView> {
        match kind {
            ModalKind::Resume => self.resume.as_ref(),
            ModalKind::Certificate => self.certificate.as_ref(),
        }
    }

    fn sync(&self, kind: ModalKind) {
        let Some(view) = self.view(kind) else { return };
        let modals = self.modals.borrow();
        let state = modals.modal(kind);

        dom::set_attr(&view.frame, "src", state.frame_src());
        if let (Some(link), Some(href)) = (&view.download, state.download_href()) {
            dom::set_attr(link, "href", Some(href));
        }
        if let (Some(title), Some(text)) = (&view.title, state.title()) {
            title.set_text_content(Some(text));
        }
        dom::set_displayed(&view.backdrop, state.is_visible());
    }

    fn open_resume(&self) {
        self.modals.borrow_mut().open_resume();
        self.sync(ModalKind::Resume);
    }

    fn open_certificate(&self, key: &str) -> bool {
        let opened = self.modals.borrow_mut().open_certificate(key);
        if opened {
            self.sync(ModalKind::Certificate);
        }
        opened
    }

    fn close(&self, kind: ModalKind) {
        self.modals.borrow_mut().close(kind);
        self.sync(kind);
    }

    fn dismiss_on_click(&self, target: Option<&EventTarget>) {
        let closed = self
            .modals
            .borrow_mut()
            .dismiss_on_click(|kind| self.view(kind).is_some_and(|v| v.is_backdrop(target)));
        for kind in closed {
            log::debug!("Dismissed {} modal", kind.as_str());
            self.sync(kind);
        }
    }
}

/// Both overlays plus their trigger subscriptions
pub struct DocumentModals {
    inner: Rc<Inner>,
    _listeners: Vec<Listener>,
}

impl DocumentModals {
    pub fn mount(
        document: &Document,
        dom_settings: &DomSettings,
        documents: &DocumentSettings,
    ) -> PageResult<Self> {
        let resume = ModalView::find(
            document,
            &dom_settings.resume_modal_id,
            &dom_settings.resume_frame_id,
            Some(&dom_settings.resume_download_id),
            None,
        );
        let certificate = ModalView::find(
            document,
            &dom_settings.cert_modal_id,
            &dom_settings.cert_frame_id,
            None,
            Some(&dom_settings.cert_title_id),
        );
        if resume.is_none() {
            log::debug!("Resume modal not present");
        }
        if certificate.is_none() {
            log::debug!("Certificate modal not present");
        }

        let inner = Rc::new(Inner {
            modals: RefCell::new(Modals::new(
                documents.resume_path.clone(),
                documents.certificates.clone(),
            )),
            resume,
            certificate,
        });

        let mut listeners = Vec::new();

        if let Some(button) = document.get_element_by_id(&dom_settings.resume_button_id) {
            let inner_ref = inner.clone();
            listeners.push(Listener::new(&button, "click", move |_event| {
                inner_ref.open_resume();
            })?);
        }

        let cert_attr = &dom_settings.cert_trigger_attribute;
        for trigger in dom::query_all(document, &format!("[{}]", cert_attr))? {
            let key = trigger.get_attribute(cert_attr).unwrap_or_default();
            let inner_ref = inner.clone();
            listeners.push(Listener::new(&trigger, "click", move |_event| {
                inner_ref.open_certificate(&key);
            })?);
        }

        let close_attr = &dom_settings.close_trigger_attribute;
        for trigger in dom::query_all(document, &format!("[{}]", close_attr))? {
            let value = trigger.get_attribute(close_attr).unwrap_or_default();
            let Some(kind) = ModalKind::from_str(&value) else {
                log::warn!("Ignoring {}=\"{}\"", close_attr, value);
                continue;
            };
            let inner_ref = inner.clone();
            listeners.push(Listener::new(&trigger, "click", move |_event| {
                inner_ref.close(kind);
            })?);
        }

        {
            let inner_ref = inner.clone();
            let window = dom::window()?;
            listeners.push(Listener::new(&window, "click", move |event| {
                inner_ref.dismiss_on_click(event.target().as_ref());
            })?);
        }

        log::info!("Modals: {} trigger subscriptions", listeners.len());

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn open_resume(&self) {
        self.inner.open_resume();
    }

    /// Open the certificate viewer; unknown keys are ignored
    pub fn open_certificate(&self, key: &str) -> bool {
        self.inner.open_certificate(key)
    }

    pub fn close(&self, kind: ModalKind) {
        self.inner.close(kind);
    }
}
