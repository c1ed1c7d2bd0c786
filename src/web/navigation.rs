//! Section navigation bound to the DOM

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

use super::dom;
use super::events::Listener;
use crate::PageResult;
use crate::router::{NavButton, Router, Section};
use crate::settings::DomSettings;

struct Inner {
    router: RefCell<Router>,
    sections: Vec<Element>,
    buttons: Vec<Element>,
    classes: Classes,
}

struct Classes {
    active_section: String,
    revealed: String,
    active_nav: String,
}

impl Inner {
    fn show_section(&self, id: &str) -> bool {
        let shown = self.router.borrow_mut().show_section(id);
        if shown {
            self.sync();
            scroll_to_top();
        }
        shown
    }

    fn activate_nav(&self, index: usize) -> bool {
        let shown = self.router.borrow_mut().activate_nav(index);
        if shown {
            self.sync();
            scroll_to_top();
        }
        shown
    }

    /// Write router state back to element classes
    fn sync(&self) {
        let router = self.router.borrow();
        for (el, section) in self.sections.iter().zip(router.sections()) {
            dom::set_class(el, &self.classes.active_section, section.visible);
            // Never removed once added, so the entrance animation plays once
            if section.revealed {
                dom::set_class(el, &self.classes.revealed, true);
            }
        }
        for (el, button) in self.buttons.iter().zip(router.nav()) {
            dom::set_class(el, &self.classes.active_nav, button.active);
        }
    }
}

/// Page sections, nav buttons and their click subscriptions
pub struct Navigation {
    inner: Rc<Inner>,
    _listeners: Vec<Listener>,
}

impl Navigation {
    pub fn mount(document: &Document, settings: &DomSettings) -> PageResult<Self> {
        let sections = dom::query_all(document, &settings.section_selector)?;
        let buttons = dom::query_all(document, &settings.nav_selector)?;

        let router = Router::new(
            sections
                .iter()
                .map(|el| {
                    let section = Section::new(el.id());
                    if el.class_list().contains(&settings.reveal_class) {
                        section.with_reveal()
                    } else {
                        section
                    }
                })
                .collect(),
            buttons
                .iter()
                .map(|el| {
                    let target = el.get_attribute(&settings.nav_target_attribute);
                    NavButton::new(target.unwrap_or_default())
                })
                .collect(),
        );
        log::info!(
            "Navigation: {} sections, {} nav buttons",
            router.sections().len(),
            router.nav().len()
        );

        let inner = Rc::new(Inner {
            router: RefCell::new(router),
            sections,
            buttons,
            classes: Classes {
                active_section: settings.active_section_class.clone(),
                revealed: settings.revealed_class.clone(),
                active_nav: settings.active_nav_class.clone(),
            },
        });

        let mut listeners = Vec::with_capacity(inner.buttons.len());
        for (index, button) in inner.buttons.iter().enumerate() {
            let inner_ref = inner.clone();
            listeners.push(Listener::new(button, "click", move |_event| {
                inner_ref.activate_nav(index);
            })?);
        }

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    /// Show the section with `id`; unknown ids are ignored
    pub fn show_section(&self, id: &str) -> bool {
        self.inner.show_section(id)
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
