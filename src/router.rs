//! Single-page section navigation
//!
//! Exactly one section is visible at a time. Navigation buttons each point
//! at a section; the highlighted button mirrors the visible section.

/// A page section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub visible: bool,
    /// Tagged for an entrance animation
    pub reveal: bool,
    /// Entrance animation has been triggered (sticky)
    pub revealed: bool,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            reveal: false,
            revealed: false,
        }
    }

    pub fn with_reveal(mut self) -> Self {
        self.reveal = true;
        self
    }
}

/// A navigation button bound to a target section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub target: String,
    pub active: bool,
}

impl NavButton {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            active: false,
        }
    }
}

/// Section visibility and nav highlight state
#[derive(Debug, Clone, Default)]
pub struct Router {
    sections: Vec<Section>,
    nav: Vec<NavButton>,
}

impl Router {
    pub fn new(sections: Vec<Section>, nav: Vec<NavButton>) -> Self {
        Self { sections, nav }
    }

    /// Show the section with `id` and hide every other one.
    ///
    /// Returns `false` and changes nothing if no section has that id. The nav
    /// highlight moves to the first button targeting `id`, if there is one.
    pub fn show_section(&mut self, id: &str) -> bool {
        if !self.sections.iter().any(|s| s.id == id) {
            log::warn!("No section with id '{}'", id);
            return false;
        }

        for section in &mut self.sections {
            section.visible = section.id == id;
            if section.visible && section.reveal {
                section.revealed = true;
            }
        }

        if let Some(index) = self.nav.iter().position(|b| b.target == id) {
            self.highlight(index);
        }

        log::debug!("Showing section '{}'", id);
        true
    }

    /// Activate the nav button at `index`: show its section, highlight it.
    ///
    /// Returns `false` if the index is out of range or its target is unknown.
    pub fn activate_nav(&mut self, index: usize) -> bool {
        let Some(target) = self.nav.get(index).map(|b| b.target.clone()) else {
            return false;
        };
        if !self.show_section(&target) {
            return false;
        }
        // Several buttons may share a target; the clicked one wins
        self.highlight(index);
        true
    }

    fn highlight(&mut self, index: usize) {
        for (i, button) in self.nav.iter_mut().enumerate() {
            button.active = i == index;
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn nav(&self) -> &[NavButton] {
        &self.nav
    }

    /// The currently visible section, if any has been shown yet
    pub fn visible(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.visible)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(
            vec![
                Section::new("home"),
                Section::new("about").with_reveal(),
                Section::new("projects").with_reveal(),
                Section::new("contact"),
            ],
            vec![
                NavButton::new("home"),
                NavButton::new("about"),
                NavButton::new("projects"),
                NavButton::new("contact"),
            ],
        )
    }

    fn visible_ids(router: &Router) -> Vec<&str> {
        router
            .sections()
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.id.as_str())
            .collect()
    }

    fn active_targets(router: &Router) -> Vec<&str> {
        router
            .nav()
            .iter()
            .filter(|b| b.active)
            .map(|b| b.target.as_str())
            .collect()
    }

    #[test]
    fn test_nothing_visible_before_first_show() {
        let r = router();
        assert!(r.visible().is_none());
        assert!(active_targets(&r).is_empty());
    }

    #[test]
    fn test_show_section_is_exclusive() {
        let mut r = router();
        assert!(r.show_section("home"));
        assert_eq!(visible_ids(&r), vec!["home"]);

        assert!(r.show_section("contact"));
        assert_eq!(visible_ids(&r), vec!["contact"]);
        assert_eq!(active_targets(&r), vec!["contact"]);
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut r = router();
        r.show_section("about");
        assert!(!r.show_section("blog"));
        assert_eq!(visible_ids(&r), vec!["about"]);
        assert_eq!(active_targets(&r), vec!["about"]);
    }

    #[test]
    fn test_reveal_is_sticky_and_idempotent() {
        let mut r = router();
        r.show_section("about");
        assert!(r.section("about").unwrap().revealed);
        assert!(!r.section("projects").unwrap().revealed);

        r.show_section("home");
        assert!(r.section("about").unwrap().revealed);
        assert!(!r.section("home").unwrap().revealed, "home is not tagged reveal");

        let before = r.sections().to_vec();
        r.show_section("about");
        r.show_section("about");
        let mut expected = before;
        for s in &mut expected {
            s.visible = s.id == "about";
        }
        assert_eq!(r.sections(), expected.as_slice());
    }

    #[test]
    fn test_activate_nav_highlights_clicked_button() {
        let mut r = Router::new(
            vec![Section::new("home"), Section::new("about")],
            vec![NavButton::new("home"), NavButton::new("about"), NavButton::new("about")],
        );
        assert!(r.activate_nav(2));
        assert_eq!(visible_ids(&r), vec!["about"]);
        let active: Vec<_> = r.nav().iter().map(|b| b.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn test_activate_nav_out_of_range() {
        let mut r = router();
        r.show_section("home");
        assert!(!r.activate_nav(99));
        assert_eq!(visible_ids(&r), vec!["home"]);
    }

    #[test]
    fn test_nav_to_missing_section_changes_nothing() {
        let mut r = Router::new(
            vec![Section::new("home")],
            vec![NavButton::new("home"), NavButton::new("blog")],
        );
        r.show_section("home");
        assert!(!r.activate_nav(1));
        assert_eq!(active_targets(&r), vec!["home"]);
    }
}
