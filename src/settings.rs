//! Page settings
//!
//! Every tunable the page uses, with defaults that reproduce the stock
//! portfolio layout. A page can override any subset by embedding
//! `<script type="application/json" id="portfolio-settings">` before the
//! module loads. Settings are read once and never written back.

use serde::{Deserialize, Serialize};

use crate::PageResult;
use crate::consts::*;
use crate::field::Density;
use crate::modal::CertificateCatalog;
use crate::renderer::Rgba;

/// Particle field tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Viewports narrower than this use `compact_count`
    pub compact_width_threshold: f32,
    pub compact_count: usize,
    pub full_count: usize,
    /// Maximum distance at which two particles are linked
    pub link_distance: f32,
    /// Alpha of a link between coincident particles
    pub max_link_alpha: f32,
    pub link_width: f32,
    /// Velocity components are uniform in [-max_speed, max_speed)
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub dot_color: Rgba,
    /// Link color; alpha is replaced per line
    pub line_color: Rgba,
}

impl Default for FieldSettings {
    fn default() -> Self {
        let (r, g, b) = ACCENT_RGB;
        Self {
            compact_width_threshold: COMPACT_WIDTH_THRESHOLD,
            compact_count: COMPACT_PARTICLE_COUNT,
            full_count: FULL_PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            max_link_alpha: MAX_LINK_ALPHA,
            link_width: LINK_WIDTH,
            max_speed: MAX_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            dot_color: Rgba::new(r, g, b, DOT_ALPHA),
            line_color: Rgba::new(r, g, b, 1.0),
        }
    }
}

impl FieldSettings {
    /// Density tier for a viewport width
    pub fn density(&self, width: f32) -> Density {
        if width < self.compact_width_threshold {
            Density::Compact
        } else {
            Density::Full
        }
    }

    /// Particle count for a viewport width
    pub fn particle_count(&self, width: f32) -> usize {
        match self.density(width) {
            Density::Compact => self.compact_count,
            Density::Full => self.full_count,
        }
    }
}

/// Element ids, selectors and class names the browser layer binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSettings {
    pub canvas_id: String,

    pub section_selector: String,
    pub nav_selector: String,
    /// Attribute on nav buttons naming their target section
    pub nav_target_attribute: String,
    pub active_section_class: String,
    pub reveal_class: String,
    pub revealed_class: String,
    pub active_nav_class: String,
    pub home_section: String,

    pub resume_button_id: String,
    pub resume_modal_id: String,
    pub resume_frame_id: String,
    pub resume_download_id: String,

    pub cert_modal_id: String,
    pub cert_frame_id: String,
    pub cert_title_id: String,

    /// `data-cert="web-dev"` buttons open the certificate viewer
    pub cert_trigger_attribute: String,
    /// `data-close-modal="resume"` buttons close the named viewer
    pub close_trigger_attribute: String,
}

impl Default for DomSettings {
    fn default() -> Self {
        Self {
            canvas_id: "particles-canvas".into(),
            section_selector: ".page-section".into(),
            nav_selector: ".icon-btn[data-target]".into(),
            nav_target_attribute: "data-target".into(),
            active_section_class: "active-section".into(),
            reveal_class: "reveal".into(),
            revealed_class: "reveal-visible".into(),
            active_nav_class: "active".into(),
            home_section: HOME_SECTION.into(),
            resume_button_id: "view-resume-btn".into(),
            resume_modal_id: "resumeModal".into(),
            resume_frame_id: "resumeFrame".into(),
            resume_download_id: "resumeDownloadBtn".into(),
            cert_modal_id: "certModal".into(),
            cert_frame_id: "certFrame".into(),
            cert_title_id: "modalTitle".into(),
            cert_trigger_attribute: "data-cert".into(),
            close_trigger_attribute: "data-close-modal".into(),
        }
    }
}

/// Static documents shown in the modals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub resume_path: String,
    pub certificates: CertificateCatalog,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            resume_path: RESUME_PATH.into(),
            certificates: CertificateCatalog::default(),
        }
    }
}

/// All page settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldSettings,
    pub dom: DomSettings,
    pub documents: DocumentSettings,
}

impl Settings {
    /// Id of the optional inline JSON block
    pub const ELEMENT_ID: &'static str = "portfolio-settings";

    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON suitable for pasting into the inline block
    pub fn to_json(&self) -> PageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring #{}: {}", Self::ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_threshold_is_exclusive() {
        let field = FieldSettings::default();
        assert_eq!(field.density(599.9), Density::Compact);
        assert_eq!(field.density(600.0), Density::Full);
        assert_eq!(field.particle_count(320.0), 40);
        assert_eq!(field.particle_count(1920.0), 90);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "field": { "full_count": 120 }, "dom": { "home_section": "about" } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.field.full_count, 120);
        assert_eq!(settings.field.compact_count, COMPACT_PARTICLE_COUNT);
        assert_eq!(settings.dom.home_section, "about");
        assert_eq!(settings.dom.canvas_id, "particles-canvas");
        assert_eq!(settings.documents.resume_path, RESUME_PATH);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn printed_defaults_load_back_unchanged() {
        let json = Settings::default().to_json().unwrap();
        assert!(json.contains("\"particles-canvas\""));
        assert!(json.contains("\"web-dev\""));
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json("{ field: ").is_err());
    }

    #[test]
    fn certificate_catalog_can_be_replaced() {
        let settings = Settings::from_json(
            r#"{ "documents": { "certificates": {
                "rust": { "title": "Rust Certificate", "path": "assets/rust.pdf" }
            } } }"#,
        )
        .unwrap();
        let catalog = &settings.documents.certificates;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("rust").unwrap().path, "assets/rust.pdf");
        assert!(catalog.get("web-dev").is_none());
    }
}
