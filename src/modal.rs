//! Document preview overlays
//!
//! Two independent viewers share one pattern: the resume viewer always shows
//! the same file, the certificate viewer picks a file from a small catalog.
//! Opening points the embedded frame (and download link) at the document;
//! closing hides the overlay and blanks the frame so the previous document
//! stops loading or playing in the background.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A static document: opaque path plus display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub path: String,
}

impl Document {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Certificates keyed by type (`"web-dev"`, `"git-github"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateCatalog {
    entries: BTreeMap<String, Document>,
}

impl Default for CertificateCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            entries: BTreeMap::new(),
        };
        catalog.insert(
            "web-dev",
            Document::new("Web Development Certificate", "assets/web-dev-certificate.pdf"),
        );
        catalog.insert(
            "git-github",
            Document::new("Git & GitHub Certificate", "assets/git-github-certificate.pdf"),
        );
        catalog
    }
}

impl CertificateCatalog {
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, doc: Document) {
        self.entries.insert(key.into(), doc);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Resume,
    Certificate,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Resume, ModalKind::Certificate];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Resume => "resume",
            ModalKind::Certificate => "certificate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "resume" => Some(ModalKind::Resume),
            "certificate" | "cert" => Some(ModalKind::Certificate),
            _ => None,
        }
    }
}

/// State of one overlay and its embedded viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentModal {
    visible: bool,
    /// Embedded frame source; `None` means blank
    frame_src: Option<String>,
    /// Companion download link target
    download_href: Option<String>,
    title: Option<String>,
}

impl DocumentModal {
    /// Point the viewer at `doc` and show the overlay
    pub fn open(&mut self, doc: &Document) {
        self.frame_src = Some(doc.path.clone());
        self.download_href = Some(doc.path.clone());
        self.title = Some(doc.title.clone());
        self.visible = true;
    }

    /// Hide the overlay and blank the frame, whatever the prior state
    pub fn close(&mut self) {
        self.visible = false;
        self.frame_src = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame_src(&self) -> Option<&str> {
        self.frame_src.as_deref()
    }

    pub fn download_href(&self) -> Option<&str> {
        self.download_href.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Both overlays plus the documents they can show
#[derive(Debug, Clone)]
pub struct Modals {
    resume: DocumentModal,
    certificate: DocumentModal,
    resume_doc: Document,
    catalog: CertificateCatalog,
}

impl Modals {
    pub fn new(resume_path: impl Into<String>, catalog: CertificateCatalog) -> Self {
        Self {
            resume: DocumentModal::default(),
            certificate: DocumentModal::default(),
            resume_doc: Document::new("Resume", resume_path),
            catalog,
        }
    }

    pub fn open_resume(&mut self) {
        self.resume.open(&self.resume_doc);
        log::debug!("Opened resume: {}", self.resume_doc.path);
    }

    /// Open the certificate viewer for `key`.
    ///
    /// Unknown keys are a silent no-op and return `false`.
    pub fn open_certificate(&mut self, key: &str) -> bool {
        let Some(doc) = self.catalog.get(key) else {
            log::debug!("Unknown certificate type '{}'", key);
            return false;
        };
        self.certificate.open(doc);
        log::debug!("Opened certificate '{}': {}", key, doc.path);
        true
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.modal_mut(kind).close();
    }

    /// Close every modal whose backdrop is the click target.
    ///
    /// `is_backdrop(kind)` must be true only when the click landed on that
    /// overlay's backdrop element itself, not on its content. Returns the
    /// modals that were closed.
    pub fn dismiss_on_click(&mut self, is_backdrop: impl Fn(ModalKind) -> bool) -> Vec<ModalKind> {
        let mut closed = Vec::new();
        for kind in ModalKind::ALL {
            if is_backdrop(kind) {
                self.close(kind);
                closed.push(kind);
            }
        }
        closed
    }

    pub fn modal(&self, kind: ModalKind) -> &DocumentModal {
        match kind {
            ModalKind::Resume => &self.resume,
            ModalKind::Certificate => &self.certificate,
        }
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut DocumentModal {
        match kind {
            ModalKind::Resume => &mut self.resume,
            ModalKind::Certificate => &mut self.certificate,
        }
    }
}
