//! Errors raised while binding the page to the DOM
//!
//! The simulation, router and modal state are total; only the browser layer
//! can fail, and it logs rather than surfaces these to the visitor.

pub type PageResult<T> = Result<T, PageError>;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element: #{0}")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    pub fn unexpected(id: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedElement {
            id: id.into(),
            expected,
        }
    }

    /// Wrap a thrown JS value (wasm-bindgen hands these back as `JsValue`)
    pub fn js(value: impl std::fmt::Debug) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
