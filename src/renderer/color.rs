//! CSS color values

use serde::{Deserialize, Serialize};

/// 8-bit RGB with a floating alpha, rendered as a CSS `rgba()` string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue, different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS form, e.g. `rgba(129,140,248,0.9)`
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        assert_eq!(Rgba::new(129, 140, 248, 0.9).css(), "rgba(129,140,248,0.9)");
        assert_eq!(Rgba::new(0, 0, 0, 1.0).css(), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_with_alpha_keeps_hue() {
        let line = Rgba::new(129, 140, 248, 1.0).with_alpha(0.25);
        assert_eq!(line, Rgba::new(129, 140, 248, 0.25));
    }
}
