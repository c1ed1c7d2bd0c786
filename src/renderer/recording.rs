//! In-memory surface that records draw calls
//!
//! Used by tests and the native preview, where there is no canvas.

use glam::Vec2;

use super::{Rgba, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillColor(Rgba),
    StrokeColor(Rgba),
    LineWidth(f32),
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Filled circles with the fill color in effect when each was drawn
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        let mut fill = Rgba::new(0, 0, 0, 1.0);
        self.commands.iter().filter_map(move |cmd| match *cmd {
            DrawCommand::FillColor(c) => {
                fill = c;
                None
            }
            DrawCommand::Circle { center, radius } => Some((center, radius, fill)),
            _ => None,
        })
    }

    /// Stroked lines with the stroke color and width in effect for each
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba, f32)> + '_ {
        let mut stroke = Rgba::new(0, 0, 0, 1.0);
        let mut width = 1.0;
        self.commands.iter().filter_map(move |cmd| match *cmd {
            DrawCommand::StrokeColor(c) => {
                stroke = c;
                None
            }
            DrawCommand::LineWidth(w) => {
                width = w;
                None
            }
            DrawCommand::Line { from, to } => Some((from, to, stroke, width)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }
}
