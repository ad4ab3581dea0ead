//! Immediate-mode 2D drawing target the particle field renders into.

use crate::color::Color;
use std::convert::Infallible;
use vecmath::Vector2;

/// The handful of drawing primitives a frame needs. Maps directly onto a
/// canvas 2D context, but any immediate-mode backend will do.
pub trait Surface {
    type Error;

    /// Fixes the declared size of the drawing area.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: f64, height: f64);

    fn set_line_width(&mut self, width: f64);

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color);

    /// Glow applies to every fill until `clear_glow` is called.
    fn set_glow(&mut self, blur: f64, color: Color);

    fn clear_glow(&mut self);

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetSize { width: u32, height: u32 },
    Clear { width: f64, height: f64 },
    LineWidth(f64),
    Line { from: Vector2<f64>, to: Vector2<f64>, color: Color },
    Glow { blur: f64, color: Color },
    ClearGlow,
    Circle { center: Vector2<f64>, radius: f64, color: Color },
}

/// Surface that remembers what it was asked to draw instead of drawing it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub size: Option<(u32, u32)>,
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn set_glow(&mut self, blur: f64, color: Color) {
        self.commands.push(DrawCommand::Glow { blur, color });
    }

    fn clear_glow(&mut self) {
        self.commands.push(DrawCommand::ClearGlow);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle { center, radius, color });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_call_order() {
        let mut recorder = Recorder::new();
        recorder.set_size(1200, 628);
        recorder.clear(1200.0, 628.0);
        recorder.stroke_line([0.0, 0.0], [1.0, 1.0], Color::WHITE);
        let _ = recorder.fill_circle([5.0, 5.0], 2.0, Color::ACCENT);

        assert_eq!(recorder.size, Some((1200, 628)));
        assert_eq!(recorder.commands.len(), 4);
        assert_eq!(recorder.commands[1], DrawCommand::Clear { width: 1200.0, height: 628.0 });
        assert_eq!(recorder.lines().count(), 1);
        assert_eq!(recorder.circles().count(), 1);

        recorder.clear_commands();
        assert!(recorder.commands.is_empty());
        assert_eq!(recorder.size, Some((1200, 628)));
    }
}
