//! The drawing surface abstraction
//!
//! The renderer issues fully resolved draw calls (concrete colors, pixel
//! radii) against [`Surface`]; backends own rasterization. The renderer
//! never retains a surface, so implementations are free to batch or
//! forward immediately.

use forma_core::Color;

pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    fn stroke_round_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    );
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color);
}

/// Every draw call a [`RecordingSurface`] can capture
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillRoundRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    StrokeRoundRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    },
    StrokeLine {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
}

/// A surface that records draw calls instead of rasterizing. Used by tests
/// and by hosts that replay command lists on their own painter.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillRoundRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { cx, cy, r, color });
    }

    fn stroke_round_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::StrokeRoundRect {
            x,
            y,
            width,
            height,
            radius,
            stroke_width,
            color,
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }
}
