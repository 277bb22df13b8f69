//! Headless renderer: widgets record draw commands, the host rasterizes them.

use crate::{Bounds, Point};

/// An RGBA render colour with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Neutral grey used for outlines and the wheel backdrop.
    pub const GREY: Color = Color {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Axis along which a gradient fill runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    Horizontal,
    Vertical,
}

/// A draw command to be executed by the host's rasterizer.
///
/// Angles are in radians, measured the way a y-down canvas measures them
/// (positive angles turn clockwise on screen).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: Color,
    },
    StrokeRect {
        rect: Bounds,
        color: Color,
        width: f32,
    },
    FillGradientRect {
        rect: Bounds,
        start: Color,
        end: Color,
        direction: GradientDirection,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
    /// Pie slice from the centre, optionally outlined.
    FillWedge {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
        outline: Option<(Color, f32)>,
    },
    /// Region bounded by an arc and its chord (a half disc when the arc spans pi).
    FillArc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    },
}

/// Collects draw commands in submission order.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Bounds, color: Color, width: f32) {
        self.push(DrawCommand::StrokeRect { rect, color, width });
    }

    pub fn fill_gradient_rect(
        &mut self,
        rect: Bounds,
        start: Color,
        end: Color,
        direction: GradientDirection,
    ) {
        self.push(DrawCommand::FillGradientRect {
            rect,
            start,
            end,
            direction,
        });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn fill_polygon(&mut self, points: Vec<Point>, color: Color) {
        self.push(DrawCommand::FillPolygon { points, color });
    }

    pub fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        angles: (f32, f32),
        color: Color,
        outline: Option<(Color, f32)>,
    ) {
        self.push(DrawCommand::FillWedge {
            center,
            radius,
            start_angle: angles.0,
            end_angle: angles.1,
            color,
            outline,
        });
    }

    pub fn fill_arc(&mut self, center: Point, radius: f32, angles: (f32, f32), color: Color) {
        self.push(DrawCommand::FillArc {
            center,
            radius,
            start_angle: angles.0,
            end_angle: angles.1,
            color,
        });
    }

    /// Append previously recorded commands (e.g. a cached layer).
    pub fn extend<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = DrawCommand>,
    {
        self.draw_commands.extend(commands);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn len(&self) -> usize {
        self.draw_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_commands.is_empty()
    }

    /// Hand the recorded frame to the host and start a new one.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        log::trace!("Renderer: handing off {} commands", self.draw_commands.len());
        std::mem::take(&mut self.draw_commands)
    }

    fn push(&mut self, command: DrawCommand) {
        self.draw_commands.push(command);
    }
}
