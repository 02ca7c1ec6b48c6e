//! Drawing surface abstraction
//!
//! The painter only needs four primitives. The browser backs them with a
//! canvas 2D context; tests and the headless runner use [`RecordingSurface`].

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub color: &'a str,
    pub font_px: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// A 2D raster target with logical pixel dimensions
pub trait Surface {
    /// Logical (width, height)
    fn size(&self) -> (f32, f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    /// Straight line with a `[dash, gap]` pattern
    fn stroke_dashed_line(&mut self, from: (f32, f32), to: (f32, f32), dash: [f32; 2], color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle<'_>);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    DashedLine {
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        color: String,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: String,
        font_px: f32,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// Surface that just records what was drawn
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_dashed_line(&mut self, from: (f32, f32), to: (f32, f32), dash: [f32; 2], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle<'_>) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: style.color.to_string(),
            font_px: style.font_px,
            align: style.align,
            baseline: style.baseline,
        });
    }
}
