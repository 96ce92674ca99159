use super::color::Color;

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A gradient stop: offset in 0..=1 and color.
pub type GradientStop = (f32, Color);

/// One immediate-mode drawing operation in world coordinates.
///
/// The game builds a fresh list every frame; a backend replays it in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear { width: f32, height: f32 },
    /// Rectangle filled with a vertical gradient (top to bottom).
    GradientRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        stops: Vec<GradientStop>,
    },
    /// Solid rectangle.
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    /// Solid rectangle with rounded corners.
    RoundedRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: Color,
    },
    /// Solid circle.
    Circle { x: f32, y: f32, radius: f32, color: Color },
    /// Circle shaded with a radial gradient whose highlight sits up-left of center.
    ShadedCircle {
        x: f32,
        y: f32,
        radius: f32,
        highlight: Color,
        base: Color,
    },
    /// Circle outline.
    Ring {
        x: f32,
        y: f32,
        radius: f32,
        line_width: f32,
        color: Color,
    },
    /// Single line of text. `y` is the vertical middle of the glyphs.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        align: TextAlign,
        color: Color,
    },
}

/// Per-frame list of draw commands.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // -- Convenience builders --

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.push(DrawCommand::Rect { x, y, w, h, color });
    }

    pub fn circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.push(DrawCommand::Circle { x, y, radius, color });
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, align: TextAlign, color: Color) {
        self.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            bold: false,
            align,
            color,
        });
    }

    pub fn bold_text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, align: TextAlign, color: Color) {
        self.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            bold: true,
            align,
            color,
        });
    }

    /// Iterate over the text strings in the list (handy in tests).
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
