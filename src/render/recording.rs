use crate::core::Length;
use crate::render::{Canvas, Color, Font, Path};

/// One call made on a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    SetLineWidth(Length),
    SetLineDash { pattern: Vec<Length>, offset: Length },
    SetColor(Color),
    Rotate(f64),
    Translate { x: Length, y: Length },
    Push,
    Pop,
    Stroke(Path),
    Fill(Path),
    FillString {
        font: String,
        size: Length,
        x: Length,
        y: Length,
        text: String,
    },
}

/// Canvas that records every call instead of drawing.
///
/// Used for headless layout and by tests to check what a draw pass emitted
/// and in which order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
    depth: usize,
    unbalanced_pops: usize,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Current `push` nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of `pop` calls made with an empty state stack.
    #[must_use]
    pub fn unbalanced_pops(&self) -> usize {
        self.unbalanced_pops
    }

    /// Recorded strings as `(x, y, text)`, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (Length, Length, &str)> {
        self.commands.iter().filter_map(|command| match command {
            CanvasCommand::FillString { x, y, text, .. } => Some((*x, *y, text.as_str())),
            _ => None,
        })
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, CanvasCommand::Stroke(_)))
            .count()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, CanvasCommand::Fill(_)))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn set_line_width(&mut self, width: Length) {
        self.commands.push(CanvasCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[Length], offset: Length) {
        self.commands.push(CanvasCommand::SetLineDash {
            pattern: pattern.to_vec(),
            offset,
        });
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(CanvasCommand::SetColor(color));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(CanvasCommand::Rotate(radians));
    }

    fn translate(&mut self, x: Length, y: Length) {
        self.commands.push(CanvasCommand::Translate { x, y });
    }

    fn push(&mut self) {
        self.depth += 1;
        self.commands.push(CanvasCommand::Push);
    }

    fn pop(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.unbalanced_pops += 1,
        }
        self.commands.push(CanvasCommand::Pop);
    }

    fn stroke(&mut self, path: &Path) {
        self.commands.push(CanvasCommand::Stroke(path.clone()));
    }

    fn fill(&mut self, path: &Path) {
        self.commands.push(CanvasCommand::Fill(path.clone()));
    }

    fn fill_string(&mut self, font: &Font, x: Length, y: Length, text: &str) {
        self.commands.push(CanvasCommand::FillString {
            font: font.name().to_owned(),
            size: font.size(),
            x,
            y,
            text: text.to_owned(),
        });
    }

    fn dpi(&self) -> f64 {
        72.0
    }
}
