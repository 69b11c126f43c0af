use crate::core::ContentRect;
use crate::error::AxisResult;
use crate::render::{LinePrimitive, RectPrimitive, RotatedTextPrimitive, TextPrimitive};

/// Backend-agnostic scene for one axis draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub content: ContentRect,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub rotated_texts: Vec<RotatedTextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(content: ContentRect) -> Self {
        Self {
            content,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            rotated_texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rotated_text(mut self, text: RotatedTextPrimitive) -> Self {
        self.rotated_texts.push(text);
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        self.content.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for rotated in &self.rotated_texts {
            rotated.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
            && self.rotated_texts.is_empty()
    }
}
