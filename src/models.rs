use serde::{Deserialize, Serialize};

use crate::math_utils::Point;
use crate::path::Path;
use crate::style::{Color, Style, INK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// A text annotation placed at a point in puzzle space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub font_size: f64,
    pub anchor: Anchor,
    pub italic: bool,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, at: Point) -> Self {
        Self {
            text: text.into(),
            at,
            font_size: 16.0,
            anchor: Anchor::Middle,
            italic: false,
            color: INK,
        }
    }

    pub fn size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Italic, for point and variable names
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Shape { path: Path, style: Style },
    Label(Label),
}

/// Everything one figure routine emits, in paint order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub name: String,
    pub title: String,
    pub items: Vec<Item>,
}

impl Drawing {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, path: Path, style: Style) -> &mut Self {
        self.items.push(Item::Shape { path, style });
        self
    }

    pub fn label(&mut self, label: Label) -> &mut Self {
        self.items.push(Item::Label(label));
        self
    }

    pub fn shapes(&self) -> impl Iterator<Item = (&Path, &Style)> {
        self.items.iter().filter_map(|item| match item {
            Item::Shape { path, style } => Some((path, style)),
            Item::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.items.iter().filter_map(|item| match item {
            Item::Label(label) => Some(label),
            Item::Shape { .. } => None,
        })
    }
}

/// Output-space rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}
