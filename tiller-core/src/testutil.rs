//! Test support: a display double that records every draw call

use std::string::{String, ToString};
use std::vec::Vec;

use crate::traits::display::{DisplayBackend, DisplayError};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Text {
        x: u16,
        y: u16,
        text: String,
        inverted: bool,
    },
    Rect {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        on: bool,
    },
    Flush,
}

/// Recording display backend with configurable dimensions
pub struct TestPanel {
    width: u16,
    height: u16,
    pub ops: Vec<Op>,
}

impl TestPanel {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Clear).count()
    }

    pub fn flushes(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Flush).count()
    }

    /// Recorded text draws as (text, y, inverted)
    pub fn texts(&self) -> Vec<(String, u16, bool)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text {
                    text, y, inverted, ..
                } => Some((text.clone(), *y, *inverted)),
                _ => None,
            })
            .collect()
    }
}

impl DisplayBackend for TestPanel {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, inverted: bool) -> Result<(), DisplayError> {
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            inverted,
        });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        on: bool,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Rect {
            x,
            y,
            width,
            height,
            on,
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}
