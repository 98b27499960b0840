//! Line-prefix content renderer.
//!
//! Each input line becomes exactly one block. Only the line prefix is
//! inspected; inline markup is left as-is in the block text.

use std::iter::{Enumerate, FusedIterator};
use std::str::Split;

/// What a single source line renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    Heading { level: u8, text: &'a str },
    ListItem(&'a str),
    Paragraph(&'a str),
    LineBreak,
}

/// A rendered block tagged with its zero-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub line: usize,
    pub kind: BlockKind<'a>,
}

/// Classify one line. First matching rule wins.
pub fn classify_line(line: &str) -> BlockKind<'_> {
    if let Some(text) = line.strip_prefix("# ") {
        BlockKind::Heading { level: 1, text }
    } else if let Some(text) = line.strip_prefix("## ") {
        BlockKind::Heading { level: 2, text }
    } else if let Some(text) = line.strip_prefix("### ") {
        BlockKind::Heading { level: 3, text }
    } else if let Some(text) = line.strip_prefix("- ") {
        BlockKind::ListItem(text)
    } else if line.trim().is_empty() {
        BlockKind::LineBreak
    } else {
        BlockKind::Paragraph(line)
    }
}

/// Raw post content ready to be rendered any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    source: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// A fresh lazy pass over the blocks, starting at the first line.
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks {
            lines: self.source.split('\n').enumerate(),
        }
    }
}

impl<'a> IntoIterator for &Document<'a> {
    type Item = Block<'a>;
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks()
    }
}

/// Lazy iterator over the blocks of a [`Document`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, text) = self.lines.next()?;
        Some(Block {
            line,
            kind: classify_line(text),
        })
    }
}

impl FusedIterator for Blocks<'_> {}
