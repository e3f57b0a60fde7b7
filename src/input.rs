//! Input sources and the stack of pushed sources.
//!
//! A memory-mapped file is the usual backing store for an include-style
//! composition, but it's an external collaborator this crate doesn't depend
//! on; [`StrSource`] stands in for it (and for a plain in-memory buffer) by
//! owning a `String`, preserving the "random-access character range, destroyed
//! on pop" contract without a fabricated mmap dependency.

use std::fs;
use std::path::Path;

/// A random-access range of characters backing one pushed input.
pub trait Source {
    fn as_str(&self) -> &str;
}

/// An owned in-memory source (a literal buffer, or a file read fully into memory).
pub struct StrSource {
    buf: String,
}

impl StrSource {
    pub fn new(buf: impl Into<String>) -> Self {
        StrSource { buf: buf.into() }
    }

    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        fs::read_to_string(path).map(StrSource::new)
    }
}

impl Source for StrSource {
    fn as_str(&self) -> &str {
        &self.buf
    }
}

struct Frame {
    source: Box<dyn Source>,
    /// Read cursor this frame had when it stopped being the top, restored when
    /// it becomes the top again.
    saved_offset: usize,
}

/// An ordered stack of input frames; only the top is active.
#[derive(Default)]
pub(crate) struct InputStack {
    frames: Vec<Frame>,
}

impl InputStack {
    pub(crate) fn new() -> Self {
        InputStack { frames: Vec::new() }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes `source`, first saving `current_cursor` into the frame that was on
    /// top (if any) so it can resume from the right position once this one pops.
    pub(crate) fn push(&mut self, source: Box<dyn Source>, current_cursor: usize) {
        if let Some(top) = self.frames.last_mut() {
            top.saved_offset = current_cursor;
        }
        self.frames.push(Frame {
            source,
            saved_offset: 0,
        });
    }

    /// Removes the top frame. Returns `false` if the stack was already empty.
    pub(crate) fn pop(&mut self) -> bool {
        self.frames.pop().is_some()
    }

    pub(crate) fn top(&self) -> Option<&str> {
        self.frames.last().map(|f| f.source.as_str())
    }

    /// The cursor the new top frame should resume at, after a pop.
    pub(crate) fn current_saved_offset(&self) -> usize {
        self.frames.last().map(|f| f.saved_offset).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_restores_saved_offset() {
        let mut stack = InputStack::new();
        stack.push(Box::new(StrSource::new("outer")), 0);
        assert_eq!(stack.top(), Some("outer"));

        // Pretend the outer frame's cursor advanced to 3 before the include.
        stack.push(Box::new(StrSource::new("inner")), 3);
        assert_eq!(stack.top(), Some("inner"));

        assert!(stack.pop());
        assert_eq!(stack.current_saved_offset(), 3);
        assert_eq!(stack.top(), Some("outer"));

        assert!(stack.pop());
        assert!(stack.is_empty());
        assert!(!stack.pop());
    }
}
