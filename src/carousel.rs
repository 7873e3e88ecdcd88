//! Cyclic slide-index state machine backing the slideshow task.

/// A slide/indicator pair change produced by a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Tracks which slide in a fixed, ordered sequence is active.
///
/// The sequence length is immutable for the lifetime of the carousel. With
/// zero slides the carousel is inert: every operation is a no-op and
/// [`Carousel::current`] reports `None`.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Number of slides in the sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active slide, or `None` when inert.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Activate the slide at `index`.
    ///
    /// Returns `None` when inert or when `index` is out of range; an
    /// out-of-range index is a caller contract violation and is ignored
    /// rather than panicking.
    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if index >= self.len {
            return None;
        }
        let from = self.current;
        self.current = index;
        Some(Transition {
            from,
            to: self.current,
        })
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) -> Option<Transition> {
        if self.len == 0 {
            return None;
        }
        self.go_to((self.current + 1) % self.len)
    }

    /// Step back to the previous slide, wrapping at the start.
    ///
    /// The `+ len` keeps the operand non-negative before the modulo.
    pub fn previous(&mut self) -> Option<Transition> {
        if self.len == 0 {
            return None;
        }
        self.go_to((self.current + self.len - 1) % self.len)
    }
}
