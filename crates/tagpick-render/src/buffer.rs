#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s. Cells are stored in row-major
//! order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. The scissor stack always holds at least the full-buffer rect, and each
//!    push intersects with the current top

use crate::cell::Cell;
use tagpick_core::geometry::Rect;

/// A 2D grid of cells.
///
/// # Example
///
/// ```
/// use tagpick_render::buffer::Buffer;
/// use tagpick_render::cell::Cell;
///
/// let mut buffer = Buffer::new(8, 2);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// Zero dimensions are bumped to 1 so the grid is never empty.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = width as usize * height as usize;

        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    ///
    /// Bypasses the scissor stack.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y).
    ///
    /// - Skips writes outside the bounds or the current scissor
    /// - Composites the new background over the existing one
    /// - Wide characters are written atomically: head plus `CONTINUATION`
    ///   tails, or nothing at all if any part would be clipped
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width().max(1);
        let scissor = self.current_scissor();
        for i in 0..width {
            let cx = x as usize + i;
            if cx >= self.width as usize || !scissor.contains(cx as u16, y) {
                return;
            }
        }
        if y >= self.height {
            return;
        }

        self.clear_overlap(x, y);
        for i in 1..width {
            self.clear_overlap(x + i as u16, y);
        }

        let idx = y as usize * self.width as usize + x as usize;
        let bg = cell.bg.over(self.cells[idx].bg);
        self.cells[idx] = Cell { bg, ..cell };
        for i in 1..width {
            self.cells[idx + i] = Cell::CONTINUATION;
        }
    }

    /// Remove any wide character that currently covers (x, y).
    fn clear_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        let (head_x, head) = if current.is_continuation() {
            let mut back = x;
            loop {
                if back == 0 {
                    return;
                }
                back -= 1;
                let Some(i) = self.index(back, y) else { return };
                if !self.cells[i].is_continuation() {
                    break (back, self.cells[i]);
                }
            }
        } else {
            (x, current)
        };

        let width = head.content.width();
        if width <= 1 || head_x as usize + width <= x as usize {
            return;
        }
        for i in 0..width {
            if let Some(j) = self.index(head_x + i as u16, y) {
                self.cells[j] = Cell::default();
            }
        }
    }

    /// Fill a rectangular region with the given cell, respecting the scissor.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.current_scissor().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Clear all cells to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Get raw access to the cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Plain text of row `y`: empty cells become spaces and continuation
    /// cells are skipped. Rows outside the buffer yield an empty string.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.content.as_char().unwrap_or(' '))
            .collect()
    }

    // ========== Scissor Stack ==========

    /// Push a scissor (clipping) region onto the stack.
    ///
    /// The effective scissor is the intersection of all pushed rects.
    pub fn push_scissor(&mut self, rect: Rect) {
        let intersected = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(intersected);
    }

    /// Pop a scissor region from the stack.
    ///
    /// Does nothing if only the base scissor remains.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// Get the current effective scissor region.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.bounds())
    }
}
