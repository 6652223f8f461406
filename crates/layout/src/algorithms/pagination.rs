/// Where a block of known height goes relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Fits below the cursor.
    Here,
    /// Does not fit here but fits on an empty page: break first.
    NextPage,
    /// Taller than an empty page: flow it row by row.
    Split,
}

// Absorbs float error in accumulated cursor positions.
const EPSILON: f32 = 0.01;

/// Decides whether a block `height` tall fits between `cursor_y` and `break_y`.
///
/// `fresh_top` is where content starts on a new page. A block already at the
/// top of a page is never moved, which guarantees progress.
pub fn place_block(cursor_y: f32, height: f32, fresh_top: f32, break_y: f32) -> Placement {
    let remaining = (break_y - cursor_y).max(0.0);
    if height <= remaining + EPSILON {
        return Placement::Here;
    }
    let fresh_capacity = (break_y - fresh_top).max(0.0);
    if height <= fresh_capacity + EPSILON && cursor_y > fresh_top + EPSILON {
        log::debug!(
            "Block of {:.1}pt does not fit in {:.1}pt remaining; breaking page",
            height,
            remaining
        );
        Placement::NextPage
    } else {
        Placement::Split
    }
}
