//! Tab expansion
//!
//! A line's render form is its content with every tab replaced by enough
//! spaces to reach the next tab stop. The same rule drives both the full
//! expansion and the logical-to-render column mapping, so the cursor placed on
//! screen always lands on the cell drawn for that character.

/// Width of a tab stop in render columns
pub const TAB_STOP: usize = 8;

/// Expand tabs in `content` into literal spaces
pub fn expand_tabs(content: &[u8]) -> Vec<u8> {
    let tabs = content.iter().filter(|&&b| b == b'\t').count();
    let mut render = Vec::with_capacity(content.len() + tabs * (TAB_STOP - 1));

    for &byte in content {
        if byte == b'\t' {
            let next = advance(render.len(), byte);
            render.resize(next, b' ');
        } else {
            render.push(byte);
        }
    }

    render
}

/// Map a logical column to the render column it is drawn at.
///
/// `col` is clamped to the content length, so passing `content.len()` yields
/// the full render width.
pub fn column_to_render_column(content: &[u8], col: usize) -> usize {
    content
        .iter()
        .take(col)
        .fold(0, |rx, &byte| advance(rx, byte))
}

/// Render column following `byte` when it starts at `rx`
#[inline]
fn advance(rx: usize, byte: u8) -> usize {
    if byte == b'\t' {
        rx + TAB_STOP - rx % TAB_STOP
    } else {
        rx + 1
    }
}
