use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column shares of the results table, in percent: title, author, comments, points, remove.
const COLUMN_PERCENT: [u16; 5] = [40, 30, 10, 10, 10];

/// What: Split `total` cells into the five result columns.
///
/// Output:
/// - Widths following the 40/30/10/10/10 split; rounding slack goes to the title column.
#[must_use]
pub fn column_widths(total: u16) -> [usize; 5] {
    let total = usize::from(total);
    let mut out = COLUMN_PERCENT.map(|p| total * usize::from(p) / 100);
    let used: usize = out.iter().sum();
    out[0] += total - used;
    out
}

/// What: Truncate or pad `text` to exactly `width` terminal cells.
///
/// Inputs:
/// - `text`: Cell content
/// - `width`: Target display width
///
/// Output:
/// - `text` padded with spaces, or cut with a trailing `…` when it does not fit.
///
/// Details:
/// - Uses display width, so wide characters count as two cells.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let w = UnicodeWidthStr::width(text);
    if w <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - w));
        return out;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
