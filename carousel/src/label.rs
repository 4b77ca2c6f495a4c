//! Accessible label text.

pub const PREV_LABEL: &str = "Previous image";
pub const NEXT_LABEL: &str = "Next image";
pub const SINGLE_LABEL: &str = "Project screenshot";

/// Label for the item at `index`, e.g. "Tiles screenshot 2".
pub fn item_label(title: &str, index: usize) -> String {
    format!("{} screenshot {}", title, index + 1)
}

/// Label for the carousel region at its current position.
pub fn region_label(index: usize, total: usize) -> String {
    if total > 1 {
        format!("Screenshot {} of {}", index + 1, total)
    } else {
        SINGLE_LABEL.to_string()
    }
}

/// The "i / N" position indicator.
pub fn position_indicator(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

pub fn dot_label(index: usize) -> String {
    format!("Go to image {}", index + 1)
}
