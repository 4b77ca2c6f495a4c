//! Error types

/// Errors raised by index navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// Navigation was requested on a carousel with no items.
    #[error("navigation requested on an empty carousel")]
    InvalidState,

    /// A requested index lies outside `0..total`.
    #[error("index {target} is outside 0..{total}")]
    OutOfRange { target: i64, total: usize },
}
