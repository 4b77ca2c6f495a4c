//! Wraparound index arithmetic over a fixed-length sequence.

use crate::error::CarouselError;

/// Move `delta` steps from `current`, wrapping at both ends.
///
/// Any `delta` is accepted, including jumps of more than one lap.
pub fn advance(current: usize, total: usize, delta: i64) -> Result<usize, CarouselError> {
    if total == 0 {
        return Err(CarouselError::InvalidState);
    }
    // Widened so extreme deltas cannot overflow the sum
    let next = (current as i128 + delta as i128).rem_euclid(total as i128);
    Ok(next as usize)
}

/// Resolve a direct jump to `target`.
///
/// Targets outside `0..total` wrap instead of clamping, so `total` maps to 0
/// and `-1` maps to the last item.
pub fn go_to(target: i64, total: usize) -> Result<usize, CarouselError> {
    match check_target(target, total) {
        Ok(index) => Ok(index),
        Err(CarouselError::OutOfRange { target, total }) => {
            log::debug!("[navigator] wrapping out-of-range target {} over {}", target, total);
            advance(0, total, target)
        }
        Err(err) => Err(err),
    }
}

/// Resolve a direct jump to an unsigned position, wrapping past the end.
pub fn go_to_index(target: usize, total: usize) -> Result<usize, CarouselError> {
    if total == 0 {
        return Err(CarouselError::InvalidState);
    }
    if target >= total {
        log::debug!("[navigator] wrapping out-of-range target {} over {}", target, total);
    }
    Ok(target % total)
}

/// Validate `target` without recovering.
pub fn check_target(target: i64, total: usize) -> Result<usize, CarouselError> {
    if total == 0 {
        return Err(CarouselError::InvalidState);
    }
    if target < 0 || target >= total as i64 {
        return Err(CarouselError::OutOfRange { target, total });
    }
    Ok(target as usize)
}
