//! Primary skeleton selection
//!
//! The sensor can report several bodies per frame. Cursor control follows
//! exactly one of them: the tracked body closest to the sensor.

use crate::skeleton::types::SkeletonCandidate;

/// Pick the tracked candidate with the smallest `z`
///
/// Ties keep the earliest candidate in input order. Returns `None` when no
/// candidate is fully tracked, which is a normal condition and not an error.
pub fn select_primary(candidates: &[SkeletonCandidate]) -> Option<&SkeletonCandidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_tracked())
        .fold(None, |primary, candidate| match primary {
            Some(current) if candidate.position.z < current.position.z => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        })
}
