//! Junction definitions.

use rail_core::{SignalId, TrackId};

/// A point where two or more tracks cross.  Static after startup.
///
/// The junction sits at one shared position value on each of the tracks it
/// spans.  Entry is gated by the `controlled_by` signals; the references are
/// validated against the signal table when the world is built.
#[derive(Clone, Debug)]
pub struct Junction {
    /// The tracks this junction spans.
    pub tracks: Vec<TrackId>,

    /// Position of the junction on each of its tracks.
    pub position: f64,

    /// The signals that gate entry to the junction.
    pub controlled_by: Vec<SignalId>,
}

impl Junction {
    /// `true` if `track` is one of the tracks this junction spans.
    #[inline]
    pub fn spans(&self, track: TrackId) -> bool {
        self.tracks.contains(&track)
    }
}
