//! The `TrackRegistry` — fixed table of track identifiers to lengths.
//!
//! Read-only after startup.  Every train, signal, and junction reference is
//! validated against this table when the world is constructed, so the hot
//! path can use the panicking [`length`](TrackRegistry::length) accessor the
//! way SoA code indexes a `Vec`.

use std::collections::BTreeMap;

use rail_core::{RailError, RailResult, TrackId};

/// Track id → track length in track-local distance units.
#[derive(Clone, Debug, Default)]
pub struct TrackRegistry {
    lengths: BTreeMap<TrackId, f64>,
}

impl TrackRegistry {
    /// Build a registry from `(id, length)` pairs.
    ///
    /// # Errors
    ///
    /// `RailError::Config` on a duplicate id or a non-positive length.
    pub fn from_lengths(
        pairs: impl IntoIterator<Item = (TrackId, f64)>,
    ) -> RailResult<Self> {
        let mut lengths = BTreeMap::new();
        for (id, length) in pairs {
            if !(length > 0.0) {
                return Err(RailError::Config(format!(
                    "track {id} has non-positive length {length}"
                )));
            }
            if lengths.insert(id, length).is_some() {
                return Err(RailError::Config(format!("duplicate track id {id}")));
            }
        }
        Ok(Self { lengths })
    }

    /// Length of `id`, or `None` if the track is unknown.  Validation-time
    /// accessor.
    #[inline]
    pub fn get(&self, id: TrackId) -> Option<f64> {
        self.lengths.get(&id).copied()
    }

    /// Length of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is unknown.  `World` construction validates every track
    /// reference, so a miss here is a bug, not a runtime condition.
    #[inline]
    pub fn length(&self, id: TrackId) -> f64 {
        self.lengths[&id]
    }

    #[inline]
    pub fn contains(&self, id: TrackId) -> bool {
        self.lengths.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Iterate `(id, length)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackId, f64)> + '_ {
        self.lengths.iter().map(|(&id, &len)| (id, len))
    }
}
