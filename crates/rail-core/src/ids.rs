//! Strongly typed identifier wrappers.
//!
//! Tracks are numbered, so `TrackId` wraps a `u32` and can index directly
//! into per-track tables via `id.index()`.  Trains, signals, and junctions
//! carry operator-assigned names ("T123", "S4", "J1"), so their IDs wrap a
//! `String`.  The string IDs are `Ord` by lexical order — junction
//! arbitration relies on this as its deterministic tie-break.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a table index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            /// Bare number — this is how operators refer to tracks in
            /// decision-log messages.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

/// Generate a typed ID wrapper around an operator-assigned name.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> $name {
                $name(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> $name {
                $name(s)
            }
        }
    };
}

typed_id! {
    /// Index of a track in the track registry.
    pub struct TrackId(u32);
}

named_id! {
    /// Operator-assigned train identifier (e.g. "T123").  Unique and stable
    /// for the lifetime of the world.
    pub struct TrainId;
}

named_id! {
    /// Operator-assigned signal identifier (e.g. "S2").
    pub struct SignalId;
}

named_id! {
    /// Operator-assigned junction identifier (e.g. "J1").
    pub struct JunctionId;
}
