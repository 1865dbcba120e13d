//! Aggregate key-performance figures.

/// Dashboard KPI figures included in every snapshot.
///
/// These are static configuration, not derived from simulation state: the
/// engine never updates them.  They exist so the read-state document carries
/// the aggregate panel the operator dashboard renders.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct KpiFigures {
    /// Punctuality percentage.
    pub punctuality: f64,

    /// Average delay in minutes.
    pub avg_delay: f64,

    /// Total trains across the network.
    pub total_trains: u32,

    /// Trains currently counted as delayed.
    pub delayed_trains: u32,
}
