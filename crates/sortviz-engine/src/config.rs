//! Visualization configuration.

use serde::Deserialize;
use sortviz_types::AlgorithmKind;

/// Tunables for sequence generation and pacing.
///
/// Defaults: 100 bars for the quadratic algorithms, 160 for quick and
/// heap (which can afford the density), and a 5 ms per-step delay.
///
/// # Example
///
/// ```
/// use sortviz_engine::VizConfig;
/// use sortviz_types::AlgorithmKind;
///
/// let config: VizConfig = serde_json::from_str(r#"{ "speed_ms": 20 }"#).unwrap();
/// assert_eq!(config.speed_ms, 20);
/// assert_eq!(config.sequence_len_for(AlgorithmKind::Heap), 160);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Sequence length for bubble and insertion runs.
    pub sequence_len: usize,
    /// Sequence length for quick and heap runs.
    pub dense_sequence_len: usize,
    /// Initial per-step delay in milliseconds.
    pub speed_ms: u64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            sequence_len: 100,
            dense_sequence_len: 160,
            speed_ms: 5,
        }
    }
}

impl VizConfig {
    /// Returns the sequence length to generate for the given algorithm.
    #[must_use]
    pub fn sequence_len_for(&self, kind: AlgorithmKind) -> usize {
        match kind {
            AlgorithmKind::Quick | AlgorithmKind::Heap => self.dense_sequence_len,
            AlgorithmKind::Bubble | AlgorithmKind::Insertion => self.sequence_len,
        }
    }
}
