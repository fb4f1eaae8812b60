//! Algorithm selection.

use serde::{Deserialize, Serialize};

/// The sorting algorithm a run executes.
///
/// All four algorithms sort in place and emit the same step-event
/// vocabulary, so the renderer does not need to know which one is
/// running. The kind is carried on the run handle for log attribution
/// and UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// Adjacent-pair bubble sort with early exit.
    Bubble,
    /// Recursive quicksort with Lomuto partitioning.
    Quick,
    /// Insertion sort with backward shifting.
    Insertion,
    /// Two-phase heap sort (build max-heap, then extract).
    Heap,
}

impl AlgorithmKind {
    /// All algorithm kinds, in UI display order.
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Quick, Self::Insertion, Self::Heap];

    /// Returns the lowercase name used in config files and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Insertion => "insertion",
            Self::Heap => "heap",
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Self::Bubble),
            "quick" => Ok(Self::Quick),
            // Older configs abbreviate this one.
            "insertion" | "insert" => Ok(Self::Insertion),
            "heap" => Ok(Self::Heap),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl std::fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}
