use serde::{Deserialize, Serialize};

/// Interpolation mode requested for a job.
///
/// The scenario decides which submission fields the backend expects: a
/// `sparse_only` job carries a value column and an output spacing so the
/// backend can synthesize stations along the traverse, while an
/// `explicit_geometry` job ships the geometry as-is and must not carry
/// either field.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Measured stations only; the backend infers the missing geometry.
    SparseOnly,
    /// The uploaded CSV already contains the full station geometry.
    ExplicitGeometry,
}

impl Scenario {
    /// Every scenario the backend accepts, in UI display order.
    pub const ALL: [Scenario; 2] = [Scenario::SparseOnly, Scenario::ExplicitGeometry];

    /// Wire name used in the multipart `scenario` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::SparseOnly => "sparse_only",
            Scenario::ExplicitGeometry => "explicit_geometry",
        }
    }

    /// Human-readable label for selector options.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::SparseOnly => "Sparse stations only",
            Scenario::ExplicitGeometry => "Explicit geometry",
        }
    }

    /// Parses a wire name back into a scenario. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Scenario> {
        Scenario::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Whether this scenario requires a value column and an output spacing.
    pub fn requires_sparse_fields(&self) -> bool {
        matches!(self, Scenario::SparseOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::parse(scenario.as_str()), Some(scenario));
        }
        assert_eq!(Scenario::parse("kriging"), None);
    }

    #[test]
    fn test_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Scenario::SparseOnly).unwrap(),
            "\"sparse_only\""
        );
        assert_eq!(
            serde_json::to_string(&Scenario::ExplicitGeometry).unwrap(),
            "\"explicit_geometry\""
        );
    }
}
