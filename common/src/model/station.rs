use serde::{Deserialize, Serialize};

/// A single station: one point in the 2D coordinate space of a survey.
///
/// Stations arrive from the preview endpoint and are never mutated by the
/// client; the renderer only derives screen positions from them.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Station {
    pub x: f64,
    pub y: f64,
}

/// Geometry preview for a job: the stations that were measured in the
/// uploaded CSV and the stations the backend generated along the traverse.
///
/// The two sequences are independent; either may be empty. For
/// `explicit_geometry` jobs the backend typically generates nothing.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct PreviewData {
    pub measured: Vec<Station>,
    pub generated: Vec<Station>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_deserializes_uneven_sets() {
        let preview: PreviewData = serde_json::from_str(
            r#"{"measured":[{"x":1.5,"y":-2.0},{"x":3.0,"y":4.0}],"generated":[]}"#,
        )
        .unwrap();
        assert_eq!(preview.measured.len(), 2);
        assert!(preview.generated.is_empty());
        assert_eq!(preview.measured[0], Station { x: 1.5, y: -2.0 });
    }
}
