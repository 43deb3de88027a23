//! Submission validation and payload assembly.
//!
//! Validation is pure and synchronous: a rejected form never reaches the
//! network layer. The multipart assembly step is kept separate so the
//! rules can be exercised without a DOM.

use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use common::model::scenario::Scenario;

/// A validated job submission, minus the file itself.
///
/// `value_column` and `output_spacing` are populated if and only if the
/// scenario requires them. Scenarios that do not use them omit the fields
/// from the multipart payload entirely; the backend relies on that shape.
#[derive(Clone, Debug, PartialEq)]
pub struct JobParams {
    pub scenario: Scenario,
    pub x_column: String,
    pub y_column: String,
    pub value_column: Option<String>,
    pub output_spacing: Option<f64>,
}

/// Checks the form fields against the scenario rules, in order, first
/// failure wins:
///
/// 1. a file must be selected;
/// 2. both coordinate columns must be selected;
/// 3. `sparse_only` additionally needs a value column and an output
///    spacing that parses as a number strictly greater than zero.
///
/// The error string is the user-facing message shown by the caller.
pub fn validate(
    file_selected: bool,
    scenario: Scenario,
    x_column: &str,
    y_column: &str,
    value_column: &str,
    output_spacing: &str,
) -> Result<JobParams, String> {
    if !file_selected {
        return Err("Select a CSV file before submitting.".to_string());
    }
    if x_column.is_empty() || y_column.is_empty() {
        return Err("Select both an X column and a Y column.".to_string());
    }

    if !scenario.requires_sparse_fields() {
        return Ok(JobParams {
            scenario,
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            value_column: None,
            output_spacing: None,
        });
    }

    let spacing = output_spacing.trim().parse::<f64>().ok().filter(|s| *s > 0.0);
    if value_column.is_empty() || spacing.is_none() {
        return Err(
            "The sparse_only scenario needs a value column and an output spacing greater than zero."
                .to_string(),
        );
    }

    Ok(JobParams {
        scenario,
        x_column: x_column.to_string(),
        y_column: y_column.to_string(),
        value_column: Some(value_column.to_string()),
        output_spacing: spacing,
    })
}

/// Builds the multipart body for `POST /jobs` from validated params and
/// the selected file. Field names follow the backend contract; the
/// optional fields are appended only when the params carry them.
pub fn to_form_data(params: &JobParams, file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("csv_file", file, &file.name())?;
    form.append_with_str("scenario", params.scenario.as_str())?;
    form.append_with_str("x_column", &params.x_column)?;
    form.append_with_str("y_column", &params.y_column)?;
    if let Some(value_column) = &params.value_column {
        form.append_with_str("value_column", value_column)?;
    }
    if let Some(spacing) = params.output_spacing {
        form.append_with_str("output_spacing", &spacing.to_string())?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_the_first_failure() {
        // Everything else is invalid too; the file message must still win.
        let err = validate(false, Scenario::SparseOnly, "", "", "", "-1").unwrap_err();
        assert!(err.contains("CSV file"));
    }

    #[test]
    fn test_both_coordinate_columns_are_required() {
        let err = validate(true, Scenario::ExplicitGeometry, "lon", "", "", "").unwrap_err();
        assert!(err.contains("X column"));
        let err = validate(true, Scenario::ExplicitGeometry, "", "lat", "", "").unwrap_err();
        assert!(err.contains("X column"));
    }

    #[test]
    fn test_sparse_only_rejects_missing_value_column() {
        let err = validate(true, Scenario::SparseOnly, "lon", "lat", "", "10").unwrap_err();
        assert!(err.contains("sparse_only"));
    }

    #[test]
    fn test_sparse_only_rejects_bad_spacing() {
        for spacing in ["0", "-5", "ten", "", "NaN"] {
            let result = validate(true, Scenario::SparseOnly, "lon", "lat", "mag", spacing);
            assert!(result.is_err(), "spacing {spacing:?} should be rejected");
        }
    }

    #[test]
    fn test_sparse_only_carries_both_optional_fields() {
        let params = validate(true, Scenario::SparseOnly, "lon", "lat", "mag", " 12.5 ").unwrap();
        assert_eq!(params.value_column.as_deref(), Some("mag"));
        assert_eq!(params.output_spacing, Some(12.5));
    }

    #[test]
    fn test_explicit_geometry_ignores_the_sparse_fields() {
        // Garbage in the spacing input must not block other scenarios, and
        // the optional fields must be omitted from the payload.
        let params =
            validate(true, Scenario::ExplicitGeometry, "lon", "lat", "mag", "bogus").unwrap();
        assert_eq!(params.scenario, Scenario::ExplicitGeometry);
        assert_eq!(params.x_column, "lon");
        assert_eq!(params.y_column, "lat");
        assert!(params.value_column.is_none());
        assert!(params.output_spacing.is_none());
    }
}
