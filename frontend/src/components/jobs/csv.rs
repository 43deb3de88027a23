//! CSV header extraction.
//!
//! Only the header row matters to the client: the backend receives the raw
//! file and does its own parsing, so the frontend never looks past the
//! first line. No schema checks happen here beyond splitting out the
//! column names the user can pick from.

/// Extracts the column names from the first line of raw CSV text.
///
/// Accepts both `\n` and `\r\n` line endings. Each field is trimmed of
/// surrounding whitespace; order and duplicates are preserved because the
/// selectors treat columns positionally. Empty input yields a single empty
/// name, which surfaces as one blank option in the selectors.
pub fn extract_headers(raw: &str) -> Vec<String> {
    let header_line = raw.split('\n').next().unwrap_or_default();
    header_line
        .split(',')
        .map(|field| field.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_first_line_is_used() {
        let text = "lon,lat,mag\n1.0,2.0,3.0\n4.0,5.0,6.0\n";
        assert_eq!(extract_headers(text), vec!["lon", "lat", "mag"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "lon,lat,mag\r\n1.0,2.0,3.0\r\n";
        assert_eq!(extract_headers(text), vec!["lon", "lat", "mag"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(
            extract_headers(" lon , lat\t, mag \nrest"),
            vec!["lon", "lat", "mag"]
        );
    }

    #[test]
    fn test_empty_input_yields_one_blank_name() {
        assert_eq!(extract_headers(""), vec![""]);
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        assert_eq!(
            extract_headers("x,x,value,x\n"),
            vec!["x", "x", "value", "x"]
        );
    }
}
