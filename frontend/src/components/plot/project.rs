//! Data-space to screen-space projection for the geometry plot.
//!
//! The plot lives in a fixed logical canvas; stations are mapped into the
//! drawable region inside the margin by a per-axis affine transform over
//! the bounding box of all stations. The data y axis points up, screen y
//! points down, so the y mapping is flipped.

use common::model::station::Station;

/// Logical canvas width in SVG user units.
pub const VIEW_WIDTH: f64 = 1000.0;
/// Logical canvas height in SVG user units.
pub const VIEW_HEIGHT: f64 = 600.0;
/// Margin kept free on all four sides.
pub const MARGIN: f64 = 40.0;
/// Radius of a station marker.
pub const MARKER_RADIUS: f64 = 5.0;

/// Affine mapping from station coordinates into the drawable region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    min_x: f64,
    min_y: f64,
    span_x: f64,
    span_y: f64,
}

impl Projection {
    /// Fits a projection over the bounding box of the given stations.
    ///
    /// A degenerate axis (all stations sharing one coordinate, or a single
    /// station, or no stations at all) gets a span of 1 so the division
    /// stays defined; such points land on the margin offset of that axis.
    pub fn fit<'a>(stations: impl Iterator<Item = &'a Station>) -> Projection {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for station in stations {
            min_x = min_x.min(station.x);
            max_x = max_x.max(station.x);
            min_y = min_y.min(station.y);
            max_y = max_y.max(station.y);
        }

        let span = |min: f64, max: f64| {
            let span = max - min;
            if span > 0.0 {
                span
            } else {
                1.0
            }
        };

        Projection {
            min_x: if min_x.is_finite() { min_x } else { 0.0 },
            min_y: if min_y.is_finite() { min_y } else { 0.0 },
            span_x: span(min_x, max_x),
            span_y: span(min_y, max_y),
        }
    }

    /// Screen position of a station, y flipped so increasing data y moves
    /// up the canvas.
    pub fn project(&self, station: &Station) -> (f64, f64) {
        let drawable_width = VIEW_WIDTH - 2.0 * MARGIN;
        let drawable_height = VIEW_HEIGHT - 2.0 * MARGIN;
        let x = MARGIN + (station.x - self.min_x) / self.span_x * drawable_width;
        let y = MARGIN + drawable_height - (station.y - self.min_y) / self.span_y * drawable_height;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(x: f64, y: f64) -> Station {
        Station { x, y }
    }

    #[test]
    fn test_corners_map_to_the_drawable_region() {
        let stations = [station(0.0, 0.0), station(10.0, 10.0)];
        let projection = Projection::fit(stations.iter());

        let drawable_width = VIEW_WIDTH - 2.0 * MARGIN;
        let drawable_height = VIEW_HEIGHT - 2.0 * MARGIN;

        // Bottom-left of the data ends up bottom-left of the canvas.
        assert_eq!(
            projection.project(&stations[0]),
            (MARGIN, MARGIN + drawable_height)
        );
        // Top-right of the data ends up top-right of the canvas.
        assert_eq!(
            projection.project(&stations[1]),
            (MARGIN + drawable_width, MARGIN)
        );
    }

    #[test]
    fn test_shared_x_axis_collapses_to_the_margin() {
        let stations = [station(5.0, 0.0), station(5.0, 10.0)];
        let projection = Projection::fit(stations.iter());

        for s in &stations {
            let (x, _) = projection.project(s);
            assert_eq!(x, MARGIN);
        }
    }

    #[test]
    fn test_single_station_lands_on_the_margin_offsets() {
        let lone = station(123.4, -56.7);
        let projection = Projection::fit(std::iter::once(&lone));
        let drawable_height = VIEW_HEIGHT - 2.0 * MARGIN;
        assert_eq!(projection.project(&lone), (MARGIN, MARGIN + drawable_height));
    }

    #[test]
    fn test_empty_input_still_yields_a_usable_projection() {
        let stations: [Station; 0] = [];
        let projection = Projection::fit(stations.iter());
        // Nothing is drawn for an empty preview; the projection must still
        // be finite in case it is applied.
        let (x, y) = projection.project(&station(0.0, 0.0));
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_interior_points_interpolate_linearly() {
        let stations = [station(0.0, 0.0), station(10.0, 20.0)];
        let projection = Projection::fit(stations.iter());
        let (x, y) = projection.project(&station(5.0, 10.0));
        assert_eq!(x, MARGIN + (VIEW_WIDTH - 2.0 * MARGIN) / 2.0);
        assert_eq!(y, MARGIN + (VIEW_HEIGHT - 2.0 * MARGIN) / 2.0);
    }
}
