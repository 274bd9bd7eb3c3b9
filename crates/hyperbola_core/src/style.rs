//! Scene description for hosts reproducing the reference figure: viewport,
//! legend labels, colors, line styles, and marker shapes. Purely data; the
//! host decides how to draw it.

use serde::{Deserialize, Serialize};

/// Axis limits, aspect, grid, and title of the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub equal_aspect: bool,
    pub grid_alpha: f64,
    pub title: String,
}

/// Identifies a drawable series of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesId {
    StaticBranchPos,
    StaticBranchNeg,
    AsymptotePos,
    AsymptoteNeg,
    Origin,
    RotatedBranchPos,
    RotatedBranchNeg,
    MarkerRotatedPos,
    MarkerRotatedNeg,
    MarkerStaticPos,
    MarkerStaticNeg,
    TrailPos,
    TrailNeg,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    SolidLine,
    DashedLine,
    DottedLine,
    CircleMarker,
    SquareMarker,
}

/// Label and look of one drawable series. `width` is the line width for
/// line kinds and the marker size for marker kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub id: SeriesId,
    pub label: Option<String>,
    pub color: String,
    pub kind: DrawKind,
    pub width: f64,
    pub alpha: f64,
}

impl SeriesStyle {
    fn new(
        id: SeriesId,
        label: Option<&str>,
        color: &str,
        kind: DrawKind,
        width: f64,
        alpha: f64,
    ) -> Self {
        Self {
            id,
            label: label.map(str::to_string),
            color: color.to_string(),
            kind,
            width,
            alpha,
        }
    }
}

/// The full scene description, including the anchor of the rotation-angle
/// annotation in axes-fraction coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub viewport: Viewport,
    pub series: Vec<SeriesStyle>,
    pub angle_anchor_x: f64,
    pub angle_anchor_y: f64,
}

impl SceneStyle {
    /// The styling of the reference figure.
    pub fn reference() -> Self {
        use DrawKind::*;
        use SeriesId::*;
        let series = vec![
            SeriesStyle::new(
                StaticBranchPos,
                Some("Static Hyperbola"),
                "gray",
                DashedLine,
                1.0,
                0.5,
            ),
            SeriesStyle::new(StaticBranchNeg, None, "gray", DashedLine, 1.0, 0.5),
            SeriesStyle::new(AsymptotePos, Some("Asymptotes"), "green", DottedLine, 1.0, 0.7),
            SeriesStyle::new(AsymptoteNeg, None, "green", DottedLine, 1.0, 0.7),
            SeriesStyle::new(Origin, Some("Rotation Point"), "red", CircleMarker, 8.0, 1.0),
            SeriesStyle::new(
                RotatedBranchPos,
                Some("Rotating Hyperbola"),
                "blue",
                SolidLine,
                2.0,
                1.0,
            ),
            SeriesStyle::new(RotatedBranchNeg, None, "blue", SolidLine, 2.0, 1.0),
            SeriesStyle::new(
                MarkerRotatedPos,
                Some("Rotated Marker Branch 1"),
                "magenta",
                CircleMarker,
                10.0,
                1.0,
            ),
            SeriesStyle::new(
                MarkerRotatedNeg,
                Some("Rotated Marker Branch 2"),
                "orange",
                CircleMarker,
                10.0,
                1.0,
            ),
            SeriesStyle::new(
                MarkerStaticPos,
                Some("Static Marker Branch 1"),
                "purple",
                SquareMarker,
                8.0,
                1.0,
            ),
            SeriesStyle::new(
                MarkerStaticNeg,
                Some("Static Marker Branch 2"),
                "brown",
                SquareMarker,
                8.0,
                1.0,
            ),
            SeriesStyle::new(TrailPos, None, "magenta", SolidLine, 1.0, 0.5),
            SeriesStyle::new(TrailNeg, None, "orange", SolidLine, 1.0, 0.5),
        ];
        Self {
            viewport: Viewport {
                x_min: -5.0,
                x_max: 5.0,
                y_min: -5.0,
                y_max: 5.0,
                equal_aspect: true,
                grid_alpha: 0.5,
                title: "Enhanced Visualization: Rotating Hyperbola with Four Moving Markers"
                    .to_string(),
            },
            series,
            angle_anchor_x: 0.05,
            angle_anchor_y: 0.95,
        }
    }
}
