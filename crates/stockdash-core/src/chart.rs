//! Chart configuration handed to the rendering surface.
//!
//! The structures serialize to the Chart.js `{ data, options }` shape in
//! camelCase. [`chart_config`] is a pure function of the series and the
//! viewport, so the same inputs always produce identical JSON.

use serde::Serialize;

use crate::{ChartSeries, Trend};

/// Widths strictly below this use the compact axis layout.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

const GRID_COLOR: &str = "rgba(156, 163, 175, 0.1)";
const TICK_COLOR: &str = "#6b7280";
const POINT_BORDER_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportBucket {
    Compact,
    Wide,
}

impl ViewportBucket {
    pub const fn tick_font_size(self) -> u8 {
        match self {
            Self::Compact => 10,
            Self::Wide => 12,
        }
    }

    pub const fn max_x_ticks(self) -> u8 {
        match self {
            Self::Compact => 4,
            Self::Wide => 8,
        }
    }
}

/// Current width of the rendering surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    pub const fn bucket(self) -> ViewportBucket {
        if self.width < MOBILE_BREAKPOINT_PX {
            ViewportBucket::Compact
        } else {
            ViewportBucket::Wide
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280)
    }
}

/// Colours keyed off the trend of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub line: &'static str,
    pub fill_top: &'static str,
    pub fill_bottom: &'static str,
}

impl Palette {
    pub const GREEN: Palette = Palette {
        line: "#10b981",
        fill_top: "rgba(16,185,129,0.1)",
        fill_bottom: "rgba(16,185,129,0.01)",
    };

    pub const RED: Palette = Palette {
        line: "#ef4444",
        fill_top: "rgba(239,68,68,0.1)",
        fill_bottom: "rgba(239,68,68,0.01)",
    };

    pub const fn for_trend(trend: Trend) -> Self {
        match trend {
            Trend::Positive => Self::GREEN,
            Trend::Negative => Self::RED,
        }
    }

    pub fn fill_gradient(&self) -> String {
        format!(
            "linear-gradient(180deg, {} 0%, {} 100%)",
            self.fill_top, self.fill_bottom
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRenderConfig {
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_width: u8,
    pub border_color: &'static str,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub point_border_width: u8,
    pub point_radius: u8,
    pub point_hover_radius: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
    pub corner_radius: u8,
    pub display_colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: &'static str,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: &'static str,
}

pub fn chart_config(series: &ChartSeries, viewport: Viewport) -> ChartRenderConfig {
    let palette = Palette::for_trend(series.trend);

    ChartRenderConfig {
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![LineDataset {
                label: series.label.clone(),
                data: series.values.clone(),
                border_width: 3,
                border_color: palette.line,
                background_color: palette.fill_gradient(),
                fill: true,
                tension: 0.4,
                point_background_color: palette.line,
                point_border_color: POINT_BORDER_COLOR,
                point_border_width: 2,
                point_radius: 0,
                point_hover_radius: 6,
            }],
        },
        options: chart_options(viewport.bucket()),
    }
}

/// Structural options; only the tick layout depends on the viewport.
pub fn chart_options(bucket: ViewportBucket) -> ChartOptions {
    let font = Font {
        size: bucket.tick_font_size(),
    };

    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: Plugins {
            legend: Legend { display: false },
            tooltip: Tooltip {
                background_color: "rgba(0, 0, 0, 0.8)",
                title_color: "#ffffff",
                body_color: "#ffffff",
                border_color: "rgba(255, 255, 255, 0.2)",
                border_width: 1,
                corner_radius: 8,
                display_colors: false,
            },
        },
        scales: Scales {
            x: Axis {
                grid: Grid { color: GRID_COLOR },
                ticks: Ticks {
                    color: TICK_COLOR,
                    font: font.clone(),
                    max_ticks_limit: Some(bucket.max_x_ticks()),
                },
            },
            y: Axis {
                grid: Grid { color: GRID_COLOR },
                ticks: Ticks {
                    color: TICK_COLOR,
                    font,
                    max_ticks_limit: None,
                },
            },
        },
        interaction: Interaction {
            intersect: false,
            mode: "index",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(Viewport::new(767).bucket(), ViewportBucket::Compact);
        assert_eq!(Viewport::new(768).bucket(), ViewportBucket::Wide);
        assert_eq!(Viewport::new(0).bucket(), ViewportBucket::Compact);
    }

    #[test]
    fn palette_follows_trend() {
        assert_eq!(Palette::for_trend(Trend::Positive).line, "#10b981");
        assert_eq!(Palette::for_trend(Trend::Negative).line, "#ef4444");
        assert_eq!(
            Palette::GREEN.fill_gradient(),
            "linear-gradient(180deg, rgba(16,185,129,0.1) 0%, rgba(16,185,129,0.01) 100%)"
        );
    }

    #[test]
    fn y_axis_has_no_tick_limit() {
        let options = chart_options(ViewportBucket::Wide);
        assert_eq!(options.scales.x.ticks.max_ticks_limit, Some(8));
        assert_eq!(options.scales.y.ticks.max_ticks_limit, None);
        assert_eq!(options.scales.y.ticks.font.size, 12);
    }
}
