pub mod balance_trend_chart;
pub mod geometry;
pub mod spending_chart;

pub use balance_trend_chart::BalanceTrendChart;
pub use spending_chart::SpendingChart;

use plotters::style::RGBColor;
use shared::Rgb;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use geometry::to_canvas_px;

/// Dashboard card background, painted behind both charts
pub(crate) const CARD_BACKGROUND: RGBColor = RGBColor(0x1A, 0x1A, 0x1A);

/// Gap between the pointer and the tooltip's top-left corner, in CSS pixels
const TOOLTIP_OFFSET: i32 = 12;

pub(crate) fn plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// plotters errors carry backend-specific types; keep only their description
pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    anyhow::anyhow!("plotting failed: {:?}", e)
}

/// Pointer messages shared by the canvas charts
pub enum ChartMsg {
    /// Pointer moved to this offset (CSS pixels) inside the canvas
    Hover { x: i32, y: i32 },
    Leave,
}

impl ChartMsg {
    pub(crate) fn from_mouse(e: MouseEvent) -> Self {
        ChartMsg::Hover {
            x: e.offset_x(),
            y: e.offset_y(),
        }
    }
}

/// Entry under the pointer and where its tooltip goes inside `.chart-content`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hovered {
    pub index: usize,
    pub left: i32,
    pub top: i32,
}

/// A pointer position resolved against a mounted canvas
pub(crate) struct CanvasPointer {
    /// Position on the canvas' own pixel grid, as plotters draws it
    pub canvas: (i32, i32),
    /// Position relative to the canvas' offset parent, for placing HTML over it
    pub page: (i32, i32),
}

impl CanvasPointer {
    pub fn resolve(canvas: &HtmlCanvasElement, x: i32, y: i32) -> Self {
        Self {
            canvas: (
                to_canvas_px(x, canvas.client_width(), canvas.width()),
                to_canvas_px(y, canvas.client_height(), canvas.height()),
            ),
            page: (canvas.offset_left() + x, canvas.offset_top() + y),
        }
    }

    pub fn hovered(&self, index: usize) -> Hovered {
        Hovered {
            index,
            left: self.page.0 + TOOLTIP_OFFSET,
            top: self.page.1 + TOOLTIP_OFFSET,
        }
    }
}

/// Small readout floated over a chart
pub(crate) fn tooltip(hovered: &Hovered, label: &str, value: String) -> Html {
    html! {
        <div
            class="chart-tooltip"
            style={format!("left: {}px; top: {}px", hovered.left, hovered.top)}
        >
            <div class="tooltip-label">{label}</div>
            <div class="tooltip-value">{value}</div>
        </div>
    }
}
