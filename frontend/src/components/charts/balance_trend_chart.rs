use anyhow::{Context as _, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{format_whole_dollars, sample_data::INDIGO, BalancePoint, Period};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::geometry::{axis_ceiling, axis_ticks, dashed_segments, monotone_curve, nearest_index};
use super::{plot_color, plot_err, tooltip, CanvasPointer, ChartMsg, Hovered, CARD_BACKGROUND};
use crate::components::period_selector::PeriodSelector;
use crate::services::logging::Logger;

const COMPONENT: &str = "balance-trend";
const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 300;
const BALANCE_AXIS_STEP: f64 = 20_000.0;
const CURVE_SAMPLES: usize = 16;
const GRID_DASH: f64 = 3.0;

const AXIS_COLOR: RGBColor = RGBColor(0x66, 0x66, 0x66);
const GRID_COLOR: RGBColor = RGBColor(0x26, 0x26, 0x26);

#[derive(Properties, PartialEq)]
pub struct BalanceTrendChartProps {
    pub points: Vec<BalancePoint>,
    /// Selected window. Shown in the selector only; the chart always draws every point.
    pub period: Period,
    pub on_period_change: Callback<Period>,
}

pub struct BalanceTrendChart {
    canvas_ref: NodeRef,
    /// Canvas x of each month, filled in by the last draw
    month_xs: Vec<i32>,
    hovered: Option<Hovered>,
    needs_redraw: bool,
}

impl Component for BalanceTrendChart {
    type Message = ChartMsg;
    type Properties = BalanceTrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            month_xs: Vec::new(),
            hovered: None,
            needs_redraw: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let hovered = match msg {
            ChartMsg::Hover { x, y } => self.canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                let pointer = CanvasPointer::resolve(&canvas, x, y);
                nearest_index(&self.month_xs, pointer.canvas.0).map(|index| pointer.hovered(index))
            }),
            ChartMsg::Leave => None,
        };
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.needs_redraw = true;
        self.hovered = None;
        true
    }

    // Hover-only renders keep the painted canvas
    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.needs_redraw {
            self.redraw(&ctx.props().points);
            self.needs_redraw = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <section class="card chart-card balance-trend">
                <div class="card-header">
                    <h3 class="card-title">{"Balance Trend"}</h3>
                    <PeriodSelector
                        value={props.period}
                        on_change={props.on_period_change.clone()}
                    />
                </div>

                {if props.points.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No balance history available"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                                onmousemove={link.callback(ChartMsg::from_mouse)}
                                onmouseleave={link.callback(|_: MouseEvent| ChartMsg::Leave)}
                            ></canvas>
                            {self.view_tooltip(&props.points)}
                        </div>
                    }
                }}
            </section>
        }
    }
}

impl BalanceTrendChart {
    fn view_tooltip(&self, points: &[BalancePoint]) -> Html {
        let Some(hovered) = self.hovered else {
            return html! {};
        };
        match points.get(hovered.index) {
            Some(point) => tooltip(
                &hovered,
                &point.month,
                format!("Balance: {}", format_whole_dollars(point.balance)),
            ),
            None => html! {},
        }
    }

    fn redraw(&mut self, points: &[BalancePoint]) {
        if points.is_empty() {
            self.month_xs.clear();
            return;
        }
        match self.draw_chart(points) {
            Ok(month_xs) => self.month_xs = month_xs,
            Err(e) => Logger::error_with_component(COMPONENT, &format!("{:#}", e)),
        }
    }

    /// Paint the chart and return the canvas x of every month
    fn draw_chart(&self, points: &[BalancePoint]) -> Result<Vec<i32>> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .context("balance chart canvas is not mounted")?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .context("canvas has no 2d rendering context")?;
        let root = backend.into_drawing_area();
        root.fill(&CARD_BACKGROUND).map_err(plot_err)?;

        let last_index = (points.len() as f64 - 1.0).max(1.0);
        let max_balance = points
            .iter()
            .map(|point| point.balance)
            .fold(0.0_f64, f64::max);
        let y_max = axis_ceiling(max_balance, BALANCE_AXIS_STEP);

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..last_index, 0f64..y_max)
            .map_err(plot_err)?;

        let month_label = |x: &f64| {
            let index = x.round();
            if (x - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            points
                .get(index as usize)
                .map(|point| point.month.clone())
                .unwrap_or_default()
        };

        // Axes and labels only; the grid is drawn dashed below
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(points.len())
            .y_labels(5)
            .x_label_formatter(&month_label)
            .y_label_formatter(&|v| format_whole_dollars(*v))
            .label_style(("sans-serif", 12, &AXIS_COLOR))
            .axis_style(&AXIS_COLOR)
            .draw()
            .map_err(plot_err)?;

        let mut grid_lines: Vec<((f64, f64), (f64, f64))> = axis_ticks(y_max, BALANCE_AXIS_STEP)
            .into_iter()
            .map(|y| ((0.0, y), (last_index, y)))
            .collect();
        grid_lines.extend((0..points.len()).map(|i| ((i as f64, 0.0), (i as f64, y_max))));

        for (from, to) in grid_lines {
            let (from, to) = (chart.backend_coord(&from), chart.backend_coord(&to));
            for dash in dashed_segments(from, to, GRID_DASH, GRID_DASH) {
                root.draw(&PathElement::new(dash.to_vec(), GRID_COLOR.stroke_width(1)))
                    .map_err(plot_err)?;
            }
        }

        let knots: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.balance))
            .collect();
        let line_color = plot_color(INDIGO);

        chart
            .draw_series(
                AreaSeries::new(monotone_curve(&knots, CURVE_SAMPLES), 0.0, &line_color.mix(0.3))
                    .border_style(line_color.stroke_width(3)),
            )
            .map_err(plot_err)?;

        let month_xs = knots
            .iter()
            .map(|knot| chart.backend_coord(knot).0)
            .collect();

        root.present().map_err(plot_err)?;
        Logger::debug_with_component(COMPONENT, &format!("Drew {} balance points", points.len()));
        Ok(month_xs)
    }
}
