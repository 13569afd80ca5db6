use anyhow::{Context as _, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{sample_data::CATEGORY_LEGEND_LEN, ExpenseCategory};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::geometry::{donut_slices, ring_segment, slice_at, DonutSlice};
use super::{plot_color, plot_err, tooltip, CanvasPointer, ChartMsg, Hovered, CARD_BACKGROUND};
use crate::services::logging::Logger;

const COMPONENT: &str = "spending-chart";
const CANVAS_SIZE: u32 = 300;
const CENTER: (i32, i32) = (CANVAS_SIZE as i32 / 2, CANVAS_SIZE as i32 / 2);
const INNER_RADIUS: f64 = 60.0;
const OUTER_RADIUS: f64 = 100.0;
const PADDING_DEG: f64 = 5.0;

#[derive(Properties, PartialEq)]
pub struct SpendingChartProps {
    pub categories: Vec<ExpenseCategory>,
}

/// Donut of spending per category, with a short legend underneath
pub struct SpendingChart {
    canvas_ref: NodeRef,
    hovered: Option<Hovered>,
    needs_redraw: bool,
}

fn slices_for(categories: &[ExpenseCategory]) -> Vec<DonutSlice> {
    let values: Vec<f64> = categories.iter().map(|category| category.value).collect();
    donut_slices(&values, PADDING_DEG)
}

impl Component for SpendingChart {
    type Message = ChartMsg;
    type Properties = SpendingChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            hovered: None,
            needs_redraw: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let hovered = match msg {
            ChartMsg::Hover { x, y } => self.canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                let pointer = CanvasPointer::resolve(&canvas, x, y);
                let slices = slices_for(&ctx.props().categories);
                slice_at(&slices, CENTER, INNER_RADIUS, OUTER_RADIUS, pointer.canvas)
                    .map(|index| pointer.hovered(index))
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

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let categories = &ctx.props().categories;
        if !self.needs_redraw || categories.is_empty() {
            return;
        }
        self.needs_redraw = false;
        if let Err(e) = self.draw_chart(categories) {
            Logger::error_with_component(COMPONENT, &format!("{:#}", e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let categories = &ctx.props().categories;
        let link = ctx.link();

        html! {
            <section class="card chart-card spending">
                <div class="card-header">
                    <h3 class="card-title">{"Spending by Category"}</h3>
                </div>

                <div class="chart-content">
                    <canvas
                        ref={self.canvas_ref.clone()}
                        class="donut-canvas"
                        width={CANVAS_SIZE.to_string()}
                        height={CANVAS_SIZE.to_string()}
                        onmousemove={link.callback(ChartMsg::from_mouse)}
                        onmouseleave={link.callback(|_: MouseEvent| ChartMsg::Leave)}
                    ></canvas>
                    {self.view_tooltip(categories)}
                </div>

                <ul class="category-legend">
                    {for categories.iter().take(CATEGORY_LEGEND_LEN).map(|category| html! {
                        <li class="legend-row" key={category.name.clone()}>
                            <span class="legend-name">
                                <span
                                    class="legend-dot"
                                    style={format!("background-color: {}", category.color.css())}
                                ></span>
                                {&category.name}
                            </span>
                            <span class="legend-value">{category.legend_value()}</span>
                        </li>
                    })}
                </ul>
            </section>
        }
    }
}

impl SpendingChart {
    fn view_tooltip(&self, categories: &[ExpenseCategory]) -> Html {
        match self
            .hovered
            .and_then(|hovered| categories.get(hovered.index).map(|category| (hovered, category)))
        {
            Some((hovered, category)) => tooltip(&hovered, &category.name, category.legend_value()),
            None => html! {},
        }
    }

    fn draw_chart(&self, categories: &[ExpenseCategory]) -> Result<()> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .context("spending chart canvas is not mounted")?;
        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .context("canvas has no 2d rendering context")?;
        let root = backend.into_drawing_area();
        root.fill(&CARD_BACKGROUND).map_err(plot_err)?;

        for slice in slices_for(categories) {
            let color = plot_color(categories[slice.index].color);
            let outline = ring_segment(CENTER, INNER_RADIUS, OUTER_RADIUS, &slice);
            root.draw(&Polygon::new(outline, color.filled()))
                .map_err(plot_err)?;
        }

        root.present().map_err(plot_err)?;
        Ok(())
    }
}
