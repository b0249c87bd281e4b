use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use gloo::utils::window;
use common::models::PollStats;
use std::cmp::{max, min};
use std::error::Error;
use wasm_bindgen::JsCast;
use log::warn;
use crate::theme::Theme;

/// An error while drawing the chart. It carries no detail - the canvas is
/// in an unknown state either way, so the component falls back to a
/// message and the page needs a refresh.

pub struct PlotError;

impl<E: Error> From<E> for PlotError {
    fn from(_: E) -> Self {
        PlotError
    }
}

pub enum PieChartMsg {
    Redraw,
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {

    /// The vote counts to chart. Must not be all zero - the page shows a
    /// message instead of the chart in that case.

    pub stats: PollStats,

    /// The active theme, which seeds the slice colour sequence.

    pub theme: Theme,

    /// Current viewport width, used to size the canvas.

    pub window_width: f64,
}

/// A canvas pie chart of the poll results, one slice per option, with a
/// legend down the right-hand side. Slices are coloured by progressively
/// brightening the theme's base colour.

pub struct PieChart {
    canvas: NodeRef,
    failed: bool,
}

impl Component for PieChart {

    type Message = PieChartMsg;
    type Properties = PieChartProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(PieChartMsg::Redraw);
        PieChart {
            canvas: NodeRef::default(),
            failed: false,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.failed {
            return html! {
                <h3 class="plot-message">{"an error occurred - please try refreshing"}</h3>
            };
        }

        html! {
            <div class="plot">
                <canvas class="canvas" ref={self.canvas.clone()} />
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PieChartMsg::Redraw => {
                if self.redraw(ctx).is_err() {
                    warn!("pie chart redraw failed");
                    self.failed = true;
                    return true;
                }
                false
            },
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        ctx.link().send_message(PieChartMsg::Redraw);
        true
    }
}

impl PieChart {
    fn redraw(&self, ctx: &Context<Self>) -> Result<(), PlotError> {
        let canvas: HtmlCanvasElement = self.canvas.cast().ok_or(PlotError)?;
        let stats = &ctx.props().stats;
        let theme = ctx.props().theme;

        let dpr = window().device_pixel_ratio().max(1.0);
        let width = min(max((ctx.props().window_width * 0.97) as u32, 560), 720);
        let height: u32 = 400;

        canvas
            .set_attribute("style", &format!("width: {}px; height: {}px", width, height))
            .map_err(|_| PlotError)?;
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        let breakdown = stats.breakdown();
        let sizes = breakdown.iter().map(|(_, c)| *c as f64).collect::<Vec<f64>>();
        let seed = hex::decode(theme.base_colour())?;
        let colours = slice_colours([seed[0], seed[1], seed[2]], breakdown.len());

        let padding = 50.0 * dpr;
        let radius = 150.0 * dpr;
        let center = ((padding + radius) as i32, (padding + radius) as i32);

        // slice labels live in the legend, not on the pie itself
        let labels = vec![""; breakdown.len()];

        let backend = CanvasBackend::with_canvas_object(canvas.clone()).ok_or(PlotError)?;
        let drawing_area = backend.into_drawing_area();
        let pie = Pie::new(&center, &radius, &sizes, &colours, &labels);
        drawing_area.draw(&pie)?;

        // legend: swatch and label per option, painted straight on the
        // 2d context to the right of the pie
        let context = canvas_context(&canvas).ok_or(PlotError)?;
        context.set_font(&format!("{}px sans-serif", (14.0 * dpr) as u32));
        let x = width as f64 * dpr - 100.0 * dpr;
        let mut y = padding;
        for ((option, _), colour) in breakdown.iter().zip(&colours) {
            context.set_fill_style_str(&rgb(colour));
            context.fill_rect(x - 15.0 * dpr, y - 5.0 * dpr, 10.0 * dpr, 10.0 * dpr);
            context.set_fill_style_str(theme.text_colour());
            context.fill_text(&option.to_string(), x, y).map_err(|_| PlotError)?;
            y += 25.0 * dpr;
        }

        Ok(())
    }
}

/// Returns the CanvasRenderingContext2d object for the given HtmlCanvasElement

pub fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Formats a colour the way the 2d context wants it.

fn rgb(colour: &RGBColor) -> String {
    format!("rgb({},{},{})", colour.0, colour.1, colour.2)
}

/// Scales each channel of the base colour, clamped to the displayable range.

fn scale_colour(base: [u8; 3], factor: f64) -> RGBColor {
    let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0).round() as u8;
    RGBColor(scale(base[0]), scale(base[1]), scale(base[2]))
}

/// The slice colour sequence: the theme seed, brightened a step per slice.

fn slice_colours(base: [u8; 3], n: usize) -> Vec<RGBColor> {
    (0..n).map(|i| scale_colour(base, 1.0 + 0.3 * i as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(colour: &RGBColor) -> (u8, u8, u8) {
        (colour.0, colour.1, colour.2)
    }

    #[test]
    fn scaling_clamps_at_channel_max() {
        let scaled = scale_colour([200, 10, 0], 2.0);
        assert_eq!(channels(&scaled), (255, 20, 0));
    }

    #[test]
    fn first_slice_keeps_the_seed() {
        let colours = slice_colours([52, 58, 64], 5);
        assert_eq!(channels(&colours[0]), (52, 58, 64));
    }

    #[test]
    fn slices_brighten_until_saturated() {
        let colours = slice_colours([0, 123, 255], 5);
        for pair in colours.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
            assert_eq!(pair[1].2, 255);
        }
        assert_eq!(channels(&colours[4]), (0, 255, 255));
    }

    #[test]
    fn rgb_formats_for_the_canvas() {
        assert_eq!(rgb(&RGBColor(0, 123, 255)), "rgb(0,123,255)");
    }
}
