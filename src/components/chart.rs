//! Price Chart Component
//!
//! Time-series price chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::prices::{Coin, PricePoint, PriceStore, TimeSpan};

/// Price chart for the selected coin and time range
#[component]
pub fn PriceChart(
    coin: ReadSignal<Coin>,
    span: ReadSignal<TimeSpan>,
) -> impl IntoView {
    let prices = use_context::<PriceStore>().expect("PriceStore not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the series, coin, or span changes
    create_effect(move |_| {
        let selected_coin = coin.get();
        let selected_span = span.get();
        let points = prices
            .book
            .with(|book| book.series(selected_coin, selected_span).to_vec());

        if let Some(canvas) = canvas_ref.get() {
            draw_price_chart(&canvas, &points, selected_span, selected_coin.accent());
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw the chart on canvas
fn draw_price_chart(
    canvas: &HtmlCanvasElement,
    points: &[PricePoint],
    span: TimeSpan,
    color: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#0c0c0e");
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Value range with padding
    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    for point in points {
        min_value = min_value.min(point.value);
        max_value = max_value.max(point.value);
    }

    let value_range = max_value - min_value;
    let padding = if value_range > 0.0 { value_range * 0.1 } else { 1.0 };
    min_value -= padding;
    max_value += padding;

    // Time range, data-driven
    let start = points.first().map(|p| p.timestamp).unwrap_or(0);
    let end = points.last().map(|p| p.timestamp).unwrap_or(1);
    let time_range = ((end - start) as f64).max(1.0);

    let x_of = |timestamp: i64| -> f64 {
        margin_left + ((timestamp - start) as f64 / time_range) * chart_width
    };
    let y_of = |value: f64| -> f64 {
        margin_top + ((max_value - value) / (max_value - min_value)) * chart_height
    };

    // Grid lines and y-axis labels
    ctx.set_stroke_style_str("#27272a");
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_value - (i as f64 / 5.0) * (max_value - min_value);
        ctx.set_fill_style_str("#9ca3af");
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.2}", value), 5.0, y + 4.0);
    }

    // Area fill under the line
    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(0.12);
    ctx.begin_path();
    ctx.move_to(x_of(points[0].timestamp), y_of(points[0].value));
    for point in &points[1..] {
        ctx.line_to(x_of(point.timestamp), y_of(point.value));
    }
    ctx.line_to(x_of(end), margin_top + chart_height);
    ctx.line_to(x_of(start), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // Price line
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_of(point.timestamp);
        let y = y_of(point.value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // X-axis labels
    ctx.set_fill_style_str("#9ca3af");
    ctx.set_font("12px sans-serif");
    let num_labels: i64 = 5;
    for i in 0..=num_labels {
        let timestamp = start + i * (end - start) / num_labels;
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;
        let _ = ctx.fill_text(&axis_label(timestamp, span), x - 15.0, height - 10.0);
    }
}

/// Format an x-axis timestamp for the given span.
fn axis_label(timestamp: i64, span: TimeSpan) -> String {
    let pattern = match span {
        TimeSpan::Day => "%H:%M",
        TimeSpan::Week => "%a",
        TimeSpan::Month => "%d",
        TimeSpan::Year => "%b",
    };
    chrono::DateTime::from_timestamp_millis(timestamp)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_default()
}
