//! Plain-text rendering of views. Everything here is a pure function of the
//! view so output can be asserted in tests.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::domain::Order;
use crate::ledger::StatusHistogram;
use super::action::{AnalyticsReport, DashboardMetrics, View};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TABLE_HEADERS: [&str; 7] = [
    "Order ID",
    "Customer Name",
    "Product",
    "Quantity",
    "Price",
    "Status",
    "Date",
];

pub fn render(view: &View, chart_width: usize) -> String {
    match view {
        View::Dashboard(metrics) => render_dashboard(metrics),
        View::OrderCreated(order) => format!("Order {} added successfully!\n", order.order_id),
        View::ValidationFailed(message) => format!("Error: {}\n", message),
        View::Orders { orders, .. } => render_table(orders),
        View::StatusUpdated { order_id, status } => {
            format!("Order {} status updated to {}!\n", order_id, status)
        }
        View::NotFound(order_id) => format!("Error: Order {} not found.\n", order_id),
        View::Analytics(report) => render_analytics(report, chart_width),
        View::Notice(message) => format!("{}\n", message),
    }
}

fn render_dashboard(metrics: &DashboardMetrics) -> String {
    let mut out = String::from("== Order Management Dashboard ==\n");
    out.push_str(&metric_row(&[
        ("Total Orders", metrics.total.to_string()),
        ("Pending Orders", metrics.pending.to_string()),
        ("Completed Orders", metrics.completed.to_string()),
    ]));
    out
}

fn render_analytics(report: &AnalyticsReport, chart_width: usize) -> String {
    let mut out = String::from("== Order Analytics ==\n");
    out.push_str(&metric_row(&[
        ("Total Revenue", format_money(report.revenue.total)),
        ("Avg Order Value", format_money(report.revenue.average)),
        ("Completed Orders", report.completed.to_string()),
    ]));
    out.push_str("\nOrders by Status\n");
    out.push_str(&render_histogram(&report.histogram, chart_width));
    out
}

fn metric_row(metrics: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (label, value) in metrics {
        let _ = writeln!(out, "  {:<18} {}", format!("{}:", label), value);
    }
    out
}

/// One bar per status, scaled so the largest count spans `width` cells.
pub fn render_histogram(histogram: &StatusHistogram, width: usize) -> String {
    let max = histogram.max();
    let mut out = String::new();
    for (status, count) in histogram.iter() {
        let bar = if max == 0 { 0 } else { (count * width).div_ceil(max) };
        let _ = writeln!(out, "  {:<9} | {} {}", status.as_str(), "#".repeat(bar), count);
    }
    out
}

/// Renders the orders as a fixed-width table in the order given.
pub fn render_table(orders: &[Order]) -> String {
    let rows: Vec<[String; 7]> = orders
        .iter()
        .map(|order| {
            [
                order.order_id.clone(),
                order.customer_name.clone(),
                order.product.clone(),
                order.quantity.to_string(),
                format!("{:.2}", order.price.round_dp(2)),
                order.status.to_string(),
                order.created_at.format(DATE_FORMAT).to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Formats an amount as `$1,234.56`.
pub fn format_money(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}${}.{}", sign, grouped, fraction)
}
