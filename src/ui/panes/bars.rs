//! Bar chart pane rendering
//!
//! Renders the element vector as vertical bars scaled against the largest
//! generatable value. Bar color follows state precedence: settled beats
//! swapping beats comparing beats the default.

use crate::array::{Element, VALUE_MAX};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Pick the bar color for an element's current state
fn bar_color(element: &Element) -> Color {
    if element.is_sorted {
        DEFAULT_THEME.sorted
    } else if element.is_swapping {
        DEFAULT_THEME.swapping
    } else if element.is_comparing {
        DEFAULT_THEME.comparing
    } else {
        DEFAULT_THEME.bar
    }
}

/// Render the array pane
///
/// Bars are labeled with the element's stable id, so swapped elements can be
/// watched moving across the chart.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, elements: &[Element]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Array ")
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if elements.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    // Fit the bars to the pane: two border columns plus one gap per bar
    let inner_width = area.width.saturating_sub(2);
    let n = elements.len() as u16;
    let bar_width = (inner_width.saturating_sub(n.saturating_sub(1)) / n).max(1);

    let bars: Vec<Bar> = elements
        .iter()
        .map(|e| {
            let color = bar_color(e);
            Bar::default()
                .value(e.value as u64)
                .label(Line::from(format!("{:02}", e.id)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(VALUE_MAX as u64);

    frame.render_widget(chart, area);
}
