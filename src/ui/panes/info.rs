//! Step description, input array and color legend

use crate::snapshot::{Snapshot, VisualState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub snapshot: Option<&'a Snapshot>,
    pub input: &'a [i64],
}

fn format_values(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn legend_line() -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Legend: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for state in [
        VisualState::Normal,
        VisualState::Pivot,
        VisualState::Lower,
        VisualState::Higher,
        VisualState::Sorted,
    ] {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.state_color(state)),
        ));
        spans.push(Span::styled(
            format!("{}  ", state.label()),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    spans.push(Span::styled(
        "▀ sorted region",
        Style::default().fg(DEFAULT_THEME.success),
    ));
    Line::from(spans)
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let description = data
        .snapshot
        .map(|s| s.description.as_str())
        .unwrap_or("(no snapshot)");
    let max_depth = data.snapshot.map_or(0, |s| s.max_depth_reached);

    let lines = vec![
        Line::from(Span::styled(
            description.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Input: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format_values(data.input),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled("  Max depth: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                max_depth.to_string(),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        legend_line(),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_values(&[3, -1, 2]), "[3, -1, 2]");
    }
}
