use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Clear, Dataset, GraphType, List,
        ListItem, Paragraph, Wrap,
    },
    Frame,
};

use crate::presenter::{ChartPoint, RatingCharts};
use crate::search::{Field, SearchMode};
use super::app::App;
use super::models::Pane;
use super::utils::{centered_rect, short_label};

const BAR_GAP: u16 = 1;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(f, chunks[0], app);

    if let Some(charts) = &app.charts {
        render_charts(f, chunks[1], charts);
    } else {
        render_search_panes(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);

    if let Some(notice) = &app.notice {
        render_notice_popup(f, notice);
    }

    if app.show_help {
        render_help_popup(f, app);
    }
}

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.mode {
        Some(mode) => format!("Movie Finder - search by {}", mode),
        None => "Movie Finder - pick a search mode".to_string(),
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn pane_border(app: &App, pane: Pane, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if app.focus == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    }
}

pub fn render_search_panes(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(16),
            Constraint::Percentage(30),
            Constraint::Percentage(27),
            Constraint::Percentage(27),
        ])
        .split(area);

    render_mode_list(f, chunks[0], app);
    render_selection_list(f, chunks[1], app, Field::Actor, "Actor");
    render_selection_list(f, chunks[2], app, Field::Director, "Director");
    render_selection_list(f, chunks[3], app, Field::Genre, "Genre");
}

fn render_mode_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = SearchMode::ALL_MODES
        .iter()
        .map(|mode| {
            if app.mode == Some(*mode) {
                ListItem::new(Line::from(Span::styled(
                    format!("* {}", mode),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )))
            } else {
                ListItem::new(Line::from(format!("  {}", mode)))
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Search by")
                .borders(Borders::ALL)
                .border_style(pane_border(app, Pane::Mode, true)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.mode_state.clone());
}

fn render_selection_list(f: &mut Frame, area: Rect, app: &App, field: Field, name: &str) {
    let enabled = app.is_enabled(field);
    let values = app.values(field);

    let item_style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let items: Vec<ListItem> = values
        .iter()
        .map(|value| ListItem::new(Line::from(Span::styled(value.clone(), item_style))))
        .collect();

    let title = if enabled {
        format!("{} ({})", name, values.len())
    } else {
        format!("{} (disabled)", name)
    };

    let highlight = if enabled {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(pane_border(app, Pane::for_field(field), enabled)),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state(field).clone());
}

pub fn render_charts(f: &mut Frame, area: Rect, charts: &RatingCharts) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_rating_bars(f, chunks[0], &charts.by_rating);
    render_score_stems(f, chunks[2], &charts.by_score);
}

fn format_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}

fn render_rating_bars(f: &mut Frame, area: Rect, points: &[ChartPoint]) {
    let count = points.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(BAR_GAP * (count - 1)) / count).max(1);

    // Ratings are out of ten; bars are drawn in tenths.
    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value.map(|v| (v * 10.0).round().max(0.0) as u64).unwrap_or(0))
                .text_value(format_value(point.value, 1))
                .label(Line::from(short_label(&point.title, bar_width as usize)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("IMDB ratings (Esc to close)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(100)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    f.render_widget(chart, area);
}

fn render_score_stems(f: &mut Frame, area: Rect, points: &[ChartPoint]) {
    // One empty slot on each side so every stem sits under its label.
    let slots = points.len() + 1;
    let stems: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| point.value.map(|v| ((i + 1) as f64, v)))
        .collect();

    let slot_width = (area.width.saturating_sub(8) as usize / slots).max(1);
    let mut x_labels = vec![String::new()];
    x_labels.extend(points.iter().map(|p| short_label(&p.title, slot_width)));
    x_labels.push(String::new());

    let y_max = stems.iter().map(|(_, v)| *v).fold(100.0_f64, f64::max);

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Magenta))
            .data(&stems),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .data(&stems),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Meta scores")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, slots as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{:.0}", y_max),
                ]),
        );

    f.render_widget(chart, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(area);

    let status_text = if let Some(status_msg) = &app.status_message {
        status_msg.clone()
    } else if let (Some(query), Some(count)) = (&app.stats.last_query, app.stats.last_match_count) {
        format!("{} movie(s) for {}", count, query)
    } else {
        format!("{} movies loaded", app.catalog.len())
    };

    let status_style = if app.status_message.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Green)
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    let controls_text = if app.charts.is_some() {
        "Esc to close charts, q to quit"
    } else if app.mode.is_none() {
        "Enter to pick a mode, h for help, q to quit"
    } else {
        "Tab to move, s to search, h for help"
    };

    let controls = Paragraph::new(controls_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(controls, chunks[1]);
}

pub fn render_notice_popup(f: &mut Frame, notice: &str) {
    let popup_area = centered_rect(50, 25, f.area());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter or Esc", Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Results")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

pub fn render_help_popup(f: &mut Frame, _app: &App) {
    let popup_area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Movie Finder - Help",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  Tab/S-Tab - Move between lists"),
        Line::from("  Up/k      - Move up"),
        Line::from("  Down/j    - Move down"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  Enter     - Pick mode (mode list) or search"),
        Line::from("  s         - Search with the highlighted values"),
        Line::from("  h/F1      - Toggle this help"),
        Line::from("  Esc       - Close charts or popups"),
        Line::from("  q         - Quit application"),
        Line::from(""),
        Line::from("Search modes:"),
        Line::from("• Actor, Director or Genre use one list"),
        Line::from("• All requires every list to match"),
        Line::from("• Charts show the first five matches"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or h to close",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
