use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::{
    App,
    protein::{linspace, ProteinReport, PH_MAX, PH_MIN, TABLE_PH_START, TABLE_PH_STOP, TABLE_PH_STEP},
    ui::{
        axis_labels, charge_axis_bounds, colored_sequence_spans, create_report_lines,
        get_charge_color,
    },
};

/// Dots drawn along the zero-charge line of each chart
const ZERO_LINE_POINTS: usize = 60;

pub fn render_ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, app, rows[0]);
    render_input(f, app, rows[1]);
    render_results(f, app, rows[2]);
    render_status_bar(f, app, rows[3]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Protein Calculator", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ];

    if app.sequence.is_empty() {
        spans.push(Span::styled("No sequence", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw("Sequence: "));
        spans.push(Span::styled(
            format!("{} residues", app.sequence.chars().count()),
            Style::default().fg(Color::Green),
        ));
    }

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = colored_sequence_spans(&app.input);
    spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));

    let input_widget = Paragraph::new(vec![Line::from(spans)])
        .block(
            Block::default()
                .title("Enter protein sequence (single-letter code)")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input_widget, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else {
        render_placeholder(f, app, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(columns[2]);

    render_summary(f, report, columns[0]);
    render_charge_table(f, report, columns[1]);
    render_charge_chart(
        f,
        &report.charge_table,
        "Net Charge vs pH (4.0 ~ 10.0)",
        [TABLE_PH_START, TABLE_PH_STOP - TABLE_PH_STEP],
        charts[0],
    );
    render_charge_chart(f, &report.charge_curve, "Charge vs pH (0 ~ 14)", [PH_MIN, PH_MAX], charts[1]);
}

fn render_placeholder(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(error) = &app.error {
        vec![Line::from(vec![
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ])]
    } else {
        vec![Line::from(vec![
            Span::styled("Press Enter to calculate", Style::default().fg(Color::DarkGray)),
        ])]
    };

    let widget = Paragraph::new(text)
        .block(Block::default().title("Results").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_summary(f: &mut Frame, report: &ProteinReport, area: Rect) {
    let widget = Paragraph::new(create_report_lines(report))
        .block(Block::default().title("Properties").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_charge_table(f: &mut Frame, report: &ProteinReport, area: Rect) {
    let header = Row::new(vec![Cell::from("pH"), Cell::from("Net Charge")])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = report
        .charge_table
        .iter()
        .map(|&(ph, charge)| {
            Row::new(vec![
                Cell::from(format!("{ph:.1}")),
                Cell::from(format!("{charge:.4}")).style(Style::default().fg(get_charge_color(charge))),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(5), Constraint::Min(10)])
        .header(header)
        .block(Block::default().title("Net Charge Table").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn render_charge_chart(f: &mut Frame, points: &[(f64, f64)], title: &str, x_bounds: [f64; 2], area: Rect) {
    let zero_line: Vec<(f64, f64)> = linspace(x_bounds[0], x_bounds[1], ZERO_LINE_POINTS)
        .into_iter()
        .map(|ph| (ph, 0.0))
        .collect();
    let y_bounds = charge_axis_bounds(points);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&zero_line),
        Dataset::default()
            .name("net charge")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(points),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("pH")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds[0], x_bounds[1], 3)),
        )
        .y_axis(
            Axis::default()
                .title("Net Charge")
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds[0], y_bounds[1], 3)),
        );
    f.render_widget(chart, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.input.is_empty() {
        "Type a sequence. Enter: submit  Ctrl+R: reset  Esc: quit"
    } else {
        "Enter: submit  Ctrl+U: clear line  Ctrl+R: reset  Esc: quit"
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled(status_text, Style::default().fg(Color::White)),
    ])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
