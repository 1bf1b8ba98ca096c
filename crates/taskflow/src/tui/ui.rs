use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use taskflow_app::StatusFilter;
use taskflow_core::Task;

use super::app::{AddForm, App, FormField, Mode};
use super::input::TextInput;
use super::theme::Theme;

pub(super) fn draw(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_stats(f, app, chunks[0]);
    draw_filter_bar(f, app, chunks[1]);
    draw_task_list(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if let Mode::AddForm(form) = &app.mode {
        draw_add_form_popup(f, app, form);
    }
    if app.session.deletion().is_pending() {
        draw_confirm_popup(f, app);
    }
}

fn draw_stats(f: &mut Frame<'_>, app: &App, area: Rect) {
    let counts = app.session.counts();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let theme = &app.theme;
    draw_stat_cell(f, cells[0], "Total", counts.total, theme.accent);
    draw_stat_cell(f, cells[1], "Completed", counts.completed, theme.success);
    draw_stat_cell(f, cells[2], "Pending", counts.pending, theme.fg);
}

fn draw_stat_cell(f: &mut Frame<'_>, area: Rect, label: &str, value: usize, color: Color) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(label),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let searching = matches!(app.mode, Mode::Search);

    let mut spans = vec![Span::styled("Search: ", Style::default().fg(theme.muted))];
    if searching {
        spans.extend(cursor_spans(&app.search_input));
    } else if app.search_input.value().is_empty() {
        spans.push(Span::styled("(press / to search)", Style::default().fg(theme.muted)));
    } else {
        spans.push(Span::raw(app.search_input.value()));
    }

    let filter_label = format!("[{}]", app.session.filter().status());
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        filter_label,
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));

    let title = if searching { "Search (editing)" } else { "Search" };
    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_task_list(f: &mut Frame<'_>, app: &App, area: Rect) {
    let visible = app.session.visible_tasks();
    let theme = &app.theme;

    let items: Vec<ListItem<'_>> = if visible.is_empty() {
        let filter = app.session.filter();
        let message = if filter.search_active() || filter.status() != StatusFilter::All {
            "No matching tasks"
        } else {
            "No tasks yet"
        };
        vec![ListItem::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme.muted),
        )))]
    } else {
        visible.iter().map(|task| task_row(task, app)).collect()
    };

    let list = List::new(items)
        .block(Block::default().title("Tasks").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(app.visibility.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn task_row<'a>(task: &'a Task, app: &App) -> ListItem<'a> {
    let theme = &app.theme;
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let priority_tag = format!("{} ", task.priority);

    let mut text_style = Style::default().fg(theme.fg);
    if task.completed {
        text_style = text_style
            .fg(theme.muted)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let line = Line::from(vec![
        Span::raw(format!("{} ", task.category.icon())),
        Span::styled(checkbox, Style::default().fg(theme.muted)),
        Span::raw(" "),
        Span::styled(
            priority_tag,
            Style::default().fg(Theme::priority_color(task.priority)),
        ),
        Span::styled(&task.text, text_style),
        Span::styled(format!("  (due {})", task.due), Style::default().fg(theme.muted)),
    ]);
    ListItem::new(line)
}

fn draw_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = match app.mode {
            Mode::Normal => "a: add  Space: toggle  d: delete  /: search  f: filter  t: theme  q: quit",
            Mode::Search => "Enter: keep  Esc: clear",
            Mode::AddForm(_) => "Tab: next field  Enter: save  Esc: cancel",
        };
        Line::from(Span::styled(hints, Style::default().fg(theme.muted)))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_add_form_popup(f: &mut Frame<'_>, app: &App, form: &AddForm) {
    let theme = &app.theme;
    let area = centered_rect(f.area(), 60, 10);

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    f.render_widget(Clear, area);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    draw_form_field(f, app, rows[0], "Text", form.focus == FormField::Text, |focused| {
        if focused {
            cursor_spans(&form.text)
        } else {
            vec![Span::raw(form.text.value())]
        }
    });
    draw_form_field(f, app, rows[1], "Priority", form.focus == FormField::Priority, |_| {
        vec![Span::styled(
            format!("◀ {} ▶", form.priority),
            Style::default().fg(Theme::priority_color(form.priority)),
        )]
    });
    draw_form_field(f, app, rows[2], "Category", form.focus == FormField::Category, |_| {
        vec![Span::raw(format!("◀ {} {} ▶", form.category.icon(), form.category))]
    });
    draw_form_field(f, app, rows[3], "Due", form.focus == FormField::Due, |focused| {
        if focused {
            cursor_spans(&form.due)
        } else {
            vec![Span::raw(form.due.value())]
        }
    });
}

fn draw_form_field<'a>(
    f: &mut Frame<'_>,
    app: &App,
    area: Rect,
    label: &'a str,
    focused: bool,
    content: impl FnOnce(bool) -> Vec<Span<'a>>,
) {
    let theme = &app.theme;
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(format!("{label:<9}"), label_style),
    ];
    spans.extend(content(focused));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_confirm_popup(f: &mut Frame<'_>, app: &App) {
    let Some(target) = app.session.deletion().pending_target() else {
        return;
    };
    let theme = &app.theme;
    let area = centered_rect(f.area(), 50, 7);

    let block = Block::default()
        .title("Delete task?")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.danger));
    f.render_widget(Clear, area);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", target.text),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)),
            Span::raw(" delete   "),
            Span::styled("[n]", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
            Span::raw(" keep"),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Spans rendering the input text with the cursor cell reversed.
fn cursor_spans(input: &TextInput) -> Vec<Span<'_>> {
    let (before, after) = input.split_at_cursor();
    let mut chars = after.chars();
    let under_cursor = chars.next().map_or_else(|| " ".to_string(), |ch| ch.to_string());
    let rest = chars.as_str();
    vec![
        Span::raw(before),
        Span::styled(under_cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest),
    ]
}

fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = (area.width * width_percent) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
