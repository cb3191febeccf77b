use kerbside_core::calendar::NO_UPCOMING;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("kerbside – bin collection calendars")
        .block(Block::default().borders(Borders::ALL).title("Kerbside"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::RegionSelect => draw_region_select(frame, app, *content_area),
        Screen::ScheduleSearch => draw_schedule_search(frame, app, *content_area),
        Screen::OutlookView => draw_outlook_view(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::RegionSelect => "↑/↓ move · Enter/Space select region · q/Ctrl-C quit",
        Screen::ScheduleSearch => {
            "Type to edit · Enter search · Tab/→ open outlook · Left/Esc back · q/Ctrl-C quit"
        }
        Screen::OutlookView => "Esc/←/b back to results · q/Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_region_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .regions
        .iter()
        .enumerate()
        .map(|(idx, (_id, name))| {
            let prefix = if idx == app.region_list_index {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{name}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select region (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.regions.is_empty() {
        state.select(Some(app.region_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_schedule_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(0),    // results
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, results_area] = chunks else {
        return;
    };

    let region_name = app
        .regions
        .get(app.region_list_index)
        .map_or("<no region>", |(_, name)| name.as_str());

    let input = Paragraph::new(app.search_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Search in {region_name} (part of a street address, Enter)"
        )))
        .wrap(Wrap { trim: true });

    frame.render_widget(input, *input_area);

    let items = if app.search_results.is_empty() {
        vec![ListItem::new(
            "No results yet. Try typing part of a street address.",
        )]
    } else {
        app.search_results
            .iter()
            .map(|bin| {
                ListItem::new(format!(
                    "{}, {} - {} ({})",
                    bin.street_address, bin.suburb, bin.bin_type, bin.description
                ))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Schedules (↑/↓, Tab/→ to open outlook)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.search_results.is_empty() {
        state.select(Some(app.result_list_index));
    }
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn draw_outlook_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let region_name = app
        .regions
        .get(app.region_list_index)
        .map_or("<region>", |(_, name)| name.as_str());

    let Some(outlook) = app.outlook.as_ref() else {
        let title = format!("Outlook in {region_name} (Esc/←/b to go back)");
        let text = if app.is_loading {
            "Loading outlook…"
        } else {
            "No outlook loaded yet."
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let title = format!(
        "Outlook for {} in {region_name} (Esc/←/b to go back)",
        outlook.suburb
    );

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // summary
            Constraint::Min(0),    // calendar table
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [summary_area, table_area] = chunks else {
        return;
    };

    let today = outlook.calendar.reference().date();

    let mut lines: Vec<Line<'_>> = Vec::new();
    let days = outlook.calendar.days_until_next();
    if days == NO_UPCOMING {
        lines.push(Line::from("No collections scheduled."));
    } else {
        let when = match days {
            0 => "today".to_owned(),
            1 => "tomorrow".to_owned(),
            other => format!("in {other} days"),
        };
        let date_label = outlook
            .calendar
            .next_date()
            .map_or_else(String::new, |next| next.format("%a %d.%m.%Y").to_string());
        lines.push(Line::from(format!(
            "Next collection {when} ({date_label}): {}",
            outlook.calendar.next_categories().join(", ")
        )));
    }
    if !outlook.reminder.is_empty() {
        lines.push(Line::styled(
            outlook.reminder.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }
    if !outlook.validation.is_valid {
        lines.push(Line::styled(
            format!("Missing bins: {}", outlook.validation.missing.join(", ")),
            Style::default().fg(Color::Red),
        ));
    }

    let summary = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, *summary_area);

    let mut rows = Vec::new();
    for (date, events) in &outlook.calendar.by_date {
        for event in events {
            let date_label = date.format("%d.%m.%Y").to_string();
            let weekday = date.format("%a").to_string();
            let relative = relative_day_label(*date, today);
            let label = match event.note.as_deref() {
                Some(note) if !note.is_empty() => format!("{} ({note})", event.category),
                _ => event.category.clone(),
            };

            let mut style = Style::default().fg(category_color(&event.category));
            if *date <= today {
                style = style.add_modifier(Modifier::BOLD);
            }

            rows.push(
                Row::new(vec![
                    Cell::from(date_label),
                    Cell::from(weekday),
                    Cell::from(relative),
                    Cell::from(label),
                ])
                .style(style),
            );
        }
    }

    if rows.is_empty() {
        let paragraph = Paragraph::new("No collections inside the current horizon.")
            .block(Block::default().borders(Borders::ALL).title("Calendar"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *table_area);
        return;
    }

    let column_widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Date", "Day", "In", "Collection"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Calendar"))
        .column_spacing(1);

    frame.render_widget(table, *table_area);
}

fn category_color(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "bulky waste" => Color::Magenta,
        _ => Color::Gray,
    }
}

fn relative_day_label(date: chrono::NaiveDate, today: chrono::NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        days if days > 1 => format!("in {days} days"),
        -1 => "yesterday".to_owned(),
        days => format!("{} days ago", days.abs()),
    }
}
