use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use unicode_segmentation::UnicodeSegmentation;

use crate::app::App;
use crate::domain::models::{MatchKey, OptionRecord, RankedResult};

pub fn render(frame: &mut ratatui::Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let folder = if app.folder().is_empty() {
        "(all notes)"
    } else {
        app.folder()
    };
    let input = Paragraph::new(Text::from(format!("@{}", app.query()))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Link to | folder: {folder}")),
    );
    frame.render_widget(input, chunks[0]);

    let list_items: Vec<ListItem<'_>> = app
        .results()
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let mut style = Style::default();
            if idx == app.selected_index {
                style = style.bg(Color::Blue).fg(Color::White);
            }
            ListItem::new(result_line(result)).style(style)
        })
        .collect();

    let title = format!("Suggestions ({})", app.results().len());
    let list = List::new(list_items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, chunks[1]);

    let status = Paragraph::new(format!(
        "{} | Enter select | Esc cancel | Up/Down move",
        app.status_message
    ))
    .style(Style::default().fg(Color::Yellow))
    .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);
}

fn result_line(result: &RankedResult<OptionRecord>) -> Line<'static> {
    let option = &result.item;
    let highlight = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    if option.is_create_new_option {
        return Line::from(vec![
            Span::styled(
                format!("+ {}", option.file_name),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
            Span::styled(format!("  {}", option.file_path), dim),
        ]);
    }

    let mut spans = Vec::new();
    match &option.alias {
        Some(alias) => {
            spans.extend(highlighted_spans(
                alias,
                key_indices(result, MatchKey::Alias),
                Style::default(),
                highlight,
            ));
            spans.push(Span::styled(" → ", dim));
            spans.extend(highlighted_spans(
                &option.file_name,
                key_indices(result, MatchKey::FileName),
                dim,
                highlight,
            ));
        }
        None => spans.extend(highlighted_spans(
            &option.file_name,
            key_indices(result, MatchKey::FileName),
            Style::default(),
            highlight,
        )),
    }
    spans.push(Span::styled(format!("  {}", option.file_path), dim));
    Line::from(spans)
}

fn key_indices(result: &RankedResult<OptionRecord>, key: MatchKey) -> &[u32] {
    if result.matched_key == Some(key) {
        &result.indices
    } else {
        &[]
    }
}

/// Splits `text` into runs of plain and highlighted characters. `indices` are sorted positions
/// counted in grapheme clusters, the unit nucleo's `Utf32Str` matches on.
pub fn highlighted_spans(
    text: &str,
    indices: &[u32],
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_highlighted = false;
    let mut pending = indices.iter().peekable();

    for (pos, grapheme) in text.graphemes(true).enumerate() {
        let is_match = pending.peek().is_some_and(|&&idx| idx as usize == pos);
        if is_match {
            pending.next();
        }
        if is_match != run_highlighted && !run.is_empty() {
            let style = if run_highlighted { highlight } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_highlighted = is_match;
        run.push_str(grapheme);
    }

    if !run.is_empty() {
        let style = if run_highlighted { highlight } else { base };
        spans.push(Span::styled(run, style));
    }
    spans
}
