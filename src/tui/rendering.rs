use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{FileType, SearchResult, TypeFilter};
use crate::utils::{abbreviate_path, sanitize_name};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);

const TABS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Documents, TypeFilter::Images];

/// Everything the UI shows besides the result rows
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub tab: TypeFilter,
    pub selected_idx: usize,
    pub root: &'a str,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, results: &[SearchResult], state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state.search_query, state.root);
    render_tabs(frame, layout.tabs_area, state.tab);
    render_results_list(frame, layout.results_area, results, state.selected_idx);
    render_status_bar(frame, layout.status_area, results.len(), state);
}

fn icon(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Directory => "📁",
        FileType::Document => "📄",
        FileType::Image => "🖼 ",
        FileType::Other => "  ",
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str, root: &str) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(query),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(format!(" Search {} ", root)),
    );
    frame.render_widget(input, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: TypeFilter) {
    let mut spans = Vec::with_capacity(TABS.len() * 2);
    for tab in TABS {
        let style = if tab == active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_results_list(frame: &mut Frame, area: Rect, results: &[SearchResult], selected_idx: usize) {
    let items: Vec<ListItem> = results
        .iter()
        .map(|result| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon(result.file_type))),
                Span::styled(sanitize_name(&result.name), Style::default().fg(BRIGHT)),
                Span::styled(
                    format!("  {}", sanitize_name(&abbreviate_path(&result.path))),
                    Style::default().fg(MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Results "),
        )
        .highlight_style(Style::default().bg(ACCENT).add_modifier(Modifier::BOLD));

    // Stateful so the list scrolls to keep the selection visible
    let mut list_state = ListState::default();
    if !results.is_empty() {
        list_state.select(Some(selected_idx.min(results.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, result_count: usize, state: &RenderState) {
    let (text, fg) = match state.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), fg)
        }
        None if result_count == 0 => (
            " No results | Tab: switch tab | Ctrl+R: reindex | Ctrl+C: quit ".to_string(),
            BRIGHT,
        ),
        None => (
            format!(
                " {}/{} | Ctrl+Y: copy path | Tab: switch tab | Ctrl+R: reindex | Ctrl+C: quit ",
                state.selected_idx + 1,
                result_count
            ),
            BRIGHT,
        ),
    };

    frame.render_widget(Paragraph::new(text).style(Style::default().fg(fg).bg(BAR_BG)), area);
}
