use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use verdura_catalog::{DisplayItem, StockStatus};

use super::app::{CatalogScreen, Phase};

pub fn render(frame: &mut Frame, screen: &CatalogScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search
            Constraint::Min(1),    // Items
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_search(frame, screen, chunks[1]);
    render_items(frame, screen, chunks[2]);
    render_status_bar(frame, screen, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("vdu - fresh picks")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, screen: &CatalogScreen, area: Rect) {
    let search_block = Block::default().borders(Borders::ALL).title("Search");

    let display_text = if screen.search.is_empty() {
        "Search fresh vegetables...".to_string()
    } else {
        screen.search.clone()
    };

    let style = if screen.search.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let search_paragraph = Paragraph::new(display_text).style(style).block(search_block);

    frame.render_widget(search_paragraph, area);

    if screen.phase == Phase::Ready {
        let cursor_x = area.x + 1 + screen.search.len() as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn render_items(frame: &mut Frame, screen: &CatalogScreen, area: Rect) {
    let items_block = Block::default().borders(Borders::ALL).title("Vegetables");

    match screen.phase {
        Phase::Idle | Phase::Loading => {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Loading catalog...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )))
            .block(items_block);
            frame.render_widget(loading, area);
        }
        Phase::Failed => {
            let message = screen.error.as_deref().unwrap_or("Something went wrong");
            let error = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            )))
            .block(items_block);
            frame.render_widget(error, area);
        }
        Phase::Ready => {
            let visible = screen.visible_items();

            if visible.is_empty() {
                let empty = Paragraph::new(Line::from(Span::styled(
                    "No vegetables found",
                    Style::default().fg(Color::DarkGray),
                )))
                .block(items_block);
                frame.render_widget(empty, area);
                return;
            }

            let items: Vec<ListItem> = visible.iter().map(|i| item_row(i)).collect();

            let list = List::new(items)
                .block(items_block)
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");

            let mut state = ratatui::widgets::ListState::default();
            state.select(Some(screen.selected.min(visible.len() - 1)));

            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn item_row(item: &DisplayItem) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            item.item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if item.derived.has_discount {
        spans.push(Span::styled(
            format!("${:.2}", item.item.price),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!("${:.2}", item.derived.effective_price),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::styled(
        format!("/{}", item.item.unit),
        Style::default().fg(Color::DarkGray),
    ));

    spans.push(Span::raw("  "));
    spans.push(match item.derived.stock_status {
        StockStatus::Low => Span::styled("low stock", Style::default().fg(Color::Red)),
        StockStatus::Plentiful => Span::styled("in stock", Style::default().fg(Color::Green)),
    });

    if item.item.featured {
        spans.push(Span::styled(
            "  featured",
            Style::default().fg(Color::Magenta),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn render_status_bar(frame: &mut Frame, screen: &CatalogScreen, area: Rect) {
    let status = match screen.phase {
        Phase::Idle | Phase::Loading => "Loading...  Esc: Cancel",
        Phase::Ready => "Type: Search  ↑/↓: Select  Esc: Quit",
        Phase::Failed => "Esc: Quit",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
