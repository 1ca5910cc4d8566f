//! Stateless UI rendering for rewind.

use crate::app::{App, Focus};
use crate::layout::Regions;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use rewind_tictactoe::{Cell, GameView, Mark, Position};

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = Regions::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, &view, app);
    draw_history(frame, &regions, &view, app);

    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    let help = Paragraph::new(
        "arrows move  enter play  1-9 play cell  tab switch pane  a/d/o order  r restart  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, regions.footer);
}

fn pane(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
}

fn draw_board(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::Board;
    frame.render_widget(pane("Board", focused), regions.board);

    for (pos, area) in Position::ALL.into_iter().zip(regions.cells) {
        let under_cursor = focused && pos == app.board_cursor();
        draw_cell(frame, area, view, pos, under_cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, pos: Position, under_cursor: bool) {
    let (symbol, mut style) = match view.board().get(pos) {
        Cell::Empty => ((pos.index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.fg(Color::Green).add_modifier(Modifier::UNDERLINED);
    }
    if *view.selected() == Some(pos) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }

    let border = if under_cursor {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, area);
}

fn draw_history(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::History;
    frame.render_widget(pane("History", focused), regions.history);

    for (order, area) in regions.order_options {
        let chosen = order == *view.order();
        let (marker, style) = if chosen {
            ("(*)", Style::default().add_modifier(Modifier::BOLD))
        } else {
            ("( )", Style::default().fg(Color::DarkGray))
        };
        let option = Paragraph::new(Line::from(Span::styled(
            format!("{marker} {}", order.label()),
            style,
        )));
        frame.render_widget(option, area);
    }

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|descriptor| {
            let current = descriptor.step() == *view.cursor();
            let marker = if current { "> " } else { "  " };
            let style = if current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{marker}{descriptor}"), style)))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let offset = regions.moves_offset(items.len(), app.selected_row());
    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(Some(app.selected_row()));

    let list = List::new(items).highlight_style(highlight);
    frame.render_stateful_widget(list, regions.moves, &mut state);
}
