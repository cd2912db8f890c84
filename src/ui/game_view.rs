use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::board::SymbolId;
use crate::core::Player;
use crate::game::{CardFace, CardView, GameSession, HudView};
use crate::turn::TurnState;

/// Card width in cells, at full scale.
const CARD_WIDTH: usize = 5;

pub fn render(frame: &mut Frame, session: &GameSession, cursor: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let hud = session.hud();
    render_header(frame, &hud, chunks[0]);
    render_board(frame, session, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    if hud.game_over {
        render_game_over(frame, &hud, chunks[1]);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Cyan,
        Player::Opponent => Color::Magenta,
    }
}

fn render_header(frame: &mut Frame, hud: &HudView, area: Rect) {
    let turn = match hud.turn_state {
        _ if hud.game_over => "Game Over".to_string(),
        TurnState::HumanTurn => "Your turn".to_string(),
        TurnState::OpponentTurn => "Computer's turn".to_string(),
        TurnState::Resolving | TurnState::Switching => format!("{}'s turn", hud.current_player),
    };

    let status = Line::from(vec![
        Span::styled(
            format!("You: {}", hud.human_score),
            Style::default().fg(player_color(Player::Human)),
        ),
        Span::raw("   |   "),
        Span::styled(
            turn,
            Style::default()
                .fg(player_color(hud.current_player))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   |   "),
        Span::styled(
            format!("Computer: {}", hud.opponent_score),
            Style::default().fg(player_color(Player::Opponent)),
        ),
    ]);

    let header = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Memory Match"));

    frame.render_widget(header, area);
}

/// One printable label per symbol: letters first, then the raw number.
fn glyph(symbol: SymbolId) -> String {
    match symbol.raw() {
        n @ 0..=25 => char::from(b'A' + n).to_string(),
        n @ 26..=51 => char::from(b'a' + (n - 26)).to_string(),
        n => n.to_string(),
    }
}

fn card_span(view: &CardView, under_cursor: bool) -> Span<'static> {
    // A flipping card narrows towards its midpoint
    let width = (CARD_WIDTH as f32 * view.scale).round() as usize;
    let inner = match view.face {
        CardFace::Back => "░".repeat(width),
        CardFace::Face | CardFace::Matched => {
            let label: String = glyph(view.symbol).chars().take(width).collect();
            format!("{label:^width$}")
        }
    };

    let mut style = match view.face {
        CardFace::Back => Style::default().fg(Color::Blue),
        CardFace::Face => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        CardFace::Matched => Style::default().fg(Color::Green),
    };
    if view.selected {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(format!(" {inner:^CARD_WIDTH$} "), style)
}

fn render_board(frame: &mut Frame, session: &GameSession, cursor: usize, area: Rect) {
    let cols = session.board().cols().max(1);
    let views = session.card_views();

    let mut lines = vec![Line::default()];
    for row in views.chunks(cols) {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|view| [card_span(view, view.slot == cursor), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Arrows: Move  |  Enter/Space: Flip  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_game_over(frame: &mut Frame, hud: &HudView, area: Rect) {
    let Some(outcome) = hud.outcome else {
        return;
    };
    let popup = centered(area, 36, 6);
    let lines = vec![
        Line::from(Span::styled(
            outcome.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("You {}  -  {} Computer", hud.human_score, hud.opponent_score)),
        Line::from("Press Enter or R to play again"),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over")),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
