//! Wallet connect screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectState {
    Idle,
    Connecting,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectAction {
    None,
    Connect,
}

/// Connect screen UI.
pub struct ConnectScreen {
    state: ConnectState,
    alert_message: Option<String>,
}

impl ConnectScreen {
    /// Creates new connect screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ConnectState::Idle,
            alert_message: None,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> ConnectState {
        self.state
    }

    /// Sets connecting state.
    pub fn set_connecting(&mut self) {
        self.state = ConnectState::Connecting;
        self.alert_message = None;
    }

    /// Shows an alert banner.
    pub fn set_alert(&mut self, message: impl Into<String>) {
        self.state = ConnectState::Alert;
        self.alert_message = Some(message.into());
    }

    /// Resets to idle state.
    pub fn reset(&mut self) {
        self.state = ConnectState::Idle;
        self.alert_message = None;
    }

    /// Handles key event, returns action.
    ///
    /// The connect keys keep working while an alert is shown, so a retry
    /// does not require dismissing the banner first.
    pub fn handle_key(&mut self, key: KeyEvent) -> ConnectAction {
        if self.state == ConnectState::Connecting {
            return ConnectAction::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('c') => ConnectAction::Connect,
            _ => {
                if self.state == ConnectState::Alert {
                    self.reset();
                }
                ConnectAction::None
            }
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(56),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" GIF Portal ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<7>(inner);

        let title = Paragraph::new("View your GIF collection in the metaverse")
            .style(Style::default().fg(Color::White))
            .centered();
        title.render(areas[0], buf);

        let button_style = if self.state == ConnectState::Connecting {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new("Connect Wallet")
            .style(button_style)
            .centered()
            .block(Block::default().borders(Borders::ALL).border_style(button_style));
        button.render(areas[2], buf);

        let status = match self.state {
            ConnectState::Idle => Line::from(vec![
                Span::styled("Enter: Connect", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("q: Quit", Style::default().fg(Color::DarkGray)),
            ]),
            ConnectState::Connecting => Line::from(Span::styled(
                "Connecting to wallet...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            ConnectState::Alert => {
                let msg = self.alert_message.as_deref().unwrap_or("Wallet unavailable");
                Line::from(Span::styled(msg, Style::default().fg(Color::Red)))
            }
        };
        let status_para = Paragraph::new(status).centered();
        status_para.render(areas[5], buf);
    }
}

impl Default for ConnectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ConnectScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
