use chrono::format::{Item, StrftimeItems};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use tracing::warn;

use crate::domain::entities::{GifEntry, GifList, SelectionSet, WalletSession, short_identity};
use crate::infrastructure::config::UiConfig;
use crate::presentation::widgets::{GifPane, SelectionPills, StatusBar, StatusLevel, TextInput};
use crate::{NAME, VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalFocus {
    Input,
    List,
    Pills,
}

impl PortalFocus {
    const fn next(self, pills_visible: bool) -> Self {
        if pills_visible {
            match self {
                Self::Input => Self::List,
                Self::List => Self::Pills,
                Self::Pills => Self::Input,
            }
        } else {
            match self {
                Self::Input => Self::List,
                Self::List | Self::Pills => Self::Input,
            }
        }
    }

    const fn previous(self, pills_visible: bool) -> Self {
        if pills_visible {
            match self {
                Self::Input => Self::Pills,
                Self::List => Self::Input,
                Self::Pills => Self::List,
            }
        } else {
            match self {
                Self::Input => Self::List,
                Self::List | Self::Pills => Self::Input,
            }
        }
    }
}

/// Feed loading state shown by the portal screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight and nothing has arrived yet.
    Loading,
    /// The feed is loaded.
    Ready(GifList),
    /// The feed account does not exist on chain yet.
    Uninitialized,
    /// The initial fetch failed.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalKeyResult {
    Consumed,
    Quit,
    SubmitGif { link: String },
    Refresh,
    InitializePortal,
}

/// Portal screen state.
pub struct PortalScreenState {
    session: WalletSession,
    load: LoadState,
    input: TextInput,
    selection: SelectionSet,
    focus: PortalFocus,
    list_cursor: usize,
    pill_cursor: usize,
    status: Option<(StatusLevel, String)>,
    last_refreshed: Option<String>,
    ui: UiConfig,
}

impl PortalScreenState {
    /// Creates screen state for a connected session.
    #[must_use]
    pub fn new(session: WalletSession, ui: UiConfig) -> Self {
        let mut input = TextInput::new(" GIF link ").placeholder("Enter gif link!");
        input.set_focused(true);

        Self {
            session,
            load: LoadState::Loading,
            input,
            selection: SelectionSet::new(),
            focus: PortalFocus::Input,
            list_cursor: 0,
            pill_cursor: 0,
            status: None,
            last_refreshed: None,
            ui,
        }
    }

    /// Returns the connected session.
    #[must_use]
    pub const fn session(&self) -> WalletSession {
        self.session
    }

    /// Returns current focus.
    #[must_use]
    pub const fn focus(&self) -> PortalFocus {
        self.focus
    }

    /// Returns the loading state.
    #[must_use]
    pub const fn load(&self) -> &LoadState {
        &self.load
    }

    /// Returns the viewer's selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the current status line, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&(StatusLevel, String)> {
        self.status.as_ref()
    }

    /// Replaces the feed with freshly fetched entries.
    pub fn set_entries(&mut self, list: GifList) {
        self.last_refreshed = Some(refresh_timestamp(&self.ui.timestamp_format));
        self.load = LoadState::Ready(list);
        self.clamp_cursors();
    }

    /// Marks the feed account as not created yet.
    pub fn set_uninitialized(&mut self) {
        self.load = LoadState::Uninitialized;
    }

    /// Records a failed fetch.
    ///
    /// An already loaded feed stays on screen; the failure only surfaces
    /// in the status line.
    pub fn set_load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        if matches!(self.load, LoadState::Ready(_)) {
            self.status = Some((StatusLevel::Error, message));
        } else {
            self.load = LoadState::Failed(message);
        }
    }

    /// Sets the status line.
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some((level, message.into()));
    }

    /// Clears the status line.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Handles key event, returns the action for the application.
    pub fn handle_key(&mut self, key: KeyEvent) -> PortalKeyResult {
        if matches!(self.load, LoadState::Uninitialized) {
            return Self::handle_uninitialized_key(key);
        }

        if let Some(result) = self.handle_global_key(key) {
            return result;
        }

        match self.focus {
            PortalFocus::Input => self.handle_input_key(key),
            PortalFocus::List => self.handle_list_key(key),
            PortalFocus::Pills => self.handle_pills_key(key),
        }
    }

    fn handle_uninitialized_key(key: KeyEvent) -> PortalKeyResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') => PortalKeyResult::InitializePortal,
            KeyCode::Char('q') | KeyCode::Esc => PortalKeyResult::Quit,
            KeyCode::Char('r') => PortalKeyResult::Refresh,
            _ => PortalKeyResult::Consumed,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<PortalKeyResult> {
        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(true);
                Some(PortalKeyResult::Consumed)
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                Some(PortalKeyResult::Consumed)
            }
            _ => None,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> PortalKeyResult {
        match key.code {
            KeyCode::Enter => {
                let link = self.input.value().to_string();
                self.input.clear();
                PortalKeyResult::SubmitGif { link }
            }
            KeyCode::Esc => {
                self.focus = PortalFocus::List;
                self.input.set_focused(false);
                PortalKeyResult::Consumed
            }
            KeyCode::Char(c) => {
                self.input.input_char(c);
                PortalKeyResult::Consumed
            }
            KeyCode::Backspace => {
                self.input.backspace();
                PortalKeyResult::Consumed
            }
            KeyCode::Delete => {
                self.input.delete();
                PortalKeyResult::Consumed
            }
            KeyCode::Left => {
                self.input.move_left();
                PortalKeyResult::Consumed
            }
            KeyCode::Right => {
                self.input.move_right();
                PortalKeyResult::Consumed
            }
            KeyCode::Home => {
                self.input.move_start();
                PortalKeyResult::Consumed
            }
            KeyCode::End => {
                self.input.move_end();
                PortalKeyResult::Consumed
            }
            _ => PortalKeyResult::Consumed,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> PortalKeyResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => PortalKeyResult::Quit,
            KeyCode::Char('r') => PortalKeyResult::Refresh,
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
                PortalKeyResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.entry_count();
                if count > 0 && self.list_cursor < count - 1 {
                    self.list_cursor += 1;
                }
                PortalKeyResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.pin_at_cursor();
                PortalKeyResult::Consumed
            }
            _ => PortalKeyResult::Consumed,
        }
    }

    fn handle_pills_key(&mut self, key: KeyEvent) -> PortalKeyResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => PortalKeyResult::Quit,
            KeyCode::Char('r') => PortalKeyResult::Refresh,
            KeyCode::Left | KeyCode::Char('h') => {
                self.pill_cursor = self.pill_cursor.saturating_sub(1);
                PortalKeyResult::Consumed
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let count = self.selection.len();
                if count > 0 && self.pill_cursor < count - 1 {
                    self.pill_cursor += 1;
                }
                PortalKeyResult::Consumed
            }
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                self.unpin_at_cursor();
                PortalKeyResult::Consumed
            }
            _ => PortalKeyResult::Consumed,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let pills_visible = !self.selection.is_empty();
        self.focus = if forward {
            self.focus.next(pills_visible)
        } else {
            self.focus.previous(pills_visible)
        };
        self.input.set_focused(self.focus == PortalFocus::Input);
    }

    fn pin_at_cursor(&mut self) {
        let Some(submitter) = self.visible_entry(self.list_cursor).map(GifEntry::submitter)
        else {
            return;
        };

        if self.selection.select(submitter) {
            self.status = Some((
                StatusLevel::Info,
                format!("Pinned {}", short_identity(&submitter)),
            ));
        }
    }

    fn unpin_at_cursor(&mut self) {
        let Some(identity) = self.selection.identities().get(self.pill_cursor).copied() else {
            return;
        };

        self.selection.remove(&identity);
        self.clamp_cursors();
        if self.selection.is_empty() {
            self.focus = PortalFocus::Input;
            self.input.set_focused(true);
        }
    }

    /// Returns the entry at a cursor position in grouped display order.
    fn visible_entry(&self, index: usize) -> Option<&GifEntry> {
        let LoadState::Ready(ref list) = self.load else {
            return None;
        };

        let partition = self.selection.partition(list.entries());
        let selected_len = partition.selected().len();
        if index < selected_len {
            partition.selected().get(index).copied()
        } else {
            partition.others().get(index - selected_len).copied()
        }
    }

    fn entry_count(&self) -> usize {
        match &self.load {
            LoadState::Ready(list) => list.len(),
            _ => 0,
        }
    }

    fn clamp_cursors(&mut self) {
        let entries = self.entry_count();
        if entries == 0 {
            self.list_cursor = 0;
        } else if self.list_cursor >= entries {
            self.list_cursor = entries - 1;
        }

        let pills = self.selection.len();
        if pills == 0 {
            self.pill_cursor = 0;
        } else if self.pill_cursor >= pills {
            self.pill_cursor = pills - 1;
        }
    }
}

/// Portal screen renderer.
pub struct PortalScreen;

impl PortalScreen {
    /// Creates the renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PortalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for PortalScreen {
    type State = PortalScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // An uninitialized feed shows the creation prompt alone, never the
        // submission form.
        let form_visible = !matches!(state.load, LoadState::Uninitialized);
        let pills_visible = form_visible && !state.selection.is_empty();

        let mut constraints = vec![Constraint::Length(1)];
        if form_visible {
            constraints.push(Constraint::Length(3));
        }
        if pills_visible {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Fill(1));
        constraints.push(Constraint::Length(1));
        if state.ui.show_footer_help {
            constraints.push(Constraint::Length(1));
        }

        let areas = Layout::vertical(constraints).split(area);
        let mut next = 0;

        render_header(state, areas[next], buf);
        next += 1;

        if form_visible {
            (&state.input).render(areas[next], buf);
            next += 1;
        }

        if pills_visible {
            SelectionPills::new(&state.selection)
                .cursor(state.pill_cursor)
                .focused(state.focus == PortalFocus::Pills)
                .render(areas[next], buf);
            next += 1;
        }

        render_feed(state, areas[next], buf);
        next += 1;

        render_status(state, areas[next], buf);
        next += 1;

        if state.ui.show_footer_help {
            render_footer(state, areas[next], buf);
        }
    }
}

fn render_header(state: &PortalScreenState, area: Rect, buf: &mut Buffer) {
    let left = format!("{NAME} v{VERSION}");
    let right = format!("Wallet: {}", short_identity(&state.session.identity()));

    let width = area.width as usize;
    let padding = width.saturating_sub(left.len() + right.len());

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::Green)),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_feed(state: &PortalScreenState, area: Rect, buf: &mut Buffer) {
    match &state.load {
        LoadState::Ready(list) => {
            GifPane::new(list, &state.selection)
                .cursor(state.list_cursor)
                .focused(state.focus == PortalFocus::List)
                .render(area, buf);
        }
        LoadState::Loading => {
            render_feed_notice(
                area,
                buf,
                vec![Line::from(Span::styled(
                    "Loading GIFs...",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))],
            );
        }
        LoadState::Uninitialized => {
            render_feed_notice(
                area,
                buf,
                vec![
                    Line::from(Span::styled(
                        "The portal account has not been created yet.",
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press Enter for one-time initialization.",
                        Style::default().fg(Color::White),
                    )),
                ],
            );
        }
        LoadState::Failed(message) => {
            render_feed_notice(
                area,
                buf,
                vec![
                    Line::from(Span::styled(
                        format!("Failed to load GIFs: {message}"),
                        Style::default().fg(Color::Red),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press r to retry.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ],
            );
        }
    }
}

fn render_feed_notice(area: Rect, buf: &mut Buffer, lines: Vec<Line>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(" GIF List ");
    let inner = block.inner(area);
    block.render(area, buf);

    #[allow(clippy::cast_possible_truncation)]
    let height = lines.len() as u16;
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ]);
    let [_, center, _] = vertical.areas(inner);

    Paragraph::new(lines).centered().render(center, buf);
}

fn render_status(state: &PortalScreenState, area: Rect, buf: &mut Buffer) {
    let mut bar = StatusBar::new();
    if let Some((level, message)) = &state.status {
        bar = bar.left(message.clone()).level(*level);
    }
    if let Some(refreshed) = &state.last_refreshed {
        bar = bar.right(format!("updated {refreshed}"));
    }
    (&bar).render(area, buf);
}

fn render_footer(state: &PortalScreenState, area: Rect, buf: &mut Buffer) {
    let hints = if matches!(state.load, LoadState::Uninitialized) {
        "Enter: Create account | q: Quit"
    } else {
        match state.focus {
            PortalFocus::Input => "Enter: Submit | Tab: Focus list | Ctrl+C: Quit",
            PortalFocus::List => "Enter: Pin submitter | j/k: Move | r: Refresh | Tab: Next | q: Quit",
            PortalFocus::Pills => "x: Unpin | h/l: Move | Tab: Next | q: Quit",
        }
    };

    Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}

// A bad configured format would make `DelayedFormat` panic on display.
fn refresh_timestamp(format: &str) -> String {
    let now = chrono::Local::now();
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        warn!(format = %format, "Invalid timestamp_format in config, using default");
        return now.format("%H:%M:%S").to_string();
    }
    now.format(format).to_string()
}
