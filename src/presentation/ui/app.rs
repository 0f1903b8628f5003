//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::use_cases::{
    ConnectOutcome, ConnectWalletUseCase, InitializePortalUseCase, LoadGifListUseCase,
    SubmitGifUseCase, SubmitOutcome,
};
use crate::domain::entities::{GifList, WalletSession};
use crate::domain::ports::{FetchOutcome, PortalPort, WalletPort};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{EventHandler, EventResult, OperationTask};
use crate::presentation::ui::{
    ConnectAction, ConnectScreen, PortalKeyResult, PortalScreen, PortalScreenState,
};
use crate::presentation::widgets::StatusLevel;

const MISSING_PROVIDER_ALERT: &str =
    "Wallet keypair not found! Configure wallet.keypair_path to connect.";

#[derive(Debug)]
enum Action {
    Connected(WalletSession),
    ConnectMissingProvider { alert: bool },
    ConnectDeclined,
    ConnectFailed(String),
    GifsLoaded(GifList),
    PortalUninitialized,
    LoadFailed(String),
    GifSubmitted { link: String },
    SubmitIgnoredEmpty,
    SubmitFailed(String),
    Initialized,
    InitializeFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Connect,
    Portal,
    Exiting,
}

enum CurrentScreen {
    Connect(ConnectScreen),
    Portal(Box<PortalScreenState>),
}

/// Top-level application driving the screens and portal operations.
pub struct App {
    state: AppState,
    screen: CurrentScreen,
    connect_wallet: Arc<ConnectWalletUseCase>,
    load_gif_list: Arc<LoadGifListUseCase>,
    submit_gif: Arc<SubmitGifUseCase>,
    initialize_portal: Arc<InitializePortalUseCase>,
    ui: UiConfig,
    auto_connect: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    in_flight: Vec<OperationTask>,
}

impl App {
    /// Creates the application over its ports.
    #[must_use]
    pub fn new(
        wallet: Arc<dyn WalletPort>,
        portal: Arc<dyn PortalPort>,
        ui: UiConfig,
        auto_connect: bool,
    ) -> Self {
        let connect_wallet = Arc::new(ConnectWalletUseCase::new(wallet));
        let load_gif_list = Arc::new(LoadGifListUseCase::new(portal.clone()));
        let submit_gif = Arc::new(SubmitGifUseCase::new(portal.clone()));
        let initialize_portal = Arc::new(InitializePortalUseCase::new(portal));
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Connect,
            screen: CurrentScreen::Connect(ConnectScreen::new()),
            connect_wallet,
            load_gif_list,
            submit_gif,
            initialize_portal,
            ui,
            auto_connect,
            action_tx,
            action_rx,
            in_flight: Vec::new(),
        }
    }

    /// Runs the application until exit.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.auto_connect {
            debug!("Attempting eager wallet connect");
            self.spawn_connect(true);
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    self.in_flight.retain(|task| !task.is_finished());
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Connect(screen) => {
                frame.render_widget(&*screen, frame.area());
            }
            CurrentScreen::Portal(state) => {
                frame.render_stateful_widget(PortalScreen::new(), frame.area(), state.as_mut());
            }
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }
        if self.state == AppState::Connect && EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Connect(screen) => {
                if screen.handle_key(key) == ConnectAction::Connect {
                    self.spawn_connect(false);
                }
                EventResult::Continue
            }
            CurrentScreen::Portal(state) => {
                let result = state.handle_key(key);
                self.handle_portal_result(result)
            }
        }
    }

    fn handle_portal_result(&mut self, result: PortalKeyResult) -> EventResult {
        match result {
            PortalKeyResult::Quit => return EventResult::Exit,
            PortalKeyResult::SubmitGif { link } => self.spawn_submit(link),
            PortalKeyResult::Refresh => {
                self.set_portal_status(StatusLevel::Info, "Refreshing...");
                self.spawn_fetch();
            }
            PortalKeyResult::InitializePortal => self.spawn_initialize(),
            PortalKeyResult::Consumed => {}
        }

        EventResult::Continue
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Connected(session) => {
                info!(wallet = %session.identity(), "Wallet connected");
                self.state = AppState::Portal;
                self.screen = CurrentScreen::Portal(Box::new(PortalScreenState::new(
                    session,
                    self.ui.clone(),
                )));
                self.spawn_fetch();
            }
            Action::ConnectMissingProvider { alert } => {
                warn!("No wallet provider available");
                if let CurrentScreen::Connect(ref mut screen) = self.screen {
                    if alert {
                        screen.set_alert(MISSING_PROVIDER_ALERT);
                    } else {
                        screen.reset();
                    }
                }
            }
            Action::ConnectDeclined => {
                debug!("Eager wallet connect declined");
                if let CurrentScreen::Connect(ref mut screen) = self.screen {
                    screen.reset();
                }
            }
            Action::ConnectFailed(message) => {
                error!(error = %message, "Wallet connection failed");
                if let CurrentScreen::Connect(ref mut screen) = self.screen {
                    screen.set_alert(message);
                }
            }
            Action::GifsLoaded(list) => {
                debug!(count = list.len(), "Gif list loaded");
                if let CurrentScreen::Portal(ref mut state) = self.screen {
                    state.clear_status();
                    state.set_entries(list);
                }
            }
            Action::PortalUninitialized => {
                if let CurrentScreen::Portal(ref mut state) = self.screen {
                    state.clear_status();
                    state.set_uninitialized();
                }
            }
            Action::LoadFailed(message) => {
                warn!(error = %message, "Failed to load gif list");
                if let CurrentScreen::Portal(ref mut state) = self.screen {
                    state.set_load_failed(message);
                }
            }
            Action::GifSubmitted { link } => {
                info!(link = %link, "Gif link recorded");
                self.set_portal_status(StatusLevel::Success, "GIF sent to the portal");
                self.spawn_fetch();
            }
            Action::SubmitIgnoredEmpty => {
                self.set_portal_status(StatusLevel::Warning, "Empty link. Try again.");
            }
            Action::SubmitFailed(message) => {
                error!(error = %message, "Gif submission failed");
                self.set_portal_status(StatusLevel::Error, format!("Submit failed: {message}"));
            }
            Action::Initialized => {
                info!("Portal account created");
                self.set_portal_status(StatusLevel::Success, "Portal account created");
                self.spawn_fetch();
            }
            Action::InitializeFailed(message) => {
                error!(error = %message, "Portal initialization failed");
                self.set_portal_status(
                    StatusLevel::Error,
                    format!("Initialization failed: {message}"),
                );
            }
        }
    }

    fn spawn_connect(&mut self, only_if_trusted: bool) {
        if let CurrentScreen::Connect(ref mut screen) = self.screen {
            screen.set_connecting();
        }

        let connect = self.connect_wallet.clone();
        let tx = self.action_tx.clone();
        self.in_flight.push(OperationTask::spawn(async move {
            let action = match connect.execute(only_if_trusted).await {
                Ok(ConnectOutcome::Connected(session)) => Action::Connected(session),
                Ok(ConnectOutcome::ProviderMissing) => Action::ConnectMissingProvider {
                    alert: only_if_trusted,
                },
                Ok(ConnectOutcome::Declined) => Action::ConnectDeclined,
                Err(e) => Action::ConnectFailed(e.to_string()),
            };
            let _ = tx.send(action);
        }));
    }

    fn spawn_fetch(&mut self) {
        let load = self.load_gif_list.clone();
        let tx = self.action_tx.clone();
        self.in_flight.push(OperationTask::spawn(async move {
            let action = match load.execute().await {
                Ok(FetchOutcome::Entries(list)) => Action::GifsLoaded(list),
                Ok(FetchOutcome::NotInitialized) => Action::PortalUninitialized,
                Err(e) => Action::LoadFailed(e.to_string()),
            };
            let _ = tx.send(action);
        }));
    }

    fn spawn_submit(&mut self, link: String) {
        let Some(session) = self.current_session() else {
            return;
        };
        self.set_portal_status(StatusLevel::Info, "Sending GIF...");

        let submit = self.submit_gif.clone();
        let tx = self.action_tx.clone();
        self.in_flight.push(OperationTask::spawn(async move {
            let action = match submit.execute(session, &link).await {
                Ok(SubmitOutcome::Submitted) => Action::GifSubmitted { link },
                Ok(SubmitOutcome::EmptyLink) => Action::SubmitIgnoredEmpty,
                Err(e) => Action::SubmitFailed(e.to_string()),
            };
            let _ = tx.send(action);
        }));
    }

    fn spawn_initialize(&mut self) {
        let Some(session) = self.current_session() else {
            return;
        };
        self.set_portal_status(StatusLevel::Info, "Creating portal account...");

        let initialize = self.initialize_portal.clone();
        let tx = self.action_tx.clone();
        self.in_flight.push(OperationTask::spawn(async move {
            let action = match initialize.execute(session).await {
                Ok(()) => Action::Initialized,
                Err(e) => Action::InitializeFailed(e.to_string()),
            };
            let _ = tx.send(action);
        }));
    }

    fn current_session(&self) -> Option<WalletSession> {
        match &self.screen {
            CurrentScreen::Portal(state) => Some(state.session()),
            CurrentScreen::Connect(_) => None,
        }
    }

    fn set_portal_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        if let CurrentScreen::Portal(ref mut state) = self.screen {
            state.set_status(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockPortalPort, MockWalletPort};
    use crossterm::event::{KeyCode, KeyModifiers};
    use solana_sdk::pubkey::Pubkey;

    fn test_app() -> App {
        App::new(
            Arc::new(MockWalletPort::trusted()),
            Arc::new(MockPortalPort::uninitialized()),
            UiConfig::default(),
            true,
        )
    }

    #[tokio::test]
    async fn test_connected_action_enters_portal() {
        let mut app = test_app();
        let session = WalletSession::new(Pubkey::new_unique());

        app.handle_action(Action::Connected(session));

        assert_eq!(app.state, AppState::Portal);
        assert!(matches!(app.screen, CurrentScreen::Portal(_)));
        assert!(!app.in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_force_quit_works_on_any_screen() {
        let mut app = test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);

        app.handle_action(Action::Connected(WalletSession::new(Pubkey::new_unique())));
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_quit_keys_exit_from_connect_screen() {
        let mut app = test_app();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);

        assert_eq!(app.handle_key(q), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_submitted_gif_triggers_a_refetch() {
        let mut app = test_app();
        app.handle_action(Action::Connected(WalletSession::new(Pubkey::new_unique())));
        let before = app.in_flight.len();

        app.handle_action(Action::GifSubmitted {
            link: "https://a.gif".to_string(),
        });

        assert_eq!(app.in_flight.len(), before + 1);
        let CurrentScreen::Portal(state) = &app.screen else {
            panic!("expected portal screen");
        };
        assert!(matches!(state.status(), Some((StatusLevel::Success, _))));
    }

    #[tokio::test]
    async fn test_uninitialized_fetch_routes_to_creation_prompt() {
        let mut app = test_app();
        app.handle_action(Action::Connected(WalletSession::new(Pubkey::new_unique())));

        app.handle_action(Action::PortalUninitialized);

        let CurrentScreen::Portal(state) = &app.screen else {
            panic!("expected portal screen");
        };
        assert!(matches!(
            state.load(),
            crate::presentation::ui::LoadState::Uninitialized
        ));
    }

    #[tokio::test]
    async fn test_missing_provider_alert_only_on_startup_check() {
        let mut app = test_app();

        app.handle_action(Action::ConnectMissingProvider { alert: true });
        let CurrentScreen::Connect(screen) = &app.screen else {
            panic!("expected connect screen");
        };
        assert_eq!(
            screen.state(),
            crate::presentation::ui::ConnectState::Alert
        );

        app.handle_action(Action::ConnectMissingProvider { alert: false });
        let CurrentScreen::Connect(screen) = &app.screen else {
            panic!("expected connect screen");
        };
        assert_eq!(
            screen.state(),
            crate::presentation::ui::ConnectState::Idle
        );
    }
}
