//! # Application Controller
//!
//! Owns the view model and connects it to the outside world: key events go
//! through the command registry, fetch requests go to the dispatcher, fetch
//! completions come back over its channel, and queued view events drive the
//! renderer. All view-model mutation happens on the controller's task.

use crate::config::AppConfig;
use crate::dex::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::{SimpleEventBus, ViewEvent},
    io::{EventStream, RenderStream},
    services::{CollectionRequest, FetchDispatcher, FetchMessage, PokeApi},
    view_models::{AppViewModel, LoadState},
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream, A: PokeApi> {
    view_model: AppViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    dispatcher: FetchDispatcher<A>,
    fetch_results: mpsc::UnboundedReceiver<FetchMessage>,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream, A: PokeApi> AppController<ES, RS, A> {
    /// Create a controller with injected I/O streams and API
    pub fn with_io_streams(
        config: &AppConfig,
        api: A,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = AppViewModel::new(config.page_size, config.page_increment);
        view_model.set_event_bus(Box::new(SimpleEventBus::new()));

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        let (dispatcher, fetch_results) = FetchDispatcher::new(api, config.detail_concurrency);
        tracing::debug!(
            "Controller created: page size {}, detail concurrency {}",
            config.page_size,
            config.detail_concurrency
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            dispatcher,
            fetch_results,
            should_quit: false,
        })
    }

    /// Open the login gate without the form, e.g. from `--user`
    ///
    /// Must be called from within a tokio runtime since it may start the
    /// first collection fetch.
    pub fn sign_in(&mut self, user: &str) {
        if let Some(request) = self.view_model.login_as(user) {
            self.dispatch_collection(request);
        }
    }

    /// Drive the screen until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_model.collect_pending_view_events();
        self.view_renderer.render_full(&self.view_model)?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.handle_next_input(INPUT_POLL_INTERVAL)?;
            self.drain_fetch_messages()?;
            // Let fetch tasks progress on a current-thread runtime
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Wait up to `timeout` for one terminal event and handle it
    ///
    /// Returns whether an event was read.
    pub fn handle_next_input(&mut self, timeout: Duration) -> Result<bool> {
        if !self.event_stream.poll(timeout)? {
            return Ok(false);
        }

        match self.event_stream.read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)?;
            }
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
                self.render_pending()?;
            }
            _ => {}
        }
        Ok(true)
    }

    /// Process a single key event and render the result
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;
        if events.is_empty() {
            return Ok(());
        }

        tracing::debug!("Command events generated: {:?}", events);
        for event in events {
            self.apply_command_event(event);
        }

        if !self.should_quit {
            self.render_pending()?;
        }
        Ok(())
    }

    /// Route one `CommandEvent` to the view model and the dispatcher
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
            CommandEvent::LoginInputRequested { ch } => {
                self.view_model.append_login_char(ch);
            }
            CommandEvent::LoginBackspaceRequested => {
                self.view_model.backspace_login();
            }
            CommandEvent::LoginSubmitRequested => {
                if let Some(request) = self.view_model.submit_login() {
                    self.dispatch_collection(request);
                }
            }
            CommandEvent::LogoutRequested => {
                self.view_model.logout();
            }
            CommandEvent::FilterInputRequested { ch } => {
                self.view_model.append_filter_char(ch);
            }
            CommandEvent::FilterBackspaceRequested => {
                self.view_model.backspace_filter();
            }
            CommandEvent::FilterClearRequested => {
                self.view_model.clear_filter();
            }
            CommandEvent::SelectionMoveRequested { delta } => {
                self.view_model.move_selection(delta);
            }
            CommandEvent::FavoriteToggleRequested => {
                self.view_model.toggle_selected_favorite();
            }
            CommandEvent::FavoritesViewToggleRequested => {
                self.view_model.toggle_favorites_only();
            }
            CommandEvent::MoreRequested => {
                let request = self.view_model.request_more();
                self.dispatch_collection(request);
            }
            CommandEvent::RetryRequested => {
                if let Some(request) = self.view_model.retry() {
                    self.dispatch_collection(request);
                }
            }
        }
    }

    fn dispatch_collection(&mut self, request: CollectionRequest) {
        self.dispatcher.dispatch_collection(request);
    }

    // =================================================================
    // Fetch completions
    // =================================================================

    /// Apply every completion already waiting in the channel
    ///
    /// Returns how many were applied.
    pub fn drain_fetch_messages(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Ok(message) = self.fetch_results.try_recv() {
            self.apply_fetch_message(message);
            applied += 1;
        }
        if applied > 0 {
            self.render_pending()?;
        }
        Ok(applied)
    }

    /// Apply completions until no fetch is in flight
    pub async fn settle(&mut self) -> Result<()> {
        loop {
            // Tasks send before finishing, so once idle only queued messages remain
            let idle = self.dispatcher.in_flight() == 0;
            match tokio::time::timeout(SETTLE_POLL_INTERVAL, self.fetch_results.recv()).await {
                Ok(Some(message)) => self.apply_fetch_message(message),
                Ok(None) => break,
                Err(_) if idle => break,
                Err(_) => {}
            }
        }
        self.render_pending()
    }

    fn apply_fetch_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Collection { tag, result } => {
                let current = matches!(
                    self.view_model.listing().load_state(),
                    LoadState::Loading { request } if *request == tag
                );
                let succeeded = result.is_ok();
                let details = self.view_model.apply_collection(tag, result);

                // A fresh collection tears down the old items and their fetches
                if current && succeeded {
                    self.dispatcher.replace_details(details);
                }
            }
            FetchMessage::Detail { item_id, result } => {
                self.view_model.apply_detail(item_id, result);
            }
        }
    }

    // =================================================================
    // Rendering
    // =================================================================

    fn render_pending(&mut self) -> Result<()> {
        let events = self.view_model.collect_pending_view_events();
        match ViewEvent::coalesce(&events) {
            Some(event) => self
                .view_renderer
                .handle_view_event(&event, &self.view_model),
            None => Ok(()),
        }
    }

    /// Current presentation state
    pub fn view_model(&self) -> &AppViewModel {
        &self.view_model
    }

    /// Mutable presentation state, e.g. to attach an event bus
    pub fn view_model_mut(&mut self) -> &mut AppViewModel {
        &mut self.view_model
    }

    /// Number of fetches still running
    pub fn in_flight_fetches(&self) -> usize {
        self.dispatcher.in_flight()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
