//! Application state and logic for the TUI.
//!
//! This module contains the core application state and the main run loop.
//! The sidebar hosts the search bar from chatsearch-core; this module plays
//! its parent, owning the search state and running searches.
//!
//! ## Module Structure
//! - `mod.rs`: App struct definition, initialization, and rendering
//! - `search_state.rs`: parent search state and the bar's callbacks
//! - `action_handler.rs`: AppAction event processing
//! - `input_handler.rs`: Keyboard and mouse event processing

mod action_handler;
mod input_handler;
mod search_state;

use search_state::SearchState;

use std::io::Stdout;
use std::sync::Arc;

use chatsearch_core::i18n::Messages;
use chatsearch_core::search_bar::SearchBar;
use chatsearch_core::storage::config::Config;
use chatsearch_core::suggestion::default_providers;
use ratatui::{
    Frame,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::components::{
    ChannelView, Component, HelpOverlay, HitRegions, LoadingSpinner, RESULTS_REGION,
    ResultsPanel, SearchBarView, StatusBar, SuggestionList,
};
use crate::error::TuiResult;
use crate::event::{Event, EventHandler};
use crate::layout::{main::STATUS_BAR_HEIGHT, popup::MAX_SUGGESTION_HEIGHT, sidebar_split};
use crate::store::MessageStore;

/// Upper bound on render/drain rounds per loop turn.
const MAX_SETTLE_ROUNDS: usize = 8;

/// The main application state.
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// The sidebar search control
    pub(crate) search_bar: SearchBar,
    /// Everything the search bar is controlled by
    pub(crate) search: SearchState,
    /// Messages to search (Arc-wrapped for async sharing)
    pub(crate) store: Arc<MessageStore>,
    /// Results list (sidebar)
    pub(crate) results: ResultsPanel,
    /// Conversation of the selected result
    pub(crate) channel: ChannelView,
    /// Status bar (bottom)
    pub(crate) status_bar: StatusBar,
    pub(crate) spinner: LoadingSpinner,
    /// Mouse targets from the last draw
    pub(crate) regions: HitRegions,
    /// First visible suggestion in the last drawn popup
    pub(crate) suggestion_offset: usize,
    /// Action sender for async operations
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    /// Action receiver for processing
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    /// Whether to show help overlay
    pub(crate) show_help: bool,
    tick_rate_ms: u64,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: &Config, store: MessageStore, side_bar_right: bool) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let providers = default_providers(store.users(), store.channels());
        let search = SearchState::new(providers, side_bar_right, action_tx.clone())
            .with_keep_focussed(config.keep_focussed);

        let mut status_bar = StatusBar::new();
        status_bar.set_message(format!("{} messages", store.len()));

        Self {
            should_quit: false,
            search_bar: SearchBar::new(Messages::from(config.messages.clone())),
            search,
            store: Arc::new(store),
            results: ResultsPanel::new(),
            channel: ChannelView::new(),
            status_bar,
            spinner: LoadingSpinner::default(),
            regions: HitRegions::default(),
            suggestion_offset: 0,
            action_tx,
            action_rx,
            show_help: false,
            tick_rate_ms: config.tick_rate_ms,
        }
    }

    /// Run the main application loop (async version).
    pub async fn run_async(
        &mut self,
        terminal: &mut ratatui::Terminal<CrosstermBackend<Stdout>>,
    ) -> TuiResult<()> {
        let event_handler = EventHandler::new(self.tick_rate_ms);

        while !self.should_quit {
            // Process any pending actions
            self.process_actions();

            // Bring the search bar up to date and apply deferred focus
            self.settle_search_bar();

            // Draw the UI
            terminal.draw(|frame| self.draw(frame))?;

            // Handle events
            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize => {} // Terminal will redraw automatically
                Event::Tick => self.on_tick(),
            }
        }

        Ok(())
    }

    /// Advance the spinner while a search is in flight.
    fn on_tick(&mut self) {
        if self.results.state().is_loading() {
            self.spinner.tick();
        }
    }

    /// Process pending actions from the action queue.
    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Render the search bar until the parent state stops changing, draining
    /// its deferred focus queue between renders.
    ///
    /// Callbacks fired during a render (autofocus on mount) are re-rendered
    /// before any deferred request runs.
    pub(crate) fn settle_search_bar(&mut self) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            let mut snapshot = self.render_key();
            for _ in 0..MAX_SETTLE_ROUNDS {
                self.search_bar.render(self.search.props(), &mut self.search);
                let next = self.render_key();
                if next == snapshot {
                    break;
                }
                snapshot = next;
            }

            if self.search_bar.run_deferred(&mut self.search) == 0 {
                break;
            }
        }
        self.status_bar
            .set_searching(self.search_bar.is_input_focused());
    }

    /// State that feeds the search bar's focus effect.
    fn render_key(&self) -> (String, bool, bool) {
        (
            self.search.terms.clone(),
            self.search.is_focussed,
            self.search.keep_focussed,
        )
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the UI.
    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();
        self.regions.clear();

        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(size);
        let (sidebar, content) = sidebar_split(body, self.search.props().is_side_bar_right);

        let [search_area, results_area] = Layout::vertical([
            Constraint::Length(SearchBarView::HEIGHT),
            Constraint::Min(0),
        ])
        .areas(sidebar);

        SearchBarView::render(
            frame,
            search_area,
            &self.search_bar,
            &self.spinner,
            &mut self.regions,
        );

        let results_focused = !self.search_bar.is_input_focused();
        self.results.draw(frame, results_area, results_focused);
        self.regions.register(RESULTS_REGION, results_area);

        self.channel.draw(frame, content, false);
        self.status_bar.draw(frame, status, false);

        self.draw_suggestions(frame, results_area);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
    }

    /// Suggestion popup, overlaid on the top of the results list.
    fn draw_suggestions(&mut self, frame: &mut Frame, below: Rect) {
        self.suggestion_offset = 0;
        let Some(input) = self.search_bar.input() else {
            return;
        };
        let Some(results) = input.visible_suggestions() else {
            return;
        };

        let height = SuggestionList::height(results)
            .min(MAX_SUGGESTION_HEIGHT)
            .min(below.height);
        if height < 3 {
            return;
        }
        let area = Rect { height, ..below };

        self.suggestion_offset = SuggestionList::render(
            frame,
            area,
            results,
            self.search.highlighted,
            input.options().render_dividers,
        );
        self.regions.register(self.search_bar.ids().help_popup, area);
    }
}
