use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;
use compass_core::{ChatWidget, FilterAxis, PendingReply, RoadmapBrowser};

use crate::animation::CardAnimations;
use crate::tui::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Roadmaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which part of the roadmaps screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapFocus {
    Filters,
    Cards,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub status: Option<String>,

    // Chat state
    pub chat: ChatWidget,
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of transcript area for scroll calculations
    pub chat_lines: u16,  // Rendered transcript height, wrapped

    // Roadmap state
    pub roadmaps: RoadmapBrowser,
    pub roadmap_focus: RoadmapFocus,
    pub axis_idx: usize,
    pub card_state: ListState,
    pub card_animations: CardAnimations,
    pub modal_scroll: u16,
    pub modal_height: u16, // Inner height of the preview dialog
    pub modal_lines: u16,  // Rendered preview content height, wrapped

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Panel areas for mouse hit-testing (updated during render)
    pub transcript_area: Option<Rect>,
    pub questions_area: Option<Rect>,
    pub cards_area: Option<Rect>,
    pub modal_area: Option<Rect>,

    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(chat: ChatWidget, roadmaps: RoadmapBrowser, events: UnboundedSender<AppEvent>) -> Self {
        let mut card_state = ListState::default();
        if !roadmaps.visible().is_empty() {
            card_state.select(Some(0));
        }

        Self {
            should_quit: false,
            screen: Screen::Chat,
            input_mode: InputMode::Normal,
            status: None,

            chat,
            chat_scroll: 0,
            chat_height: 0,
            chat_lines: 0,

            roadmaps,
            roadmap_focus: RoadmapFocus::Cards,
            axis_idx: 0,
            card_state,
            card_animations: CardAnimations::new(),
            modal_scroll: 0,
            modal_height: 0,
            modal_lines: 0,

            animation_frame: 0,

            transcript_area: None,
            questions_area: None,
            cards_area: None,
            modal_area: None,

            events,
        }
    }

    /// Run the reply delay in the background and post the reply back to the
    /// event loop when it is ready
    pub fn schedule_reply(&self, pending: PendingReply) {
        tracing::info!(
            delay_ms = pending.delay.as_millis() as u64,
            topic = compass_core::topic(&pending.prompt).as_str(),
            "advisor reply scheduled"
        );
        let tx = self.events.clone();
        tokio::spawn(async move {
            let reply = pending.resolve().await;
            // The receiver is gone once the app has quit
            let _ = tx.send(AppEvent::Reply(reply));
        });
    }

    pub fn submit_message(&mut self) {
        if let Some(pending) = self.chat.submit() {
            self.schedule_reply(pending);
        }
    }

    pub fn ask_quick_question(&mut self, index: usize) {
        if let Some(pending) = self.chat.ask_quick_question(index) {
            self.schedule_reply(pending);
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.chat.is_typing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
        if self.card_animations.is_animating() {
            self.card_animations.tick();
        }
    }

    // Chat transcript scrolling
    pub fn chat_scroll_down(&mut self, lines: u16) {
        let max_scroll = self.chat_lines.saturating_sub(self.chat_height);
        self.chat_scroll = (self.chat_scroll + lines).min(max_scroll);
    }

    pub fn chat_scroll_up(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_sub(lines);
    }

    pub fn chat_scroll_to_bottom(&mut self) {
        self.chat_scroll = self.chat_lines.saturating_sub(self.chat_height);
    }

    // Preview dialog scrolling
    pub fn modal_scroll_down(&mut self, lines: u16) {
        let max_scroll = self.modal_lines.saturating_sub(self.modal_height);
        self.modal_scroll = (self.modal_scroll + lines).min(max_scroll);
    }

    pub fn modal_scroll_up(&mut self, lines: u16) {
        self.modal_scroll = self.modal_scroll.saturating_sub(lines);
    }

    // Roadmap filters
    pub fn focused_axis(&self) -> FilterAxis {
        let axes = FilterAxis::all();
        axes[self.axis_idx.min(axes.len() - 1)]
    }

    pub fn axis_down(&mut self) {
        if self.axis_idx + 1 < FilterAxis::all().len() {
            self.axis_idx += 1;
        } else {
            self.roadmap_focus = RoadmapFocus::Cards;
        }
    }

    pub fn axis_up(&mut self) {
        self.axis_idx = self.axis_idx.saturating_sub(1);
    }

    /// Step the focused filter's active option and refresh the card list
    pub fn cycle_focused_filter(&mut self, step: isize) {
        let axis = self.focused_axis();
        if self.roadmaps.cycle_filter(axis, step) {
            self.after_filter_change();
        }
    }

    pub fn reset_focused_filter(&mut self) {
        let axis = self.focused_axis();
        if self.roadmaps.set_filter(axis, "all") {
            self.after_filter_change();
        }
    }

    fn after_filter_change(&mut self) {
        let visible: Vec<String> = self.roadmaps.visible().iter().map(|r| r.id.clone()).collect();
        self.card_animations.replay(visible.iter().map(String::as_str));
        self.card_state = ListState::default();
        if !visible.is_empty() {
            self.card_state.select(Some(0));
        }
    }

    // Card list navigation
    pub fn card_down(&mut self) {
        let len = self.roadmaps.visible().len();
        if len > 0 {
            let i = self.card_state.selected().unwrap_or(0);
            self.card_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn card_up(&mut self) {
        match self.card_state.selected() {
            Some(0) | None => {
                self.roadmap_focus = RoadmapFocus::Filters;
                self.axis_idx = FilterAxis::all().len() - 1;
            }
            Some(i) => self.card_state.select(Some(i - 1)),
        }
    }

    pub fn selected_card_id(&self) -> Option<String> {
        let i = self.card_state.selected()?;
        self.roadmaps.visible().get(i).map(|r| r.id.clone())
    }

    pub fn open_selected_preview(&mut self) {
        if let Some(id) = self.selected_card_id() {
            self.open_preview(&id);
        }
    }

    pub fn open_preview(&mut self, id: &str) {
        if self.roadmaps.show_preview(id) {
            self.modal_scroll = 0;
        }
    }

    pub fn close_modal(&mut self) {
        self.roadmaps.close_modal();
        self.modal_area = None;
    }

    /// Follow the open roadmap's "start" link
    pub fn start_roadmap(&mut self) {
        if let Some(preview) = self.roadmaps.preview() {
            tracing::info!(roadmap = %preview.roadmap.id, target = %preview.start_target, "roadmap started");
            self.status = Some(format!("Starting {}: {}", preview.roadmap.title, preview.start_target));
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.status = None;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, REPLY_DELAY};
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_submitted_message_gets_reply_after_delay() {
        let (mut app, mut rx) = app();
        app.chat.set_input("What salary can I expect?");
        app.submit_message();
        assert!(app.chat.is_typing());

        let start = tokio::time::Instant::now();
        let event = rx.recv().await.unwrap();
        assert!(start.elapsed() >= REPLY_DELAY);
        match event {
            AppEvent::Reply(text) => assert_eq!(text, compass_core::responses::SALARY),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_message_schedules_nothing() {
        let (mut app, mut rx) = app();
        app.chat.set_input("   ");
        app.submit_message();
        assert!(app.chat.messages().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_filter_change_resets_selection_and_replays_animation() {
        let (mut app, _rx) = app();
        app.card_state.select(Some(4));
        app.roadmap_focus = RoadmapFocus::Filters;
        app.axis_idx = 2; // category

        app.cycle_focused_filter(1); // development
        assert_eq!(app.roadmaps.filters().value(FilterAxis::Category), "development");
        assert_eq!(app.card_state.selected(), Some(0));
        assert_eq!(app.selected_card_id().as_deref(), Some("frontend"));
        assert!(app.card_animations.remaining("backend") > 0);

        app.reset_focused_filter();
        assert_eq!(app.roadmaps.visible().len(), 8);
    }

    #[test]
    fn test_empty_filter_result_clears_selection() {
        let (mut app, _rx) = app();
        app.roadmaps.set_filter(FilterAxis::Category, "security");
        app.axis_idx = 0;
        app.cycle_focused_filter(1); // beginner + security: nothing
        assert!(app.roadmaps.visible().is_empty());
        assert_eq!(app.card_state.selected(), None);
        app.open_selected_preview();
        assert!(!app.roadmaps.modal().is_open());
    }

    #[test]
    fn test_card_navigation_moves_into_filters() {
        let (mut app, _rx) = app();
        app.card_down();
        assert_eq!(app.card_state.selected(), Some(1));
        app.card_up();
        app.card_up();
        assert_eq!(app.roadmap_focus, RoadmapFocus::Filters);
        assert_eq!(app.focused_axis(), FilterAxis::Category);
        app.axis_down();
        assert_eq!(app.roadmap_focus, RoadmapFocus::Cards);
    }

    #[test]
    fn test_start_sets_status_with_target() {
        let (mut app, _rx) = app();
        app.open_preview("backend");
        app.start_roadmap();
        assert_eq!(
            app.status.as_deref(),
            Some("Starting Backend Development: careers.html?path=backend")
        );
    }
}
