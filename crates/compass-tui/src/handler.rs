use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use compass_core::QUICK_QUESTIONS;

use crate::app::{App, InputMode, RoadmapFocus, Screen};
use crate::tui::AppEvent;
use crate::ui::CARD_HEIGHT;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
        AppEvent::Reply(reply) => {
            app.chat.receive(reply);
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // The open preview takes every key until it is closed
    if app.roadmaps.modal().is_open() {
        handle_modal(app, key);
        return;
    }

    match (app.screen, app.input_mode) {
        (Screen::Chat, InputMode::Normal) => handle_chat_normal(app, key),
        (Screen::Chat, InputMode::Editing) => handle_chat_editing(app, key),
        (Screen::Roadmaps, _) => handle_roadmaps(app, key),
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Start typing
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
            app.chat.cursor_end();
        }

        // Quick questions
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < QUICK_QUESTIONS.len() {
                app.ask_quick_question(index);
            }
        }

        // Transcript scrolling
        KeyCode::Char('j') | KeyCode::Down => app.chat_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.chat_scroll_up(1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_scroll_down(app.chat_height / 2);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_scroll_up(app.chat_height / 2);
        }
        KeyCode::Char('g') => app.chat_scroll = 0,
        KeyCode::Char('G') => app.chat_scroll_to_bottom(),

        // Screen switching
        KeyCode::Tab | KeyCode::Char('r') => app.switch_screen(Screen::Roadmaps),

        _ => {}
    }
}

fn handle_chat_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            // Ignored while a reply is pending or the input is blank
            app.submit_message();
        }
        KeyCode::Backspace => app.chat.backspace(),
        KeyCode::Delete => app.chat.delete(),
        KeyCode::Left => app.chat.cursor_left(),
        KeyCode::Right => app.chat.cursor_right(),
        KeyCode::Home => app.chat.cursor_home(),
        KeyCode::End => app.chat.cursor_end(),
        KeyCode::Char(c) => app.chat.insert_char(c),
        _ => {}
    }
}

fn handle_roadmaps(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab | KeyCode::Char('c') => app.switch_screen(Screen::Chat),

        // Jump to the filter bar
        KeyCode::Char('f') => app.roadmap_focus = RoadmapFocus::Filters,

        KeyCode::Char('j') | KeyCode::Down => match app.roadmap_focus {
            RoadmapFocus::Filters => app.axis_down(),
            RoadmapFocus::Cards => app.card_down(),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.roadmap_focus {
            RoadmapFocus::Filters => app.axis_up(),
            RoadmapFocus::Cards => app.card_up(),
        },

        KeyCode::Char('l') | KeyCode::Right if app.roadmap_focus == RoadmapFocus::Filters => {
            app.cycle_focused_filter(1);
        }
        KeyCode::Char('h') | KeyCode::Left if app.roadmap_focus == RoadmapFocus::Filters => {
            app.cycle_focused_filter(-1);
        }
        KeyCode::Char('0') if app.roadmap_focus == RoadmapFocus::Filters => {
            app.reset_focused_filter();
        }

        KeyCode::Enter | KeyCode::Char('p') => match app.roadmap_focus {
            RoadmapFocus::Filters => app.roadmap_focus = RoadmapFocus::Cards,
            RoadmapFocus::Cards => app.open_selected_preview(),
        },

        _ => {}
    }
}

fn handle_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Enter | KeyCode::Char('s') => app.start_roadmap(),
        KeyCode::Char('j') | KeyCode::Down => app.modal_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.modal_scroll_up(1),
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Row inside a bordered area, if the point hits its interior
fn inner_row(x: u16, y: u16, rect: Rect) -> Option<usize> {
    let inner = Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    );
    point_in_rect(x, y, inner).then(|| (y - inner.y) as usize)
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    // While the preview is open the page behind it does not scroll
    if app.roadmaps.is_scroll_locked() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = app.modal_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);
                if !inside {
                    app.close_modal();
                }
            }
            MouseEventKind::ScrollDown => app.modal_scroll_down(3),
            MouseEventKind::ScrollUp => app.modal_scroll_up(3),
            _ => {}
        }
        return;
    }

    let over_transcript = app.transcript_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);

    match (app.screen, mouse.kind) {
        (Screen::Chat, MouseEventKind::ScrollDown) if over_transcript => app.chat_scroll_down(3),
        (Screen::Chat, MouseEventKind::ScrollUp) if over_transcript => app.chat_scroll_up(3),
        (Screen::Chat, MouseEventKind::Down(MouseButton::Left)) => {
            if let Some(row) = app.questions_area.and_then(|r| inner_row(x, y, r)) {
                if row < QUICK_QUESTIONS.len() {
                    app.ask_quick_question(row);
                }
            }
        }
        (Screen::Roadmaps, MouseEventKind::ScrollDown) => app.card_down(),
        (Screen::Roadmaps, MouseEventKind::ScrollUp) => {
            if app.card_state.selected().unwrap_or(0) > 0 {
                app.card_up();
            }
        }
        (Screen::Roadmaps, MouseEventKind::Down(MouseButton::Left)) => {
            // Clicking a card opens its preview
            if let Some(row) = app.cards_area.and_then(|r| inner_row(x, y, r)) {
                let index = app.card_state.offset() + row / CARD_HEIGHT;
                if index < app.roadmaps.visible().len() {
                    app.roadmap_focus = RoadmapFocus::Cards;
                    app.card_state.select(Some(index));
                    app.open_selected_preview();
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use compass_core::{FilterAxis, Modal, Sender};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[tokio::test]
    async fn test_typing_and_enter_sends_message() {
        let (mut app, _rx) = app();
        handle_event(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "hello there");
        assert!(app.chat.can_send());
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.chat.messages().len(), 1);
        assert_eq!(app.chat.messages()[0].content, "hello there");
        assert!(app.chat.is_typing());
        assert!(!app.chat.can_send());

        // A second Enter while typing does nothing
        type_text(&mut app, "again");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_shift_enter_does_not_send() {
        let (mut app, _rx) = app();
        app.input_mode = InputMode::Editing;
        type_text(&mut app, "hi");
        let shift_enter = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::SHIFT,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_event(&mut app, AppEvent::Key(shift_enter)).unwrap();
        assert!(app.chat.messages().is_empty());
    }

    #[tokio::test]
    async fn test_number_key_asks_quick_question() {
        let (mut app, _rx) = app();
        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.chat.messages()[0].content, QUICK_QUESTIONS[2]);

        // Out of range
        handle_event(&mut app, AppEvent::Reply("ok".to_string())).unwrap();
        handle_event(&mut app, key(KeyCode::Char('9'))).unwrap();
        assert_eq!(app.chat.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_reply_event_ends_typing() {
        let (mut app, _rx) = app();
        app.chat.set_input("career?");
        app.submit_message();
        handle_event(&mut app, AppEvent::Reply("canned".to_string())).unwrap();
        assert!(!app.chat.is_typing());
        assert_eq!(app.chat.messages()[1].sender, Sender::Bot);
    }

    #[test]
    fn test_filter_keys_update_cards() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);

        handle_event(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.roadmap_focus, RoadmapFocus::Filters);
        // Difficulty -> beginner
        handle_event(&mut app, key(KeyCode::Char('l'))).unwrap();
        // Category -> data
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('l'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('l'))).unwrap();

        assert_eq!(app.roadmaps.filters().value(FilterAxis::Difficulty), "beginner");
        assert_eq!(app.roadmaps.filters().value(FilterAxis::Duration), "all");
        assert_eq!(app.roadmaps.filters().value(FilterAxis::Category), "data");
        let ids: Vec<&str> = app.roadmaps.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["data-analytics"]);
    }

    #[test]
    fn test_preview_open_start_and_escape() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.roadmaps.modal(), &Modal::Open("frontend".to_string()));

        // Card navigation is locked while the preview is open
        app.modal_lines = 30;
        app.modal_height = 10;
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.card_state.selected(), Some(0));
        assert_eq!(app.modal_scroll, 1);

        handle_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert!(app.status.as_deref().unwrap().ends_with("careers.html?path=frontend"));

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.roadmaps.modal(), &Modal::Closed);
        assert!(!app.roadmaps.is_scroll_locked());
    }

    #[test]
    fn test_preview_scroll_stops_at_last_line() {
        let (mut app, _rx) = app();
        app.open_preview("frontend");
        app.modal_lines = 12;
        app.modal_height = 8;

        for _ in 0..10 {
            handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(app.modal_scroll, 4);

        // One step back up is one line
        handle_event(&mut app, key(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.modal_scroll, 3);

        let wheel = AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        handle_event(&mut app, wheel).unwrap();
        assert_eq!(app.modal_scroll, 4);
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        app.open_preview("backend");
        app.modal_area = Some(Rect::new(10, 5, 40, 20));

        // Inside: stays open
        handle_event(&mut app, click(20, 10)).unwrap();
        assert!(app.roadmaps.modal().is_open());

        handle_event(&mut app, click(2, 2)).unwrap();
        assert!(!app.roadmaps.modal().is_open());
    }

    #[test]
    fn test_click_on_card_opens_preview() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        app.cards_area = Some(Rect::new(0, 10, 80, 20));

        // Second card starts one card height below the first interior row
        let row = 11 + CARD_HEIGHT as u16;
        handle_event(&mut app, click(5, row)).unwrap();
        assert_eq!(app.roadmaps.modal().roadmap_id(), Some("backend"));
    }

    #[tokio::test]
    async fn test_click_on_quick_question() {
        let (mut app, _rx) = app();
        app.questions_area = Some(Rect::new(0, 20, 80, 7));
        handle_event(&mut app, click(4, 21)).unwrap();
        assert_eq!(app.chat.messages()[0].content, QUICK_QUESTIONS[0]);
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() {
        let (mut app, _rx) = app();
        app.open_preview("mobile");
        let ctrl_c = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut app, ctrl_c).unwrap();
        assert!(app.should_quit);
    }
}
