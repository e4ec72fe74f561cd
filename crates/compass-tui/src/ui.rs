use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};
use compass_core::{ChatMessage, FilterAxis, Roadmap, Sender, QUICK_QUESTIONS};

use crate::app::{App, InputMode, RoadmapFocus, Screen};

/// Rows taken by one roadmap card in the list
pub const CARD_HEIGHT: usize = 3;

/// Parse a line of text and convert **bold** markdown to styled spans
fn parse_markdown_line(text: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if end == 0 {
            // "****" is literal text
            spans.push(Span::raw(rest[..start + 4].to_string()));
            rest = &after[2..];
            continue;
        }

        if start > 0 {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        spans.push(Span::styled(
            after[..end].to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        rest = &after[end + 2..];
    }

    // No closing ** is treated as literal
    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    if spans.is_empty() {
        Line::default()
    } else {
        Line::from(spans)
    }
}

/// A run of words or of whitespace, possibly spanning several styles
struct Segment {
    spans: Vec<Span<'static>>,
    width: usize,
    space: bool,
}

fn push_piece(segments: &mut Vec<Segment>, text: String, style: Style, space: bool) {
    let piece = Span::styled(text, style);
    let width = piece.width();
    match segments.last_mut() {
        Some(last) if last.space == space => {
            last.width += width;
            last.spans.push(piece);
        }
        _ => segments.push(Segment { spans: vec![piece], width, space }),
    }
}

fn segments(line: &Line<'static>) -> Vec<Segment> {
    let mut segments = Vec::new();
    for span in &line.spans {
        let mut run = String::new();
        let mut run_space = None;
        for c in span.content.chars() {
            let space = c.is_whitespace();
            if let Some(previous) = run_space.filter(|s| *s != space) {
                push_piece(&mut segments, std::mem::take(&mut run), span.style, previous);
            }
            run_space = Some(space);
            run.push(c);
        }
        if let Some(space) = run_space {
            push_piece(&mut segments, run, span.style, space);
        }
    }
    segments
}

/// Wrap a styled line to fit within `width` columns, breaking at word
/// boundaries. Words wider than the line are split by character. The result
/// is drawn without further wrapping, so its length is the exact row count.
fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line.clone()];
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for segment in segments(line) {
        if segment.space {
            // Whitespace at a break point is dropped
            let continuation = current.is_empty() && !lines.is_empty();
            if !continuation && current_width + segment.width <= width {
                current_width += segment.width;
                current.extend(segment.spans);
            }
            continue;
        }

        if current_width > 0 && current_width + segment.width > width {
            lines.push(Line::from(std::mem::take(&mut current)).style(line.style));
            current_width = 0;
        }

        if segment.width <= width {
            current_width += segment.width;
            current.extend(segment.spans);
            continue;
        }

        for span in segment.spans {
            for c in span.content.chars() {
                let piece = Span::styled(c.to_string(), span.style);
                let w = piece.width();
                if current_width > 0 && current_width + w > width {
                    lines.push(Line::from(std::mem::take(&mut current)).style(line.style));
                    current_width = 0;
                }
                current_width += w;
                current.push(piece);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current).style(line.style));
    }
    lines
}

fn wrap_lines(lines: &[Line<'static>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Chat => render_chat_screen(app, frame, body_area),
        Screen::Roadmaps => render_roadmaps_screen(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);

    if app.roadmaps.modal().is_open() {
        render_preview_modal(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(" Career Compass ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = if app.roadmaps.modal().is_open() {
        " PREVIEW "
    } else {
        match app.screen {
            Screen::Chat => " CHAT ",
            Screen::Roadmaps => " ROADMAPS ",
        }
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(format!(" {key} "), key_style),
            Span::styled(format!(" {label} "), label_style),
        ]
    };

    let pairs: Vec<(&'static str, &'static str)> = if app.roadmaps.modal().is_open() {
        vec![("Enter", "start"), ("j/k", "scroll"), ("Esc", "close")]
    } else {
        match (app.screen, app.input_mode, app.roadmap_focus) {
            (Screen::Chat, InputMode::Normal, _) => vec![
                ("i", "type"),
                ("1-5", "quick question"),
                ("j/k", "scroll"),
                ("r", "roadmaps"),
                ("q", "quit"),
            ],
            (Screen::Chat, InputMode::Editing, _) => vec![("Enter", "send"), ("Esc", "done")],
            (Screen::Roadmaps, _, RoadmapFocus::Filters) => vec![
                ("h/l", "change"),
                ("0", "reset"),
                ("j/k", "filter"),
                ("Enter", "cards"),
                ("c", "chat"),
                ("q", "quit"),
            ],
            (Screen::Roadmaps, _, RoadmapFocus::Cards) => vec![
                ("j/k", "select"),
                ("Enter", "preview"),
                ("f", "filters"),
                ("c", "chat"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    for (key, label) in pairs {
        spans.extend(hint(key, label));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn message_lines(msg: &ChatMessage) -> Vec<Line<'static>> {
    let (name, color) = match msg.sender {
        Sender::User => ("You", Color::Cyan),
        Sender::Bot => ("Advisor", Color::Yellow),
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", msg.sender.avatar())),
        Span::styled(name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", msg.time_label()), Style::default().fg(Color::DarkGray)),
    ])];

    match msg.sender {
        Sender::User => lines.push(Line::from(msg.content.clone())),
        Sender::Bot => lines.extend(msg.content.lines().map(parse_markdown_line)),
    }
    lines.push(Line::default());
    lines
}

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let [transcript_area, questions_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(QUICK_QUESTIONS.len() as u16 + 2),
        Constraint::Length(3),
    ])
    .areas(area);

    // Store areas for mouse hit-testing
    app.transcript_area = Some(transcript_area);
    app.questions_area = Some(questions_area);

    // Transcript
    let inner_width = transcript_area.width.saturating_sub(2);
    app.chat_height = transcript_area.height.saturating_sub(2);

    let lines: Vec<Line<'static>> = if app.chat.messages().is_empty() && !app.chat.is_typing() {
        vec![Line::from(Span::styled(
            "Ask anything about tech careers, or pick one of the questions below.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let mut lines: Vec<Line<'static>> = app.chat.messages().iter().flat_map(message_lines).collect();

        if app.chat.is_typing() {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", Sender::Bot.avatar())),
                Span::styled("Advisor", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ]));
            // Animated ellipsis: cycles through ".", "..", "..."
            let dots = ".".repeat((app.animation_frame as usize) + 1);
            lines.push(Line::from(Span::styled(
                format!("Thinking{}", dots),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        lines
    };

    let lines = wrap_lines(&lines, inner_width as usize);
    app.chat_lines = lines.len() as u16;

    // A message was appended since the last frame: follow it now that the
    // new layout is known
    if app.chat.take_scroll_request() {
        app.chat_scroll_to_bottom();
    }
    app.chat_scroll = app.chat_scroll.min(app.chat_lines.saturating_sub(app.chat_height));

    let transcript = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Career Advisor "),
        )
        .scroll((app.chat_scroll, 0));
    frame.render_widget(transcript, transcript_area);

    if app.chat_lines > app.chat_height {
        let mut scrollbar_state = ScrollbarState::new(app.chat_lines.saturating_sub(app.chat_height) as usize)
            .position(app.chat_scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            transcript_area,
            &mut scrollbar_state,
        );
    }

    // Quick questions
    let question_style = if app.chat.is_typing() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let items: Vec<ListItem> = QUICK_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Cyan).bold()),
                Span::styled(*q, question_style),
            ]))
        })
        .collect();
    let questions = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Popular Questions "),
    );
    frame.render_widget(questions, questions_area);

    render_chat_input(app, frame, input_area);
}

fn render_chat_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { Color::Yellow } else { Color::DarkGray };

    let title = if app.chat.is_typing() {
        " Message (waiting for reply) "
    } else if app.chat.can_send() {
        " Message (Enter to send) "
    } else {
        " Message "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    // Calculate visible portion of input with horizontal scrolling
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = app.chat.cursor();
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let input = if app.chat.input().is_empty() && !editing {
        Paragraph::new(Span::styled(
            "Press i to type your question...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let visible_text: String = app
            .chat
            .input()
            .chars()
            .skip(scroll_offset)
            .take(inner_width)
            .collect();
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(input.block(block), area);

    // Show cursor when editing
    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_roadmaps_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let [filters_area, cards_area] = Layout::vertical([
        Constraint::Length(FilterAxis::all().len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    app.cards_area = Some(cards_area);

    render_filter_bar(app, frame, filters_area);
    render_cards(app, frame, cards_area);
}

fn render_filter_bar(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.roadmap_focus == RoadmapFocus::Filters;
    let filters = app.roadmaps.filters();

    let lines: Vec<Line> = FilterAxis::all()
        .into_iter()
        .enumerate()
        .map(|(i, axis)| {
            let is_focused = focused && i == app.axis_idx;
            let marker = if is_focused { "> " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<12}", axis.display_name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];

            let active = filters.active_index(axis);
            for (j, option) in axis.options().into_iter().enumerate() {
                let style = if j == active {
                    Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!(" {option} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let bar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Filters "),
    );
    frame.render_widget(bar, area);
}

fn card_item(roadmap: &Roadmap, frames_left: u8) -> ListItem<'static> {
    // Entering cards slide in from the right and settle
    let indent = " ".repeat(frames_left as usize * 2);
    let title_style = if frames_left > 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow).bold()
    };

    let description: String = roadmap.description.chars().take(100).collect();
    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!("{indent}{} ", roadmap.icon)),
            Span::styled(roadmap.title.clone(), title_style),
        ]),
        Line::from(Span::styled(
            format!(
                "{indent}   {} | {} | {} | {} modules",
                roadmap.difficulty.as_str(),
                roadmap.duration.as_str(),
                roadmap.category.as_str(),
                roadmap.modules.len()
            ),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(format!("{indent}   {description}")),
    ])
}

fn render_cards(app: &mut App, frame: &mut Frame, area: Rect) {
    let visible = app.roadmaps.visible();
    let shown = visible.len();
    let total = app.roadmaps.catalog().roadmaps().len();

    let border_color = if app.roadmap_focus == RoadmapFocus::Cards {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Showing {} of {} roadmaps ", shown, total));

    if visible.is_empty() {
        let placeholder = Paragraph::new("No roadmaps match these filters.\nPress f, then 0 on a filter to reset it.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|r| card_item(r, app.card_animations.remaining(&r.id)))
        .collect();

    let ids: Vec<String> = visible.iter().map(|r| r.id.clone()).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.card_state);

    // Cards now inside the viewport
    let rows = area.height.saturating_sub(2) as usize;
    let first = app.card_state.offset();
    let in_view = rows.div_ceil(CARD_HEIGHT);
    app.card_animations
        .observe(ids.iter().skip(first).take(in_view).map(String::as_str));
}

fn render_preview_modal(app: &mut App, frame: &mut Frame, area: Rect) {
    let Some(preview) = app.roadmaps.preview() else {
        return;
    };

    // Calculate popup size and position (centered)
    let popup_width = (area.width * 7 / 10).max(40).min(area.width.saturating_sub(4));
    let popup_height = (area.height * 8 / 10).min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", preview.title))
        .title_bottom(Line::from(" Enter start | x close ").right_aligned());

    let roadmap = preview.roadmap;
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", roadmap.icon)),
            Span::styled(roadmap.title.clone(), Style::default().fg(Color::Yellow).bold()),
        ]),
        Line::from(roadmap.description.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Learning Modules",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    for (number, module) in preview.modules() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", number, module.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", module.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Start: ", Style::default().fg(Color::Green).bold()),
        Span::raw(preview.start_target.clone()),
    ]));

    let inner = block.inner(popup_area);
    let lines = wrap_lines(&lines, inner.width as usize);
    app.modal_height = inner.height;
    app.modal_lines = lines.len() as u16;
    app.modal_scroll = app.modal_scroll.min(app.modal_lines.saturating_sub(app.modal_height));

    let content = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((app.modal_scroll, 0));
    frame.render_widget(content, popup_area);

    app.modal_area = Some(popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> Vec<String> {
        draw_sized(app, 120, 40)
    }

    fn draw_sized(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_parse_markdown_line_bold() {
        let line = parse_markdown_line("**1. Software Development:** Build apps");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "1. Software Development:");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[1].content, " Build apps");

        let unclosed = parse_markdown_line("**open");
        assert_eq!(unclosed.spans.len(), 1);
        assert_eq!(unclosed.spans[0].content, "**open");
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_line_breaks_at_words() {
        let line = Line::from("Start with online courses and build projects");
        let wrapped: Vec<String> = wrap_line(&line, 16).iter().map(plain).collect();
        assert_eq!(wrapped, vec!["Start with ", "online courses ", "and build ", "projects"]);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 16));
    }

    #[test]
    fn test_wrap_line_keeps_styles_and_splits_long_words() {
        let line = parse_markdown_line("**Entry Level**: fine");
        let wrapped = wrap_line(&line, 10);
        assert_eq!(plain(&wrapped[0]), "Entry ");
        assert_eq!(plain(&wrapped[1]), "Level: ");
        assert_eq!(plain(&wrapped[2]), "fine");
        assert!(wrapped[1].spans[0].style.add_modifier.contains(Modifier::BOLD));

        let long = Line::from("a".repeat(25));
        let rows: Vec<String> = wrap_line(&long, 10).iter().map(plain).collect();
        assert_eq!(rows, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);

        assert_eq!(wrap_line(&Line::default(), 10).len(), 1);
    }

    #[tokio::test]
    async fn test_chat_screen_shows_bubbles_and_typing() {
        let (mut app, _rx) = app();
        app.chat.set_input("How do I start?");
        app.submit_message();

        let rows = draw(&mut app);
        assert!(contains(&rows, "You"));
        assert!(contains(&rows, "How do I start?"));
        assert!(contains(&rows, "Thinking."));
        assert!(contains(&rows, "Message (waiting for reply)"));
        assert!(contains(&rows, QUICK_QUESTIONS[0]));

        app.chat.receive(compass_core::responses::CAPABILITIES);
        let rows = draw(&mut app);
        assert!(contains(&rows, "Advisor"));
        assert!(!contains(&rows, "Thinking"));
    }

    #[test]
    fn test_newest_reply_is_fully_visible_after_append() {
        let (mut app, _rx) = app();
        for prompt in ["machine learning", "data science", "web dev", "career", "machine learning"] {
            app.chat.receive(compass_core::classify(prompt));
        }

        // A narrow terminal wraps most reply lines several times
        let rows = draw_sized(&mut app, 40, 30);
        assert!(app.chat_lines > app.chat_height);
        assert_eq!(app.chat_scroll, app.chat_lines - app.chat_height);
        assert!(contains(&rows, "advice!"));

        // No new message: manual scroll position is kept
        app.chat_scroll_up(5);
        let kept = app.chat_scroll;
        draw_sized(&mut app, 40, 30);
        assert_eq!(app.chat_scroll, kept);
    }

    #[test]
    fn test_roadmaps_screen_lists_filtered_cards() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        let rows = draw(&mut app);
        assert!(contains(&rows, "Showing 8 of 8 roadmaps"));
        assert!(contains(&rows, "Frontend Development"));

        app.roadmap_focus = RoadmapFocus::Filters;
        app.axis_idx = 1;
        app.cycle_focused_filter(1); // short
        let rows = draw(&mut app);
        assert!(contains(&rows, "Showing 2 of 8 roadmaps"));
        assert!(!contains(&rows, "Frontend Development"));
    }

    #[test]
    fn test_cards_in_view_start_animation() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        draw(&mut app);
        assert!(app.card_animations.remaining("frontend") > 0);
    }

    #[test]
    fn test_preview_modal_renders_modules_and_target() {
        let (mut app, _rx) = app();
        app.switch_screen(Screen::Roadmaps);
        app.open_preview("frontend");
        let rows = draw(&mut app);

        assert!(contains(&rows, "Frontend Development - Preview"));
        assert!(contains(&rows, "Learning Modules"));
        assert!(contains(&rows, "1. HTML & CSS Fundamentals"));
        assert!(contains(&rows, "careers.html?path=frontend"));
        assert!(app.modal_area.is_some());

        // Scrolling stops once the start link reaches the bottom edge
        let rows = draw_sized(&mut app, 60, 16);
        assert!(app.modal_lines > app.modal_height);
        app.modal_scroll_down(u16::MAX / 2);
        let rows_at_end = draw_sized(&mut app, 60, 16);
        assert_eq!(app.modal_scroll, app.modal_lines - app.modal_height);
        assert!(contains(&rows_at_end, "careers.html?path=frontend"));
        assert!(!contains(&rows, "careers.html?path=frontend"));
    }
}
