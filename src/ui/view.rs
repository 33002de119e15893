//! Counter view: the count plus four buttons, rendered from props.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::controls::Control;
use crate::ui::counter::Count;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, HEADER_TEXT, STATUS_PENDING};

const MARGIN_X: u16 = 2;
const COUNT_ROW: u16 = 1;
const BUTTON_ROW: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;
const PENDING_ROW: u16 = BUTTON_ROW + BUTTON_HEIGHT + 1;

/// Text shown for a count, shared by every render target.
pub fn render_text(count: Count) -> String {
    format!("clicked: {count} times")
}

/// Everything the view needs to draw itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterProps {
    pub count: Count,
    pub focus: Control,
    pub pending_async: usize,
}

pub struct CounterView {
    props: CounterProps,
}

impl CounterView {
    pub fn new(props: CounterProps) -> Self {
        Self { props }
    }
}

/// Screen rectangles of the buttons inside `area`, in [`Control::ALL`] order.
///
/// Buttons that do not fit are clipped; a fully hidden button gets an empty rect.
pub fn button_areas(area: Rect) -> [Rect; 4] {
    let mut x = area.x.saturating_add(MARGIN_X);
    let y = area.y.saturating_add(BUTTON_ROW);
    Control::ALL.map(|control| {
        let width = control.label().chars().count() as u16 + 4;
        let rect = Rect {
            x,
            y,
            width,
            height: BUTTON_HEIGHT,
        };
        x = x.saturating_add(width + BUTTON_GAP);
        clip(rect, area)
    })
}

/// The button under terminal cell (`column`, `row`), if any.
pub fn control_at(area: Rect, column: u16, row: u16) -> Option<Control> {
    button_areas(area)
        .iter()
        .position(|rect| {
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
        .map(|idx| Control::ALL[idx])
}

fn clip(rect: Rect, area: Rect) -> Rect {
    let clipped = rect.intersection(area);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::default()
    } else {
        clipped
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    clip(
        Rect {
            x: area.x.saturating_add(MARGIN_X),
            y: area.y.saturating_add(offset),
            width: area.width.saturating_sub(MARGIN_X),
            height: 1,
        },
        area,
    )
}

impl Widget for CounterView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let CounterProps {
            count,
            focus,
            pending_async,
        } = self.props;

        let count_line = Line::from(Span::styled(
            render_text(count),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(count_line).render(row(area, COUNT_ROW), buf);

        for (control, rect) in Control::ALL.iter().zip(button_areas(area)) {
            if rect.width == 0 {
                continue;
            }
            let focused = *control == focus;
            let (border, label) = if focused {
                (
                    Style::default().fg(ACCENT),
                    Style::default()
                        .fg(ACCENT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(BUTTON_BORDER),
                    Style::default().fg(HEADER_TEXT),
                )
            };
            Paragraph::new(Line::from(Span::styled(format!(" {} ", control.label()), label)))
                .block(Block::default().borders(Borders::ALL).border_style(border))
                .render(rect, buf);
        }

        if pending_async > 0 {
            let noun = if pending_async == 1 { "increment" } else { "increments" };
            Paragraph::new(Line::from(Span::styled(
                format!("{pending_async} delayed {noun} pending"),
                Style::default().fg(STATUS_PENDING),
            )))
            .render(row(area, PENDING_ROW), buf);
        }
    }
}
