use crate::ui::app::App;
use crate::ui::controls::Control;
use crate::ui::counter::Count;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Control),
    PressFocused,
    FocusNext,
    FocusPrev,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if is_ctrl_char(key, 'c') {
        return KeyAction::Quit;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Press(Control::Increment),
        KeyCode::Char('-') | KeyCode::Char('_') => KeyAction::Press(Control::Decrement),
        KeyCode::Char('o') | KeyCode::Char('O') => KeyAction::Press(Control::IncrementIfOdd),
        KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Press(Control::IncrementAsync),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PressFocused,
        KeyCode::Right | KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::Left | KeyCode::BackTab => KeyAction::FocusPrev,
        _ => KeyAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent, count: Count) {
    match map_key(key) {
        KeyAction::Press(control) => app.press(control, count),
        KeyAction::PressFocused => app.press_focused(count),
        KeyAction::FocusNext => app.focus_next(),
        KeyAction::FocusPrev => app.focus_prev(),
        KeyAction::Quit => app.request_quit(),
        KeyAction::None => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, count: Count) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row, count);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::empty())
    }

    #[test]
    fn shortcut_keys_press_controls() {
        assert_eq!(map_key(press(KeyCode::Char('+'))), KeyAction::Press(Control::Increment));
        assert_eq!(map_key(press(KeyCode::Char('='))), KeyAction::Press(Control::Increment));
        assert_eq!(map_key(press(KeyCode::Char('-'))), KeyAction::Press(Control::Decrement));
        assert_eq!(
            map_key(press(KeyCode::Char('o'))),
            KeyAction::Press(Control::IncrementIfOdd)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            KeyAction::Press(Control::IncrementAsync)
        );
    }

    #[test]
    fn shifted_plus_still_increments() {
        assert_eq!(
            map_key(key(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            KeyAction::Press(Control::Increment)
        );
    }

    #[test]
    fn navigation_keys_move_focus() {
        assert_eq!(map_key(press(KeyCode::Right)), KeyAction::FocusNext);
        assert_eq!(map_key(press(KeyCode::Tab)), KeyAction::FocusNext);
        assert_eq!(map_key(press(KeyCode::Left)), KeyAction::FocusPrev);
        assert_eq!(map_key(press(KeyCode::BackTab)), KeyAction::FocusPrev);
        assert_eq!(map_key(press(KeyCode::Enter)), KeyAction::PressFocused);
        assert_eq!(map_key(press(KeyCode::Char(' '))), KeyAction::PressFocused);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), KeyAction::Quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut release = press(KeyCode::Char('+'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), KeyAction::None);
    }

    #[test]
    fn ctrl_combinations_do_not_press() {
        assert_eq!(map_key(key(KeyCode::Char('a'), KeyModifiers::CONTROL)), KeyAction::None);
    }
}
