use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    TogglePause,
    Reset,
    Faster,
    Slower,
    Save,
}

pub(crate) fn command_for(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Esc {
        return Some(Command::Quit);
    }
    match command_char(key)? {
        'q' => Some(Command::Quit),
        ' ' | 'p' => Some(Command::TogglePause),
        'r' => Some(Command::Reset),
        '+' | '=' => Some(Command::Faster),
        '-' | '_' => Some(Command::Slower),
        's' => Some(Command::Save),
        _ => None,
    }
}

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}
