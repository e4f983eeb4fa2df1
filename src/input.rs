use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Predict,
    Retrain,
    EditTicker,
}

/// Keystrokes while the ticker field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerEdit {
    Append(char),
    Backspace,
    Commit,
    Cancel,
}

pub fn parse_main_command(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'p' => Some(UiCommand::Predict),
            't' | 'r' => Some(UiCommand::Retrain),
            'e' | '/' => Some(UiCommand::EditTicker),
            _ => None,
        },
        _ => None,
    }
}

pub fn parse_ticker_edit(key_code: &KeyCode) -> Option<TickerEdit> {
    match key_code {
        KeyCode::Enter => Some(TickerEdit::Commit),
        KeyCode::Esc => Some(TickerEdit::Cancel),
        KeyCode::Backspace => Some(TickerEdit::Backspace),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() || matches!(c, '.' | '-') => {
            Some(TickerEdit::Append(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}
