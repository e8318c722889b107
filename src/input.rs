use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::cursor::Direction;
use crate::events::EditCommand;
use crate::events::PauseCommand;
use crate::events::RunCommand;

/// Ctrl-C exits from every mode, since raw mode swallows the interrupt signal.
fn is_interrupt(key_event: &KeyEvent) -> bool {
    matches!(
        key_event,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Converts a key press in the editor into a command. Unknown keys yield `None`.
pub fn edit_command(key_event: KeyEvent) -> Option<EditCommand> {
    if is_interrupt(&key_event) {
        return Some(EditCommand::Exit);
    }

    match key_event.code {
        KeyCode::Char('w') | KeyCode::Up => Some(EditCommand::Move(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(EditCommand::Move(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(EditCommand::Move(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(EditCommand::Move(Direction::Right)),
        KeyCode::Char('l') => Some(EditCommand::Toggle),
        KeyCode::Char('r') => Some(EditCommand::Randomize),
        KeyCode::Char('c') => Some(EditCommand::Memorial),
        KeyCode::Char(' ') => Some(EditCommand::Start),
        _ => None,
    }
}

/// Converts a key polled during the simulation into a command
pub fn run_command(key_event: KeyEvent) -> Option<RunCommand> {
    if is_interrupt(&key_event) {
        return Some(RunCommand::Exit);
    }

    match key_event.code {
        KeyCode::Char('e') => Some(RunCommand::Exit),
        KeyCode::Char(' ') => Some(RunCommand::Pause),
        _ => None,
    }
}

/// Converts a key press while paused into a command
pub fn pause_command(key_event: KeyEvent) -> Option<PauseCommand> {
    if is_interrupt(&key_event) {
        return Some(PauseCommand::Exit);
    }

    match key_event.code {
        KeyCode::Char('d') => Some(PauseCommand::Dump),
        KeyCode::Char('e') => Some(PauseCommand::Exit),
        KeyCode::Char(' ') => Some(PauseCommand::Resume),
        _ => None,
    }
}
