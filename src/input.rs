use raylib::prelude::*;

/// What a key press asks the presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    First,
    Last,
    ShowHelp,
    HideHelp,
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Command::Advance),
        KeyboardKey::KEY_LEFT => Some(Command::Retreat),
        KeyboardKey::KEY_HOME => Some(Command::First),
        KeyboardKey::KEY_END => Some(Command::Last),
        KeyboardKey::KEY_ESCAPE => Some(Command::HideHelp),
        _ => None,
    }
}

// '?' depends on the keyboard layout, so it is read as a character
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        '?' => Some(Command::ShowHelp),
        _ => None,
    }
}

const BOUND_KEYS: [KeyboardKey; 6] = [
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_HOME,
    KeyboardKey::KEY_END,
    KeyboardKey::KEY_ESCAPE,
];

/// Commands for this frame's key presses, keys first, then typed characters.
pub fn poll(rl: &mut RaylibHandle) -> Vec<Command> {
    let mut commands: Vec<Command> = BOUND_KEYS
        .iter()
        .filter(|&&key| rl.is_key_pressed(key))
        .filter_map(|&key| command_for_key(key))
        .collect();

    while let Some(c) = rl.get_char_pressed() {
        commands.extend(command_for_char(c));
    }
    commands
}
