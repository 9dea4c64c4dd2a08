//! Keyboard, pointer and button input handling

/// A player request decoded from a key, a button or a page script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    StopMove,
    TogglePause,
    Confirm,
    HarderDifficulty,
    EasierDifficulty,
    NextPalette,
    PrevPalette,
    ToggleTournament,
    ToggleSpectator,
    ToggleTrail,
    Restart,
    Quit,
}

/// Handle key down event
///
/// Up/down keys steer the paddle in play and pick the difficulty on the
/// title and game-over screens.
pub fn handle_key_down(key: &str, in_menu: bool) -> Option<Command> {
    let command = match key {
        "ArrowUp" | "w" | "W" if in_menu => Command::EasierDifficulty,
        "ArrowDown" | "s" | "S" if in_menu => Command::HarderDifficulty,
        "ArrowUp" | "w" | "W" => Command::MoveUp,
        "ArrowDown" | "s" | "S" => Command::MoveDown,
        "ArrowLeft" => Command::PrevPalette,
        "ArrowRight" => Command::NextPalette,
        "p" | "P" | "Escape" => Command::TogglePause,
        "Enter" | " " => Command::Confirm,
        "t" | "T" => Command::ToggleTournament,
        "v" | "V" => Command::ToggleSpectator,
        "l" | "L" => Command::ToggleTrail,
        "r" | "R" => Command::Restart,
        "q" | "Q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | "w" | "W" | "ArrowDown" | "s" | "S" => Some(Command::StopMove),
        _ => None,
    }
}

/// Decode a command name sent by a DOM button or `send_command`
pub fn command_from_name(name: &str) -> Option<Command> {
    let command = match name {
        "pause" => Command::TogglePause,
        "confirm" | "start" => Command::Confirm,
        "harder" => Command::HarderDifficulty,
        "easier" => Command::EasierDifficulty,
        "color" | "palette" => Command::NextPalette,
        "tournament" => Command::ToggleTournament,
        "spectator" => Command::ToggleSpectator,
        "trail" => Command::ToggleTrail,
        "restart" => Command::Restart,
        "quit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// DOM button ids and the command each one issues
pub const BUTTONS: [(&str, Command); 6] = [
    ("pause-btn", Command::TogglePause),
    ("tournament-btn", Command::ToggleTournament),
    ("spectator-btn", Command::ToggleSpectator),
    ("trail-btn", Command::ToggleTrail),
    ("color-btn", Command::NextPalette),
    ("restart-btn", Command::Restart),
];

/// Canvas placement on the page, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub top: f32,
    pub height: f32,
}

/// Convert a pointer's client y into canvas coordinates
///
/// The canvas may be scaled by CSS, so the offset is rescaled from the
/// displayed height to the drawing-buffer height.
pub fn pointer_to_canvas_y(client_y: f32, rect: CanvasRect, canvas_height: f32) -> f32 {
    if rect.height <= 0.0 {
        return client_y - rect.top;
    }
    (client_y - rect.top) * (canvas_height / rect.height)
}
