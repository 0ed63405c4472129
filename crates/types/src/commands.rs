/// User input against the demo configuration.
/// Queued by the host and applied before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetFrameGen(bool),
    SetSlowMotion(bool),
    SetPlaying(bool),
    ToggleFrameGen,
    ToggleSlowMotion,
    TogglePlaying,
}

impl Command {
    /// Keyboard shortcut mapping: `g` frame generation, `s` slow motion, `p`/space play-pause.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "g" | "G" => Some(Command::ToggleFrameGen),
            "s" | "S" => Some(Command::ToggleSlowMotion),
            "p" | "P" | " " => Some(Command::TogglePlaying),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_toggles() {
        assert_eq!(Command::from_key("g"), Some(Command::ToggleFrameGen));
        assert_eq!(Command::from_key("S"), Some(Command::ToggleSlowMotion));
        assert_eq!(Command::from_key(" "), Some(Command::TogglePlaying));
        assert_eq!(Command::from_key("x"), None);
    }
}
