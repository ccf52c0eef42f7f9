#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Compute,
    Preset,
    Quit
}

impl Command {
    pub fn parse(command_str: &str) -> Option<Command> {
        match command_str {
            "c" => Some(Command::Compute),
            "p" => Some(Command::Preset),
            "q" => Some(Command::Quit),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_letters_only() {
        assert_eq!(Command::parse("c"), Some(Command::Compute));
        assert_eq!(Command::parse("p"), Some(Command::Preset));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("C"), None);
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse(""), None);
    }
}
