use std::fmt;

/// The keyboard input that activates a binding: a single printable character
/// or one of the named special keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Char(char),
    Enter,
    Up,
    Down,
    Left,
    Right,
}

impl Trigger {
    /// Parses the config-file spelling of a trigger: a named special key,
    /// `"space"`, or a single character.
    pub fn parse(s: &str) -> Option<Trigger> {
        match s {
            "enter" | "return" => return Some(Trigger::Enter),
            "up" => return Some(Trigger::Up),
            "down" => return Some(Trigger::Down),
            "left" => return Some(Trigger::Left),
            "right" => return Some(Trigger::Right),
            "space" => return Some(Trigger::Char(' ')),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Trigger::Char(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Char(' ') => write!(f, "Space"),
            Trigger::Char(c) => write!(f, "{c}"),
            Trigger::Enter => write!(f, "Enter"),
            Trigger::Up => write!(f, "Up"),
            Trigger::Down => write!(f, "Down"),
            Trigger::Left => write!(f, "Left"),
            Trigger::Right => write!(f, "Right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(Trigger::parse("enter"), Some(Trigger::Enter));
        assert_eq!(Trigger::parse("return"), Some(Trigger::Enter));
        assert_eq!(Trigger::parse("up"), Some(Trigger::Up));
        assert_eq!(Trigger::parse("space"), Some(Trigger::Char(' ')));
    }

    #[test]
    fn test_parse_single_char() {
        assert_eq!(Trigger::parse("h"), Some(Trigger::Char('h')));
        assert_eq!(Trigger::parse("*"), Some(Trigger::Char('*')));
    }

    #[test]
    fn test_parse_rejects_multi_char_garbage() {
        assert_eq!(Trigger::parse("hh"), None);
        assert_eq!(Trigger::parse(""), None);
    }

    #[test]
    fn test_display_spellings() {
        assert_eq!(Trigger::Char('b').to_string(), "b");
        assert_eq!(Trigger::Char(' ').to_string(), "Space");
        assert_eq!(Trigger::Enter.to_string(), "Enter");
        assert_eq!(Trigger::Left.to_string(), "Left");
    }
}
