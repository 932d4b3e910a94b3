//! Status bar model - position indicator and status message

use super::surface::Position;

/// Build the position indicator text from a template
///
/// `{line}` and `{column}` are replaced with the 1-based cursor position.
pub fn format_position(template: &str, pos: Position) -> String {
    template
        .replace("{line}", &(pos.line + 1).to_string())
        .replace("{column}", &(pos.column + 1).to_string())
}

/// Text shown in the bottom bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    /// Position indicator, rebuilt on every cursor move
    pub position: String,
    /// Last status message (e.g. "Saved: /tmp/a.txt")
    pub message: Option<String>,
}

impl StatusBar {
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_one_based() {
        assert_eq!(
            format_position("Ln {line}, Col {column}", Position::new(0, 0)),
            "Ln 1, Col 1"
        );
        assert_eq!(
            format_position("Ln {line}, Col {column}", Position::new(41, 9)),
            "Ln 42, Col 10"
        );
    }

    #[test]
    fn test_localized_template() {
        assert_eq!(
            format_position("第{line}行第{column}列", Position::new(2, 4)),
            "第3行第5列"
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        assert_eq!(format_position("here", Position::new(5, 5)), "here");
    }
}
