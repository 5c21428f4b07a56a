//! Crossterm colours for message levels.

use client_frontend_core::MessageLevel;
use crossterm::style::{Attribute, Color, ContentStyle};

/// Consistent colour scheme for the line console.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalTheme;

impl TerminalTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_message(&self, level: MessageLevel) -> ContentStyle {
        let mut style = ContentStyle::new();
        match level {
            MessageLevel::Info => style.foreground_color = Some(Color::White),
            MessageLevel::Highlight => {
                style.foreground_color = Some(Color::Cyan);
                style.attributes.set(Attribute::Bold);
            }
            MessageLevel::Warning => style.foreground_color = Some(Color::Yellow),
            MessageLevel::Error => style.foreground_color = Some(Color::Red),
        }
        style
    }

    pub fn style_prompt(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = Some(Color::Green);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_are_bold() {
        let theme = TerminalTheme::new();
        let style = theme.style_message(MessageLevel::Highlight);
        assert!(style.attributes.has(Attribute::Bold));
        assert_eq!(style.foreground_color, Some(Color::Cyan));
    }

    #[test]
    fn warnings_stand_out_from_info() {
        let theme = TerminalTheme::new();
        assert_ne!(
            theme.style_message(MessageLevel::Warning).foreground_color,
            theme.style_message(MessageLevel::Info).foreground_color
        );
    }
}
