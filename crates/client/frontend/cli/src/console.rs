//! Line console over a reader/writer pair, normally stdin/stdout.
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use client_frontend_core::{Console, MessageEntry};
use crossterm::QueueableCommand;
use crossterm::style::{Print, PrintStyledContent};

use crate::config::UiConfig;
use crate::presentation::TerminalTheme;

pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    theme: TerminalTheme,
    ui: UiConfig,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio(ui: UiConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), ui)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W, ui: UiConfig) -> Self {
        Self {
            reader,
            writer,
            theme: TerminalTheme::new(),
            ui,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write_line(&mut self, entry: &MessageEntry) -> io::Result<()> {
        if self.ui.color && !entry.text.is_empty() {
            let style = self.theme.style_message(entry.level);
            self.writer
                .queue(PrintStyledContent(style.apply(entry.text.as_str())))?;
            self.writer.queue(Print("\n"))?;
        } else {
            writeln!(self.writer, "{}", entry.text)?;
        }
        Ok(())
    }

    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.ui.color {
            let style = self.theme.style_prompt();
            self.writer.queue(PrintStyledContent(style.apply(prompt)))?;
            self.writer.queue(Print(" "))?;
        } else {
            write!(self.writer, "{prompt} ")?;
        }
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD so the session rejects the answer
        // and asks again.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        let token = String::from_utf8_lossy(&line).trim().to_string();
        if self.ui.echo_input {
            writeln!(self.writer, "{token}")?;
        }
        Ok(Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{FrontendConfig, GameController};
    use game_core::{Catalog, GameSession};
    use std::io::Cursor;

    fn plain(echo_input: bool) -> UiConfig {
        UiConfig {
            color: false,
            echo_input,
        }
    }

    #[test]
    fn reads_trimmed_tokens_until_eof() {
        let mut console = TerminalConsole::new(Cursor::new("  3 \nyes\n"), Vec::new(), plain(false));

        assert_eq!(console.read_token("PICK?").unwrap().as_deref(), Some("3"));
        assert_eq!(console.read_token("AGAIN?").unwrap().as_deref(), Some("yes"));
        assert_eq!(console.read_token("MORE?").unwrap(), None);

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "PICK? AGAIN? MORE? ");
    }

    #[test]
    fn invalid_utf8_is_an_answer_not_an_error() {
        let mut console =
            TerminalConsole::new(Cursor::new(&b"\xff\xfe\n2\n"[..]), Vec::new(), plain(false));

        let token = console.read_token("SELECT A SYSTEM(1-3)?").unwrap();
        assert_eq!(token.as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(console.read_token("AGAIN?").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn garbled_system_choice_is_asked_again() {
        let catalog = Catalog::standard();
        let mut session = GameSession::standard(&catalog);
        let console = TerminalConsole::new(
            Cursor::new(&b"NO\nNO\n\xff\xfe\n1\n1\n5\n"[..]),
            Vec::new(),
            plain(false),
        );
        let mut controller = GameController::new(console, FrontendConfig::default());

        controller.run(&mut session).unwrap();
        assert!(session.is_finished());

        let output = String::from_utf8(controller.into_console().into_writer()).unwrap();
        let reprompt = "SELECT A SYSTEM(1-3)? INVALID CHOICE\nSELECT A SYSTEM(1-3)? ";
        assert!(output.contains(reprompt));
    }

    #[test]
    fn echoes_answers_when_configured() {
        let mut console = TerminalConsole::new(Cursor::new("2\n"), Vec::new(), plain(true));
        console.read_token("HOW MANY?").unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "HOW MANY? 2\n");
    }

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new(), plain(false));
        console
            .write_line(&MessageEntry::highlight("CARGO SPACE IS FULL"))
            .unwrap();
        console.write_line(&MessageEntry::blank()).unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "CARGO SPACE IS FULL\n\n");
    }

    #[test]
    fn coloured_lines_keep_their_text() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new(), UiConfig::default());
        console
            .write_line(&MessageEntry::warning("INVALID CHOICE"))
            .unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("INVALID CHOICE"));
        assert!(output.contains('\u{1b}'));
        assert!(output.ends_with('\n'));
    }
}
