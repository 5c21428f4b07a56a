//! Line-oriented I/O boundary between the game and a player.
use std::collections::VecDeque;
use std::io;

use crate::message::MessageEntry;

/// Something that can show lines to the player and ask them for one token.
///
/// Terminal, scripted and test consoles all implement this; the
/// [`GameController`](crate::GameController) never touches stdin/stdout itself.
pub trait Console {
    fn write_line(&mut self, entry: &MessageEntry) -> io::Result<()>;

    /// Shows `prompt` and reads one answer. `Ok(None)` means input is exhausted.
    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// In-memory console fed from a fixed list of answers.
///
/// Every line written and every prompt asked is recorded in the transcript,
/// which makes whole games easy to assert on.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every line written and every prompt asked, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, entry: &MessageEntry) -> io::Result<()> {
        self.transcript.push(entry.text.clone());
        Ok(())
    }

    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }
}
