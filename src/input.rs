use std::io::{BufRead, Write};

use tracing::debug;

use crate::{Result, model::Action};

pub const ACTION_PROMPT: &str =
    "If you would like to tag a bomb, press the letter 'B' else press any other letter key.";
pub const ROW_PROMPT: &str = "Enter a row from 1-10: ";
pub const COLUMN_PROMPT: &str = "Enter a column from 1-10: ";

/// Line-oriented console: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Bytes that are not UTF-8 are replaced, so they read as a bad answer.
    fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err("standard input closed".into());
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    pub fn read_action(&mut self) -> Result<Action> {
        self.say(ACTION_PROMPT)?;
        let line = self.read_line()?;
        Ok(Action::from_key(line.trim().chars().next()))
    }

    /// Asks until the answer is an integer in `min..=max`.
    pub fn read_in_range(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            self.say(prompt)?;
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => {
                    debug!("Rejected input {:?}", line.trim());
                    self.say(&format!("Please enter a number between {min} and {max}."))?;
                }
            }
        }
    }

    /// Blocks for one more line; a closed input counts as the key press.
    pub fn wait_for_key(&mut self) -> Result<()> {
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output.clone()).unwrap()
    }

    #[test]
    fn test_read_action_flag_and_reveal() {
        let mut c = console("B\nb\nx\n\n");
        assert_eq!(c.read_action().unwrap(), Action::Flag);
        assert_eq!(c.read_action().unwrap(), Action::Flag);
        assert_eq!(c.read_action().unwrap(), Action::Reveal);
        assert_eq!(c.read_action().unwrap(), Action::Reveal);
        assert_eq!(printed(&c).matches(ACTION_PROMPT).count(), 4);
    }

    #[test]
    fn test_read_in_range_retries_until_valid() {
        let mut c = console("abc\n0\n11\n-3\n 7 \n");
        assert_eq!(c.read_in_range(ROW_PROMPT, 1, 10).unwrap(), 7);

        let out = printed(&c);
        assert_eq!(out.matches(ROW_PROMPT).count(), 5);
        assert_eq!(
            out.matches("Please enter a number between 1 and 10.").count(),
            4
        );
    }

    #[test]
    fn test_read_in_range_rejects_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe\n4\n".to_vec()), Vec::new());
        assert_eq!(c.read_in_range(ROW_PROMPT, 1, 10).unwrap(), 4);
        assert_eq!(
            printed(&c)
                .matches("Please enter a number between 1 and 10.")
                .count(),
            1
        );
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut c = console("abc\n");
        let err = c.read_in_range(COLUMN_PROMPT, 1, 10).unwrap_err();
        assert_eq!(err.to_string(), "standard input closed");
    }

    #[test]
    fn test_wait_for_key_accepts_eof() {
        let mut c = console("");
        assert!(c.wait_for_key().is_ok());
    }
}
