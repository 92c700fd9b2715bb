//! Line-oriented prompter over `BufRead` + `Write`.

use std::io::{self, BufRead, Write};

use gostart_core::{
    application::{ApplicationError, ports::Prompter},
    error::{GoStartError, GoStartResult},
};

/// Writes each question to `writer` (no trailing newline) and reads one line
/// of answer from `reader`.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> GoStartResult<Option<String>> {
        write!(self.writer, "{message}")
            .and_then(|()| self.writer.flush())
            .map_err(prompt_error)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, line: &str) -> GoStartResult<()> {
        writeln!(self.writer, "{line}").map_err(prompt_error)
    }
}

fn prompt_error(e: io::Error) -> GoStartError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
