// src/config/prompt.rs

use std::collections::VecDeque;
use std::io::Write;

use anyhow::{Context, Result, bail};

/// Abstract source of interactive answers.
///
/// `resolve` asks for the source/destination paths through this trait when
/// they were not given on the command line.
pub trait Prompter {
    /// Ask one question and return the (trimmed) answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompter backed by the real terminal.
#[derive(Debug, Clone, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question}: ");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("reading prompt answer from stdin")?;

        Ok(answer.trim().to_string())
    }
}

/// Prompter that replays a fixed list of answers, for tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer left for question: {question}"),
        }
    }
}
