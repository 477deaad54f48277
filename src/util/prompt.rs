//! Interactive prompts
//!
//! The backup and restore flows ask the operator short one-letter questions.
//! [`Prompt`] lets tests answer them without a terminal.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};

/// Asks the operator a question and returns the raw answer.
pub trait Prompt {
    fn ask(&self, question: &str) -> io::Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for Rc<P> {
    fn ask(&self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn ask(&self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }
}

/// Reads answers from the operator.
///
/// On a terminal the question is an interactive dialoguer input. When input
/// is piped the question goes to stderr and one line is read from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&self, question: &str) -> io::Result<String> {
        if !Term::stderr().is_term() {
            return read_answer(question, &mut io::stdin().lock(), &mut io::stderr());
        }

        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(e) => e,
            })
    }
}

/// Write `question` and read one line. End of input is an empty answer.
pub fn read_answer<R, W>(question: &str, input: &mut R, output: &mut W) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Replays a fixed list of answers and remembers every question asked.
///
/// Once the answers run out every further question gets an empty answer,
/// which all flows treat as "no".
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order
    pub fn questions(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, question: &str) -> io::Result<String> {
        self.asked.borrow_mut().push(question.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Normalize an answer for comparison against the single-letter choices.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}
