//! Interactive prompts.
//!
//! Prompting is expressed through the [`Prompter`] capability so the driver
//! loop can run against the terminal ([`TerminalPrompter`]) or a canned
//! script ([`ScriptedPrompter`]). Every prompt returns `Ok(None)` when the
//! operator cancels.
//!
//! The `ask_*` functions build the three prompt shapes the publisher uses
//! on top of any [`Prompter`].

use std::collections::VecDeque;
use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};
use thiserror::Error;

use crate::config::AccessToken;
use crate::publications::Publication;
use crate::store::Credentials;

/// Label of the menu entry that skips publishing for the current product.
pub const SKIP_LABEL: &str = "Skip";

/// Errors raised while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The operator cancelled a prompt that has no "stop" meaning.
    #[error("prompt cancelled")]
    Cancelled,

    /// The terminal interaction failed.
    #[error("terminal interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    /// A scripted prompter ran out of answers.
    #[error("no scripted answer left for prompt '{prompt}'")]
    ScriptExhausted {
        /// The prompt that had no answer.
        prompt: String,
    },

    /// A scripted answer did not fit the prompt kind.
    #[error("scripted answer does not fit prompt '{prompt}'")]
    ScriptMismatch {
        /// The prompt that received the wrong kind of answer.
        prompt: String,
    },
}

/// Blocking request-for-input capability.
pub trait Prompter {
    /// Asks for a line of plain text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the interaction fails.
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>, PromptError>;

    /// Asks for a line of text without echoing it.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the interaction fails.
    fn prompt_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError>;

    /// Asks the operator to pick one of `items`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the interaction fails.
    fn prompt_select(&mut self, prompt: &str, items: &[String])
        -> Result<Option<usize>, PromptError>;
}

/// Collects shop name and access token for a new credentials file.
///
/// # Errors
///
/// Returns [`PromptError::Cancelled`] if either field is cancelled; a
/// partial answer is never returned.
pub fn ask_credentials<P>(prompter: &mut P) -> Result<Credentials, PromptError>
where
    P: Prompter + ?Sized,
{
    let shop_name = prompter
        .prompt_text("Shop name")?
        .ok_or(PromptError::Cancelled)?;
    let access_token = prompter
        .prompt_secret("Access token")?
        .ok_or(PromptError::Cancelled)?;

    Ok(Credentials {
        shop_name: shop_name.trim().to_string(),
        access_token: AccessToken::new(access_token.trim()),
    })
}

/// Asks for the next product id.
///
/// The answer is returned exactly as typed; the id is not checked locally.
/// `None` means the operator cancelled. The driver also treats an empty
/// string as a request to stop.
///
/// # Errors
///
/// Returns [`PromptError`] if the interaction fails.
pub fn ask_product_id<P>(prompter: &mut P) -> Result<Option<String>, PromptError>
where
    P: Prompter + ?Sized,
{
    prompter.prompt_text("Product ID (leave empty to finish)")
}

/// Asks which publication to publish to.
///
/// The menu is [`SKIP_LABEL`] followed by one entry per publication.
/// Choosing Skip, or cancelling, yields `None`.
///
/// # Errors
///
/// Returns [`PromptError`] if the interaction fails.
pub fn ask_publication<'a, P>(
    prompter: &mut P,
    publications: &'a [Publication],
) -> Result<Option<&'a Publication>, PromptError>
where
    P: Prompter + ?Sized,
{
    let items: Vec<String> = std::iter::once(SKIP_LABEL.to_string())
        .chain(publications.iter().map(|p| p.name.clone()))
        .collect();

    let choice = prompter.prompt_select("Publish to", &items)?;

    Ok(choice
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| publications.get(index)))
}

/// [`Prompter`] backed by the terminal via `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Creates a prompter using the colorful theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn cancelled_or<T>(result: Result<T, dialoguer::Error>) -> Result<Option<T>, PromptError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        Self::cancelled_or(
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        )
    }

    fn prompt_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        Self::cancelled_or(
            Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .interact(),
        )
    }

    fn prompt_select(
        &mut self,
        prompt: &str,
        items: &[String],
    ) -> Result<Option<usize>, PromptError> {
        Self::cancelled_or(
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact_opt(),
        )
        .map(Option::flatten)
    }
}

/// One canned answer for a [`ScriptedPrompter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Answer a text or secret prompt.
    Text(String),
    /// Pick the item at this index of a select prompt.
    Choice(usize),
    /// Cancel whatever prompt comes next.
    Cancel,
}

/// A prompt a [`ScriptedPrompter`] was asked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedPrompt {
    /// The prompt label.
    pub prompt: String,
    /// The menu items, for select prompts.
    pub items: Vec<String>,
}

/// [`Prompter`] that replays answers in order and records every prompt.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::prompt::{ask_product_id, ScriptedPrompter};
///
/// let mut prompter = ScriptedPrompter::new().text("632910392");
/// assert_eq!(ask_product_id(&mut prompter).unwrap().as_deref(), Some("632910392"));
/// assert!(prompter.is_exhausted());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    recorded: Vec<RecordedPrompt>,
}

impl ScriptedPrompter {
    /// Creates a prompter with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a text answer.
    #[must_use]
    pub fn text(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(ScriptedAnswer::Text(answer.into()));
        self
    }

    /// Queues a menu choice.
    #[must_use]
    pub fn choice(mut self, index: usize) -> Self {
        self.answers.push_back(ScriptedAnswer::Choice(index));
        self
    }

    /// Queues a cancellation.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(ScriptedAnswer::Cancel);
        self
    }

    /// Returns every prompt asked so far, in order.
    #[must_use]
    pub fn recorded(&self) -> &[RecordedPrompt] {
        &self.recorded
    }

    /// Returns `true` once every queued answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next_answer(&mut self, prompt: &str, items: &[String]) -> Result<ScriptedAnswer, PromptError> {
        self.recorded.push(RecordedPrompt {
            prompt: prompt.to_string(),
            items: items.to_vec(),
        });
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::ScriptExhausted {
                prompt: prompt.to_string(),
            })
    }

    fn next_text(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        match self.next_answer(prompt, &[])? {
            ScriptedAnswer::Text(text) => Ok(Some(text)),
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Choice(_) => Err(PromptError::ScriptMismatch {
                prompt: prompt.to_string(),
            }),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        self.next_text(prompt)
    }

    fn prompt_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        self.next_text(prompt)
    }

    fn prompt_select(
        &mut self,
        prompt: &str,
        items: &[String],
    ) -> Result<Option<usize>, PromptError> {
        match self.next_answer(prompt, items)? {
            ScriptedAnswer::Choice(index) => Ok(Some(index)),
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Text(_) => Err(PromptError::ScriptMismatch {
                prompt: prompt.to_string(),
            }),
        }
    }
}
