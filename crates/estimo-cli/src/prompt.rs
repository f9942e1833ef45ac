//! Terminal prompt over async stdin.
//!
//! Labels go to stderr so piped stdout stays clean. Blocking here is
//! intentional: the session processes one frame at a time, and a
//! prompt suspends the whole read-dispatch cycle until the operator
//! answers.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use estimo_core::error::{EstimoError, Result};

use crate::session::Prompt;

pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for StdinPrompt {
    async fn line(&mut self, label: &str) -> Result<String> {
        eprint!("{label} ");
        match self.lines.next_line().await {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(EstimoError::Internal("input stream closed".into())),
            Err(e) => Err(EstimoError::Internal(format!("read input failed: {e}"))),
        }
    }

    async fn integer(&mut self, label: &str) -> Result<i64> {
        let input = self.line(label).await?;
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| EstimoError::InvalidInput("please enter a valid number".into()))
    }
}
