//! Welcome prompt asking the visitor for a display name

use tokio::time::{Duration, Instant};

/// Lifecycle of the welcome prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomePhase {
    /// Waiting for the initial delay before showing the prompt
    Waiting { show_at: Instant },
    /// Prompt is on screen and accepting input
    Prompting,
    /// Answered, dismissed, or never needed
    Done,
}

/// Welcome prompt state
#[derive(Debug, Clone)]
pub struct WelcomePrompt {
    pub phase: WelcomePhase,
    /// Text typed into the prompt so far
    pub input: String,
}

impl WelcomePrompt {
    /// Prompt that appears `delay` after `now`
    pub fn scheduled(now: Instant, delay: Duration) -> Self {
        Self {
            phase: WelcomePhase::Waiting {
                show_at: now + delay,
            },
            input: String::new(),
        }
    }

    /// Prompt that never appears (a name is already cached)
    pub fn done() -> Self {
        Self {
            phase: WelcomePhase::Done,
            input: String::new(),
        }
    }

    /// Show the prompt once its delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        if let WelcomePhase::Waiting { show_at } = self.phase {
            if now >= show_at {
                self.phase = WelcomePhase::Prompting;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == WelcomePhase::Prompting
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Close the prompt, returning the trimmed name if one was entered
    pub fn accept(&mut self) -> Option<String> {
        self.phase = WelcomePhase::Done;
        let name = self.input.trim().to_string();
        self.input.clear();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Close the prompt without a name
    pub fn dismiss(&mut self) {
        self.phase = WelcomePhase::Done;
        self.input.clear();
    }
}
