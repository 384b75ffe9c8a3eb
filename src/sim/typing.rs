//! Typewriter text effect
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. Each `tick` yields the text to show and how long
//! to wait before the next tick.

use crate::config::TypingConfig;

/// One tick's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    /// Characters currently shown
    shown: usize,
    deleting: bool,
    config: TypingConfig,
}

impl TypingEffect {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase: 0,
            shown: 0,
            deleting: false,
            config,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Advance one character. `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let full = self.phrases.get(self.phrase)?;

        if full.is_empty() {
            // Skip blank phrases instead of stalling on them
            self.phrase = (self.phrase + 1) % self.phrases.len();
            return Some(TypingFrame {
                text: String::new(),
                delay_ms: self.config.type_delay_ms,
            });
        }

        if !self.deleting {
            self.shown += 1;
            let text = full[..self.shown].iter().collect();
            if self.shown == full.len() {
                self.deleting = true;
                return Some(TypingFrame {
                    text,
                    delay_ms: self.config.hold_delay_ms,
                });
            }
            return Some(TypingFrame {
                text,
                delay_ms: self.config.type_delay_ms,
            });
        }

        self.shown -= 1;
        let text = full[..self.shown].iter().collect();
        if self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
        let delay_ms = if self.deleting {
            self.config.delete_delay_ms
        } else {
            self.config.type_delay_ms
        };
        Some(TypingFrame { text, delay_ms })
    }
}
