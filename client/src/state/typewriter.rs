//! Typed-headline animation for the hero section.
//!
//! Pure step machine: the caller renders `text()` and waits the delay returned
//! by each `tick()` before calling it again. Types one character at a time,
//! holds the full phrase, deletes it, then moves on to the next phrase.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

pub const TYPE_DELAY_MS: u32 = 50;
pub const DELETE_DELAY_MS: u32 = 30;
pub const HOLD_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { phrases: phrases.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> u32 {
        let Some(len) = self.current_len() else {
            return HOLD_DELAY_MS;
        };
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    HOLD_DELAY_MS
                } else {
                    TYPE_DELAY_MS
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                DELETE_DELAY_MS
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    TYPE_DELAY_MS
                } else {
                    DELETE_DELAY_MS
                }
            }
        }
    }

    /// Currently visible prefix of the active phrase.
    #[must_use]
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    fn current_len(&self) -> Option<usize> {
        self.phrases.get(self.index).map(|p| p.chars().count())
    }
}
