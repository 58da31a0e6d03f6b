//! Typewriter effect for the role line.
//!
//! Types a string one character per tick, holds, erases, then moves on to
//! the next string and wraps around.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(70);
pub const DELETE_DELAY: Duration = Duration::from_millis(40);
pub const HOLD_DELAY: Duration = Duration::from_millis(1800);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    strings: Vec<Vec<char>>,
    current: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            strings: strings
                .into_iter()
                .map(|s| s.as_ref().chars().collect())
                .collect(),
            current: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    /// Visible prefix of the current string
    pub fn text(&self) -> String {
        self.strings
            .get(self.current)
            .map(|chars| chars[..self.visible].iter().collect())
            .unwrap_or_default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let Some(len) = self.strings.get(self.current).map(Vec::len) else {
            return HOLD_DELAY;
        };

        match self.phase {
            Phase::Typing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = Phase::Holding;
                    return HOLD_DELAY;
                }
                TYPE_DELAY
            }
            Phase::Holding => {
                if self.strings.len() == 1 {
                    return HOLD_DELAY;
                }
                self.phase = Phase::Deleting;
                DELETE_DELAY
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.current = (self.current + 1) % self.strings.len();
                    self.phase = Phase::Typing;
                    return TYPE_DELAY;
                }
                DELETE_DELAY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_and_moves_on() {
        let mut tw = Typewriter::new(["ab", "xyz"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "ab");

        // hold -> start deleting
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "ab");
        tw.tick();
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new(["été", "b"]);
        tw.tick();
        assert_eq!(tw.text(), "é");
        tw.tick();
        assert_eq!(tw.text(), "ét");
    }

    #[test]
    fn test_wraps_to_first() {
        let mut tw = Typewriter::new(["a", "b"]);
        for _ in 0..20 {
            tw.tick();
        }
        assert!(tw.current_index() < 2);
    }

    #[test]
    fn test_single_string_stays_put() {
        let mut tw = Typewriter::new(["solo"]);
        for _ in 0..10 {
            tw.tick();
        }
        assert_eq!(tw.text(), "solo");
    }

    #[test]
    fn test_empty_list() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "");
    }
}
