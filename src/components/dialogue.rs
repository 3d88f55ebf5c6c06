//! Character-by-character text reveal.
//!
//! [`TextReveal`] holds a script of lines and the progress of revealing it.
//! It is time-driven: callers pass the current time (seconds, usually
//! [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime)) to
//! [`TextReveal::advance`] once per tick and read [`TextReveal::shown`].
//!
//! # Pacing
//!
//! - One character per `char_delay`.
//! - After the last character of a line, wait `line_pause` before the next
//!   line replaces it (its first character appears right away).
//! - After the last character of the script, wait `end_pause`;
//!   [`TextReveal::is_done`] only turns true once that pause has elapsed.
//!
//! # Related
//!
//! - [`crate::triggers::intro::RevealTrigger`] – drives this component from a sequencer

use bevy_ecs::prelude::Component;

/// Delays between reveal steps, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub char_delay: f32,
    pub line_pause: f32,
    pub end_pause: f32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming {
            char_delay: 0.05,
            line_pause: 1.0,
            end_pause: 3.0,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct TextReveal {
    lines: Vec<String>,
    timing: RevealTiming,
    line: usize,
    /// Characters of the current line on display.
    chars: usize,
    last_write: Option<f32>,
    delay: f32,
    finished: bool,
    shown: String,
}

impl TextReveal {
    pub fn new(lines: Vec<String>, timing: RevealTiming) -> Self {
        let finished = lines.is_empty();
        TextReveal {
            lines,
            timing,
            line: 0,
            chars: 0,
            last_write: None,
            delay: timing.char_delay,
            finished,
            shown: String::new(),
        }
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S], timing: RevealTiming) -> Self {
        Self::new(lines.iter().map(|l| l.as_ref().to_string()).collect(), timing)
    }

    /// Text currently on display.
    pub fn shown(&self) -> &str {
        &self.shown
    }

    pub fn line_index(&self) -> usize {
        self.line
    }

    pub fn char_index(&self) -> usize {
        self.chars
    }

    /// All characters of the script are out (the end pause may still run).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Delay that must pass after the last write before the next step.
    pub fn current_delay(&self) -> f32 {
        self.delay
    }

    fn elapsed_since_write(&self, now: f32) -> f32 {
        self.last_write.map_or(f32::INFINITY, |t| now - t)
    }

    fn current_line(&self) -> &str {
        self.lines.get(self.line).map_or("", String::as_str)
    }

    fn line_len(&self) -> usize {
        self.current_line().chars().count()
    }

    /// Reveal the next step if its delay has passed.
    ///
    /// Entering a new line shows its first character without counting it;
    /// the following step shows it again and moves on from there.
    ///
    /// Returns `true` when [`shown`](Self::shown) changed.
    pub fn advance(&mut self, now: f32) -> bool {
        if self.finished || self.elapsed_since_write(now) < self.delay {
            return false;
        }
        self.delay = self.timing.char_delay;
        self.last_write = Some(now);

        let has_more_lines = self.line + 1 < self.lines.len();
        let shown: String = if self.chars < self.line_len() {
            self.chars += 1;
            if self.chars >= self.line_len() {
                if has_more_lines {
                    self.delay = self.timing.line_pause;
                } else {
                    self.finished = true;
                    self.delay = self.timing.end_pause;
                }
            }
            self.current_line().chars().take(self.chars).collect()
        } else if has_more_lines {
            self.line += 1;
            self.chars = 0;
            self.current_line().chars().take(1).collect()
        } else {
            self.finished = true;
            self.delay = self.timing.end_pause;
            return false;
        };

        if shown == self.shown {
            return false;
        }
        self.shown = shown;
        true
    }

    /// Finished, and the end pause has fully elapsed.
    pub fn is_done(&self, now: f32) -> bool {
        self.finished && self.elapsed_since_write(now) >= self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> RevealTiming {
        RevealTiming {
            char_delay: 0.25,
            line_pause: 0.5,
            end_pause: 1.0,
        }
    }

    /// Tick every `step` seconds until `until`, recording each new text.
    fn play(reveal: &mut TextReveal, step: f32, until: f32) -> Vec<(f32, String)> {
        let mut shown = Vec::new();
        let mut now = 0.0;
        while now <= until {
            if reveal.advance(now) {
                shown.push((now, reveal.shown().to_string()));
            }
            now += step;
        }
        shown
    }

    #[test]
    fn test_reveal_order_with_pauses() {
        let mut reveal = TextReveal::from_lines(&["HI", "BYE"], timing());
        let shown = play(&mut reveal, 0.25, 3.0);
        assert_eq!(
            shown,
            vec![
                (0.0, "H".to_string()),
                (0.25, "HI".to_string()),
                (0.75, "B".to_string()),
                (1.25, "BY".to_string()),
                (1.5, "BYE".to_string()),
            ]
        );
        assert!(reveal.is_finished());
        assert_eq!(reveal.line_index(), 1);
        assert_eq!(reveal.char_index(), 3);
    }

    #[test]
    fn test_done_waits_for_end_pause() {
        let mut reveal = TextReveal::from_lines(&["HI", "BYE"], timing());
        play(&mut reveal, 0.25, 1.5);
        assert!(reveal.is_finished());
        assert!(!reveal.is_done(1.5));
        assert!(!reveal.is_done(2.25));
        assert!(reveal.is_done(2.5));
        // nothing moves once finished
        assert!(!reveal.advance(5.0));
        assert_eq!(reveal.shown(), "BYE");
    }

    #[test]
    fn test_no_step_before_delay() {
        let mut reveal = TextReveal::from_lines(&["ABC"], timing());
        assert!(reveal.advance(1.0));
        assert!(!reveal.advance(1.1));
        assert_eq!(reveal.shown(), "A");
        assert!(reveal.advance(1.25));
        assert_eq!(reveal.shown(), "AB");
    }

    #[test]
    fn test_line_pause_only_between_lines() {
        let mut reveal = TextReveal::from_lines(&["A", "B"], timing());
        assert!(reveal.advance(0.0));
        assert!(!reveal.is_finished());
        assert_eq!(reveal.current_delay(), 0.5);
        assert!(reveal.advance(0.5));
        assert_eq!(reveal.shown(), "B");
        assert!(!reveal.is_finished());
        assert_eq!(reveal.current_delay(), 0.25);
        assert!(!reveal.advance(0.75));
        assert!(reveal.is_finished());
        assert_eq!(reveal.current_delay(), 1.0);
    }

    #[test]
    fn test_new_line_starts_at_first_char() {
        let mut reveal = TextReveal::from_lines(&["HI", "BYE"], timing());
        play(&mut reveal, 0.25, 0.75);
        assert_eq!(reveal.line_index(), 1);
        assert_eq!(reveal.char_index(), 0);
        assert_eq!(reveal.shown(), "B");
    }

    #[test]
    fn test_single_char_last_line_finishes_one_step_later() {
        let mut reveal = TextReveal::from_lines(&["HI", "B"], timing());
        let shown = play(&mut reveal, 0.25, 0.75);
        assert_eq!(shown.last(), Some(&(0.75, "B".to_string())));
        assert!(!reveal.is_finished());

        assert!(!reveal.advance(1.0));
        assert!(reveal.is_finished());
        assert_eq!(reveal.char_index(), 1);
        assert!(!reveal.is_done(1.75));
        assert!(reveal.is_done(2.0));
    }

    #[test]
    fn test_empty_script_is_done_immediately() {
        let mut reveal = TextReveal::new(Vec::new(), timing());
        assert!(reveal.is_finished());
        assert!(reveal.is_done(0.0));
        assert!(!reveal.advance(0.0));
        assert_eq!(reveal.shown(), "");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut reveal = TextReveal::from_lines(&["ÅÖ"], timing());
        assert!(reveal.advance(0.0));
        assert_eq!(reveal.shown(), "Å");
        assert!(reveal.advance(0.25));
        assert_eq!(reveal.shown(), "ÅÖ");
        assert!(reveal.is_finished());
    }
}
