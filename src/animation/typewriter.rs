use crate::config::{
    DELETE_DELAY, HEADLINE_PHRASES, HOLD_DELAY, NEXT_PHRASE_DELAY, TYPE_DELAY,
    TYPING_START_DELAY,
};

/// Headline that types and deletes a rotating list of phrases.
///
/// Each step adds or removes one character and schedules the next step;
/// full phrases are held before deleting, and empty text waits briefly
/// before the next phrase starts.
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    /// Characters of the current phrase shown
    shown: usize,
    deleting: bool,
    next_step: f64,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, start: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase: 0,
            shown: 0,
            deleting: false,
            next_step: start,
        }
    }

    /// Headline phrases, first step after the initial delay
    pub fn headline() -> Self {
        Self::new(HEADLINE_PHRASES, TYPING_START_DELAY)
    }

    /// Run every step due by `time`
    pub fn update(&mut self, time: f64) {
        if self.phrases.is_empty() {
            return;
        }
        while time >= self.next_step {
            let delay = self.step();
            self.next_step += delay;
        }
    }

    /// Advance one character; returns the delay before the next step
    fn step(&mut self) -> f64 {
        let len = self.phrases[self.phrase].chars().count();

        let mut delay = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.shown = (self.shown + 1).min(len);
            TYPE_DELAY
        };

        if !self.deleting && self.shown == len {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = NEXT_PHRASE_DELAY;
        }
        delay
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        match self.phrases.get(self.phrase) {
            Some(phrase) => phrase.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_start_delay() {
        let mut typer = Typewriter::headline();
        typer.update(0.99);
        assert_eq!(typer.text(), "");
        typer.update(1.0);
        assert_eq!(typer.text(), "W");
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut typer = Typewriter::new(["abc"], 0.0);
        typer.update(0.0);
        assert_eq!(typer.text(), "a");
        typer.update(0.1);
        assert_eq!(typer.text(), "ab");
        typer.update(0.2);
        assert_eq!(typer.text(), "abc");
    }

    #[test]
    fn test_holds_then_deletes_then_next_phrase() {
        let mut typer = Typewriter::new(["ab", "xy"], 0.0);
        // "a" at 0.0, "ab" at 0.1, then hold 2s
        typer.update(2.05);
        assert_eq!(typer.text(), "ab");
        // Delete steps at 2.1 and 2.15
        typer.update(2.11);
        assert_eq!(typer.text(), "a");
        typer.update(2.16);
        assert_eq!(typer.text(), "");
        // Next phrase begins 0.5s later
        typer.update(2.6);
        assert_eq!(typer.text(), "");
        typer.update(2.66);
        assert_eq!(typer.text(), "x");
    }

    #[test]
    fn test_wraps_around_phrases() {
        let mut typer = Typewriter::new(["a"], 0.0);
        for _ in 0..50 {
            typer.update(typer.next_step);
            assert!(typer.text().len() <= 1);
        }
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut typer = Typewriter::new(Vec::<String>::new(), 0.0);
        typer.update(10.0);
        assert_eq!(typer.text(), "");
    }
}
