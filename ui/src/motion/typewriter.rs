/// Reveals phrases one character at a time, holds the finished phrase, then
/// moves on to the next one (wrapping).
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    revealed: usize,
    tick_ms: u64,
    pause_ms: u64,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str], tick_ms: u64, pause_ms: u64) -> Self {
        Self {
            phrases,
            phrase: 0,
            revealed: 0,
            tick_ms,
            pause_ms,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.current_len()
    }

    pub fn visible_text(&self) -> String {
        self.current().chars().take(self.revealed).collect()
    }

    /// Delay before the first [`step`](Self::step).
    pub fn initial_delay_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Advances one beat and returns how long to wait before the next one.
    pub fn step(&mut self) -> u64 {
        if self.phrases.is_empty() {
            return self.tick_ms;
        }
        if self.is_complete() {
            self.phrase = (self.phrase + 1) % self.phrases.len();
            self.revealed = 0;
            return self.tick_ms;
        }
        self.revealed += 1;
        if self.is_complete() {
            self.pause_ms
        } else {
            self.tick_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["ab", "xyz"];

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new(PHRASES, 100, 2_000);
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.step(), 100);
        assert_eq!(tw.visible_text(), "a");
    }

    #[test]
    fn pauses_on_a_finished_phrase_then_advances() {
        let mut tw = Typewriter::new(PHRASES, 100, 2_000);
        tw.step();
        assert_eq!(tw.step(), 2_000);
        assert_eq!(tw.visible_text(), "ab");
        assert!(tw.is_complete());

        assert_eq!(tw.step(), 100);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn wraps_back_to_first_phrase() {
        let mut tw = Typewriter::new(PHRASES, 100, 2_000);
        // "ab" = 2 steps, advance = 1, "xyz" = 3 steps, advance = 1
        for _ in 0..7 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        const ACCENTED: &[&str] = &["¿Qué?"];
        let mut tw = Typewriter::new(ACCENTED, 10, 20);
        tw.step();
        tw.step();
        assert_eq!(tw.visible_text(), "¿Q");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(&[], 100, 2_000);
        assert_eq!(tw.step(), 100);
        assert_eq!(tw.visible_text(), "");
    }
}
