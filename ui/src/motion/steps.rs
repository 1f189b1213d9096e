/// Highlight cursor over a fixed number of ordered steps, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCycle {
    active: usize,
    len: usize,
}

impl StepCycle {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_five_steps() {
        let mut cycle = StepCycle::new(5);
        let mut seen = vec![cycle.active()];
        for _ in 0..6 {
            cycle.advance();
            seen.push(cycle.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn exactly_one_step_is_highlighted() {
        let mut cycle = StepCycle::new(5);
        cycle.advance();
        cycle.advance();
        let lit: Vec<_> = (0..5).filter(|i| cycle.is_active(*i)).collect();
        assert_eq!(lit, vec![2]);
    }

    #[test]
    fn zero_steps_never_highlights() {
        let mut cycle = StepCycle::new(0);
        cycle.advance();
        assert!(!cycle.is_active(0));
    }
}
