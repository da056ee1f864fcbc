//! Boot animation sequence.
//!
//! A timer drives [`BootSequence::tick`]; each tick yields one line until the
//! sequence is exhausted.

/// What a timer tick should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
    /// Print this line and keep the timer running
    Line(&'static str),
    /// Stop the timer and hand over to the prompt
    Done,
}

#[derive(Clone, Debug)]
pub struct BootSequence {
    lines: &'static [&'static str],
    next: usize,
}

impl BootSequence {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self { lines, next: 0 }
    }

    pub fn tick(&mut self) -> BootStep {
        match self.lines.get(self.next).copied() {
            Some(line) => {
                self.next += 1;
                BootStep::Line(line)
            }
            None => BootStep::Done,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.lines.len()
    }
}
