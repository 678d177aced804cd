use serde::Serialize;

/// Client-side "load more": a reveal count raised in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealWindow {
    step: usize,
    revealed: usize,
}

impl RevealWindow {
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self { step, revealed: step }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of items shown out of `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.revealed.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.revealed < total
    }

    /// Reveals the next step. Does nothing once everything is shown.
    pub fn load_more(&mut self, total: usize) -> usize {
        if self.has_more(total) {
            self.revealed = self.revealed.saturating_add(self.step);
        }
        self.visible_count(total)
    }

    pub fn reset(&mut self) {
        self.revealed = self.step;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }
}
