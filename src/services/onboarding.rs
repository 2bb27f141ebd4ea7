use serde::Serialize;

use crate::seed::ONBOARDING_STEPS;

/// Step cursor clamped to `0..total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingProgress {
    current: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
pub struct OnboardingView {
    pub step: usize,
    pub total_steps: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub has_previous: bool,
    pub has_next: bool,
}

impl OnboardingProgress {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.total {
            self.current += 1;
        }
    }

    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn view(&self) -> OnboardingView {
        let current = self.current();
        let step = &ONBOARDING_STEPS[current.min(ONBOARDING_STEPS.len() - 1)];
        OnboardingView {
            step: current,
            total_steps: self.total,
            title: step.title,
            description: step.description,
            has_previous: self.current > 0,
            has_next: self.current + 1 < self.total,
        }
    }
}

impl Default for OnboardingProgress {
    fn default() -> Self {
        Self::new(ONBOARDING_STEPS.len())
    }
}
