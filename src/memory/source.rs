/*!
 * Page Sources
 * Uniform random draws and scripted draws for deterministic runs
 */

use super::traits::PageSource;
use crate::core::types::PageNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Uniform page source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct RandomPageSource {
    rng: StdRng,
}

impl RandomPageSource {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomPageSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PageSource for RandomPageSource {
    fn draw_page(&mut self, first: PageNumber, last: PageNumber) -> PageNumber {
        self.rng.gen_range(first..=last)
    }

    fn draw_demand(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }
}

/// Replays scripted draws, then falls back to deterministic values
///
/// Scripted values are clamped into the requested range. Once the page
/// script is exhausted pages are handed out sequentially, wrapping at the
/// end of the range. Once the demand script is exhausted the minimum
/// demand is returned.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPageSource {
    pages: VecDeque<PageNumber>,
    demands: VecDeque<u32>,
    next_page: Option<PageNumber>,
}

impl ScriptedPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(mut self, pages: impl IntoIterator<Item = PageNumber>) -> Self {
        self.pages.extend(pages);
        self
    }

    pub fn with_demands(mut self, demands: impl IntoIterator<Item = u32>) -> Self {
        self.demands.extend(demands);
        self
    }

    /// Scripted page draws not yet consumed
    pub fn pending_pages(&self) -> usize {
        self.pages.len()
    }
}

impl PageSource for ScriptedPageSource {
    fn draw_page(&mut self, first: PageNumber, last: PageNumber) -> PageNumber {
        if let Some(page) = self.pages.pop_front() {
            return page.clamp(first, last);
        }

        let page = match self.next_page {
            Some(page) if (first..=last).contains(&page) => page,
            _ => first,
        };
        self.next_page = Some(if page >= last { first } else { page + 1 });
        page
    }

    fn draw_demand(&mut self, min: u32, max: u32) -> u32 {
        self.demands
            .pop_front()
            .map(|d| d.clamp(min, max))
            .unwrap_or(min)
    }
}
