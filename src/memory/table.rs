/*!
 * Memory Table
 *
 * Page ownership for the simulated address space.
 *
 * ## Allocation
 *
 * A process asks for `memory_pages` distinct pages. Candidate pages are
 * drawn uniformly from the address space:
 * - A vacant page is claimed and recorded on both sides (table and process).
 * - An occupied page counts as a page fault on the process and the draw is
 *   retried.
 *
 * At most `ALLOC_RETRY_FACTOR × memory_pages` draws are made. When the budget
 * runs out the process keeps the pages it got, possibly none.
 *
 * ## Invariants
 *
 * - Each page maps to at most one process id.
 * - Every page in a process's `allocated_pages` maps to that process's id.
 */

use super::traits::PageSource;
use super::types::Allocation;
use crate::core::limits::{ALLOC_RETRY_FACTOR, FIRST_PAGE, LAST_PAGE};
use crate::core::types::PageNumber;
use crate::process::Process;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Page number to owning process id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTable {
    pages: BTreeMap<PageNumber, String>,
    first_page: PageNumber,
    last_page: PageNumber,
}

impl MemoryTable {
    /// Table over the standard address space
    pub fn new() -> Self {
        Self::with_range(FIRST_PAGE, LAST_PAGE)
    }

    /// Table over a custom inclusive address space (useful for testing)
    pub fn with_range(first_page: PageNumber, last_page: PageNumber) -> Self {
        let (first_page, last_page) = if first_page <= last_page {
            (first_page, last_page)
        } else {
            (last_page, first_page)
        };
        Self {
            pages: BTreeMap::new(),
            first_page,
            last_page,
        }
    }

    /// Claim pages for `process` until its demand is met or the draw budget
    /// is spent
    pub fn allocate(&mut self, process: &mut Process, source: &mut dyn PageSource) -> Allocation {
        let requested = process.memory_pages;
        let budget = ALLOC_RETRY_FACTOR.saturating_mul(requested);
        let mut allocation = Allocation::new(requested);

        while (process.allocated_pages.len() as u32) < requested && allocation.attempts < budget {
            let page = source.draw_page(self.first_page, self.last_page);
            allocation.attempts += 1;

            match self.pages.entry(page) {
                Entry::Vacant(slot) => {
                    slot.insert(process.id.clone());
                    process.allocated_pages.insert(page);
                    allocation.granted.push(page);
                }
                Entry::Occupied(_) => {
                    process.page_faults += 1;
                    allocation.faults.push(page);
                }
            }
        }

        allocation.held = process.allocated_pages.len() as u32;
        allocation
    }

    /// Release every page the process holds
    ///
    /// Pages already missing from the table are skipped. Returns the pages
    /// that were held, in ascending order.
    pub fn free(&mut self, process: &mut Process) -> Vec<PageNumber> {
        let released: Vec<PageNumber> = std::mem::take(&mut process.allocated_pages)
            .into_iter()
            .collect();
        for page in &released {
            self.pages.remove(page);
        }
        released
    }

    /// Owner id of `page`, if claimed
    pub fn owner(&self, page: PageNumber) -> Option<&str> {
        self.pages.get(&page).map(String::as_str)
    }

    /// Pages currently mapped to process id `id`
    pub fn pages_of(&self, id: &str) -> Vec<PageNumber> {
        self.pages
            .iter()
            .filter(|(_, owner)| owner.as_str() == id)
            .map(|(page, _)| *page)
            .collect()
    }

    /// Claimed pages as (page, owner id), ascending by page
    pub fn entries(&self) -> impl Iterator<Item = (PageNumber, &str)> {
        self.pages.iter().map(|(page, owner)| (*page, owner.as_str()))
    }

    /// Number of claimed pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Size of the address space
    pub fn capacity(&self) -> usize {
        (self.last_page - self.first_page) as usize + 1
    }

    pub fn range(&self) -> (PageNumber, PageNumber) {
        (self.first_page, self.last_page)
    }

    /// Check table and process views agree
    ///
    /// Every claimed page belongs to a process that lists it, and every page
    /// a process lists is claimed under its id.
    pub fn is_consistent_with(&self, processes: &[Process]) -> bool {
        let claimed_ok = self.pages.iter().all(|(page, owner)| {
            processes
                .iter()
                .any(|p| &p.id == owner && p.allocated_pages.contains(page))
        });
        let held_ok = processes.iter().all(|p| {
            p.allocated_pages
                .iter()
                .all(|page| self.owner(*page) == Some(p.id.as_str()))
        });
        claimed_ok && held_ok
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new()
    }
}
