/*!
 * Engine Memory Operations
 * Page allocation and release with reporting
 */

use super::ProcessManager;
use crate::core::types::PageNumber;
use crate::memory::Allocation;
use crate::monitoring::SimEvent;
use crate::process::ProcessResult;
use tracing::{debug, warn};

impl ProcessManager {
    /// Claim pages for the process at `index`
    ///
    /// Page faults are counted on the process. A shortfall is reported and
    /// the process proceeds with the pages it got.
    pub fn allocate(&mut self, index: usize) -> ProcessResult<Allocation> {
        self.check_index(index)?;

        let (name, id, demand) = {
            let p = &self.processes[index];
            (p.name.clone(), p.id.clone(), p.memory_pages)
        };
        self.emit(SimEvent::AllocationStarted {
            name: name.clone(),
            id: id.clone(),
            pages: demand,
        });

        let process = &mut self.processes[index];
        let faults_before = process.page_faults;
        let allocation = self.memory.allocate(process, &mut *self.pages);

        // Faults and grants are reported in draw order per kind
        for (n, page) in allocation.faults.iter().enumerate() {
            self.emit(SimEvent::PageFault {
                name: name.clone(),
                page: *page,
                total_faults: faults_before + n as u32 + 1,
            });
        }
        for page in &allocation.granted {
            self.emit(SimEvent::PageGranted {
                name: name.clone(),
                page: *page,
            });
        }

        if allocation.is_short() {
            warn!(
                process = %name,
                held = allocation.held,
                requested = allocation.requested,
                attempts = allocation.attempts,
                "Allocation budget exhausted"
            );
            self.emit(SimEvent::AllocationShort {
                name,
                held: allocation.held,
                requested: allocation.requested,
            });
        } else {
            debug!(
                process = %name,
                pages = ?allocation.granted,
                faults = allocation.faults.len(),
                "Pages allocated"
            );
        }

        Ok(allocation)
    }

    /// Release every page held by the process at `index`
    pub fn free(&mut self, index: usize) -> ProcessResult<Vec<PageNumber>> {
        self.check_index(index)?;

        let process = &mut self.processes[index];
        let released = self.memory.free(process);
        let name = process.name.clone();

        debug!(process = %name, pages = ?released, "Pages released");
        self.emit(SimEvent::MemoryFreed {
            name,
            pages: released.clone(),
        });
        Ok(released)
    }
}
