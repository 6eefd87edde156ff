/*!
 * Page Table Property Tests
 * Ownership invariants under random allocation and release
 */

use procsim::{MemoryTable, Process, RandomPageSource};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_table_stays_consistent(
        seed in any::<u64>(),
        demands in prop::collection::vec(0u32..=3, 1..12),
        frees in prop::collection::vec(any::<bool>(), 12),
    ) {
        let mut table = MemoryTable::with_range(1, 8);
        let mut source = RandomPageSource::seeded(seed);
        let mut procs: Vec<Process> = demands
            .iter()
            .enumerate()
            .map(|(i, d)| Process::with_memory_pages(format!("p{}", i), i.to_string(), 0.0, 1, 1, *d))
            .collect();

        for i in 0..procs.len() {
            let before = procs[i].page_faults;
            let allocation = table.allocate(&mut procs[i], &mut source);

            prop_assert!(procs[i].page_faults >= before);
            prop_assert_eq!(procs[i].page_faults - before, allocation.faults.len() as u32);
            prop_assert!(allocation.held <= procs[i].memory_pages);
            prop_assert!(allocation.attempts <= 10 * procs[i].memory_pages);
            prop_assert!(table.is_consistent_with(&procs));

            if frees[i] {
                table.free(&mut procs[i]);
                prop_assert!(procs[i].allocated_pages.is_empty());
                prop_assert!(table.pages_of(&procs[i].id).is_empty());
            }
        }

        for p in procs.iter_mut() {
            table.free(p);
        }
        prop_assert!(table.is_empty());
    }

    #[test]
    fn prop_met_demand_means_no_shortfall(seed in any::<u64>(), demand in 1u32..=3) {
        let mut table = MemoryTable::new();
        let mut source = RandomPageSource::seeded(seed);
        let mut p = Process::with_memory_pages("solo", "1", 0.0, 1, 1, demand);

        let allocation = table.allocate(&mut p, &mut source);

        prop_assert_eq!(allocation.is_short(), allocation.held < demand);
        prop_assert_eq!(allocation.held as usize, table.len());
        prop_assert_eq!(allocation.granted.len(), p.allocated_pages.len());
    }
}
