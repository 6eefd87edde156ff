/*!
 * Memory Module
 * Simulated page table with randomized, collision-detecting allocation
 */

pub mod source;
pub mod table;
pub mod traits;
pub mod types;

pub use source::{RandomPageSource, ScriptedPageSource};
pub use table::MemoryTable;
pub use traits::PageSource;
pub use types::Allocation;
