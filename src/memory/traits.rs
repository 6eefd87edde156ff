/*!
 * Memory Traits
 * Randomness capability used by page allocation
 */

use crate::core::types::PageNumber;

/// Source of page draws and page demands
///
/// Both ranges are inclusive. Implementations must return a value inside
/// the requested range.
pub trait PageSource {
    /// Draw a candidate page number in `[first, last]`
    fn draw_page(&mut self, first: PageNumber, last: PageNumber) -> PageNumber;

    /// Draw a page demand in `[min, max]`
    fn draw_demand(&mut self, min: u32, max: u32) -> u32;
}

impl<T: PageSource + ?Sized> PageSource for Box<T> {
    fn draw_page(&mut self, first: PageNumber, last: PageNumber) -> PageNumber {
        (**self).draw_page(first, last)
    }

    fn draw_demand(&mut self, min: u32, max: u32) -> u32 {
        (**self).draw_demand(min, max)
    }
}
