//! A stateful strategy that charges acquisitions against a shared byte
//! budget.

use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use carousel_common::{Result, error::Error};

use crate::{GlobalSlots, SlotAlloc};

/// A [`SlotAlloc`] that limits the total number of bytes outstanding.
///
/// Every acquired block is charged against a budget shared by all clones of
/// the strategy handle; once the budget cannot cover a request, acquisition
/// fails. Releasing a block credits its size back.
///
/// The underlying memory comes from [`GlobalSlots`]; the budget only gates
/// it.
///
/// # Examples
///
/// ```
/// use std::alloc::Layout;
/// use carousel_alloc::{BudgetedSlots, SlotAlloc};
///
/// let slots = BudgetedSlots::new(768);
/// let layout = Layout::array::<u64>(64).unwrap();
///
/// let block = slots.acquire(layout).unwrap();
/// assert_eq!(slots.remaining(), 256);
/// assert!(slots.acquire(layout).is_err());
///
/// unsafe { slots.release(block, layout) };
/// assert_eq!(slots.remaining(), 768);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetedSlots {
    remaining: Arc<AtomicUsize>,
}

impl BudgetedSlots {
    /// Creates a strategy with `budget` bytes available.
    pub fn new(budget: usize) -> BudgetedSlots {
        BudgetedSlots {
            remaining: Arc::new(AtomicUsize::new(budget)),
        }
    }

    /// Returns the number of bytes still available.
    ///
    /// Primarily a diagnostic: the value may be outdated as soon as it is
    /// read when clones of the handle allocate concurrently.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Relaxed)
    }

    fn charge(&self, amount: usize) -> bool {
        let mut current = self.remaining.load(Ordering::Relaxed);
        while current >= amount {
            match self.remaining.compare_exchange_weak(
                current,
                current - amount,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(updated) => current = updated,
            }
        }
        false
    }

    fn credit(&self, amount: usize) {
        self.remaining.fetch_add(amount, Ordering::Release);
    }
}

unsafe impl SlotAlloc for BudgetedSlots {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>> {
        if !self.charge(layout.size()) {
            return Err(Error::allocation_failed(
                layout.size(),
                "slot budget exhausted",
            ));
        }
        match GlobalSlots.acquire(layout) {
            Ok(ptr) => Ok(ptr),
            Err(e) => {
                self.credit(layout.size());
                Err(e)
            }
        }
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { GlobalSlots.release(ptr, layout) };
        self.credit(layout.size());
    }
}
