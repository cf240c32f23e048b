//! The owned storage block underneath a ring: one strategy handle paired
//! with one raw slot array.

use std::alloc::Layout;
use std::marker::PhantomData;
use std::ptr::NonNull;

use carousel_alloc::SlotAlloc;
use carousel_common::{Result, error::Error};

/// A fixed array of uninitialized `T` slots, acquired from a [`SlotAlloc`]
/// exactly once and released exactly once.
///
/// `RawSlab` pairs the strategy handle with the storage pointer; a
/// zero-sized (stateless) strategy contributes zero bytes to the pair, so
/// stateless-strategy containers pay only for the pointer and capacity.
///
/// The slab tracks no element liveness. Callers construct and destroy
/// elements through [`construct`](RawSlab::construct) /
/// [`destroy`](RawSlab::destroy) / [`take`](RawSlab::take) and are
/// responsible for destroying every live element before the slab drops:
/// dropping the slab releases the raw block only.
pub(crate) struct RawSlab<T, A: SlotAlloc> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: SlotAlloc> RawSlab<T, A> {
    /// Acquires a block for `capacity` slots of `T` from `alloc`.
    ///
    /// Zero-sized element types need no backing memory and skip the
    /// strategy entirely, using a well-aligned dangling pointer instead.
    pub fn new(capacity: usize, alloc: A) -> Result<RawSlab<T, A>> {
        let layout = Layout::array::<T>(capacity).map_err(|_| {
            Error::invalid_arg("capacity", "slot array size overflows the address space")
        })?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            alloc.acquire(layout)?.cast::<T>()
        };
        Ok(RawSlab {
            ptr,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the address of the first slot.
    #[inline]
    pub fn base_ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Returns the address of physical slot `index`.
    #[inline]
    pub fn slot_ptr(&self, index: usize) -> NonNull<T> {
        debug_assert!(index < self.capacity);
        unsafe { NonNull::new_unchecked(self.ptr.as_ptr().add(index)) }
    }

    /// Constructs `value` in physical slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and the slot must not hold a live element.
    #[inline]
    pub unsafe fn construct(&self, index: usize, value: T) {
        unsafe { self.alloc.construct_at(self.slot_ptr(index), value) }
    }

    /// Destroys the live element in physical slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and the slot must hold a live element.
    #[inline]
    pub unsafe fn destroy(&self, index: usize) {
        unsafe { self.alloc.destroy_at(self.slot_ptr(index)) }
    }

    /// Moves the element out of physical slot `index`, leaving the slot
    /// uninitialized.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and the slot must hold a live element.
    #[inline]
    pub unsafe fn take(&self, index: usize) -> T {
        unsafe { self.slot_ptr(index).as_ptr().read() }
    }
}

impl<T, A: SlotAlloc> Drop for RawSlab<T, A> {
    fn drop(&mut self) {
        let layout = Layout::array::<T>(self.capacity).expect("layout verified at construction");
        if layout.size() != 0 {
            unsafe { self.alloc.release(self.ptr.cast(), layout) };
        }
    }
}

impl<T, A: SlotAlloc> std::fmt::Debug for RawSlab<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawSlab")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
