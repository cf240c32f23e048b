//! A fixed-capacity circular buffer with pluggable slot allocation.
//!
//! [`RingBuffer`] owns exactly one raw storage block, acquired once at
//! construction from a [`SlotAlloc`](carousel_alloc::SlotAlloc) strategy and
//! released once at destruction. Elements are constructed and destroyed in
//! place within that block; the buffer never reallocates and never relocates
//! a live element. Logical rotation is pure index arithmetic over the fixed
//! slots.

mod raw_slab;

pub mod iter;
pub mod ring;

pub use ring::{RingBuffer, RingFull};
