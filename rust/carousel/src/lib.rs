//! # Carousel: Fixed-Capacity Circular Sequence Containers
//!
//! Carousel provides bounded, in-place circular buffers whose raw storage
//! comes from a pluggable allocation strategy. A container acquires exactly
//! one storage block for its entire lifetime; elements are constructed and
//! destroyed in place within it, and nothing is ever reallocated or
//! relocated.
//!
//! ## Key Properties
//!
//! * **One block, one owner**: storage is acquired once at construction,
//!   released once at destruction, and exclusively owned in between. Moving
//!   a container transfers the block in a single step without touching any
//!   element.
//! * **Pluggable allocation**: any [`ring::RingBuffer`] is parameterized
//!   over a [`support::alloc::SlotAlloc`] strategy. Stateless strategies
//!   (the global allocator) cost zero bytes per container; stateful ones
//!   (a shared byte budget) gate acquisition and report failure as an
//!   ordinary error.
//! * **Checked conditions, explicit contracts**: full rings, empty rings
//!   and out-of-range reads report through return values; only
//!   contract-violating indexing panics.
//!
//! ## Module Organization
//!
//! * [`ring`] - The `RingBuffer` container and its iterators
//! * [`common`] - Shared error and result types
//!
//! ### Support Modules
//!
//! * [`support::alloc`] - The `SlotAlloc` strategy trait and the built-in
//!   strategies
//!
//! ## Getting Started
//!
//! ```
//! use carousel::ring::RingBuffer;
//!
//! let mut recent = RingBuffer::new(2)?;
//! recent.push_back("first");
//! recent.push_back("second");
//! assert_eq!(recent.push_back("third"), Some("first"));
//! # Ok::<(), carousel::common::error::Error>(())
//! ```

pub use carousel_common as common;
pub use carousel_ring as ring;

pub mod support {
    pub use carousel_alloc as alloc;
}
