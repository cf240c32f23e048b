use std::alloc::Layout;

use carousel_common::error::ErrorKind;

use crate::{BudgetedSlots, GlobalSlots, SlotAlloc};

#[test]
fn test_global_acquire_release() {
    let layout = Layout::array::<u64>(16).unwrap();
    let ptr = GlobalSlots.acquire(layout).unwrap();
    assert!((ptr.as_ptr() as usize).is_multiple_of(layout.align()));
    unsafe { GlobalSlots.release(ptr, layout) };
}

#[test]
fn test_global_construct_destroy() {
    let layout = Layout::new::<String>();
    let ptr = GlobalSlots.acquire(layout).unwrap().cast::<String>();
    unsafe {
        GlobalSlots.construct_at(ptr, String::from("slot"));
        assert_eq!(ptr.as_ref(), "slot");
        GlobalSlots.destroy_at(ptr);
        GlobalSlots.release(ptr.cast(), layout);
    }
}

#[test]
fn test_budget_charges_and_credits() {
    let slots = BudgetedSlots::new(256);
    let layout = Layout::array::<u8>(100).unwrap();

    let a = slots.acquire(layout).unwrap();
    assert_eq!(slots.remaining(), 156);
    let b = slots.acquire(layout).unwrap();
    assert_eq!(slots.remaining(), 56);

    let err = slots.acquire(layout).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::AllocationFailed { size: 100, .. }
    ));
    assert_eq!(slots.remaining(), 56, "failed acquire must not charge");

    unsafe {
        slots.release(a, layout);
        slots.release(b, layout);
    }
    assert_eq!(slots.remaining(), 256);
}

#[test]
fn test_budget_zero_refuses() {
    let slots = BudgetedSlots::new(0);
    let layout = Layout::new::<u64>();
    assert!(slots.acquire(layout).is_err());
}

#[test]
fn test_budget_shared_between_clones() {
    let slots = BudgetedSlots::new(64);
    let other = slots.clone();
    let layout = Layout::array::<u8>(64).unwrap();

    let block = other.acquire(layout).unwrap();
    assert_eq!(slots.remaining(), 0);
    assert!(slots.acquire(Layout::new::<u8>()).is_err());

    unsafe { slots.release(block, layout) };
    assert_eq!(other.remaining(), 64);
}

#[test]
fn test_acquired_block_is_usable() {
    let layout = Layout::array::<u32>(8).unwrap();
    let ptr = GlobalSlots.acquire(layout).unwrap().cast::<u32>();
    unsafe {
        for i in 0..8 {
            ptr.as_ptr().add(i).write(i as u32 * 7);
        }
        for i in 0..8 {
            assert_eq!(ptr.as_ptr().add(i).read(), i as u32 * 7);
        }
        GlobalSlots.release(ptr.cast(), layout);
    }
}
