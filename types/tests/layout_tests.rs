//! Tests for layout characteristics computed by folding over a list.

use core::mem::{align_of, size_of};

use pretty_assertions::assert_eq;
use static_assertions::const_assert_eq;
use typeseq_types::{Largest, MostAligned, Value, largest, make, most_aligned};

type Scalars = make![char, i64, i32, u32];

const_assert_eq!(largest::<Scalars>(), size_of::<i64>());
const_assert_eq!(most_aligned::<Scalars>(), align_of::<i64>());
const_assert_eq!(largest::<make![]>(), 0);
const_assert_eq!(most_aligned::<make![]>(), 0);

#[repr(C, align(32))]
struct Aligned([u8; 4]);

#[test]
fn test_scalars() {
    assert_eq!(<Largest<Scalars> as Value>::VALUE, 8);
    assert_eq!(<MostAligned<Scalars> as Value>::VALUE, align_of::<i64>());
}

#[test]
fn test_size_and_alignment_come_from_different_elements() {
    type Mixed = make![[u8; 100], Aligned, u16];
    assert_eq!(largest::<Mixed>(), 100);
    assert_eq!(most_aligned::<Mixed>(), 32);
}

#[test]
fn test_zero_sized_elements() {
    assert_eq!(largest::<make![(), [u64; 0]]>(), 0);
    assert_eq!(most_aligned::<make![(), [u64; 0]]>(), align_of::<u64>());
}
