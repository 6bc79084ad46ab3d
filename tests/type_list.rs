//! End-to-end checks through the `typeseq` facade: the compile-time answers
//! and the run-time answers from `reflect` must agree.

use pretty_assertions::assert_eq;
use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typeseq::{
    First, Inc, Largest, MostAligned, N1, N2, N3, N4, Rest, Transformed, Value, contains, equal,
    largest, make, most_aligned, reflect::DynTypeList, size,
};

type Numbers = make![N1, N2, N3];
type PlusOne = Transformed<Numbers, Inc>;
type Scalars = make![char, i64, i32, u32];

const_assert_eq!(size::<Numbers>(), 3);

const_assert!(contains::<Numbers, N1>());
const_assert!(contains::<Numbers, N2>());
const_assert!(contains::<Numbers, N3>());
const_assert!(!contains::<Numbers, N4>());
const_assert!(!contains::<Numbers, char>());

const_assert!(!contains::<PlusOne, N1>());
const_assert!(contains::<PlusOne, N2>());
const_assert!(contains::<PlusOne, N3>());
const_assert!(contains::<PlusOne, N4>());

const_assert!(equal::<Numbers, Numbers>());
const_assert!(equal::<Numbers, make![N1, N2, N3]>());
const_assert!(!equal::<Numbers, make![N1, N2]>());
const_assert!(!equal::<Numbers, make![N1, N2, N3, N4]>());
const_assert!(!equal::<Numbers, PlusOne>());

assert_type_eq_all!(First<Rest<PlusOne>>, N3);

fn values<L>() -> [usize; 3]
where
    L: typeseq::NonEmpty,
    First<L>: Value,
    Rest<L>: typeseq::NonEmpty,
    First<Rest<L>>: Value,
    Rest<Rest<L>>: typeseq::NonEmpty,
    First<Rest<Rest<L>>>: Value,
{
    [
        <First<L> as Value>::VALUE,
        <First<Rest<L>> as Value>::VALUE,
        <First<Rest<Rest<L>>> as Value>::VALUE,
    ]
}

#[test]
fn test_numbers() {
    assert_eq!(size::<Numbers>(), 3);
    assert_eq!(values::<Numbers>(), [1, 2, 3]);
    assert_eq!(size::<PlusOne>(), 3);
    assert_eq!(values::<PlusOne>(), [2, 3, 4]);
}

#[test]
fn test_type_characteristics() {
    assert_eq!(<Largest<Scalars> as Value>::VALUE, 8);
    assert_eq!(<MostAligned<Scalars> as Value>::VALUE, align_of::<i64>());
}

#[test]
fn test_reflect_agrees() {
    let numbers = DynTypeList::of::<Numbers>();
    let scalars = DynTypeList::of::<Scalars>();

    assert_eq!(numbers.len(), size::<Numbers>());
    assert_eq!(numbers.contains_type::<N4>(), contains::<Numbers, N4>());
    assert_eq!(numbers.contains_type::<N2>(), contains::<Numbers, N2>());
    assert_eq!(
        numbers == DynTypeList::of::<PlusOne>(),
        equal::<Numbers, PlusOne>()
    );
    assert_eq!(
        DynTypeList::of::<typeseq::Reversed<Numbers>>(),
        numbers.reverse()
    );
    assert_eq!(scalars.largest_size(), largest::<Scalars>());
    assert_eq!(scalars.strictest_alignment(), most_aligned::<Scalars>());
}
