//! Tests for `contains` and `equal`, which both rest on exact type identity.

use pretty_assertions::assert_eq;
use static_assertions::{assert_type_eq_all, const_assert};
use typeseq_types::{
    ContainsOut, EqualOut, False, Identity, IsSame, N0, N1, N2, N3, N4, Transformed, True,
    contains, equal, make, same_universe,
};

type Numbers = make![N1, N2, N3];

// ============================================================================
// contains
// ============================================================================

const_assert!(contains::<Numbers, N1>());
const_assert!(contains::<Numbers, N2>());
const_assert!(contains::<Numbers, N3>());
const_assert!(!contains::<Numbers, N4>());
const_assert!(!contains::<Numbers, N0>());
const_assert!(!contains::<Numbers, char>());

const_assert!(contains::<make![i32, f64, char], f64>());
const_assert!(!contains::<make![i32, f64, char], f32>());
const_assert!(!contains::<make![], u8>());

// Results are canonical booleans.
assert_type_eq_all!(ContainsOut<Numbers, N2>, True);
assert_type_eq_all!(ContainsOut<Numbers, N4>, False);

// ============================================================================
// Identity is exact
// ============================================================================

/// Wraps a `Base` and converts into it, but is not a `Base`.
struct Derived(Base);
struct Base;
struct Unrelated;

impl From<Derived> for Base {
    fn from(derived: Derived) -> Self {
        derived.0
    }
}

impl core::ops::Deref for Derived {
    type Target = Base;

    fn deref(&self) -> &Base {
        &self.0
    }
}

same_universe!(Base, Derived, Unrelated);

const_assert!(contains::<make![Derived], Derived>());
const_assert!(!contains::<make![Derived], Base>());
const_assert!(!contains::<make![Base], Derived>());
const_assert!(contains::<make![u8, Base, N1], Base>());
const_assert!(!contains::<make![u8, Base, N1], Unrelated>());

// Widening conversions do not make integer types the same.
const_assert!(!contains::<make![u8, i16], u16>());
const_assert!(!contains::<make![u32], u64>());

assert_type_eq_all!(IsSame<Base, Base>, True);
assert_type_eq_all!(IsSame<Base, Derived>, False);
assert_type_eq_all!(IsSame<u8, Unrelated>, False);
assert_type_eq_all!(IsSame<N1, True>, False);

// ============================================================================
// equal
// ============================================================================

const_assert!(equal::<Numbers, Numbers>());
const_assert!(equal::<Numbers, make![N1, N2, N3]>());
const_assert!(equal::<make![], make![]>());

// Length mismatch on either side.
const_assert!(!equal::<Numbers, make![N1, N2]>());
const_assert!(!equal::<Numbers, make![N1, N2, N3, N4]>());
const_assert!(!equal::<make![], make![N1]>());
const_assert!(!equal::<make![N1], make![]>());

// Order matters; this is not set equality.
const_assert!(!equal::<make![N1, N2], make![N2, N1]>());
const_assert!(!equal::<make![u8, char], make![char, u8]>());

// Same length, one position differs.
const_assert!(!equal::<make![N1, Base, N3], make![N1, Derived, N3]>());

assert_type_eq_all!(EqualOut<Numbers, Numbers>, True);
assert_type_eq_all!(EqualOut<Numbers, make![N1, N2]>, False);

// Lists are elements too, compared structurally.
const_assert!(contains::<make![u8, make![N1, N2]], make![N1, N2]>());
const_assert!(!contains::<make![u8, make![N1, N2]], make![N1]>());
const_assert!(equal::<make![make![], make![u8]], make![make![], make![u8]]>());
const_assert!(!equal::<make![make![u8]], make![make![u16]]>());

// ============================================================================
// References, tuples and Option compare element-wise
// ============================================================================

const_assert!(contains::<make![&'static str, u8], &'static str>());
const_assert!(contains::<make![&'static str, u8], u8>());
const_assert!(!contains::<make![&'static str], &'static u8>());
const_assert!(!contains::<make![&'static u8], u8>());
const_assert!(!contains::<make![u8], &'static u8>());
const_assert!(contains::<make![&'static &'static str], &'static &'static str>());
const_assert!(!contains::<make![&'static &'static str], &'static str>());

const_assert!(contains::<make![(u8, u16), char], (u8, u16)>());
const_assert!(!contains::<make![(u8, u16)], (u16, u8)>());
const_assert!(!contains::<make![(u8,)], (u8, u8)>());
const_assert!(!contains::<make![(u8, u8, u8)], (u8, u8, u8, u8)>());
const_assert!(!contains::<make![()], (u8,)>());
const_assert!(contains::<make![(N1, (N2, N3), N4, ())], (N1, (N2, N3), N4, ())>());
const_assert!(!contains::<make![(N1, (N2, N3), N4, ())], (N1, (N3, N2), N4, ())>());

const_assert!(contains::<make![Option<u8>], Option<u8>>());
const_assert!(!contains::<make![Option<u8>], Option<u16>>());
const_assert!(!contains::<make![Option<u8>], u8>());
const_assert!(!contains::<make![Option<u8>], (u8,)>());

const_assert!(equal::<
    Transformed<make![(u8, u16), &'static str], Identity>,
    make![(u8, u16), &'static str],
>());
const_assert!(!equal::<make![(u8, &'static str)], make![(u8, &'static char)]>());
const_assert!(equal::<make![Option<(char, &'static str)>], make![Option<(char, &'static str)>]>());

// Declared types compose with the structural shapes.
const_assert!(contains::<make![&'static Base, Option<Derived>], &'static Base>());
const_assert!(!contains::<make![&'static Base], Base>());
const_assert!(!contains::<make![Base], &'static Base>());
const_assert!(!contains::<make![Base], Option<Base>>());
const_assert!(!contains::<make![Option<Derived>], Option<Base>>());
const_assert!(contains::<make![u8, (Base, Unrelated)], (Base, Unrelated)>());
const_assert!(!contains::<make![u8, (Base, Unrelated)], (Unrelated, Base)>());

assert_type_eq_all!(IsSame<&'static str, &'static str>, True);
assert_type_eq_all!(IsSame<&'static Base, &'static Derived>, False);
assert_type_eq_all!(IsSame<(u8, N1), (u8, N1)>, True);
assert_type_eq_all!(IsSame<Option<N1>, N1>, False);
assert_type_eq_all!(IsSame<Option<N1>, make![N1]>, False);

#[test]
fn test_contains_value() {
    assert_eq!(
        [
            contains::<Numbers, N1>(),
            contains::<Numbers, N2>(),
            contains::<Numbers, N3>(),
            contains::<Numbers, N4>(),
        ],
        [true, true, true, false]
    );
}

#[test]
fn test_equal_is_reflexive() {
    assert!(equal::<make![bool, char, ()], make![bool, char, ()]>());
    assert!(equal::<make![Unrelated, Base], make![Unrelated, Base]>());
}
