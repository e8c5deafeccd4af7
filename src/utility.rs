//! In-place construction tags.
//!
//! These zero-sized marker values are passed to constructors of wrapper
//! types to select the overload that builds the contained value directly,
//! rather than accepting an already-built value to move in:
//!
//! - [`InPlace`] selects plain in-place construction.
//! - [`InPlaceType<T>`] selects construction of the alternative of type `T`.
//! - [`InPlaceIndex<I>`] selects construction of the alternative at index
//!   `I`.
//!
//! ## Example
//!
//! ```
//! use ara_core::utility::*;
//!
//! enum Number {
//!   Int(i64),
//!   Float(f64),
//! }
//!
//! impl Number {
//!   fn with_index<const I: usize>(_: InPlaceIndex<I>, raw: &str) -> Self {
//!     match I {
//!       0 => Number::Int(raw.parse().unwrap_or_default()),
//!       _ => Number::Float(raw.parse().unwrap_or_default()),
//!     }
//!   }
//! }
//!
//! let n = Number::with_index(in_place_index::<1>(), "2.5");
//! assert!(matches!(n, Number::Float(v) if v == 2.5));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::marker::PhantomData;

/// Tag requesting in-place construction of a contained value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InPlace;

/// The canonical [`InPlace`] value.
pub const IN_PLACE: InPlace = InPlace;

/// Tag requesting in-place construction of the alternative of type `T`.
///
/// The tag never holds a `T`, so it is `Copy`, `Send` and `Sync` whatever
/// `T` is.
pub struct InPlaceType<T>(PhantomData<fn() -> T>);

impl<T> InPlaceType<T> {
  /// Creates the tag for `T`.
  #[inline]
  pub const fn new() -> Self {
    Self(PhantomData)
  }
}

/// Returns the [`InPlaceType`] tag for `T`.
#[inline]
pub const fn in_place_type<T>() -> InPlaceType<T> {
  InPlaceType::new()
}

impl<T> Clone for InPlaceType<T> {
  #[inline(always)]
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for InPlaceType<T> {}

impl<T> Default for InPlaceType<T> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for InPlaceType<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "InPlaceType<{}>", core::any::type_name::<T>())
  }
}

impl<T> PartialEq for InPlaceType<T> {
  #[inline(always)]
  fn eq(&self, _: &Self) -> bool {
    true
  }
}

impl<T> Eq for InPlaceType<T> {}

impl<T> PartialOrd for InPlaceType<T> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> Ord for InPlaceType<T> {
  #[inline(always)]
  fn cmp(&self, _: &Self) -> Ordering {
    Ordering::Equal
  }
}

impl<T> Hash for InPlaceType<T> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, _: &mut H) {}
}

/// Tag requesting in-place construction of the alternative at index `I`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InPlaceIndex<const I: usize>;

impl<const I: usize> InPlaceIndex<I> {
  /// The index this tag selects.
  pub const INDEX: usize = I;

  /// Creates the tag for index `I`.
  #[inline]
  pub const fn new() -> Self {
    Self
  }

  /// Returns the index this tag selects.
  #[inline]
  pub const fn index(self) -> usize {
    I
  }
}

/// Returns the [`InPlaceIndex`] tag for index `I`.
#[inline]
pub const fn in_place_index<const I: usize>() -> InPlaceIndex<I> {
  InPlaceIndex
}

#[cfg(test)]
mod tests {
  use super::*;

  struct NotCopy;

  fn assert_tag<T: Copy + Default + Send + Sync + Eq + Ord + Hash>() {}

  #[test]
  fn tags_are_zero_sized() {
    assert_eq!(core::mem::size_of::<InPlace>(), 0);
    assert_eq!(core::mem::size_of::<InPlaceType<String>>(), 0);
    assert_eq!(core::mem::size_of::<InPlaceIndex<3>>(), 0);
  }

  #[test]
  fn tags_are_plain_values() {
    assert_tag::<InPlace>();
    assert_tag::<InPlaceType<NotCopy>>();
    assert_tag::<InPlaceType<std::rc::Rc<u8>>>();
    assert_tag::<InPlaceIndex<0>>();
  }

  #[test]
  fn canonical_values() {
    assert_eq!(IN_PLACE, InPlace);
    assert_eq!(in_place_type::<u8>(), InPlaceType::<u8>::default());
    assert_eq!(in_place_index::<2>(), InPlaceIndex::<2>::new());
  }

  #[test]
  fn index_tag_reports_its_index() {
    assert_eq!(InPlaceIndex::<5>::INDEX, 5);
    assert_eq!(in_place_index::<7>().index(), 7);
  }

  #[test]
  fn tags_select_overloads() {
    struct Holder(&'static str);

    impl From<(InPlace, &'static str)> for Holder {
      fn from((_, s): (InPlace, &'static str)) -> Self {
        Holder(s)
      }
    }

    impl From<(InPlaceType<u8>, &'static str)> for Holder {
      fn from(_: (InPlaceType<u8>, &'static str)) -> Self {
        Holder("u8")
      }
    }

    impl From<(InPlaceType<u16>, &'static str)> for Holder {
      fn from(_: (InPlaceType<u16>, &'static str)) -> Self {
        Holder("u16")
      }
    }

    assert_eq!(Holder::from((IN_PLACE, "direct")).0, "direct");
    assert_eq!(Holder::from((in_place_type::<u8>(), "")).0, "u8");
    assert_eq!(Holder::from((in_place_type::<u16>(), "")).0, "u16");
  }

  #[test]
  fn debug_names_the_type() {
    let tag = in_place_type::<u32>();
    assert_eq!(format!("{tag:?}"), "InPlaceType<u32>");
    assert_eq!(format!("{:?}", in_place_index::<1>()), "InPlaceIndex");
  }
}
