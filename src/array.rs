//! A fixed-size sequence container.
//!
//! [`Array<T, N>`] owns exactly `N` elements of type `T`, stored inline and
//! contiguously in a `[T; N]`. Its length is part of its type: it never
//! grows, shrinks or reallocates.
//!
//! Element access comes in two flavours:
//!
//! - **checked**: [`Array::at`] and [`Array::at_mut`] validate the index and
//!   return an [`OutOfRangeError`] the caller can inspect and recover from.
//! - **unchecked**: [`Array::get_unchecked`] and [`Array::get_unchecked_mut`]
//!   perform no validation at all, for call sites that already know the
//!   index is in range. Plain indexing (`a[i]`) sits in between: it is not
//!   `unsafe`, but an out-of-range index panics rather than returning an
//!   error.
//!
//! ## Examples
//!
//! ```
//! use ara_core::Array;
//!
//! let mut squares: Array<i32, 5> = Array::new();
//! for i in 0..5 {
//!   squares[i] = (i * i) as i32;
//! }
//!
//! assert_eq!(squares.size(), 5);
//! assert_eq!(squares.at(4), Ok(&16));
//! assert!(squares.at(5).is_err());
//! assert_eq!(squares.as_slice(), &[0, 1, 4, 9, 16]);
//! ```
//!
//! ### Serde
//!
//! With the `serde` feature enabled, an `Array` serializes as a plain
//! sequence and only deserializes from a sequence of exactly `N` elements.

use core::borrow::Borrow;
use core::borrow::BorrowMut;
use core::convert::AsMut;
use core::convert::AsRef;
use core::fmt;
use core::iter::IntoIterator;
use core::iter::Rev;
use core::ops::Deref;
use core::ops::DerefMut;
use core::slice;

/// Error returned by the checked accessors when the requested index is not
/// smaller than the length of the array.
///
/// # Example
///
/// ```rust
/// # use ara_core::array::*;
/// let array = Array::from([1u8, 2, 3]);
/// let err = array.at(7).unwrap_err();
///
/// assert_eq!(err, OutOfRangeError { index: 7, len: 3 });
/// assert_eq!(
///   err.to_string(),
///   "index 7 is out of range for an array of length 3"
/// );
/// ```
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  derive_more::Display,
  derive_more::Error,
)]
#[display("index {index} is out of range for an array of length {len}")]
pub struct OutOfRangeError {
  /// The index that was requested.
  pub index: usize,
  /// The length of the array that was accessed.
  pub len:   usize,
}

/// Container that encapsulates a fixed-size array of `N` elements.
///
/// `Array<T, N>` has the same layout as `[T; N]` and adds the accessor
/// vocabulary of a conventional fixed-size container on top of it. It
/// dereferences to `[T]`, so every slice method is available as well.
///
/// Copying an `Array` copies all of its elements; assigning one replaces
/// all of them.
#[repr(transparent)]
#[derive(
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  derive_more::From,
  derive_more::Index,
  derive_more::IndexMut,
)]
pub struct Array<T, const N: usize> {
  inner: [T; N],
}

impl<T, const N: usize> Array<T, N> {
  /// Creates an `Array` with every element set to `T::default()`.
  pub fn new() -> Self
  where
    T: Default,
  {
    Self::from_fn(|_| T::default())
  }

  /// Wraps an existing array without copying its elements.
  #[inline]
  pub const fn from_array(inner: [T; N]) -> Self {
    Self { inner }
  }

  /// Creates an `Array` whose element `i` is `f(i)`, called in index order.
  pub fn from_fn<F>(f: F) -> Self
  where
    F: FnMut(usize) -> T,
  {
    Self {
      inner: core::array::from_fn(f),
    }
  }

  /// Consumes the `Array` and returns the underlying `[T; N]`.
  #[inline]
  pub fn into_inner(self) -> [T; N] {
    self.inner
  }

  /// Returns a reference to the element at `index`, or an
  /// [`OutOfRangeError`] if `index >= N`.
  #[inline]
  pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
    self.inner.get(index).ok_or(OutOfRangeError { index, len: N })
  }

  /// Returns a mutable reference to the element at `index`, or an
  /// [`OutOfRangeError`] if `index >= N`.
  #[inline]
  pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
    self
      .inner
      .get_mut(index)
      .ok_or(OutOfRangeError { index, len: N })
  }

  /// Returns a reference to the element at `index` without bounds checking.
  ///
  /// # Safety
  ///
  /// The caller must ensure that `index < N`. Calling this method with an
  /// out-of-range index is undefined behavior.
  #[inline]
  pub unsafe fn get_unchecked(&self, index: usize) -> &T {
    debug_assert!(index < N, "Array::get_unchecked index out of range");
    // SAFETY: the caller guarantees `index < N`.
    unsafe { self.inner.get_unchecked(index) }
  }

  /// Returns a mutable reference to the element at `index` without bounds
  /// checking.
  ///
  /// # Safety
  ///
  /// The caller must ensure that `index < N`. Calling this method with an
  /// out-of-range index is undefined behavior.
  #[inline]
  pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
    debug_assert!(index < N, "Array::get_unchecked_mut index out of range");
    // SAFETY: the caller guarantees `index < N`.
    unsafe { self.inner.get_unchecked_mut(index) }
  }

  /// Returns a reference to the element at the constant index `I`.
  ///
  /// An index that is not smaller than `N` is rejected at compile time:
  ///
  /// ```compile_fail
  /// # use ara_core::Array;
  /// let array = Array::from([1, 2, 3]);
  /// let _ = array.element::<3>();
  /// ```
  #[inline]
  pub const fn element<const I: usize>(&self) -> &T {
    const { assert!(I < N, "Array::element index out of range") };
    &self.inner[I]
  }

  /// Returns a mutable reference to the element at the constant index `I`.
  #[inline]
  pub fn element_mut<const I: usize>(&mut self) -> &mut T {
    const { assert!(I < N, "Array::element_mut index out of range") };
    &mut self.inner[I]
  }

  /// Returns a reference to the first element.
  ///
  /// Calling this on a zero-length `Array` does not compile:
  ///
  /// ```compile_fail
  /// # use ara_core::Array;
  /// let array = Array::<u8, 0>::new();
  /// let _ = array.front();
  /// ```
  #[inline]
  pub const fn front(&self) -> &T {
    const { assert!(N > 0, "Array::front called on a zero-length array") };
    &self.inner[0]
  }

  /// Returns a mutable reference to the first element.
  #[inline]
  pub fn front_mut(&mut self) -> &mut T {
    const { assert!(N > 0, "Array::front_mut called on a zero-length array") };
    &mut self.inner[0]
  }

  /// Returns a reference to the last element.
  ///
  /// Calling this on a zero-length `Array` does not compile:
  ///
  /// ```compile_fail
  /// # use ara_core::Array;
  /// let array = Array::<u8, 0>::new();
  /// let _ = array.back();
  /// ```
  #[inline]
  pub const fn back(&self) -> &T {
    const { assert!(N > 0, "Array::back called on a zero-length array") };
    &self.inner[N - 1]
  }

  /// Returns a mutable reference to the last element.
  #[inline]
  pub fn back_mut(&mut self) -> &mut T {
    const { assert!(N > 0, "Array::back_mut called on a zero-length array") };
    &mut self.inner[N - 1]
  }

  /// Returns a raw pointer to the first element of the contiguous storage.
  ///
  /// The pointer stays valid for as long as the `Array` is neither moved nor
  /// dropped.
  #[inline]
  pub const fn data(&self) -> *const T {
    self.inner.as_ptr()
  }

  /// Returns a raw mutable pointer to the first element of the contiguous
  /// storage.
  #[inline]
  pub fn data_mut(&mut self) -> *mut T {
    self.inner.as_mut_ptr()
  }

  /// Returns the elements as a slice.
  #[inline]
  pub const fn as_slice(&self) -> &[T] {
    &self.inner
  }

  /// Returns the elements as a mutable slice.
  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.inner
  }

  /// Returns a reference to the underlying `[T; N]`.
  #[inline]
  pub const fn as_array(&self) -> &[T; N] {
    &self.inner
  }

  /// Returns a mutable reference to the underlying `[T; N]`.
  #[inline]
  pub fn as_mut_array(&mut self) -> &mut [T; N] {
    &mut self.inner
  }

  /// Returns an iterator over the elements in index order.
  #[inline]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.inner.iter()
  }

  /// Returns a mutable iterator over the elements in index order.
  #[inline]
  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.inner.iter_mut()
  }

  /// Returns an iterator over the elements from last to first.
  #[inline]
  pub fn rev_iter(&self) -> Rev<slice::Iter<'_, T>> {
    self.inner.iter().rev()
  }

  /// Returns a mutable iterator over the elements from last to first.
  #[inline]
  pub fn rev_iter_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
    self.inner.iter_mut().rev()
  }

  /// Returns `true` if the array holds no elements, i.e. `N == 0`.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    N == 0
  }

  /// Returns the number of elements, which is always `N`.
  #[inline]
  pub const fn size(&self) -> usize {
    N
  }

  /// Returns the maximum number of elements. For a fixed-size container
  /// this is the same as [`Array::size`].
  #[inline]
  pub const fn max_size(&self) -> usize {
    N
  }

  /// Assigns a clone of `value` to every element, in index order.
  pub fn fill(&mut self, value: T)
  where
    T: Clone,
  {
    self.inner.fill(value);
  }

  /// Exchanges the contents of `self` and `other`.
  #[inline]
  pub fn swap_with(&mut self, other: &mut Self) {
    core::mem::swap(&mut self.inner, &mut other.inner);
  }
}

/// Exchanges the contents of two arrays of the same type and length.
///
/// ```
/// use ara_core::Array;
///
/// let mut a = Array::from([1, 2, 3]);
/// let mut b = Array::from([7, 8, 9]);
/// ara_core::array::swap(&mut a, &mut b);
///
/// assert_eq!(a, [7, 8, 9]);
/// assert_eq!(b, [1, 2, 3]);
/// ```
#[inline]
pub fn swap<T, const N: usize>(lhs: &mut Array<T, N>, rhs: &mut Array<T, N>) {
  lhs.swap_with(rhs);
}

impl<T: Default, const N: usize> Default for Array<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, const N: usize> From<Array<T, N>> for [T; N] {
  #[inline(always)]
  fn from(array: Array<T, N>) -> Self {
    array.inner
  }
}

impl<T, const N: usize> Deref for Array<T, N> {
  type Target = [T];

  #[inline(always)]
  fn deref(&self) -> &[T] {
    &self.inner
  }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
  #[inline(always)]
  fn deref_mut(&mut self) -> &mut [T] {
    &mut self.inner
  }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
  #[inline(always)]
  fn as_ref(&self) -> &[T] {
    &self.inner
  }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [T] {
    &mut self.inner
  }
}

impl<T, const N: usize> Borrow<[T]> for Array<T, N> {
  #[inline(always)]
  fn borrow(&self) -> &[T] {
    &self.inner
  }
}

impl<T, const N: usize> BorrowMut<[T]> for Array<T, N> {
  #[inline(always)]
  fn borrow_mut(&mut self) -> &mut [T] {
    &mut self.inner
  }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Array<{N}> {s:?}", s = self.as_slice())
  }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T, N> {
  #[inline(always)]
  fn eq(&self, other: &[T; N]) -> bool {
    self.inner == *other
  }
}

impl<T: PartialEq, const N: usize> PartialEq<Array<T, N>> for [T; N] {
  #[inline(always)]
  fn eq(&self, other: &Array<T, N>) -> bool {
    *self == other.inner
  }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for Array<T, N> {
  #[inline(always)]
  fn eq(&self, other: &[T]) -> bool {
    self.inner[..] == *other
  }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T]> for Array<T, N> {
  #[inline(always)]
  fn eq(&self, other: &&[T]) -> bool {
    self.inner[..] == **other
  }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
  type Item = T;
  type IntoIter = core::array::IntoIter<T, N>;

  fn into_iter(self) -> Self::IntoIter {
    self.inner.into_iter()
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.inner.iter()
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.inner.iter_mut()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use alloc::vec::Vec;

  use super::*;

  impl<T, const N: usize> serde::Serialize for Array<T, N>
  where
    T: serde::Serialize,
  {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(N))?;
      for elem in &self.inner {
        seq.serialize_element(elem)?;
      }
      seq.end()
    }
  }

  impl<'de, T, const N: usize> serde::Deserialize<'de> for Array<T, N>
  where
    T: serde::Deserialize<'de>,
  {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::Error;
      use serde::de::SeqAccess;
      use serde::de::Visitor;
      struct ArrayVisitor<T, const N: usize> {
        marker: core::marker::PhantomData<T>,
      }
      impl<'de, T, const N: usize> Visitor<'de> for ArrayVisitor<T, N>
      where
        T: serde::Deserialize<'de>,
      {
        type Value = Array<T, N>;
        fn expecting(
          &self,
          formatter: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
          write!(formatter, "a sequence of {N} elements")
        }
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut items =
            Vec::with_capacity(seq.size_hint().unwrap_or(0).min(N));
          while let Some(value) = seq.next_element::<T>()? {
            if items.len() == N {
              return Err(A::Error::invalid_length(N + 1, &self));
            }
            items.push(value);
          }
          let len = items.len();
          let inner: [T; N] = items
            .try_into()
            .map_err(|_| A::Error::invalid_length(len, &self))?;
          Ok(Array { inner })
        }
      }
      deserializer.deserialize_seq(ArrayVisitor::<T, N> {
        marker: core::marker::PhantomData,
      })
    }
  }
}
