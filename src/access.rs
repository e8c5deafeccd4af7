//! Free functions giving uniform access to contiguous containers.
//!
//! [`data`], [`size`] and [`is_empty`] work on anything that can be viewed
//! as a slice: built-in arrays, slices, `Vec`s, [`Array`](crate::Array)s,
//! and so on.
//!
//! ```
//! use ara_core::Array;
//! use ara_core::access::*;
//!
//! let array = Array::from([1, 2, 3]);
//! let vec = vec![1, 2, 3];
//!
//! assert_eq!(size(&array), size(&vec));
//! assert!(!is_empty(&array));
//! assert!(is_empty::<u8, _>(&[]));
//! ```

/// Returns a raw pointer to the first element of `container`.
#[inline]
pub fn data<T, C>(container: &C) -> *const T
where
  C: AsRef<[T]> + ?Sized,
{
  container.as_ref().as_ptr()
}

/// Returns a raw mutable pointer to the first element of `container`.
#[inline]
pub fn data_mut<T, C>(container: &mut C) -> *mut T
where
  C: AsMut<[T]> + ?Sized,
{
  container.as_mut().as_mut_ptr()
}

/// Returns the number of elements in `container`.
#[inline]
pub fn size<T, C>(container: &C) -> usize
where
  C: AsRef<[T]> + ?Sized,
{
  container.as_ref().len()
}

/// Returns `true` if `container` holds no elements.
#[inline]
pub fn is_empty<T, C>(container: &C) -> bool
where
  C: AsRef<[T]> + ?Sized,
{
  container.as_ref().is_empty()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Array;
  use crate::Byte;

  #[test]
  fn size_of_containers() {
    assert_eq!(size(&[1u8, 2, 3]), 3);
    assert_eq!(size(&vec![1u8; 10]), 10);
    assert_eq!(size(&Array::from([0u32; 4])), 4);
    assert_eq!(size::<u8, _>("four"), 4);
    let slice: &[i32] = &[5, 6];
    assert_eq!(size(slice), 2);
  }

  #[test]
  fn emptiness_of_containers() {
    let empty: [u8; 0] = [];
    assert!(is_empty(&empty));
    assert!(is_empty(&Vec::<Byte>::new()));
    assert!(is_empty(&Array::<Byte, 0>::new()));
    assert!(!is_empty(&[Byte::MIN]));
  }

  #[test]
  fn data_points_at_first_element() {
    let array = Array::from([10, 20, 30]);
    assert_eq!(data(&array), array.data());

    let vec = vec![1u64, 2];
    assert_eq!(data(&vec), vec.as_ptr());
  }

  #[test]
  fn data_mut_writes_through() {
    let mut array = Array::from([0u8; 2]);
    let ptr = data_mut(&mut array);
    // SAFETY: `ptr` points at the first of two live elements.
    unsafe { *ptr = 9 };
    assert_eq!(array, [9, 0]);
  }
}
