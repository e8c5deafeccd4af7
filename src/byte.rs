use core::ops::Shl;
use core::ops::ShlAssign;
use core::ops::Shr;
use core::ops::ShrAssign;

/// A single machine byte that is a type of its own, not an integer.
///
/// `Byte` holds eight bits and nothing else: it has no arithmetic operators
/// and never mixes with integers in an expression. It supports the bitwise
/// operators `&`, `|`, `^` and `!` (each returning a `Byte`), their compound
/// assignment forms, and shifts by any primitive integer amount. Going to and
/// from integers is always spelled out, via [`Byte::new`], [`Byte::to_u8`],
/// [`From`], or [`to_integer`].
///
/// # Example
///
/// ```rust
/// # use ara_core::byte::*;
/// let flags = Byte::new(0b0000_0001) | Byte::new(0b0000_0100);
/// assert_eq!(flags, Byte::new(0b0000_0101));
/// assert_eq!(flags << 1u8, Byte::new(0b0000_1010));
/// assert_eq!(!flags, Byte::new(0b1111_1010));
/// assert_eq!(to_integer::<u32>(flags), 5);
/// ```
///
/// A `Byte` is not an integer:
///
/// ```compile_fail
/// # use ara_core::Byte;
/// let value: u8 = Byte::new(1);
/// ```
///
/// ```compile_fail
/// # use ara_core::Byte;
/// let sum = Byte::new(1) + Byte::new(2);
/// ```
///
/// ```compile_fail
/// # use ara_core::Byte;
/// let mixed = Byte::new(1) | 2u8;
/// ```
#[repr(transparent)]
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  derive_more::BitAnd,
  derive_more::BitOr,
  derive_more::BitXor,
  derive_more::Not,
  derive_more::BitAndAssign,
  derive_more::BitOrAssign,
  derive_more::BitXorAssign,
  derive_more::Binary,
  derive_more::Octal,
  derive_more::LowerHex,
  derive_more::UpperHex,
)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(transparent)
)]
pub struct Byte(u8);

impl Byte {
  /// A byte with every bit cleared.
  pub const MIN: Byte = Byte(u8::MIN);
  /// A byte with every bit set.
  pub const MAX: Byte = Byte(u8::MAX);

  /// Creates a `Byte` holding `value`.
  #[inline]
  pub const fn new(value: u8) -> Self {
    Self(value)
  }

  /// Returns the value of the byte as a `u8`.
  #[inline]
  pub const fn to_u8(self) -> u8 {
    self.0
  }
}

mod private {
  pub trait Sealed {}
}

/// Primitive integer types a [`Byte`] can be converted into with
/// [`to_integer`].
///
/// This trait is sealed and implemented for every primitive integer type.
pub trait Integer: private::Sealed + Copy {
  /// Converts the bits of `byte` into `Self`. Values that do not fit a
  /// signed 8-bit target wrap around, as an `as` cast does.
  fn from_byte(byte: Byte) -> Self;
}

macro_rules! impl_integer {
  ($($int:ty),* $(,)?) => {
    $(
      impl private::Sealed for $int {}

      impl Integer for $int {
        #[inline(always)]
        fn from_byte(byte: Byte) -> Self {
          byte.0 as $int
        }
      }
    )*
  };
}

impl_integer!(
  u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

/// Returns the value of `byte` as the integer type `I`.
///
/// Every primitive integer type is accepted. The conversion is lossless for
/// all targets except `i8`, where values above `127` wrap to negative
/// numbers.
///
/// ```rust
/// # use ara_core::byte::*;
/// let byte = Byte::new(200);
/// assert_eq!(to_integer::<i32>(byte), 200);
/// assert_eq!(to_integer::<u16>(byte), 200u16);
/// assert_eq!(to_integer::<i8>(Byte::new(5)), 5i8);
/// ```
#[inline]
pub fn to_integer<I: Integer>(byte: Byte) -> I {
  I::from_byte(byte)
}

impl From<u8> for Byte {
  #[inline(always)]
  fn from(value: u8) -> Self {
    Self(value)
  }
}

impl From<Byte> for u8 {
  #[inline(always)]
  fn from(byte: Byte) -> Self {
    byte.0
  }
}

// Bits pushed past either end are dropped; shifting by the full width or
// more (or by a negative amount) clears the byte.
macro_rules! impl_shift {
  ($($int:ty),* $(,)?) => {
    $(
      impl Shl<$int> for Byte {
        type Output = Byte;

        #[inline(always)]
        fn shl(self, shift: $int) -> Byte {
          let bits = u32::try_from(shift)
            .ok()
            .and_then(|shift| self.0.checked_shl(shift));
          Byte(bits.unwrap_or(0))
        }
      }

      impl Shr<$int> for Byte {
        type Output = Byte;

        #[inline(always)]
        fn shr(self, shift: $int) -> Byte {
          let bits = u32::try_from(shift)
            .ok()
            .and_then(|shift| self.0.checked_shr(shift));
          Byte(bits.unwrap_or(0))
        }
      }

      impl ShlAssign<$int> for Byte {
        #[inline(always)]
        fn shl_assign(&mut self, shift: $int) {
          *self = *self << shift;
        }
      }

      impl ShrAssign<$int> for Byte {
        #[inline(always)]
        fn shr_assign(&mut self, shift: $int) {
          *self = *self >> shift;
        }
      }
    )*
  };
}

impl_shift!(
  u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn byte_is_one_byte() {
    assert_eq!(core::mem::size_of::<Byte>(), 1);
    assert_eq!(core::mem::align_of::<Byte>(), 1);
  }

  #[test]
  fn byte_is_trivially_copyable() {
    fn assert_copy<T: Copy>() {}
    assert_copy::<Byte>();
    assert!(!core::mem::needs_drop::<Byte>());
  }

  #[test]
  fn byte_covers_unsigned_char_range() {
    assert_eq!(Byte::new(0), Byte::MIN);
    assert_eq!(Byte::new(u8::MAX), Byte::MAX);
    assert_eq!(Byte::default(), Byte::MIN);
  }

  #[test]
  fn byte_explicit_conversions() {
    const CONST_BYTE: Byte = Byte::new(7);
    const CONST_VALUE: u8 = CONST_BYTE.to_u8();
    assert_eq!(CONST_VALUE, 7);

    let byte = Byte::from(7u8);
    assert_eq!(u8::from(byte), 7);
    assert_eq!(byte.to_u8(), 7);
  }

  #[test]
  fn byte_equality() {
    assert_eq!(Byte::new(1), Byte::new(1));
    assert_ne!(Byte::new(1), Byte::new(2));
    assert!(Byte::new(1) == Byte::new(1));
    assert!(Byte::new(1) != Byte::new(2));
  }

  #[test]
  fn byte_to_integer() {
    let byte = Byte::new(1);
    assert_eq!(to_integer::<i32>(byte), 1);
    assert_eq!(to_integer::<u16>(byte), 1u16);
    for value in 0..=u8::MAX {
      assert_eq!(to_integer::<u64>(Byte::new(value)), u64::from(value));
    }
  }

  #[test]
  fn byte_to_signed_byte() {
    for value in 0..=i8::MAX {
      assert_eq!(to_integer::<i8>(Byte::new(value as u8)), value);
    }
    assert_eq!(to_integer::<i8>(Byte::MAX), -1);
  }

  #[test]
  fn byte_shift_operators() {
    let four = Byte::new(4);
    let one = Byte::new(1);
    assert_eq!(four >> 2u32, one);
    assert_eq!(one << 2u32, four);

    let mut b = four;
    b >>= 2u8;
    assert_eq!(b, one);
    let mut b = one;
    b <<= 2usize;
    assert_eq!(b, four);
  }

  #[test]
  fn byte_shift_discards_overflowing_bits() {
    assert_eq!(Byte::new(0x81) << 1u32, Byte::new(0x02));
    assert_eq!(Byte::new(0x81) >> 1u32, Byte::new(0x40));
    assert_eq!(Byte::MAX << 8u32, Byte::MIN);
    assert_eq!(Byte::MAX >> 200u64, Byte::MIN);
    assert_eq!(Byte::MAX << -1i32, Byte::MIN);
  }

  #[test]
  fn byte_bitwise_operators() {
    let (b1, b2, b3) = (Byte::new(1), Byte::new(2), Byte::new(3));
    assert_eq!(b1 | b3, b3);
    assert_eq!(b1 & b3, b1);
    assert_eq!(b1 ^ b3, b2);
    assert_eq!(!Byte::new(0xFE), b1);
  }

  #[test]
  fn byte_compound_assignment() {
    let (b1, b2, b3) = (Byte::new(1), Byte::new(2), Byte::new(3));

    let mut b = b1;
    b |= b3;
    assert_eq!(b, b3);

    let mut b = b3;
    b &= b1;
    assert_eq!(b, b1);

    let mut b = b1;
    b ^= b3;
    assert_eq!(b, b2);
  }

  #[test]
  fn byte_formatting() {
    let byte = Byte::new(0xA5);
    assert_eq!(format!("{byte:02x}"), "a5");
    assert_eq!(format!("{byte:02X}"), "A5");
    assert_eq!(format!("{byte:08b}"), "10100101");
    assert_eq!(format!("{byte:o}"), "245");
    assert_eq!(format!("{byte:?}"), "Byte(165)");
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;
    use serde_json;

    #[test]
    fn byte_serializes_as_integer() {
      let json = serde_json::to_string(&Byte::new(42)).unwrap();
      assert_eq!(json, "42");
      let de: Byte = serde_json::from_str(&json).unwrap();
      assert_eq!(de, Byte::new(42));
      assert!(serde_json::from_str::<Byte>("256").is_err());
    }
  }
}
