//! # ara-core
//!
//! ### Core types of the AUTOSAR Adaptive `ara::core` namespace
//!
//! This crate is a small collection of value types that mirror the
//! `ara::core` primitives of the AUTOSAR Adaptive Platform, for use in
//! constrained/embedded environments. It includes [`Array`], [`Byte`], the
//! in-place construction tags, and the free functions [`data`], [`size`] and
//! [`is_empty`].
//!
//! ---
//!
//! ## [`Array`]
//!
//! A fixed-size sequence container holding exactly `N` elements inline. It
//! offers both checked access ([`Array::at`], which returns an
//! [`OutOfRangeError`]) and unchecked access ([`Array::get_unchecked`]) so
//! performance-sensitive call sites are not forced to pay for validation.
//!
//! ### Example
//!
//! ```rust
//! use ara_core::Array;
//!
//! let mut array: Array<u32, 4> = Array::new();
//! array.fill(3);
//! *array.back_mut() = 9;
//!
//! assert_eq!(array.at(3), Ok(&9));
//! assert!(array.at(4).is_err());
//! assert_eq!(array.iter().sum::<u32>(), 18);
//! ```
//!
//! ## [`Byte`]
//!
//! A one-byte type that is deliberately not an integer: it only supports
//! bitwise and shift operators, and converts to integers explicitly via
//! [`to_integer`].
//!
//! ```rust
//! use ara_core::{Byte, to_integer};
//!
//! let mask = Byte::new(0x0F);
//! let value = (Byte::new(0xA5) & mask) << 4u32;
//! assert_eq!(to_integer::<u16>(value), 0x50);
//! ```
//!
//! ## In-place tags
//!
//! [`InPlace`], [`InPlaceType`] and [`InPlaceIndex`] are zero-sized markers
//! passed to constructors to request that a contained value be built in
//! place.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! Everything in this crate works without the standard library; only the
//! `alloc` crate is linked.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When disabled,
//!   which is the default, the crate operates in `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod access;
pub mod array;
pub mod byte;
pub mod utility;

pub use access::*;
pub use array::Array;
pub use array::OutOfRangeError;
pub use byte::*;
pub use utility::*;
