//! # packed_bit_sequence
//!
//! A `no_std` compatible, growable sequence of bits packed eight to a byte.
//!
//! ```rust
//! use num_bigint::BigUint;
//! use packed_bit_sequence::PackedBitSequence;
//!
//! let mut bits = PackedBitSequence::from_binary_str("1101")?;
//! assert_eq!(bits.to_integer(), BigUint::from(13u32));
//!
//! bits.extend("0011")?;
//! assert_eq!(bits.to_hex(), "d3");
//! assert_eq!(bits.count("1")?, 5);
//! # Ok::<(), packed_bit_sequence::BitSequenceError>(())
//! ```
//!
//! ## Memory
//!
//! ```rust
//! use packed_bit_sequence::PackedBitSequence;
//!
//! // Vec<bool>: 1000 bytes
//! let flags = vec![true; 1000];
//!
//! // PackedBitSequence: 125 bytes
//! let packed = PackedBitSequence::from_bools(&flags);
//! assert_eq!(packed.as_bytes().len(), 125);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`BitSequenceError`].
//! - `random` (default): [`PackedBitSequence::random`] and
//!   [`PackedBitSequence::random_with`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BitSequenceError;

mod bit_ops;
pub mod index;

pub mod source;
pub use source::BitSource;

pub mod sequence;
pub use sequence::PackedBitSequence;

mod algebra;
mod convert;
pub mod iter;
mod search;
