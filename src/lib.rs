//! The Nibbles crate pads integers and hex strings, and converts signed
//! integers to and from fixed-width two's-complement hex.
//!
//! # Padding
//!
//! [`pad_left()`] and [`pad_right()`] (and their aliases [`left_pad()`] and
//! [`right_pad()`]) accept any [`Numbers`] value. Plain strings are padded as
//! text, while integers and strict hex strings are padded as hex digits after
//! the `0x` prefix.
//!
//! # Two's complement
//!
//! [`to_twos_complement()`] encodes a signed integer into a field of a given
//! number of nibbles (64 by default, i.e. 256 bits), and
//! [`from_twos_complement()`] decodes it again.
//!
//! ```
//! use nibbles::{from_twos_complement, to_twos_complement};
//!
//! assert_eq!(to_twos_complement(-1, 4).unwrap(), "0xffff");
//! assert_eq!(from_twos_complement("0xffff", 4).unwrap(), -1_i64);
//! ```
//!
//! # Validation and conversion
//!
//! Deciding what counts as an integer, and how it is rendered as hex, is the
//! job of a [`Converter`]. The free functions use the [`StandardConverter`],
//! and [`Padder`] and [`TwosComplementCodec`] accept any implementation.



//		Global configuration

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod convert;
mod errors;
mod numbers;
mod padding;
mod twos;



//		Packages

pub use convert::{Converter, StandardConverter, utf8_to_hex};
pub use errors::{EncodingError, ValidationError};
pub use numbers::{Number, Numbers, is_hex_strict};
pub use padding::{DEFAULT_FILL, Padder, pad_left, pad_left as left_pad, pad_right, pad_right as right_pad};
pub use twos::{CodecConfig, DEFAULT_NIBBLE_WIDTH, TwosComplementCodec, from_twos_complement, to_twos_complement};
