//! Validation and numeric conversion used by the padding and encoding logic.
//!
//! The [`Converter`] trait is the seam between the encoding logic and the rules
//! for what counts as a valid integer and how it is rendered as hex. The
//! [`StandardConverter`] is the implementation used by default, and any other
//! implementation can be substituted when constructing a
//! [`Padder`](crate::Padder) or a
//! [`TwosComplementCodec`](crate::TwosComplementCodec).



//		Modules

#[cfg(test)]
#[path = "tests/convert.rs"]
mod tests;



//		Packages

use crate::{
	errors::ValidationError,
	numbers::{Number, Numbers, is_hex_strict},
	padding::pad_start,
};
use num_bigint::BigInt;
use num_traits::Signed;



//		Traits

//		Converter																
/// Validation and conversion routines for integer-like values.
pub trait Converter {
	//		is_strict_hex														
	/// Whether the string is a strict hex string, e.g. `0x1f` or `-0x1f`.
	fn is_strict_hex(&self, value: &str) -> bool;
	
	//		validate_int														
	/// Checks that the value represents an integer.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be interpreted as an integer, a [`ValidationError`]
	/// is returned.
	/// 
	fn validate_int(&self, value: &Numbers) -> Result<(), ValidationError>;
	
	//		to_number															
	/// Normalises the value into the narrowest [`Number`] that holds it.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be interpreted as an integer, a [`ValidationError`]
	/// is returned.
	/// 
	fn to_number(&self, value: &Numbers) -> Result<Number, ValidationError>;
	
	//		number_to_hex														
	/// Renders the numeric value as a `0x`-prefixed hex string.
	/// 
	/// Negative values keep their sign in front of the prefix, e.g. `-0x1f`.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be interpreted as an integer, a [`ValidationError`]
	/// is returned.
	/// 
	fn number_to_hex(&self, value: &Numbers) -> Result<String, ValidationError>;
	
	//		to_hex																
	/// Renders any input value as a hex string.
	/// 
	/// # Errors
	/// 
	/// If the value claims to be hex but is not, a [`ValidationError`] is
	/// returned.
	/// 
	fn to_hex(&self, value: &Numbers) -> Result<String, ValidationError>;
	
	//		pad_left_hex														
	/// Left-pads the hex digits of a numeric value, after any `0x` or `-0x`
	/// prefix, to `width` characters.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be interpreted as an integer, a [`ValidationError`]
	/// is returned.
	/// 
	fn pad_left_hex(&self, value: &Numbers, width: usize, fill: char) -> Result<String, ValidationError>;
}



//		Structs

//		StandardConverter														
/// The default [`Converter`].
/// 
/// # Parsing
/// 
/// Strings are accepted as integers when they hold a decimal number with an
/// optional sign, or a `0x`, `0b`, or `0o` prefixed number. Surrounding
/// whitespace is ignored. Native and arbitrary-precision integers are always
/// valid, and there is no upper bound on the magnitude.
/// 
/// # Hex rendering
/// 
/// Hex output is lower case and without leading zeros, with zero rendered as
/// `0x0`. Plain text that is not an integer is rendered by [`to_hex()`](Converter::to_hex())
/// as the hex of its UTF-8 bytes.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StandardConverter;

//󰭅		Converter																
impl Converter for StandardConverter {
	//		is_strict_hex														
	fn is_strict_hex(&self, value: &str) -> bool {
		is_hex_strict(value)
	}
	
	//		validate_int														
	fn validate_int(&self, value: &Numbers) -> Result<(), ValidationError> {
		self.to_number(value).map(|_| ())
	}
	
	//		to_number															
	fn to_number(&self, value: &Numbers) -> Result<Number, ValidationError> {
		match value {
			Numbers::Int(v)    => Ok(Number::Int(*v)),
			Numbers::BigInt(v) => Ok(Number::from(v.clone())),
			Numbers::Hex(s)    => {
				if !self.is_strict_hex(s) {
					return Err(ValidationError::NotAnInteger(s.clone()));
				}
				s.parse()
			},
			Numbers::Str(s)    => s.parse(),
		}
	}
	
	//		number_to_hex														
	fn number_to_hex(&self, value: &Numbers) -> Result<String, ValidationError> {
		Ok(match self.to_number(value)? {
			Number::Int(v) if v < 0 => format!("-0x{:x}", v.unsigned_abs()),
			Number::Int(v)          => format!("0x{v:x}"),
			Number::BigInt(v)       => render_hex(&v),
		})
	}
	
	//		to_hex																
	fn to_hex(&self, value: &Numbers) -> Result<String, ValidationError> {
		match value {
			Numbers::Hex(s) if s.starts_with('-')     => self.number_to_hex(value),
			Numbers::Hex(s) if self.is_strict_hex(s) => Ok(s.clone()),
			Numbers::Hex(s)                          => Err(ValidationError::NotAnInteger(s.clone())),
			Numbers::Str(s)                          => Ok(s.parse::<Number>().map_or_else(
				|_| utf8_to_hex(s),
				|number| render_hex(&number.into_bigint()),
			)),
			Numbers::Int(_) | Numbers::BigInt(_)     => self.number_to_hex(value),
		}
	}
	
	//		pad_left_hex														
	fn pad_left_hex(&self, value: &Numbers, width: usize, fill: char) -> Result<String, ValidationError> {
		let hex = match value {
			Numbers::Hex(s) if self.is_strict_hex(s) => s.clone(),
			_                                        => self.number_to_hex(value)?,
		};
		let (prefix, digits) = hex.strip_prefix('-').map_or_else(
			|| ("0x",  hex.get(2..).unwrap_or_default()),
			|rest| ("-0x", rest.get(2..).unwrap_or_default()),
		);
		Ok(format!("{prefix}{}", pad_start(digits, width, fill)))
	}
}



//		Functions

//		render_hex																
/// Renders an arbitrary-precision integer as `0x` hex, keeping the sign.
fn render_hex(value: &BigInt) -> String {
	let digits = value.magnitude().to_str_radix(16);
	if value.is_negative() {
		format!("-0x{digits}")
	} else {
		format!("0x{digits}")
	}
}

//		utf8_to_hex																
/// Renders the UTF-8 bytes of a string as a `0x`-prefixed hex string.
/// 
/// Leading and trailing NUL characters are dropped before encoding.
/// 
#[must_use]
pub fn utf8_to_hex(value: &str) -> String {
	format!("0x{}", hex::encode(value.trim_matches('\0')))
}
