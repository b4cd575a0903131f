//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		EncodingError															
/// Represents all possible errors raised while padding or encoding a value.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum EncodingError {
	/// The value does not fit within the requested number of nibbles.
	#[error("Value {value} does not fit within {nibble_width} nibbles")]
	NibbleWidth {
		/// The offending value, as it was supplied.
		value:        String,
		
		/// The requested width, in nibbles.
		nibble_width: usize,
	},
	
	/// The incoming value is not a valid integer representation.
	#[error("Invalid integer: {0}")]
	Validation(#[from] ValidationError),
}

//		ValidationError															
/// Represents all possible validation errors for integer-like input.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ValidationError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a decimal digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a character that is not valid for its base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The incoming value cannot be interpreted as an integer at all.
	#[error("Not an integer: {0}")]
	NotAnInteger(String),
}
