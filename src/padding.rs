//! Left and right padding of strings and numeric values.



//		Modules

#[cfg(test)]
#[path = "tests/padding.rs"]
mod tests;



//		Packages

use crate::{
	convert::{Converter, StandardConverter},
	errors::EncodingError,
	numbers::Numbers,
};
use core::iter::repeat_n;



//		Constants

/// The fill character used when none is specified.
pub const DEFAULT_FILL: char = '0';



//		Structs

//		Padder																	
/// Pads strings, or the hex form of numeric values, to a fixed width.
/// 
/// Plain strings (anything that is not a strict hex string) are padded as-is,
/// by character count, and never truncated. Everything else is first validated
/// as an integer and then handled as hex, where only the digits after the `0x`
/// (or `-0x`) prefix count towards the width.
/// 
/// # Type parameters
/// 
/// * `C` - The [`Converter`] used for validation and hex conversion.
/// 
#[derive(Clone, Copy, Debug, Default)]
pub struct Padder<C = StandardConverter> {
	/// Validation and conversion routines.
	converter: C,
}

//󰭅		Padder																	
impl<C: Converter> Padder<C> {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`Padder`] using the given converter.
	pub const fn new(converter: C) -> Self {
		Self { converter }
	}
	
	//		Public methods														
	
	//		converter															
	/// The converter in use.
	pub const fn converter(&self) -> &C {
		&self.converter
	}
	
	//		left_pad															
	/// Alias of [`pad_left()`](Self::pad_left()).
	/// 
	/// # Errors
	/// 
	/// See [`pad_left()`](Self::pad_left()).
	/// 
	pub fn left_pad(&self, value: &Numbers, width: usize, fill: char) -> Result<String, EncodingError> {
		self.pad_left(value, width, fill)
	}
	
	//		pad_left															
	/// Pads the start of a value to `width`.
	/// 
	/// A plain string is padded to `width` characters in total. A numeric
	/// value or hex string is rendered as hex, and its digits are padded to
	/// `width` nibbles after the prefix, e.g. `5` padded to `4` is `0x0005`.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to pad.
	/// * `width` - The target width.
	/// * `fill`  - The character to pad with, usually [`DEFAULT_FILL`].
	/// 
	/// # Errors
	/// 
	/// If the value is not a plain string and is not a valid integer, then an
	/// [`EncodingError::Validation`] will be returned.
	/// 
	pub fn pad_left(&self, value: &Numbers, width: usize, fill: char) -> Result<String, EncodingError> {
		if let Some(plain) = self.plain_str(value) {
			return Ok(pad_start(plain, width, fill));
		}
		
		self.converter.validate_int(value)?;
		Ok(self.converter.pad_left_hex(value, width, fill)?)
	}
	
	//		pad_right															
	/// Pads the end of a value to `width`.
	/// 
	/// A plain string is padded to `width` characters in total. A numeric
	/// value or hex string is rendered as hex and padded to `width` characters
	/// plus the length of its `0x` (or `-0x`) prefix, so the prefix is not
	/// counted towards the width.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to pad.
	/// * `width` - The target width.
	/// * `fill`  - The character to pad with, usually [`DEFAULT_FILL`].
	/// 
	/// # Errors
	/// 
	/// If the value is not a plain string and is not a valid integer, then an
	/// [`EncodingError::Validation`] will be returned.
	/// 
	pub fn pad_right(&self, value: &Numbers, width: usize, fill: char) -> Result<String, EncodingError> {
		if let Some(plain) = self.plain_str(value) {
			return Ok(pad_end(plain, width, fill));
		}
		
		self.converter.validate_int(value)?;
		let hex = match value {
			Numbers::Hex(s) if self.converter.is_strict_hex(s) => s.clone(),
			_                                                  => self.converter.number_to_hex(value)?,
		};
		let prefix_length = if hex.starts_with('-') { 3 } else { 2 };
		Ok(pad_end(&hex, width.saturating_add(prefix_length), fill))
	}
	
	//		right_pad															
	/// Alias of [`pad_right()`](Self::pad_right()).
	/// 
	/// # Errors
	/// 
	/// See [`pad_right()`](Self::pad_right()).
	/// 
	pub fn right_pad(&self, value: &Numbers, width: usize, fill: char) -> Result<String, EncodingError> {
		self.pad_right(value, width, fill)
	}
	
	//		Private methods														
	
	//		plain_str															
	/// Returns the string if it should be padded as plain text.
	fn plain_str<'a>(&self, value: &'a Numbers) -> Option<&'a str> {
		value.as_str().filter(|s| !self.converter.is_strict_hex(s))
	}
}



//		Functions

//		pad_left																
/// Pads the start of a value to `width`, using the [`StandardConverter`].
/// 
/// See [`Padder::pad_left()`].
/// 
/// # Errors
/// 
/// If the value is not a plain string and is not a valid integer, then an
/// [`EncodingError::Validation`] will be returned.
/// 
pub fn pad_left(value: impl Into<Numbers>, width: usize, fill: char) -> Result<String, EncodingError> {
	Padder::<StandardConverter>::default().pad_left(&value.into(), width, fill)
}

//		pad_right																
/// Pads the end of a value to `width`, using the [`StandardConverter`].
/// 
/// See [`Padder::pad_right()`].
/// 
/// # Errors
/// 
/// If the value is not a plain string and is not a valid integer, then an
/// [`EncodingError::Validation`] will be returned.
/// 
pub fn pad_right(value: impl Into<Numbers>, width: usize, fill: char) -> Result<String, EncodingError> {
	Padder::<StandardConverter>::default().pad_right(&value.into(), width, fill)
}

//		pad_end																	
/// Appends `fill` until the string is `width` characters long.
pub(crate) fn pad_end(value: &str, width: usize, fill: char) -> String {
	let missing    = width.saturating_sub(value.chars().count());
	let mut padded = String::with_capacity(value.len().saturating_add(missing));
	padded.push_str(value);
	padded.extend(repeat_n(fill, missing));
	padded
}

//		pad_start																
/// Prepends `fill` until the string is `width` characters long.
pub(crate) fn pad_start(value: &str, width: usize, fill: char) -> String {
	let missing    = width.saturating_sub(value.chars().count());
	let mut padded = String::with_capacity(value.len().saturating_add(missing));
	padded.extend(repeat_n(fill, missing));
	padded.push_str(value);
	padded
}
