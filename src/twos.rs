//! Two's-complement encoding of signed integers as fixed-width hex.



//		Modules

#[cfg(test)]
#[path = "tests/twos.rs"]
mod tests;



//		Packages

use crate::{
	convert::{Converter, StandardConverter},
	errors::EncodingError,
	numbers::{Number, Numbers},
	padding::{DEFAULT_FILL, Padder},
};
use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use tracing::{debug, trace};



//		Constants

/// The nibble width used when none is specified: 64 nibbles, or 256 bits.
pub const DEFAULT_NIBBLE_WIDTH: usize = 64;



//		Structs

//		CodecConfig																
/// Settings for a [`TwosComplementCodec`].
/// 
/// Missing fields take their default values when deserialising.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CodecConfig {
	/// The width of the encoded field, in hex digits.
	pub nibble_width: usize,
}

//󰭅		CodecConfig																
impl CodecConfig {
	//		from_json															
	/// Loads the settings from a JSON document.
	/// 
	/// # Errors
	/// 
	/// If the JSON is invalid, or a field has the wrong type, then an error
	/// will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
}

//󰭅		Default																	
impl Default for CodecConfig {
	//		default																
	fn default() -> Self {
		Self {
			nibble_width: DEFAULT_NIBBLE_WIDTH,
		}
	}
}

//		TwosComplementCodec														
/// Converts between signed integers and fixed-width two's-complement hex.
/// 
/// A field of `n` nibbles holds `4n` bits. Negative values are encoded by
/// adding the modulus `2^(4n)`, and decoded by subtracting it again whenever
/// the top bit of the field is set. Non-negative values are encoded as plain
/// hex, left-padded with zeros to `n` digits.
/// 
/// # Type parameters
/// 
/// * `C` - The [`Converter`] used for validation and hex conversion.
/// 
#[derive(Clone, Copy, Debug, Default)]
pub struct TwosComplementCodec<C = StandardConverter> {
	/// Settings, including the width used by [`encode()`](Self::encode()) and
	/// [`decode()`](Self::decode()).
	config: CodecConfig,
	
	/// Pads the hex output, and provides the converter.
	padder: Padder<C>,
}

//󰭅		TwosComplementCodec														
impl<C: Converter> TwosComplementCodec<C> {
	//		Constructors														
	
	//		new																	
	/// Creates a codec with the default settings.
	pub const fn new(converter: C) -> Self {
		Self::with_config(converter, CodecConfig { nibble_width: DEFAULT_NIBBLE_WIDTH })
	}
	
	//		with_config															
	/// Creates a codec with the given settings.
	pub const fn with_config(converter: C, config: CodecConfig) -> Self {
		Self { config, padder: Padder::new(converter) }
	}
	
	//		Public methods														
	
	//		config																
	/// The settings in use.
	pub const fn config(&self) -> &CodecConfig {
		&self.config
	}
	
	//		decode																
	/// Decodes using the configured nibble width.
	/// 
	/// # Errors
	/// 
	/// See [`from_twos_complement()`](Self::from_twos_complement()).
	/// 
	pub fn decode(&self, value: &Numbers) -> Result<Number, EncodingError> {
		self.from_twos_complement(value, self.config.nibble_width)
	}
	
	//		encode																
	/// Encodes using the configured nibble width.
	/// 
	/// # Errors
	/// 
	/// See [`to_twos_complement()`](Self::to_twos_complement()).
	/// 
	pub fn encode(&self, value: &Numbers) -> Result<String, EncodingError> {
		self.to_twos_complement(value, self.config.nibble_width)
	}
	
	//		from_twos_complement												
	/// Decodes an unsigned two's-complement value back to a signed number.
	/// 
	/// If the value fills the whole field, i.e. the top bit is set, then it is
	/// treated as negative and the modulus is subtracted. Otherwise it is
	/// returned unchanged. Values that are already negative are also returned
	/// unchanged, as they are not in two's-complement form.
	/// 
	/// # Parameters
	/// 
	/// * `value`        - The encoded value, usually a hex string.
	/// * `nibble_width` - The width of the field, in hex digits.
	/// 
	/// # Errors
	/// 
	/// If the value is not a valid integer, an [`EncodingError::Validation`]
	/// will be returned. If the value needs more bits than the field holds, an
	/// [`EncodingError::NibbleWidth`] will be returned.
	/// 
	pub fn from_twos_complement(&self, value: &Numbers, nibble_width: usize) -> Result<Number, EncodingError> {
		let converter = self.padder.converter();
		converter.validate_int(value)?;
		let val       = converter.to_number(value)?;
		
		if val.is_negative() {
			trace!(%value, "Value already signed, passing through");
			return Ok(val);
		}
		
		let field_bits = field_bits(nibble_width);
		let bit_length = val.bits();
		
		if bit_length > field_bits {
			debug!(%value, nibble_width, bit_length, "Value too wide to decode");
			return Err(EncodingError::NibbleWidth { value: value.to_string(), nibble_width });
		}
		
		//	Top bit clear
		if bit_length == 0 || bit_length != field_bits {
			return Ok(val);
		}
		
		trace!(%value, nibble_width, "Top bit set, decoding as negative");
		Ok(Number::from(val.into_bigint() - modulus(field_bits)))
	}
	
	//		to_twos_complement													
	/// Encodes a signed integer as fixed-width two's-complement hex.
	/// 
	/// The result is `0x` followed by `nibble_width` hex digits, e.g. `-1` at
	/// the default width is `0x` followed by 64 `f` characters. Non-negative
	/// values wider than the field are returned in full rather than truncated.
	/// 
	/// # Parameters
	/// 
	/// * `value`        - The value to encode.
	/// * `nibble_width` - The width of the field, in hex digits.
	/// 
	/// # Errors
	/// 
	/// If the value is not a valid integer, an [`EncodingError::Validation`]
	/// will be returned. If a negative value's magnitude does not fit within
	/// `nibble_width` nibbles, an [`EncodingError::NibbleWidth`] will be
	/// returned.
	/// 
	pub fn to_twos_complement(&self, value: &Numbers, nibble_width: usize) -> Result<String, EncodingError> {
		let converter = self.padder.converter();
		converter.validate_int(value)?;
		let val       = converter.to_number(value)?;
		
		if !val.is_negative() {
			let hex = converter.to_hex(&Numbers::from(val))?;
			return self.padder.pad_left(&Numbers::from(hex), nibble_width, DEFAULT_FILL);
		}
		
		let modulus = modulus(field_bits(nibble_width));
		let val     = val.into_bigint();
		
		if -&val >= modulus {
			debug!(%value, nibble_width, "Magnitude too large for nibble width");
			return Err(EncodingError::NibbleWidth { value: value.to_string(), nibble_width });
		}
		
		let complement = val + modulus;
		trace!(%value, nibble_width, %complement, "Encoded negative value");
		let hex        = converter.number_to_hex(&Numbers::BigInt(complement))?;
		self.padder.pad_left(&Numbers::from(hex), nibble_width, DEFAULT_FILL)
	}
}



//		Functions

//		field_bits																
/// The number of bits in a field of the given number of nibbles.
fn field_bits(nibble_width: usize) -> u64 {
	u64::try_from(nibble_width).unwrap_or(u64::MAX).saturating_mul(4)
}

//		from_twos_complement													
/// Decodes two's-complement hex, using the [`StandardConverter`].
/// 
/// See [`TwosComplementCodec::from_twos_complement()`].
/// 
/// # Errors
/// 
/// If the value is not a valid integer, or is too wide for the field, then an
/// error will be returned.
/// 
pub fn from_twos_complement(value: impl Into<Numbers>, nibble_width: usize) -> Result<Number, EncodingError> {
	TwosComplementCodec::<StandardConverter>::default().from_twos_complement(&value.into(), nibble_width)
}

//		modulus																	
/// Two raised to the given number of bits.
fn modulus(bits: u64) -> BigInt {
	BigInt::one() << bits
}

//		to_twos_complement														
/// Encodes a signed integer as two's-complement hex, using the
/// [`StandardConverter`].
/// 
/// See [`TwosComplementCodec::to_twos_complement()`].
/// 
/// # Errors
/// 
/// If the value is not a valid integer, or a negative value's magnitude is too
/// large for the field, then an error will be returned.
/// 
pub fn to_twos_complement(value: impl Into<Numbers>, nibble_width: usize) -> Result<String, EncodingError> {
	TwosComplementCodec::<StandardConverter>::default().to_twos_complement(&value.into(), nibble_width)
}
