//! Integer-like input values, and the normalised numbers produced from them.



//		Modules

#[cfg(test)]
#[path = "tests/numbers.rs"]
mod tests;



//		Packages

use crate::errors::ValidationError;
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Signed, ToPrimitive};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Unexpected, Visitor},
};
use serde_json::Error as JsonError;



//		Enums

//		Number																	
/// A normalised integer, held in the narrowest form that fits.
/// 
/// Values that fit within an [`i64`] are always held as [`Number::Int`], and
/// anything wider as [`Number::BigInt`]. Constructing a [`Number`] from a
/// [`BigInt`] applies this rule, so two equal values always compare equal.
/// 
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Number {
	/// An integer that fits within 64 signed bits.
	Int(i64),
	
	/// An arbitrary-precision integer that does not fit within an [`i64`].
	BigInt(BigInt),
}

//󰭅		Number																	
impl Number {
	//		bits																
	/// The exact number of bits needed to represent the magnitude.
	/// 
	/// Zero has a bit length of zero.
	/// 
	#[must_use]
	pub fn bits(&self) -> u64 {
		match self {
			Self::Int(v)    => u64::from(u64::BITS - v.unsigned_abs().leading_zeros()),
			Self::BigInt(v) => v.bits(),
		}
	}
	
	//		from_json															
	/// Deserialises a JSON number or numeric string into a [`Number`].
	/// 
	/// # Errors
	/// 
	/// If the JSON is invalid, or does not contain an integer, then an error
	/// will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		into_bigint															
	/// Converts into an arbitrary-precision integer.
	#[must_use]
	pub fn into_bigint(self) -> BigInt {
		match self {
			Self::Int(v)    => BigInt::from(v),
			Self::BigInt(v) => v,
		}
	}
	
	//		is_negative															
	/// Whether the value is below zero.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		match self {
			Self::Int(v)    => *v < 0,
			Self::BigInt(v) => v.is_negative(),
		}
	}
	
	//		to_bigint															
	/// Returns the value as an arbitrary-precision integer.
	#[must_use]
	pub fn to_bigint(&self) -> BigInt {
		self.clone().into_bigint()
	}
	
	//		to_json																
	/// Serialises the value to JSON.
	/// 
	/// Values that fit within an [`i64`] become JSON numbers, and wider values
	/// become decimal strings.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Number {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(NumberVisitor)
	}
}

//󰭅		Display																	
impl Display for Number {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v)    => write!(f, "{v}"),
			Self::BigInt(v) => write!(f, "{v}"),
		}
	}
}

//󰭅		From: BigInt -> Number													
impl From<BigInt> for Number {
	//		from																
	fn from(v: BigInt) -> Self {
		v.to_i64().map_or(Self::BigInt(v), Self::Int)
	}
}

//󰭅		From: i64 -> Number														
impl From<i64> for Number {
	//		from																
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

//󰭅		From: Number -> BigInt													
impl From<Number> for BigInt {
	//		from																
	fn from(v: Number) -> Self {
		v.into_bigint()
	}
}

//󰭅		FromStr																	
impl FromStr for Number {
	type Err = ValidationError;
	
	//		from_str															
	/// Parses a decimal, hexadecimal, binary, or octal integer string.
	/// 
	/// Surrounding whitespace is ignored. A single leading `+` or `-` is
	/// accepted, followed by an optional `0x`, `0b`, or `0o` base prefix.
	/// 
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		
		if trimmed.is_empty() {
			return Err(ValidationError::EmptyValue);
		}
		
		let (without_sign, sign) =
			if        let Some(rest) = trimmed.strip_prefix('-') {
				(rest, Sign::Minus)
			} else if let Some(rest) = trimmed.strip_prefix('+') {
				(rest, Sign::Plus)
			} else {
				(trimmed, Sign::Plus)
			}
		;
		
		let (digits, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16_u8)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(without_sign, 10)
			}
		;
		
		if digits.is_empty() {
			return Err(ValidationError::EmptyValue);
		}
		
		if let Some(c) = digits.chars().find(|c| !c.is_digit(u32::from(radix))) {
			return Err(if radix == 10 {
				ValidationError::InvalidDigit(c)
			} else {
				ValidationError::InvalidRadix(c, radix)
			});
		}
		
		let magnitude = BigUint::from_str_radix(digits, u32::from(radix))
			.map_err(|_err| ValidationError::NotAnInteger(s.to_owned()))?
		;
		Ok(Self::from(BigInt::from_biguint(sign, magnitude)))
	}
}

//󰭅		PartialEq<i64>															
impl PartialEq<i64> for Number {
	//		eq																	
	fn eq(&self, other: &i64) -> bool {
		matches!(self, Self::Int(v) if v == other)
	}
}

//󰭅		Serialize																
impl Serialize for Number {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Int(v)    => serializer.serialize_i64(*v),
			//	Too wide for most formats' native integers
			Self::BigInt(v) => serializer.collect_str(v),
		}
	}
}

//		Numbers																	
/// An integer-like input value.
/// 
/// This is the closed set of shapes that the padding and two's-complement
/// functions accept. String input is classified exactly once, on construction,
/// into either [`Numbers::Hex`] (if it is a strict hex string, as decided by
/// [`is_hex_strict()`]) or [`Numbers::Str`].
/// 
/// # Conversion
/// 
/// [`From`] is implemented for all of the primitive integer types, as well as
/// [`BigInt`], [`BigUint`], [`Number`], [`&str`](str), and [`String`]. Integers
/// that fit within an [`i64`] become [`Numbers::Int`], and wider ones become
/// [`Numbers::BigInt`].
/// 
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Numbers {
	/// A native integer.
	Int(i64),
	
	/// An arbitrary-precision integer.
	BigInt(BigInt),
	
	/// A strict hex string, e.g. `0x1f` or `-0x1f`.
	Hex(String),
	
	/// Any other string, e.g. a decimal integer or plain text.
	Str(String),
}

//󰭅		Numbers																	
impl Numbers {
	//		as_str																
	/// Returns the string content, if this is a string variant.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Hex(s) | Self::Str(s) => Some(s.as_str()),
			Self::Int(_) | Self::BigInt(_) => None,
		}
	}
	
	//		from_json															
	/// Deserialises a JSON number or string into a [`Numbers`] value.
	/// 
	/// # Errors
	/// 
	/// If the JSON is invalid, or holds something other than an integer or a
	/// string, then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		to_json																
	/// Serialises the value to JSON.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Numbers {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(NumbersVisitor)
	}
}

//󰭅		Display																	
impl Display for Numbers {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v)                => write!(f, "{v}"),
			Self::BigInt(v)             => write!(f, "{v}"),
			Self::Hex(s) | Self::Str(s) => f.write_str(s),
		}
	}
}

//󰭅		From: &str -> Numbers													
impl From<&str> for Numbers {
	//		from																
	fn from(v: &str) -> Self {
		Self::from(v.to_owned())
	}
}

//󰭅		From: String -> Numbers													
impl From<String> for Numbers {
	//		from																
	fn from(v: String) -> Self {
		if is_hex_strict(&v) {
			Self::Hex(v)
		} else {
			Self::Str(v)
		}
	}
}

//󰭅		From: BigInt -> Numbers													
impl From<BigInt> for Numbers {
	//		from																
	fn from(v: BigInt) -> Self {
		Self::BigInt(v)
	}
}

//󰭅		From: BigUint -> Numbers												
impl From<BigUint> for Numbers {
	//		from																
	fn from(v: BigUint) -> Self {
		Self::BigInt(BigInt::from(v))
	}
}

//󰭅		From: Number -> Numbers													
impl From<Number> for Numbers {
	//		from																
	fn from(v: Number) -> Self {
		match v {
			Number::Int(v)    => Self::Int(v),
			Number::BigInt(v) => Self::BigInt(v),
		}
	}
}

/// Implements lossless conversion from integer types that always fit an [`i64`].
macro_rules! impl_from_narrow {
	($($t:ty),*) => {$(
		impl From<$t> for Numbers {
			fn from(v: $t) -> Self {
				Self::Int(i64::from(v))
			}
		}
	)*};
}

/// Implements conversion from integer types that may overflow an [`i64`].
macro_rules! impl_from_wide {
	($($t:ty),*) => {$(
		impl From<$t> for Numbers {
			fn from(v: $t) -> Self {
				i64::try_from(v).map_or_else(|_| Self::BigInt(BigInt::from(v)), Self::Int)
			}
		}
	)*};
}

impl_from_narrow!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide!(i128, isize, u64, u128, usize);

//󰭅		Serialize																
impl Serialize for Numbers {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Int(v)                => serializer.serialize_i64(*v),
			Self::BigInt(v)             => serializer.collect_str(v),
			Self::Hex(s) | Self::Str(s) => serializer.serialize_str(s),
		}
	}
}



//		Structs

//		NumberVisitor															
/// Visitor for deserialising a [`Number`] from integers or integer strings.
struct NumberVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for NumberVisitor {
	type Value = Number;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("an integer or an integer string")
	}
	
	//		visit_i64															
	fn visit_i64<E: SerdeError>(self, v: i64) -> Result<Self::Value, E> {
		Ok(Number::Int(v))
	}
	
	//		visit_i128															
	fn visit_i128<E: SerdeError>(self, v: i128) -> Result<Self::Value, E> {
		Ok(Number::from(BigInt::from(v)))
	}
	
	//		visit_u64															
	fn visit_u64<E: SerdeError>(self, v: u64) -> Result<Self::Value, E> {
		Ok(Number::from(BigInt::from(v)))
	}
	
	//		visit_u128															
	fn visit_u128<E: SerdeError>(self, v: u128) -> Result<Self::Value, E> {
		Ok(Number::from(BigInt::from(v)))
	}
	
	//		visit_f64															
	fn visit_f64<E: SerdeError>(self, v: f64) -> Result<Self::Value, E> {
		Err(E::invalid_type(Unexpected::Float(v), &self))
	}
	
	//		visit_str															
	fn visit_str<E: SerdeError>(self, v: &str) -> Result<Self::Value, E> {
		v.parse().map_err(E::custom)
	}
}

//		NumbersVisitor															
/// Visitor for deserialising [`Numbers`] from integers or strings.
struct NumbersVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for NumbersVisitor {
	type Value = Numbers;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("an integer or a string")
	}
	
	//		visit_i64															
	fn visit_i64<E: SerdeError>(self, v: i64) -> Result<Self::Value, E> {
		Ok(Numbers::Int(v))
	}
	
	//		visit_i128															
	fn visit_i128<E: SerdeError>(self, v: i128) -> Result<Self::Value, E> {
		Ok(Numbers::from(v))
	}
	
	//		visit_u64															
	fn visit_u64<E: SerdeError>(self, v: u64) -> Result<Self::Value, E> {
		Ok(Numbers::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E: SerdeError>(self, v: u128) -> Result<Self::Value, E> {
		Ok(Numbers::from(v))
	}
	
	//		visit_f64															
	fn visit_f64<E: SerdeError>(self, v: f64) -> Result<Self::Value, E> {
		Err(E::invalid_type(Unexpected::Float(v), &self))
	}
	
	//		visit_str															
	fn visit_str<E: SerdeError>(self, v: &str) -> Result<Self::Value, E> {
		Ok(Numbers::from(v))
	}
	
	//		visit_string														
	fn visit_string<E: SerdeError>(self, v: String) -> Result<Self::Value, E> {
		Ok(Numbers::from(v))
	}
}



//		Functions

//		is_hex_strict															
/// Whether a string is a strict hex string.
/// 
/// A strict hex string is `0x` (or `0X`) followed by at least one hexadecimal
/// digit, optionally preceded by a single `-`.
/// 
#[must_use]
pub fn is_hex_strict(value: &str) -> bool {
	let unsigned = value.strip_prefix('-').unwrap_or(value);
	unsigned
		.strip_prefix("0x")
		.or_else(|| unsigned.strip_prefix("0X"))
		.is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()))
}
