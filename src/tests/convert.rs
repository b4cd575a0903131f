//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod standard_converter {
	use super::*;
	
	//		is_strict_hex														
	#[test]
	fn is_strict_hex__matches_predicate() {
		assert!( StandardConverter.is_strict_hex("0x3456ff"));
		assert!( StandardConverter.is_strict_hex("-0xAB"));
		assert!(!StandardConverter.is_strict_hex("3456ff"));
		assert!(!StandardConverter.is_strict_hex("0x"));
	}
	
	//		validate_int														
	#[test]
	fn validate_int__valid() {
		assert_ok!(StandardConverter.validate_int(&Numbers::Int(-1)));
		assert_ok!(StandardConverter.validate_int(&Numbers::BigInt(BigInt::from(u128::MAX))));
		assert_ok!(StandardConverter.validate_int(&Numbers::from("0xff")));
		assert_ok!(StandardConverter.validate_int(&Numbers::from("-12")));
		assert_ok!(StandardConverter.validate_int(&Numbers::from("0b11")));
	}
	#[test]
	fn validate_int__invalid() {
		assert_err_eq!(StandardConverter.validate_int(&Numbers::from("1.5")), ValidationError::InvalidDigit('.'));
		assert_err_eq!(StandardConverter.validate_int(&Numbers::from("")),    ValidationError::EmptyValue);
		assert_err_eq!(StandardConverter.validate_int(&Numbers::from("abc")), ValidationError::InvalidDigit('a'));
		assert_err_eq!(
			StandardConverter.validate_int(&Numbers::Hex(s!("0xzz"))),
			ValidationError::NotAnInteger(s!("0xzz")),
		);
	}
	
	//		to_number															
	#[test]
	fn to_number__narrow() {
		assert_ok_eq!(StandardConverter.to_number(&Numbers::from("9007199254740993")), Number::Int(9_007_199_254_740_993));
		assert_ok_eq!(StandardConverter.to_number(&Numbers::from("-0x10")),            Number::Int(-16));
		assert_ok_eq!(StandardConverter.to_number(&Numbers::BigInt(BigInt::from(7))), Number::Int(7));
	}
	#[test]
	fn to_number__wide() {
		let hex = format!("0x{}", "f".repeat(18));
		assert_ok_eq!(
			StandardConverter.to_number(&Numbers::from(hex)),
			Number::BigInt((BigInt::from(1) << 72_u32) - BigInt::from(1)),
		);
	}
	
	//		number_to_hex														
	#[test]
	fn number_to_hex__integers() {
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::Int(0)),        s!("0x0"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::Int(255)),      s!("0xff"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::Int(-255)),     s!("-0xff"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::Int(i64::MIN)), s!("-0x8000000000000000"));
		assert_ok_eq!(
			StandardConverter.number_to_hex(&Numbers::BigInt(BigInt::from(u128::MAX))),
			format!("0x{}", "f".repeat(32)),
		);
	}
	#[test]
	fn number_to_hex__strings() {
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::from("0x00FF")), s!("0xff"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::from("-0x0A")),  s!("-0xa"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::from("0x000")),  s!("0x0"));
		assert_ok_eq!(StandardConverter.number_to_hex(&Numbers::from("100")),    s!("0x64"));
	}
	#[test]
	fn number_to_hex__invalid() {
		assert_err_eq!(StandardConverter.number_to_hex(&Numbers::from("abc")), ValidationError::InvalidDigit('a'));
	}
	
	//		to_hex																
	#[test]
	fn to_hex__integers() {
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::Int(16)),  s!("0x10"));
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::Int(-16)), s!("-0x10"));
	}
	#[test]
	fn to_hex__hex_strings() {
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::from("0xABC")),  s!("0xABC"));
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::from("-0x0A")),  s!("-0xa"));
	}
	#[test]
	fn to_hex__other_strings() {
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::from("100")), s!("0x64"));
		assert_ok_eq!(StandardConverter.to_hex(&Numbers::from("hi")),  s!("0x6869"));
	}
	#[test]
	fn to_hex__invalid() {
		assert_err_eq!(
			StandardConverter.to_hex(&Numbers::Hex(s!("0xzz"))),
			ValidationError::NotAnInteger(s!("0xzz")),
		);
	}
	
	//		pad_left_hex														
	#[test]
	fn pad_left_hex__integers() {
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::Int(5),  4, '0'), s!("0x0005"));
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::Int(-5), 4, '0'), s!("-0x0005"));
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::Int(0),  1, '0'), s!("0x0"));
	}
	#[test]
	fn pad_left_hex__strings() {
		assert_ok_eq!(
			StandardConverter.pad_left_hex(&Numbers::from("0x3456ff"), 20, '0'),
			s!("0x000000000000003456ff"),
		);
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::from("-0xff"), 4, '0'), s!("-0x00ff"));
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::from("26"),    4, '0'), s!("0x001a"));
	}
	#[test]
	fn pad_left_hex__no_truncation() {
		assert_ok_eq!(StandardConverter.pad_left_hex(&Numbers::Int(0x12345), 2, '0'), s!("0x12345"));
	}
}

mod functions {
	use super::*;
	
	//		utf8_to_hex															
	#[test]
	fn utf8_to_hex__text() {
		assert_eq!(utf8_to_hex("hi"), s!("0x6869"));
		assert_eq!(utf8_to_hex("é"),  s!("0xc3a9"));
	}
	#[test]
	fn utf8_to_hex__empty() {
		assert_eq!(utf8_to_hex(""), s!("0x"));
	}
	#[test]
	fn utf8_to_hex__nul_trimmed() {
		assert_eq!(utf8_to_hex("\0hi\0\0"), s!("0x6869"));
	}
}
