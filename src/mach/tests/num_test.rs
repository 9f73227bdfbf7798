use super::*;
use crate::lang::ErrorCode;

#[test]
fn test_exact_decimal_arithmetic() {
    assert_eq!(num("0.1").add(&num("0.2")), num("0.3"));
    assert_eq!(num("1").div(&num("4")).unwrap().to_string(), "0.25");
    assert_eq!(num("1.5").mul(&num("-2")).to_string(), "-3");
    assert_eq!(num("1").sub(&num("1e-30")).to_string().len(), 32);
}

#[test]
fn test_division_by_zero() {
    let e = num("1").div(&Number::zero()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::DivisionByZero);
}

#[test]
fn test_round_half_away_from_zero() {
    assert_eq!(num("2.5").round(0).to_string(), "3");
    assert_eq!(num("-2.5").round(0).to_string(), "-3");
    assert_eq!(num("1.2345").round(3).to_string(), "1.235");
    let third = num("1").div(&num("3")).unwrap();
    assert_eq!(third.round(5).to_string(), "0.33333");
    let two_thirds = num("2").div(&num("3")).unwrap();
    assert_eq!(two_thirds.round(5).to_string(), "0.66667");
}

#[test]
fn test_modulo_takes_sign_of_divisor() {
    assert_eq!(num("7").modulo(&num("3")).unwrap().to_string(), "1");
    assert_eq!(num("-7").modulo(&num("3")).unwrap().to_string(), "2");
    assert_eq!(num("7").modulo(&num("-3")).unwrap().to_string(), "-2");
    assert_eq!(num("5.5").modulo(&num("2")).unwrap().to_string(), "1.5");
    assert_eq!(num("5").modulo(&Number::zero()).unwrap().to_string(), "5");
}

#[test]
fn test_pow() {
    assert_eq!(num("2").pow(&num("10")).unwrap().to_string(), "1024");
    assert_eq!(num("2").pow(&num("-2")).unwrap().to_string(), "0.25");
    assert_eq!(num("-3").pow(&num("3")).unwrap().to_string(), "-27");
    let root = num("2").pow(&num("0.5")).unwrap();
    assert_eq!(root.round(10).to_string(), "1.4142135624");
    let e = Number::zero().pow(&num("-1")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::DivisionByZero);
    let e = num("-8").pow(&num("0.5")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::IllegalFunctionCall);
}

#[test]
fn test_roots() {
    assert_eq!(num("2").sqrt().unwrap().round(10).to_string(), "1.4142135624");
    assert_eq!(num("144").sqrt().unwrap().round(50).to_string(), "12");
    assert_eq!(num("27").cbrt().unwrap().round(50).to_string(), "3");
    assert_eq!(num("-27").cbrt().unwrap().round(50).to_string(), "-3");
    assert!(num("-1").sqrt().is_err());
}

#[test]
fn test_constants() {
    assert_eq!(
        Number::pi().round(20).to_string(),
        "3.14159265358979323846"
    );
    assert_eq!(Number::e().round(10).to_string(), "2.7182818285");
    assert_eq!(Number::ln10().round(5).to_string(), "2.30259");
}

#[test]
fn test_logarithms() {
    assert_eq!(num("1000").log10().unwrap().to_string(), "3");
    assert_eq!(num("0.01").log10().unwrap().to_string(), "-2");
    assert_eq!(num("8").log2().unwrap().round(50).to_string(), "3");
    assert_eq!(Number::e().ln().unwrap().round(50).to_string(), "1");
    assert_eq!(num("81").log(&num("3")).unwrap().round(50).to_string(), "4");
    assert!(Number::zero().ln().is_err());
    assert!(num("-1").ln().is_err());
}

#[test]
fn test_trigonometry() {
    assert!(Number::zero().sin().is_zero());
    assert_eq!(Number::zero().cos().round(50).to_string(), "1");
    let sixth = Number::pi().div(&num("6")).unwrap();
    assert_eq!(sixth.sin().round(50).to_string(), "0.5");
    let quarter = Number::one().atan().mul(&num("4"));
    assert_eq!(quarter.round(50), Number::pi().round(50));
    assert_eq!(num("1").asin().unwrap().mul(&num("2")).round(50), Number::pi().round(50));
    assert!(num("2").asin().is_err());
    let half_pi = Number::pi().div(&num("2")).unwrap();
    assert_eq!(num("1").atan2(&Number::zero()).round(50), half_pi.round(50));
}

#[test]
fn test_integer_functions() {
    assert_eq!(num("20").factorial().unwrap().to_string(), "2432902008176640000");
    assert_eq!(Number::zero().factorial().unwrap().to_string(), "1");
    assert!(num("-1").factorial().is_err());
    assert!(num("2.5").factorial().is_err());
    assert_eq!(num("12").gcd(&num("18")).unwrap().to_string(), "6");
    assert_eq!(num("4").lcm(&num("6")).unwrap().to_string(), "12");
    assert!(num("1.5").gcd(&num("3")).is_err());
}

#[test]
fn test_floor_ceil_trunc() {
    assert_eq!(num("-2.5").floor().to_string(), "-3");
    assert_eq!(num("-2.5").ceil().to_string(), "-2");
    assert_eq!(num("-2.5").trunc().to_string(), "-2");
    assert_eq!(num("2.5").floor().to_string(), "2");
}

#[test]
fn test_display_notation() {
    assert_eq!(num("1e20").to_string(), "100000000000000000000");
    assert_eq!(num("1e21").to_string(), "1e+21");
    assert_eq!(num("0.000001").to_string(), "0.000001");
    assert_eq!(num("0.0000001").to_string(), "1e-7");
    assert_eq!(num("-1.25e30").to_string(), "-1.25e+30");
    assert_eq!(Number::zero().to_string(), "0");
}

#[test]
fn test_notations() {
    assert_eq!(num("1500").to_exponential_string(), "1.5e+3");
    assert_eq!(num("0.5").to_exponential_string(), "5e-1");
    assert_eq!(num("12345").to_engineering_string(), "12.345e+3");
    assert_eq!(num("0.001").to_engineering_string(), "1e-3");
    assert_eq!(num("100").to_engineering_string(), "100e+0");
    assert_eq!(num("1e21").to_fixed_string(), "1000000000000000000000");
    assert_eq!(num("-0.0125").to_fixed_string(), "-0.0125");
}

#[test]
fn test_radix() {
    assert_eq!(num("255").to_radix_string(16), "FF");
    assert_eq!(num("10.5").to_radix_string(16), "A.8");
    assert_eq!(num("5.5").to_radix_string(2), "101.1");
    assert_eq!(num("0").to_radix_string(16), "0");
}

#[test]
fn test_radix_twos_complement() {
    assert_eq!(num("-1").to_radix_string(16), "F");
    assert_eq!(num("-255").to_radix_string(16), "F01");
    assert_eq!(num("-16").to_radix_string(16), "F0");
    assert_eq!(num("-1").to_radix_string(2), "1111");
}

#[test]
fn test_radix_twos_complement_fraction() {
    assert_eq!(num("-0.5").to_radix_string(16), "0.8");
    assert_eq!(num("-0.25").to_radix_string(16), "0.C");
    assert_eq!(num("-0.5").to_radix_string(2), "0.1");
    assert_eq!(num("-0.75").to_radix_string(16), "F.4");
    assert_eq!(num("-1.5").to_radix_string(16), "E.8");
}

#[test]
fn test_sqrt_of_small_values() {
    assert_eq!(num("0.0004").sqrt().unwrap().round(50).to_string(), "0.02");
    assert_eq!(num("0.004").sqrt().unwrap().round(10).to_string(), "0.0632455532");
}

#[test]
fn test_malformed() {
    let e = "1.2.3".parse::<Number>().unwrap_err();
    assert_eq!(e.code(), ErrorCode::MalformedLiteral);
}
