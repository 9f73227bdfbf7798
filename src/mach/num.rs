use crate::error;
use crate::lang::Error;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use once_cell::sync::Lazy;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

/// Significant digits kept after every inexact operation.
pub const PRECISION: u64 = 256;
const GUARD: u64 = 20;
const WORK: u64 = PRECISION + GUARD;
const CACHED: u64 = WORK + GUARD;

static PI: Lazy<BigDecimal> = Lazy::new(|| machin_pi(CACHED));
static LN10: Lazy<BigDecimal> = Lazy::new(|| ln_reduced(&BigDecimal::from(10), CACHED));

/// An arbitrary precision decimal, always stored rounded to
/// [`PRECISION`] significant digits without trailing zeros.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(BigDecimal);

fn parts(d: &BigDecimal) -> (BigInt, i64) {
    d.as_bigint_and_exponent()
}

fn from_parts(int: BigInt, scale: i64) -> BigDecimal {
    BigDecimal::new(int, scale)
}

fn pow10(n: u64) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

fn digit_count(int: &BigInt) -> u64 {
    if int.is_zero() {
        1
    } else {
        int.magnitude().to_string().len() as u64
    }
}

/// Decimal exponent of the leading digit.
fn exponent(d: &BigDecimal) -> i64 {
    let (int, scale) = parts(d);
    digit_count(&int) as i64 - 1 - scale
}

fn scale_pow10(d: &BigDecimal, k: i64) -> BigDecimal {
    let (int, scale) = parts(d);
    from_parts(int, scale - k)
}

/// Integer division rounding half away from zero.
fn div_round(n: &BigInt, d: &BigInt) -> BigInt {
    let (n, d) = if d.is_negative() {
        (-n, -d)
    } else {
        (n.clone(), d.clone())
    };
    let (q, r) = n.div_rem(&d);
    if r.abs() * 2 >= d {
        if n.is_negative() {
            q - 1
        } else {
            q + 1
        }
    } else {
        q
    }
}

fn round_sig(d: BigDecimal, prec: u64) -> BigDecimal {
    let (int, scale) = parts(&d);
    let digits = digit_count(&int);
    if digits <= prec {
        return d;
    }
    let drop = digits - prec;
    from_parts(div_round(&int, &pow10(drop)), scale - drop as i64)
}

fn round_places(d: &BigDecimal, places: i64) -> BigDecimal {
    let (int, scale) = parts(d);
    if scale <= places {
        return d.clone();
    }
    let drop = (scale - places) as u64;
    from_parts(div_round(&int, &pow10(drop)), places)
}

fn trim(d: BigDecimal) -> BigDecimal {
    let (int, scale) = parts(&d);
    if int.is_zero() {
        return BigDecimal::zero();
    }
    let s = int.to_string();
    let zeros = s.len() - s.trim_end_matches('0').len();
    if zeros == 0 {
        return d;
    }
    from_parts(int / pow10(zeros as u64), scale - zeros as i64)
}

fn mul(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    round_sig(a * b, prec)
}

fn div(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    let (ia, sa) = parts(a);
    let (ib, sb) = parts(b);
    let shift = (prec + 2 + digit_count(&ib)).saturating_sub(digit_count(&ia));
    let q = div_round(&(ia * pow10(shift)), &ib);
    round_sig(from_parts(q, sa - sb + shift as i64), prec)
}

fn div_int(a: &BigDecimal, n: u64, prec: u64) -> BigDecimal {
    div(a, &BigDecimal::from(n), prec)
}

fn negligible(term: &BigDecimal, prec: u64) -> bool {
    term.is_zero() || exponent(term) < -(prec as i64) - 2
}

fn floor_int(d: &BigDecimal) -> BigInt {
    let (int, scale) = parts(d);
    if scale <= 0 {
        int * pow10((-scale) as u64)
    } else {
        int.div_floor(&pow10(scale as u64))
    }
}

fn trunc_int(d: &BigDecimal) -> BigInt {
    let (int, scale) = parts(d);
    if scale <= 0 {
        int * pow10((-scale) as u64)
    } else {
        int / pow10(scale as u64)
    }
}

fn half() -> BigDecimal {
    from_parts(BigInt::from(5), 1)
}

fn sqrt(x: &BigDecimal, prec: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero();
    }
    let k = Integer::div_floor(&exponent(x), &2);
    let m = scale_pow10(x, -2 * k);
    let wp = prec + 5;
    let seed = m.to_f64().map(f64::sqrt).unwrap_or(1.0);
    let mut g = BigDecimal::from_str(&format!("{}", seed)).unwrap_or_else(|_| BigDecimal::one());
    for _ in 0..12 {
        let next = mul(&(&g + div(&m, &g, wp)), &half(), wp);
        if next == g {
            break;
        }
        g = next;
    }
    round_sig(scale_pow10(&g, k), prec)
}

fn exp(x: &BigDecimal, prec: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::one();
    }
    let mag = x.abs().to_f64().unwrap_or(f64::MAX);
    let k = if mag > 0.001 {
        (mag / 0.001).log2().ceil() as u32
    } else {
        0
    };
    let wp = prec + k as u64 / 3 + 5;
    let r = div(x, &BigDecimal::from(BigInt::one() << k as usize), wp);
    let mut sum = BigDecimal::one();
    let mut term = BigDecimal::one();
    let mut i = 1;
    loop {
        term = div_int(&mul(&term, &r, wp), i, wp);
        if negligible(&term, wp) {
            break;
        }
        sum += &term;
        i += 1;
    }
    for _ in 0..k {
        sum = mul(&sum, &sum, wp);
    }
    round_sig(sum, prec)
}

/// Natural log of a value near the unit interval, by repeated square
/// roots and the atanh series.
fn ln_reduced(m: &BigDecimal, prec: u64) -> BigDecimal {
    const ROOTS: u32 = 12;
    let wp = prec + 10;
    let mut y = m.clone();
    for _ in 0..ROOTS {
        y = sqrt(&y, wp);
    }
    let one = BigDecimal::one();
    let z = div(&(&y - &one), &(&y + &one), wp);
    let z2 = mul(&z, &z, wp);
    let mut sum = z.clone();
    let mut term = z;
    let mut k = 1;
    loop {
        term = mul(&term, &z2, wp);
        let t = div_int(&term, 2 * k + 1, wp);
        if negligible(&t, wp) {
            break;
        }
        sum += t;
        k += 1;
    }
    round_sig(sum * BigDecimal::from(BigInt::one() << (ROOTS + 1) as usize), prec)
}

fn ln10(prec: u64) -> BigDecimal {
    if prec <= CACHED {
        LN10.clone()
    } else {
        ln_reduced(&BigDecimal::from(10), prec)
    }
}

fn ln(x: &BigDecimal, prec: u64) -> BigDecimal {
    if x == &BigDecimal::one() {
        return BigDecimal::zero();
    }
    let e = exponent(x);
    let m = scale_pow10(x, -e);
    let wp = prec + 10;
    let mut r = ln_reduced(&m, wp);
    if e != 0 {
        r += mul(&ln10(wp), &BigDecimal::from(e), wp);
    }
    round_sig(r, prec)
}

fn atan_inv(n: u32, prec: u64) -> BigDecimal {
    let wp = prec + 5;
    let n2 = BigDecimal::from(n * n);
    let mut term = div_int(&BigDecimal::one(), n as u64, wp);
    let mut sum = term.clone();
    let mut k: u64 = 1;
    loop {
        term = div(&term, &n2, wp);
        let t = div_int(&term, 2 * k + 1, wp);
        if negligible(&t, wp) {
            break;
        }
        if k % 2 == 1 {
            sum -= t;
        } else {
            sum += t;
        }
        k += 1;
    }
    sum
}

fn machin_pi(prec: u64) -> BigDecimal {
    let pi = atan_inv(5, prec) * BigDecimal::from(16) - atan_inv(239, prec) * BigDecimal::from(4);
    round_sig(pi, prec)
}

fn pi(prec: u64) -> BigDecimal {
    if prec <= CACHED {
        PI.clone()
    } else {
        machin_pi(prec)
    }
}

/// Brings an angle into [-pi, pi].
fn reduce_angle(x: &BigDecimal, prec: u64) -> (BigDecimal, u64) {
    let wp = prec + exponent(x).max(0) as u64 + 5;
    let two_pi = pi(wp) * BigDecimal::from(2);
    if x.abs() <= pi(wp) {
        return (x.clone(), wp);
    }
    let n = BigDecimal::from(floor_int(&(div(x, &two_pi, wp) + half())));
    (x - n * two_pi, wp)
}

fn sin(x: &BigDecimal, prec: u64) -> BigDecimal {
    let (r, wp) = reduce_angle(x, prec);
    let r2 = mul(&r, &r, wp);
    let mut term = r.clone();
    let mut sum = r;
    let mut i: u64 = 1;
    loop {
        term = -div_int(&mul(&term, &r2, wp), (2 * i) * (2 * i + 1), wp);
        if negligible(&term, wp) {
            break;
        }
        sum += &term;
        i += 1;
    }
    round_sig(sum, prec)
}

fn cos(x: &BigDecimal, prec: u64) -> BigDecimal {
    let (r, wp) = reduce_angle(x, prec);
    let r2 = mul(&r, &r, wp);
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let mut i: u64 = 1;
    loop {
        term = -div_int(&mul(&term, &r2, wp), (2 * i - 1) * (2 * i), wp);
        if negligible(&term, wp) {
            break;
        }
        sum += &term;
        i += 1;
    }
    round_sig(sum, prec)
}

fn atan(x: &BigDecimal, prec: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero();
    }
    let wp = prec + 10;
    let one = BigDecimal::one();
    if x.abs() > one {
        let half_pi = mul(&pi(wp), &half(), wp);
        let r = &half_pi - atan(&div(&one, &x.abs(), wp), wp);
        return round_sig(if x.is_negative() { -r } else { r }, prec);
    }
    const HALVINGS: u32 = 4;
    let mut y = x.clone();
    for _ in 0..HALVINGS {
        let root = sqrt(&(&one + mul(&y, &y, wp)), wp);
        y = div(&y, &(&one + root), wp);
    }
    let y2 = mul(&y, &y, wp);
    let mut term = y.clone();
    let mut sum = y;
    let mut k: u64 = 1;
    loop {
        term = -mul(&term, &y2, wp);
        let t = div_int(&term, 2 * k + 1, wp);
        if negligible(&t, wp) {
            break;
        }
        sum += t;
        k += 1;
    }
    round_sig(sum * BigDecimal::from(1u32 << HALVINGS), prec)
}

fn complex_result() -> Error {
    error!(IllegalFunctionCall; "Complex results are not supported")
}

impl Number {
    fn new(d: BigDecimal) -> Number {
        Number(trim(round_sig(d, PRECISION)))
    }

    pub fn zero() -> Number {
        Number(BigDecimal::zero())
    }

    pub fn one() -> Number {
        Number(BigDecimal::one())
    }

    pub fn from_f64(f: f64) -> Number {
        match BigDecimal::from_str(&format!("{}", f)) {
            Ok(d) => Number::new(d),
            Err(_) => Number::zero(),
        }
    }

    pub fn pi() -> Number {
        Number::new(pi(WORK))
    }

    pub fn e() -> Number {
        Number::new(exp(&BigDecimal::one(), WORK))
    }

    pub fn ln10() -> Number {
        Number::new(ln10(WORK))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        parts(&self.0).1 <= 0
    }

    pub fn sign(&self) -> Number {
        if self.is_zero() {
            Number::zero()
        } else if self.is_negative() {
            Number::from(-1)
        } else {
            Number::one()
        }
    }

    pub fn abs(&self) -> Number {
        Number(self.0.abs())
    }

    pub fn neg(&self) -> Number {
        Number(-self.0.clone())
    }

    pub fn add(&self, rhs: &Number) -> Number {
        Number::new(&self.0 + &rhs.0)
    }

    pub fn sub(&self, rhs: &Number) -> Number {
        Number::new(&self.0 - &rhs.0)
    }

    pub fn mul(&self, rhs: &Number) -> Number {
        Number::new(&self.0 * &rhs.0)
    }

    pub fn div(&self, rhs: &Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(error!(DivisionByZero; "Division by zero"));
        }
        Ok(Number::new(div(&self.0, &rhs.0, WORK)))
    }

    /// `x - y * floor(x / y)`, so the result takes the sign of `y`.
    pub fn modulo(&self, rhs: &Number) -> Result<Number> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        let q = self.div(rhs)?.floor();
        Ok(self.sub(&q.mul(rhs)))
    }

    pub fn pow(&self, rhs: &Number) -> Result<Number> {
        if rhs.is_integer() {
            if let Some(n) = rhs.to_i64() {
                if n.unsigned_abs() <= 1_000_000 {
                    return self.powi(n);
                }
            }
        }
        if self.is_zero() {
            return if rhs.is_negative() {
                Err(error!(DivisionByZero; "Division by zero"))
            } else {
                Ok(Number::zero())
            };
        }
        if self.is_negative() {
            return Err(complex_result());
        }
        let y = mul(&rhs.0, &ln(&self.0, WORK), WORK);
        Number::from_decimal_exp(&y)
    }

    fn powi(&self, n: i64) -> Result<Number> {
        if n < 0 && self.is_zero() {
            return Err(error!(DivisionByZero; "Division by zero"));
        }
        let mut base = self.0.clone();
        let mut acc = BigDecimal::one();
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                acc = mul(&acc, &base, WORK);
            }
            e >>= 1;
            if e > 0 {
                base = mul(&base, &base, WORK);
            }
        }
        if n < 0 {
            acc = div(&BigDecimal::one(), &acc, WORK);
        }
        Ok(Number::new(acc))
    }

    fn from_decimal_exp(x: &BigDecimal) -> Result<Number> {
        if x.abs() > BigDecimal::from(1_000_000_000) {
            return Err(error!(Overflow; "Result out of range"));
        }
        Ok(Number::new(exp(x, WORK)))
    }

    pub fn sqrt(&self) -> Result<Number> {
        if self.is_negative() {
            return Err(complex_result());
        }
        Ok(Number::new(sqrt(&self.0, WORK)))
    }

    pub fn cbrt(&self) -> Result<Number> {
        if self.is_zero() {
            return Ok(Number::zero());
        }
        let third = div_int(&ln(&self.0.abs(), WORK), 3, WORK);
        let r = Number::new(exp(&third, WORK));
        Ok(if self.is_negative() { r.neg() } else { r })
    }

    pub fn exp(&self) -> Result<Number> {
        Number::from_decimal_exp(&self.0)
    }

    pub fn ln(&self) -> Result<Number> {
        if self.is_zero() {
            return Err(error!(IllegalFunctionCall; "Logarithm of zero"));
        }
        if self.is_negative() {
            return Err(complex_result());
        }
        Ok(Number::new(ln(&self.0, WORK)))
    }

    pub fn log(&self, base: &Number) -> Result<Number> {
        let b = base.ln()?;
        if b.is_zero() {
            return Err(error!(DivisionByZero; "Logarithm base of one"));
        }
        self.ln()?.div(&b)
    }

    pub fn log2(&self) -> Result<Number> {
        self.log(&Number::from(2))
    }

    pub fn log10(&self) -> Result<Number> {
        if self.is_zero() || self.is_negative() {
            return self.ln();
        }
        let (int, scale) = parts(&self.0);
        if int.is_one() {
            return Ok(Number::from(-scale));
        }
        Ok(Number::new(div(&ln(&self.0, WORK), &ln10(WORK), WORK)))
    }

    pub fn sin(&self) -> Number {
        Number::new(sin(&self.0, WORK))
    }

    pub fn cos(&self) -> Number {
        Number::new(cos(&self.0, WORK))
    }

    pub fn tan(&self) -> Result<Number> {
        let c = cos(&self.0, WORK);
        if c.is_zero() {
            return Err(error!(DivisionByZero; "Division by zero"));
        }
        Ok(Number::new(div(&sin(&self.0, WORK), &c, WORK)))
    }

    pub fn atan(&self) -> Number {
        Number::new(atan(&self.0, WORK))
    }

    pub fn asin(&self) -> Result<Number> {
        let one = BigDecimal::one();
        let x = self.0.abs();
        if x > one {
            return Err(complex_result());
        }
        if x == one {
            let half_pi = mul(&pi(WORK), &half(), WORK);
            return Ok(Number::new(if self.is_negative() { -half_pi } else { half_pi }));
        }
        let root = sqrt(&(&one - mul(&self.0, &self.0, WORK)), WORK);
        Ok(Number::new(atan(&div(&self.0, &root, WORK), WORK)))
    }

    pub fn acos(&self) -> Result<Number> {
        let half_pi = Number::new(mul(&pi(WORK), &half(), WORK));
        Ok(half_pi.sub(&self.asin()?))
    }

    pub fn atan2(&self, x: &Number) -> Number {
        let y = self;
        if x.is_zero() {
            let half_pi = Number::new(mul(&pi(WORK), &half(), WORK));
            return if y.is_zero() {
                Number::zero()
            } else if y.is_negative() {
                half_pi.neg()
            } else {
                half_pi
            };
        }
        let base = atan(&div(&y.0, &x.0, WORK), WORK);
        if x.is_negative() {
            let p = pi(WORK);
            Number::new(if y.is_negative() { base - p } else { base + p })
        } else {
            Number::new(base)
        }
    }

    pub fn sinh(&self) -> Result<Number> {
        let a = self.exp()?;
        let b = self.neg().exp()?;
        Ok(Number::new((a.0 - b.0) * half()))
    }

    pub fn cosh(&self) -> Result<Number> {
        let a = self.exp()?;
        let b = self.neg().exp()?;
        Ok(Number::new((a.0 + b.0) * half()))
    }

    pub fn tanh(&self) -> Result<Number> {
        if self.abs() > Number::from(1000) {
            return Ok(self.sign());
        }
        self.sinh()?.div(&self.cosh()?)
    }

    pub fn floor(&self) -> Number {
        Number::new(BigDecimal::from(floor_int(&self.0)))
    }

    pub fn ceil(&self) -> Number {
        self.neg().floor().neg()
    }

    pub fn trunc(&self) -> Number {
        Number::new(BigDecimal::from(trunc_int(&self.0)))
    }

    /// Rounds to `places` decimals, half away from zero.
    pub fn round(&self, places: i64) -> Number {
        Number::new(round_places(&self.0, places))
    }

    pub fn to_bigint(&self) -> BigInt {
        trunc_int(&self.0)
    }

    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.to_bigint().to_i64()
        } else {
            None
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    fn integer_operand(&self, name: &str) -> Result<BigInt> {
        if !self.is_integer() {
            return Err(error!(IllegalFunctionCall;
                &format!("Function {} requires integer arguments", name)));
        }
        Ok(self.to_bigint())
    }

    pub fn gcd(&self, rhs: &Number) -> Result<Number> {
        let a = self.integer_operand("gcd")?;
        let b = rhs.integer_operand("gcd")?;
        Ok(Number::from(a.gcd(&b)))
    }

    pub fn lcm(&self, rhs: &Number) -> Result<Number> {
        let a = self.integer_operand("lcm")?;
        let b = rhs.integer_operand("lcm")?;
        Ok(Number::from(a.lcm(&b)))
    }

    pub fn factorial(&self) -> Result<Number> {
        let n = match self.to_i64() {
            Some(n) if n >= 0 => n,
            _ => {
                return Err(error!(IllegalFunctionCall;
                    "Factorial requires a non-negative integer"))
            }
        };
        if n > 100_000 {
            return Err(error!(Overflow; "Result out of range"));
        }
        let mut acc = BigDecimal::one();
        for i in 2..=n {
            acc = mul(&acc, &BigDecimal::from(i), WORK);
        }
        Ok(Number::new(acc))
    }

    /// Digits of the magnitude and the decimal exponent of the first one.
    fn digits_and_exponent(&self) -> (String, i64) {
        let (int, _) = parts(&self.0);
        let digits = int.magnitude().to_string();
        (digits, exponent(&self.0))
    }

    fn sign_prefix(&self) -> &'static str {
        if self.is_negative() {
            "-"
        } else {
            ""
        }
    }

    /// Positional notation with no exponent.
    pub fn to_fixed_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let (digits, e) = self.digits_and_exponent();
        let n = digits.len() as i64;
        let body = if e >= n - 1 {
            format!("{}{}", digits, "0".repeat((e - n + 1) as usize))
        } else if e < 0 {
            format!("0.{}{}", "0".repeat((-e - 1) as usize), digits)
        } else {
            let (int_part, frac_part) = digits.split_at((e + 1) as usize);
            format!("{}.{}", int_part, frac_part)
        };
        format!("{}{}", self.sign_prefix(), body)
    }

    /// `d.ddde+N`, always with an exponent.
    pub fn to_exponential_string(&self) -> String {
        if self.is_zero() {
            return "0e+0".to_string();
        }
        let (digits, e) = self.digits_and_exponent();
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        format!("{}{}{}", self.sign_prefix(), mantissa, exponent_suffix(e))
    }

    /// Like exponential notation but the exponent is a multiple of three.
    pub fn to_engineering_string(&self) -> String {
        if self.is_zero() {
            return "0e+0".to_string();
        }
        let (mut digits, e) = self.digits_and_exponent();
        let eng = Integer::div_floor(&e, &3) * 3;
        let lead = (e - eng + 1) as usize;
        if digits.len() < lead {
            digits.push_str(&"0".repeat(lead - digits.len()));
        }
        let mantissa = if digits.len() > lead {
            format!("{}.{}", &digits[..lead], &digits[lead..])
        } else {
            digits
        };
        format!("{}{}{}", self.sign_prefix(), mantissa, exponent_suffix(eng))
    }

    /// Uppercase digits in base 16 or 2 without prefix. Negative values are
    /// shown as nibble-aligned two's complement.
    pub fn to_radix_string(&self, radix: u32) -> String {
        if self.is_negative() {
            let bits = self.twos_complement_width();
            let offset = Number::from(BigInt::one() << bits as usize);
            return offset.add(self).to_radix_string(radix);
        }
        let int_part = floor_int(&self.0);
        let mut s = int_part.to_str_radix(radix).to_uppercase();
        let mut frac = &self.0 - BigDecimal::from(int_part);
        if !frac.is_zero() {
            let max_digits = if radix == 16 { 64 } else { 256 };
            let r = BigDecimal::from(radix);
            s.push('.');
            for _ in 0..max_digits {
                if frac.is_zero() {
                    break;
                }
                frac = &frac * &r;
                let digit = floor_int(&frac);
                frac -= BigDecimal::from(digit.clone());
                s.push_str(&digit.to_str_radix(radix).to_uppercase());
            }
        }
        s
    }

    /// `ceil((log2(-n) + 1) / 4) * 4`, which is zero for `-0.5 <= n < 0`.
    fn twos_complement_width(&self) -> u64 {
        let m = self.abs();
        if m.is_integer() {
            let int = m.to_bigint();
            let b = int.bits();
            let power_of_two = int.trailing_zeros() == Some(b - 1);
            if power_of_two || b % 4 != 0 {
                (b + 3) / 4 * 4
            } else {
                b + 4
            }
        } else {
            let l = m.to_f64().log2();
            (((l + 1.0) / 4.0).ceil() * 4.0) as u64
        }
    }
}

fn exponent_suffix(e: i64) -> String {
    if e < 0 {
        format!("e-{}", -e)
    } else {
        format!("e+{}", e)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::new(BigDecimal::from(n))
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Number {
        Number::new(BigDecimal::from(n))
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Number> {
        match BigDecimal::from_str(s) {
            Ok(d) => Ok(Number::new(d)),
            Err(_) => Err(error!(MalformedLiteral; s)),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let e = exponent(&self.0);
        if e > -7 && e < 21 {
            write!(f, "{}", self.to_fixed_string())
        } else {
            write!(f, "{}", self.to_exponential_string())
        }
    }
}
