use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// months in one year, used to turn an annual rate into a monthly one
pub const MONTHS_PER_YEAR: u32 = 12;

/// arbitrary precision rational number
///
/// Every monetary and rate value goes through this type so that years of
/// daily accrual never pick up rounding drift. The only place a value is
/// rounded is [`ExactDecimal::to_fixed`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactDecimal(BigRational);

impl ExactDecimal {
    pub fn zero() -> Self {
        ExactDecimal(BigRational::zero())
    }

    pub fn from_integer(i: i64) -> Self {
        ExactDecimal(BigRational::from_integer(BigInt::from(i)))
    }

    /// create from a decimal, keeping every digit
    pub fn from_decimal(d: Decimal) -> Self {
        let numer = BigInt::from(d.mantissa());
        let denom = BigInt::from(10u32).pow(d.scale());
        ExactDecimal(BigRational::new(numer, denom))
    }

    pub fn from_ratio(r: BigRational) -> Self {
        ExactDecimal(r)
    }

    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// render with `dp` fraction digits, rounding half away from zero
    pub fn to_fixed(&self, dp: u32) -> String {
        let scale = BigInt::from(10u32).pow(dp);
        let scaled = (&self.0 * BigRational::from_integer(scale.clone()))
            .round()
            .to_integer();

        let sign = if scaled.is_negative() { "-" } else { "" };
        let magnitude = scaled.abs();
        let whole = &magnitude / &scale;

        if dp == 0 {
            return format!("{}{}", sign, whole);
        }

        let frac = &magnitude % &scale;
        format!("{}{}.{:0>width$}", sign, whole, frac.to_string(), width = dp as usize)
    }
}

impl Default for ExactDecimal {
    fn default() -> Self {
        ExactDecimal::zero()
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExactDecimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ExactDecimal::from_decimal(Decimal::from_str_exact(s)?))
    }
}

impl From<Decimal> for ExactDecimal {
    fn from(d: Decimal) -> Self {
        ExactDecimal::from_decimal(d)
    }
}

impl From<i64> for ExactDecimal {
    fn from(i: i64) -> Self {
        ExactDecimal::from_integer(i)
    }
}

impl Add for ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, other: ExactDecimal) -> ExactDecimal {
        ExactDecimal(self.0 + other.0)
    }
}

impl<'a> Add<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, other: &ExactDecimal) -> ExactDecimal {
        ExactDecimal(&self.0 + &other.0)
    }
}

impl AddAssign for ExactDecimal {
    fn add_assign(&mut self, other: ExactDecimal) {
        self.0 += other.0;
    }
}

impl Sub for ExactDecimal {
    type Output = ExactDecimal;

    fn sub(self, other: ExactDecimal) -> ExactDecimal {
        ExactDecimal(self.0 - other.0)
    }
}

impl<'a> Sub<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn sub(self, other: &ExactDecimal) -> ExactDecimal {
        ExactDecimal(&self.0 - &other.0)
    }
}

impl SubAssign for ExactDecimal {
    fn sub_assign(&mut self, other: ExactDecimal) {
        self.0 -= other.0;
    }
}

impl Mul for ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, other: ExactDecimal) -> ExactDecimal {
        ExactDecimal(self.0 * other.0)
    }
}

impl<'a> Mul<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, other: &ExactDecimal) -> ExactDecimal {
        ExactDecimal(&self.0 * &other.0)
    }
}

// callers only ever divide by calendar constants, never by zero
impl Div for ExactDecimal {
    type Output = ExactDecimal;

    fn div(self, other: ExactDecimal) -> ExactDecimal {
        ExactDecimal(self.0 / other.0)
    }
}

impl<'a> Div<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn div(self, other: &ExactDecimal) -> ExactDecimal {
        ExactDecimal(&self.0 / &other.0)
    }
}

/// monetary amount (balance, accrued interest, transaction amount)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(ExactDecimal);

impl Money {
    pub fn zero() -> Self {
        Money(ExactDecimal::zero())
    }

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(ExactDecimal::from_decimal(d))
    }

    /// create from a plain `.`-separated decimal string
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(ExactDecimal::from_str(s)?))
    }

    /// create from integer amount (kronor, dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(ExactDecimal::from_integer(amount))
    }

    pub fn from_exact(d: ExactDecimal) -> Self {
        Money(d)
    }

    pub fn as_exact(&self) -> &ExactDecimal {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// two fraction digits, the way amounts are shown
    pub fn to_fixed(&self) -> String {
        self.0.to_fixed(2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fixed())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl<'a> AddAssign<&'a Money> for Money {
    fn add_assign(&mut self, other: &Money) {
        self.0 = &self.0 + &other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl<'a> Mul<&'a Rate> for &'a Money {
    type Output = Money;

    fn mul(self, rate: &Rate) -> Money {
        Money(&self.0 * &rate.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |mut acc, m| {
            acc += m;
            acc
        })
    }
}

/// interest rate as a decimal fraction (0.0114 is 1.14%)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rate(ExactDecimal);

impl Rate {
    /// create from decimal (e.g., 0.0114 for 1.14%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(ExactDecimal::from_decimal(d))
    }

    pub fn from_exact(d: ExactDecimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 1.14 for 1.14%)
    pub fn from_percentage(p: ExactDecimal) -> Self {
        Rate(p / ExactDecimal::from_integer(100))
    }

    pub fn as_exact(&self) -> &ExactDecimal {
        &self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> ExactDecimal {
        &self.0 * &ExactDecimal::from_integer(100)
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(&self.0 / &ExactDecimal::from_integer(MONTHS_PER_YEAR as i64))
    }

    /// daily rate from annual rate for a month with `days_in_month` days
    pub fn daily_rate(&self, days_in_month: u32) -> Rate {
        let monthly = self.monthly_rate();
        Rate(&monthly.0 / &ExactDecimal::from_integer(days_in_month as i64))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().to_fixed(2))
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}
