//! Exact rational numbers over fixed-width signed integers, always stored in
//! lowest terms.
//!
//! This library provides `Fraction<T>`, a rational number type generic over
//! `i16`, `i32`, `i64` and `i128`.
//!
//! # Canonical Form
//!
//! Every live `Fraction` satisfies:
//!
//! - the denominator is strictly positive
//! - numerator and denominator share no factor other than 1
//! - zero is stored as `0/1`
//!
//! Construction is the only way in, and every operator routes its raw result
//! back through the same normalization. Equal values therefore always have
//! identical fields, so equality and hashing compare fields directly.
//!
//! # Overflow
//!
//! Intermediate products and sums use the field type's wrapping arithmetic.
//! Results that do not fit the fixed width are unspecified; keeping
//! magnitudes in range is the caller's responsibility.
//!
//! `T::MIN` has no representable magnitude and is rejected with a panic when
//! it reaches construction as a numerator or denominator.
//!
//! # Performance
//!
//! Reduction uses trial division, so its cost grows with the square root of
//! the smaller operand when the two share no factor. Every `i16` and `i32`
//! value is cheap. With `i64` and `i128` keep operands below `2^40`; see
//! [`gcd`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use reduced_fraction::Fraction32;
//!
//! let a = Fraction32::new(3, 12)?; // stored as 1/4
//! let b = Fraction32::new(3, 8)?;
//!
//! assert_eq!((a + b).to_string(), "5/8");
//! assert_eq!((a * b).to_string(), "3/32");
//! assert_eq!((a / b)?.to_string(), "2/3");
//! assert!(a < b);
//! # Ok::<(), reduced_fraction::DivisionByZero>(())
//! ```
//!
//! ## Zero Denominators
//!
//! ```
//! use reduced_fraction::{DivisionByZero, Fraction64};
//!
//! assert_eq!(Fraction64::new(1, 0), Err(DivisionByZero));
//!
//! let half = Fraction64::new(1, 2)?;
//! assert_eq!(half / Fraction64::zero(), Err(DivisionByZero));
//! # Ok::<(), DivisionByZero>(())
//! ```

pub mod error;
pub mod fraction_trait;

pub use crate::error::DivisionByZero;
pub use crate::fraction_trait::{gcd, lcm, FractionInteger};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A rational number in lowest terms.
///
/// # Type Parameter
///
/// `T` must implement [`FractionInteger`]: `i16`, `i32`, `i64` or `i128`.
///
/// # Invariants
///
/// - `denominator() > 0`
/// - `gcd(|numerator()|, denominator()) == 1`
/// - zero is exactly `0/1`
///
/// The fields are private, so no value violating these can be built.
///
/// # Examples
///
/// ```
/// use reduced_fraction::Fraction;
///
/// let r = Fraction::<i32>::new(6, -8)?;
/// assert_eq!(r.numerator(), -3);
/// assert_eq!(r.denominator(), 4);
/// # Ok::<(), reduced_fraction::DivisionByZero>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fraction<T: FractionInteger> {
    numer: T,
    denom: T,
}

impl<T: FractionInteger> Fraction<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Canonical zero, `0/1`.
    pub const ZERO: Self = Self {
        numer: T::ZERO,
        denom: T::ONE,
    };

    /// Canonical one, `1/1`.
    pub const ONE: Self = Self {
        numer: T::ONE,
        denom: T::ONE,
    };

    /// Create a fraction in lowest terms.
    ///
    /// A negative denominator moves its sign to the numerator, common factors
    /// are divided out, and any zero numerator yields `0/1`.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `denom` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `numer` or `denom` is `T::MIN`, whose magnitude does not fit
    /// in `T`.
    ///
    /// # Performance
    ///
    /// Coprime operands cost about `sqrt(min(|numer|, |denom|)) / 2` trial
    /// divisions (see [`gcd`]); keep `i64`/`i128` operands below `2^40`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reduced_fraction::Fraction32;
    ///
    /// let r = Fraction32::new(4, -6)?;
    /// assert_eq!((r.numerator(), r.denominator()), (-2, 3));
    ///
    /// let z = Fraction32::new(0, 5)?;
    /// assert_eq!((z.numerator(), z.denominator()), (0, 1));
    ///
    /// assert!(Fraction32::new(1, 0).is_err());
    /// # Ok::<(), reduced_fraction::DivisionByZero>(())
    /// ```
    pub fn new(numer: T, denom: T) -> Result<Self, DivisionByZero> {
        if denom.is_zero() {
            tracing::debug!(numerator = %numer, "rejected fraction with zero denominator");
            return Err(DivisionByZero);
        }
        Ok(Self::normalize(numer, denom))
    }

    /// Sign normalization and reduction of a pair with a non-zero
    /// denominator. Every constructor and operator ends here.
    #[inline]
    fn normalize(numer: T, denom: T) -> Self {
        debug_assert!(!denom.is_zero());

        let (numer, denom) = if denom < T::ZERO {
            (numer.wrapping_neg(), denom.wrapping_neg())
        } else {
            (numer, denom)
        };

        if numer.is_zero() {
            return Self::ZERO;
        }

        let factor = gcd(numer.wrapping_abs(), denom);
        Self {
            numer: numer.wrapping_div(&factor),
            denom: denom.wrapping_div(&factor),
        }
    }

    /// Create a fraction representing 0.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create a fraction representing 1.
    #[inline(always)]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Create the fraction `n/1`.
    #[inline(always)]
    pub const fn from_integer(n: T) -> Self {
        Self {
            numer: n,
            denom: T::ONE,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator; carries the sign.
    #[inline(always)]
    pub fn numerator(&self) -> T {
        self.numer
    }

    /// The denominator; always positive.
    #[inline(always)]
    pub fn denominator(&self) -> T {
        self.denom
    }

    /// Check if the fraction is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the fraction is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > T::ZERO
    }

    /// Check if the fraction is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < T::ZERO
    }

    /// Check if the fraction is an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    /// Approximate conversion to f64.
    ///
    /// # Examples
    ///
    /// ```
    /// use reduced_fraction::Fraction32;
    ///
    /// let r = Fraction32::new(3, 4)?;
    /// assert_eq!(r.to_f64(), 0.75);
    /// # Ok::<(), reduced_fraction::DivisionByZero>(())
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }

    // ========================================================================
    // BASIC OPERATIONS
    // ========================================================================

    /// Negate the fraction.
    #[allow(clippy::should_implement_trait)] // We do implement Neg trait, clippy doesn't detect it
    #[inline(always)]
    pub fn neg(self) -> Self {
        Self {
            numer: self.numer.wrapping_neg(),
            denom: self.denom,
        }
    }

    /// Get the absolute value.
    #[inline(always)]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.wrapping_abs(),
            denom: self.denom,
        }
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if the fraction is zero.
    #[inline]
    pub fn recip(&self) -> Result<Self, DivisionByZero> {
        Self::new(self.denom, self.numer)
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two fractions over their least common denominator.
    ///
    /// # Examples
    ///
    /// ```
    /// use reduced_fraction::Fraction32;
    ///
    /// let a = Fraction32::new(1, 4)?;
    /// let b = Fraction32::new(3, 8)?;
    /// assert_eq!(a.add(&b), Fraction32::new(5, 8)?);
    /// # Ok::<(), reduced_fraction::DivisionByZero>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self::add_parts(self.numer, self.denom, other.numer, other.denom)
    }

    /// Subtract another fraction.
    ///
    /// Equivalent to adding `other` with its numerator negated.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self::add_parts(
            self.numer,
            self.denom,
            other.numer.wrapping_neg(),
            other.denom,
        )
    }

    #[inline(always)]
    fn add_parts(n1: T, d1: T, n2: T, d2: T) -> Self {
        let denom = lcm(d1, d2);
        let n1 = n1.wrapping_mul(&denom.wrapping_div(&d1));
        let n2 = n2.wrapping_mul(&denom.wrapping_div(&d2));
        Self::normalize(n1.wrapping_add(&n2), denom)
    }

    /// Multiply two fractions.
    ///
    /// # Examples
    ///
    /// ```
    /// use reduced_fraction::Fraction64;
    ///
    /// let a = Fraction64::new(2, 3)?;
    /// let b = Fraction64::new(3, 4)?;
    /// assert_eq!(a.mul(&b).to_string(), "1/2");
    /// # Ok::<(), reduced_fraction::DivisionByZero>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self::normalize(
            self.numer.wrapping_mul(&other.numer),
            self.denom.wrapping_mul(&other.denom),
        )
    }

    /// Divide by another fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `other` is zero.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn div(&self, other: &Self) -> Result<Self, DivisionByZero> {
        Self::new(
            self.numer.wrapping_mul(&other.denom),
            self.denom.wrapping_mul(&other.numer),
        )
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Three-way comparison.
    ///
    /// Both numerators are scaled to the least common denominator and their
    /// difference decides the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use reduced_fraction::Fraction32;
    ///
    /// let a = Fraction32::new(7, 16)?;
    /// let b = Fraction32::new(3, 8)?;
    /// assert_eq!(a.compare(&b), Ordering::Greater);
    /// assert_eq!(b.compare(&a), Ordering::Less);
    /// assert_eq!(a.compare(&a), Ordering::Equal);
    /// # Ok::<(), reduced_fraction::DivisionByZero>(())
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        let denom = lcm(self.denom, other.denom);
        let lhs = self.numer.wrapping_mul(&denom.wrapping_div(&self.denom));
        let rhs = other.numer.wrapping_mul(&denom.wrapping_div(&other.denom));
        lhs.wrapping_sub(&rhs).cmp(&T::ZERO)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, Div, Mul, Neg, Sub};

impl<T: FractionInteger> Default for Fraction<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: FractionInteger> From<T> for Fraction<T> {
    #[inline(always)]
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: FractionInteger> Add for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Fraction::add(&self, &other)
    }
}

impl<T: FractionInteger> Add for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn add(self, other: Self) -> Fraction<T> {
        Fraction::add(self, other)
    }
}

impl<T: FractionInteger> Sub for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Fraction::sub(&self, &other)
    }
}

impl<T: FractionInteger> Sub for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn sub(self, other: Self) -> Fraction<T> {
        Fraction::sub(self, other)
    }
}

impl<T: FractionInteger> Mul for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Fraction::mul(&self, &other)
    }
}

impl<T: FractionInteger> Mul for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn mul(self, other: Self) -> Fraction<T> {
        Fraction::mul(self, other)
    }
}

impl<T: FractionInteger> Div for Fraction<T> {
    type Output = Result<Self, DivisionByZero>;
    #[inline(always)]
    fn div(self, other: Self) -> Self::Output {
        Fraction::div(&self, &other)
    }
}

impl<T: FractionInteger> Div for &Fraction<T> {
    type Output = Result<Fraction<T>, DivisionByZero>;
    #[inline(always)]
    fn div(self, other: Self) -> Self::Output {
        Fraction::div(self, other)
    }
}

impl<T: FractionInteger> Neg for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Fraction::neg(self)
    }
}

// Fields are canonical, so equal values have equal fields.
impl<T: FractionInteger> PartialEq for Fraction<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl<T: FractionInteger> Eq for Fraction<T> {}

impl<T: FractionInteger> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FractionInteger> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: FractionInteger> Hash for Fraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer
            .wrapping_mul(&T::HASH_MULTIPLIER)
            .wrapping_add(&self.denom)
            .hash(state);
    }
}

/// Renders `n` for integers and `n/d` otherwise.
impl<T: FractionInteger> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == T::ONE {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Fraction using 16-bit integers.
pub type Fraction16 = Fraction<i16>;

/// Fraction using 32-bit integers.
pub type Fraction32 = Fraction<i32>;

/// Fraction using 64-bit integers.
///
/// # Performance
///
/// Reduction is practical for operands below `2^40`. Large coprime operands
/// near `i64::MAX` take tens of seconds per construction.
pub type Fraction64 = Fraction<i64>;

/// Fraction using 128-bit integers.
///
/// # Performance
///
/// The extra width holds intermediate products, not larger operands: keep
/// operands below `2^40`. Large coprime operands never finish reducing.
pub type Fraction128 = Fraction<i128>;
