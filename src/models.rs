//! Fixture model - operations, operand ranges, and the test case wire format
//!
//! A fixture line is three lowercase hex fields separated by tabs:
//!
//! ```text
//! <operand1_hex>\t<operand2_hex>\t<result_hex>\n
//! ```
//!
//! No `0x` prefix, no sign, no padding. Zero encodes as `0`.

use num_bigint::BigUint;
use num_integer::Integer;
use thiserror::Error;

// ============================================================
// Operations
// ============================================================

/// The five arithmetic operations covered by the fixture files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Remainder,
    Division,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Remainder => write!(f, "remainder"),
            Operation::Division => write!(f, "division"),
        }
    }
}

impl Operation {
    /// Generation run order. Consumers key on file identity, not order.
    pub const ALL: [Operation; 5] = [
        Operation::Division,
        Operation::Remainder,
        Operation::Multiplication,
        Operation::Addition,
        Operation::Subtraction,
    ];

    /// Output file name for this operation's fixtures.
    pub fn data_file(&self) -> &'static str {
        match self {
            Operation::Addition => crate::data_io::ADDITION_DATA,
            Operation::Subtraction => crate::data_io::SUBTRACTION_DATA,
            Operation::Multiplication => crate::data_io::MULTIPLICATION_DATA,
            Operation::Remainder => crate::data_io::REMAINDER_DATA,
            Operation::Division => crate::data_io::DIVISION_DATA,
        }
    }

    /// Range the first operand is drawn from.
    pub fn lhs_range(&self) -> OperandRange {
        match self {
            Operation::Multiplication => OperandRange::new(100, 254),
            _ => OperandRange::new(255, 511),
        }
    }

    /// Range the second operand is drawn from.
    ///
    /// Division and remainder draw the divisor from a wider, smaller-floored
    /// range. Its 2^20 lower bound is what makes divide-by-zero impossible.
    pub fn rhs_range(&self) -> OperandRange {
        match self {
            Operation::Multiplication => OperandRange::new(100, 254),
            Operation::Remainder | Operation::Division => OperandRange::new(20, 511),
            _ => OperandRange::new(255, 511),
        }
    }

    /// Whether operands must be reordered so that lhs >= rhs.
    ///
    /// Only subtraction needs this; the result stays non-negative.
    pub fn orders_operands(&self) -> bool {
        matches!(self, Operation::Subtraction)
    }

    /// Compute the reference result via the trusted engine.
    ///
    /// Division and remainder use floor semantics; with non-negative
    /// operands that is identical to truncation.
    pub fn apply(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        match self {
            Operation::Addition => lhs + rhs,
            Operation::Subtraction => lhs - rhs,
            Operation::Multiplication => lhs * rhs,
            Operation::Remainder => lhs.mod_floor(rhs),
            Operation::Division => lhs.div_floor(rhs),
        }
    }
}

// ============================================================
// Operand ranges
// ============================================================

/// Closed interval [2^min_bits, 2^max_bits], inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    pub min_bits: usize,
    pub max_bits: usize,
}

impl OperandRange {
    pub fn new(min_bits: usize, max_bits: usize) -> Self {
        debug_assert!(min_bits < max_bits);
        Self { min_bits, max_bits }
    }

    /// Inclusive lower bound, 2^min_bits.
    pub fn low(&self) -> BigUint {
        BigUint::from(1u8) << self.min_bits
    }

    /// Inclusive upper bound, 2^max_bits.
    pub fn high(&self) -> BigUint {
        BigUint::from(1u8) << self.max_bits
    }

    pub fn contains(&self, value: &BigUint) -> bool {
        *value >= self.low() && *value <= self.high()
    }
}

// ============================================================
// Test cases
// ============================================================

/// A single fixture triple: result = operation(lhs, rhs).
///
/// Each case exclusively owns its three values; cases are independent of
/// one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub lhs: BigUint,
    pub rhs: BigUint,
    pub result: BigUint,
}

impl TestCase {
    /// Build a case, computing the result with the trusted engine.
    pub fn new(op: Operation, lhs: BigUint, rhs: BigUint) -> Self {
        let result = op.apply(&lhs, &rhs);
        Self { lhs, rhs, result }
    }

    /// Serialize to the wire line (without the trailing newline).
    pub fn to_line(&self) -> String {
        format!("{:x}\t{:x}\t{:x}", self.lhs, self.rhs, self.result)
    }

    /// Parse a wire line (without the trailing newline).
    pub fn parse_line(line: &str) -> Result<Self, FixtureError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(FixtureError::FieldCount(fields.len()));
        }
        Ok(Self {
            lhs: parse_hex_field(fields[0])?,
            rhs: parse_hex_field(fields[1])?,
            result: parse_hex_field(fields[2])?,
        })
    }
}

/// Decode one lowercase hex field. Strict: the wire format never carries
/// uppercase digits, prefixes, or empty fields.
fn parse_hex_field(field: &str) -> Result<BigUint, FixtureError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return Err(FixtureError::InvalidHex(field.to_string()));
    }
    BigUint::parse_bytes(field.as_bytes(), 16)
        .ok_or_else(|| FixtureError::InvalidHex(field.to_string()))
}

// ============================================================
// Errors
// ============================================================

/// Fixture decode errors (the read path used by test harnesses).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("expected 3 tab-separated fields, got {0}")]
    FieldCount(usize),

    #[error("invalid lowercase hex field: {0:?}")]
    InvalidHex(String),
}
