//! bigint_fixgen - random test fixtures for big-integer arithmetic
//!
//! Generates operand/result triples for five operations (addition,
//! subtraction, multiplication, floor division, remainder), one data file
//! per operation, each line a tab-separated lowercase-hex triple:
//!
//! ```text
//! <operand1_hex>\t<operand2_hex>\t<result_hex>
//! ```
//!
//! Operands are drawn uniformly from fixed per-operation bit ranges and
//! results come from a trusted arbitrary-precision engine. The files drive
//! an external big-integer test suite; this crate never consumes them.
//!
//! # Modules
//!
//! - [`models`] - operations, operand ranges, and the test case wire format
//! - [`generator`] - seeded random generation session
//! - [`data_io`] - data-file writing and loading
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing initialization

pub mod config;
pub mod data_io;
pub mod generator;
pub mod logging;
pub mod models;

// Convenient re-exports at crate root
pub use config::{AppConfig, GeneratorConfig};
pub use data_io::{load_cases, write_cases};
pub use generator::{GeneratorSession, generate_all};
pub use models::{FixtureError, Operation, OperandRange, TestCase};
