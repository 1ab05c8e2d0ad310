//! Fixture generator session - seeded random operand drawing
//!
//! The session owns its random source. Seeded runs reproduce the exact
//! same fixture files; unseeded runs draw from OS entropy, giving fresh
//! fixtures on every invocation.

use crate::config::GeneratorConfig;
use crate::data_io;
use crate::models::{Operation, OperandRange, TestCase};
use anyhow::{Context, Result};
use num_bigint::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Instant;

/// Random fixture generation session.
///
/// All five operations draw from the one session RNG, in generation order,
/// so a fixed seed pins down every file bit-for-bit.
pub struct GeneratorSession {
    rng: StdRng,
    cases_per_op: usize,
}

impl GeneratorSession {
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            cases_per_op: config.cases_per_op,
        }
    }

    pub fn cases_per_op(&self) -> usize {
        self.cases_per_op
    }

    /// Draw uniformly over the closed interval the range describes.
    fn draw(&mut self, range: OperandRange) -> BigUint {
        // gen_biguint_range samples [low, high); bump high by one to keep
        // the upper power-of-two bound reachable.
        let low = range.low();
        let high = range.high() + 1u8;
        self.rng.gen_biguint_range(&low, &high)
    }

    /// Draw one case for `op`.
    ///
    /// Subtraction reorders the draws so that lhs >= rhs and the result
    /// stays non-negative.
    pub fn next_case(&mut self, op: Operation) -> TestCase {
        let mut lhs = self.draw(op.lhs_range());
        let mut rhs = self.draw(op.rhs_range());
        if op.orders_operands() && rhs > lhs {
            std::mem::swap(&mut lhs, &mut rhs);
        }
        TestCase::new(op, lhs, rhs)
    }
}

/// Generate every operation's data file into `config.output_dir`.
///
/// Runs the five operations sequentially in [`Operation::ALL`] order.
/// Any filesystem failure aborts the whole run.
pub fn generate_all(config: &GeneratorConfig) -> Result<()> {
    let output_dir = Path::new(&config.output_dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut session = GeneratorSession::new(config);
    let n = session.cases_per_op();

    for op in Operation::ALL {
        let start = Instant::now();
        let path = data_io::data_path(output_dir, op.data_file());

        let cases = (0..n).map(|_| session.next_case(op));
        let written = data_io::write_cases(&path, cases)?;

        tracing::info!(
            operation = %op,
            file = %path.display(),
            cases = written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated fixture file"
        );
    }

    Ok(())
}
