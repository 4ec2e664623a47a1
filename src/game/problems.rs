//! Practice problem generation.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::game::types::{DifficultySettings, Operation, Problem};

/// Problem generation errors.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("invalid difficulty configuration: {0}")]
    InvalidConfiguration(String),
}

/// Generate one practice problem from the given difficulty settings.
///
/// The operation is chosen uniformly from `settings.operations`. The
/// returned `correct_answer` always equals the operation applied to
/// `numbers`, and division problems always divide evenly.
pub fn generate_problem<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &DifficultySettings,
) -> Result<Problem, ProblemError> {
    let operation = *settings.operations.choose(&mut *rng).ok_or_else(|| {
        ProblemError::InvalidConfiguration("no operations enabled".to_string())
    })?;

    if !(1..=3).contains(&settings.max_digits) {
        return Err(ProblemError::InvalidConfiguration(format!(
            "maxDigits must be 1-3, got {}",
            settings.max_digits
        )));
    }

    let min = 10i64.pow(settings.max_digits - 1);
    let max = 10i64.pow(settings.max_digits) - 1;

    let (numbers, correct_answer) = match operation {
        Operation::Addition => {
            let a = rng.gen_range(min..=max);
            let b = rng.gen_range(min..=max);
            (vec![a, b], a + b)
        }
        Operation::Subtraction => {
            // Larger operand first so the result is never negative
            let a = rng.gen_range(min..=max);
            let b = rng.gen_range(min..=max);
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            (vec![hi, lo], hi - lo)
        }
        Operation::Multiplication => {
            // Operands are capped below the digit range so answers stay
            // practicable: 20 for one- and two-digit play, 50 for three
            let cap = if settings.max_digits <= 2 { 20 } else { 50 };
            let cap = cap.min(max);
            let a = rng.gen_range(1..=cap);
            let b = rng.gen_range(1..=cap);
            (vec![a, b], a * b)
        }
        Operation::Division => {
            // Dividend is built from divisor x quotient so it divides evenly
            let divisor = rng.gen_range(2..=10);
            let quotient = rng.gen_range(1..=(max / divisor).max(1));
            (vec![divisor * quotient, divisor], quotient)
        }
    };

    Ok(Problem {
        numbers,
        operation,
        correct_answer,
    })
}
