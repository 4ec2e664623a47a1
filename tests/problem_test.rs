//! Tests for the practice problem generator.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use mathsprint::{generate_problem, DifficultySettings, Operation, Problem, ProblemError};

fn settings(operations: Vec<Operation>, max_digits: u32) -> DifficultySettings {
    DifficultySettings {
        operations,
        max_digits,
        play_time: 2,
    }
}

/// Apply the problem's operation to its operands.
fn evaluate(problem: &Problem) -> i64 {
    let (a, b) = (problem.numbers[0], problem.numbers[1]);
    match problem.operation {
        Operation::Addition => a + b,
        Operation::Subtraction => a - b,
        Operation::Multiplication => a * b,
        Operation::Division => a / b,
    }
}

#[test]
fn test_answer_matches_operands_for_every_operation() {
    let all = vec![
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    let mut rng = SmallRng::seed_from_u64(42);
    for max_digits in 1..=3 {
        for _ in 0..500 {
            let problem = generate_problem(&mut rng, &settings(all.clone(), max_digits)).unwrap();
            assert_eq!(problem.numbers.len(), 2, "{:?}", problem);
            assert_eq!(evaluate(&problem), problem.correct_answer, "{:?}", problem);
        }
    }
}

#[test]
fn test_addition_operands_in_digit_range() {
    let mut rng = SmallRng::seed_from_u64(1);
    for (max_digits, min, max) in [(1, 1, 9), (2, 10, 99), (3, 100, 999)] {
        for _ in 0..200 {
            let problem =
                generate_problem(&mut rng, &settings(vec![Operation::Addition], max_digits))
                    .unwrap();
            for n in &problem.numbers {
                assert!((min..=max).contains(n), "{} out of range", n);
            }
        }
    }
}

#[test]
fn test_subtraction_never_negative() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..500 {
        let problem =
            generate_problem(&mut rng, &settings(vec![Operation::Subtraction], 2)).unwrap();
        assert!(problem.numbers[0] >= problem.numbers[1]);
        assert!(problem.correct_answer >= 0);
    }
}

#[test]
fn test_multiplication_operands_capped() {
    let mut rng = SmallRng::seed_from_u64(3);
    for (max_digits, cap) in [(1, 9), (2, 20), (3, 50)] {
        for _ in 0..200 {
            let problem =
                generate_problem(&mut rng, &settings(vec![Operation::Multiplication], max_digits))
                    .unwrap();
            for n in &problem.numbers {
                assert!((1..=cap).contains(n), "{} above cap {}", n, cap);
            }
        }
    }
}

#[test]
fn test_division_is_exact() {
    let mut rng = SmallRng::seed_from_u64(4);
    for max_digits in 1..=3 {
        for _ in 0..300 {
            let problem =
                generate_problem(&mut rng, &settings(vec![Operation::Division], max_digits))
                    .unwrap();
            let (dividend, divisor) = (problem.numbers[0], problem.numbers[1]);
            assert_eq!(dividend % divisor, 0, "{:?}", problem);
            assert!((2..=10).contains(&divisor));
            assert_eq!(dividend / divisor, problem.correct_answer);
        }
    }
}

#[test]
fn test_single_operation_is_always_picked() {
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..50 {
        let problem = generate_problem(&mut rng, &settings(vec![Operation::Division], 2)).unwrap();
        assert_eq!(problem.operation, Operation::Division);
    }
}

#[test]
fn test_empty_operations_rejected() {
    let mut rng = SmallRng::seed_from_u64(6);
    let result = generate_problem(&mut rng, &settings(vec![], 2));
    assert!(matches!(
        result,
        Err(ProblemError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_out_of_range_digits_rejected() {
    let mut rng = SmallRng::seed_from_u64(7);
    let result = generate_problem(&mut rng, &settings(vec![Operation::Addition], 0));
    assert!(matches!(
        result,
        Err(ProblemError::InvalidConfiguration(_))
    ));
}
