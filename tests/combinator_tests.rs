//! Unit tests for function-wrapping combinators and macros.

#![cfg(feature = "combinator")]

use std::time::{Duration, Instant};

use dashkit::combinator::{
    After, AttemptOutcome, Before, Debounce, Memoize, Once, Throttle, UniqueIdGenerator, attempt,
    constant, delay, flip, identity, negate, tap, times,
};
use dashkit::{curry2, curry3, curry_right2, flow, flow_right, partial};

// =============================================================================
// call-count gates
// =============================================================================

#[test]
fn test_after_before_and_once_counting() {
    let mut late = After::new(2, |value: i32| value);
    assert_eq!(late.call(1), None);
    assert_eq!(late.call(2), Some(2));
    assert_eq!(late.call(3), Some(3));

    let mut early = Before::new(2, |value: i32| value);
    assert_eq!(early.call(1), Some(1));
    assert_eq!(early.call(2), Some(2));
    assert_eq!(early.call(3), None);

    let mut single = Once::new(|value: i32| value * 10);
    assert_eq!(single.call(3), 30);
    assert_eq!(single.call(9), 30);
}

// =============================================================================
// time gates
// =============================================================================

#[test]
fn test_debounce_suppresses_a_burst_and_throttle_leads_with_one() {
    let mut debounce_executions = 0_u32;
    let mut debounced = Debounce::new(200, |_: ()| {
        debounce_executions += 1;
    });

    let mut throttle_executions = 0_u32;
    let mut throttled = Throttle::new(200, |_: ()| {
        throttle_executions += 1;
    });

    let started = Instant::now();
    while started.elapsed() < Duration::from_millis(50) {
        debounced.call(());
        throttled.call(());
    }
    drop(debounced);
    drop(throttled);

    // The debounce quiet period never elapsed inside the tight loop.
    assert_eq!(debounce_executions, 0);
    // The throttle executed exactly once, immediately.
    assert_eq!(throttle_executions, 1);
}

#[test]
fn test_delay_blocks_then_invokes() {
    let started = Instant::now();
    assert_eq!(delay(20, 2, |value| value + 40), 42);
    assert!(started.elapsed() >= Duration::from_millis(20));
}

// =============================================================================
// memoization
// =============================================================================

#[test]
fn test_memoize_consults_the_cache() {
    let mut invocations = 0_u32;
    let mut expensive = Memoize::new(|value: &u32| {
        invocations += 1;
        value * value
    });

    assert_eq!(expensive.call(9), 81);
    assert_eq!(expensive.call(9), 81);
    assert_eq!(expensive.call(10), 100);
    assert_eq!(expensive.cache().len(), 2);
    drop(expensive);
    assert_eq!(invocations, 2);
}

// =============================================================================
// currying and partial application
// =============================================================================

#[test]
fn test_curry_partials_are_reusable() {
    fn add3(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    let curried = curry3!(add3);
    let base = curried(100);
    assert_eq!(base(10)(1), 111);
    assert_eq!(base(20)(2), 122);

    let concat = curry2!(|left: String, right: String| format!("{left}{right}"));
    assert_eq!(concat("ab".to_string())("cd".to_string()), "abcd");
}

#[test]
fn test_curry_right_reverses_binding_order() {
    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    let halve = curry_right2!(divide)(2.0);
    assert!((halve(10.0) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_partial_with_placeholders() {
    fn wrap(open: &str, body: &str, close: &str) -> String {
        format!("{open}{body}{close}")
    }

    let bracket = partial!(wrap, "[", __, "]");
    assert_eq!(bracket("x"), "[x]");

    let suffix_only = partial!(wrap, __, __, "!");
    assert_eq!(suffix_only("<", "y"), "<y!");
}

// =============================================================================
// composition
// =============================================================================

#[test]
fn test_flow_against_flow_right() {
    fn double(value: i32) -> i32 {
        value * 2
    }
    fn increment(value: i32) -> i32 {
        value + 1
    }

    let forward = flow!(double, increment);
    let backward = flow_right!(increment, double);
    assert_eq!(forward(5), 11);
    assert_eq!(backward(5), 11);

    let identity_flow = flow!(identity::<i32>);
    assert_eq!(identity_flow(7), 7);
}

// =============================================================================
// small combinators
// =============================================================================

#[test]
fn test_constant_flip_negate_tap() {
    let always = constant::<_, i32>("same");
    assert_eq!(always(1), always(2));

    let subtract = |a: i32, b: i32| a - b;
    assert_eq!(flip(subtract)(3, 10), 7);

    let nonzero = negate(|value: &i32| *value == 0);
    assert!(nonzero(&5));
    assert!(!nonzero(&0));

    let mut seen = 0;
    let passed = tap(41, |value| seen = *value);
    assert_eq!(passed, 41);
    assert_eq!(seen, 41);
}

#[test]
fn test_times_collects_indexed_results() {
    assert_eq!(times(3, |index| index * 2), vec![0, 2, 4]);
    assert!(times(0, |index| index).is_empty());
}

#[test]
fn test_attempt_converts_errors_to_values() {
    let parsed: AttemptOutcome<i32, _> = attempt(|| "17".parse::<i32>());
    assert_eq!(parsed.returned(), Some(17));

    let failed = attempt(|| "x".parse::<i32>());
    assert!(failed.is_failure());
    assert!(failed.into_result().is_err());
}

// =============================================================================
// unique IDs
// =============================================================================

#[test]
fn test_unique_ids_are_instance_scoped() {
    let plain = UniqueIdGenerator::new();
    let prefixed = UniqueIdGenerator::with_prefix("item_");

    assert_eq!(plain.next_id(), "1");
    assert_eq!(plain.next_id(), "2");
    assert_eq!(prefixed.next_id(), "item_1");
    assert_eq!(plain.issued(), 2);
}
