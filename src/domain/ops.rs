//! The pure operation library
//!
//! Every function validates its mathematical domain before touching the
//! underlying numeric primitive and reports failures as typed `DomainError`
//! values instead of letting a raw arithmetic fault escape.

use crate::domain::registry::{Args, OpOutput, OpResult};
use crate::errors::DomainError;

// --- arithmetic ---

pub fn add(args: &Args) -> OpResult {
    Ok((args.number("a")? + args.number("b")?).into())
}

pub fn subtract(args: &Args) -> OpResult {
    Ok((args.number("a")? - args.number("b")?).into())
}

pub fn multiply(args: &Args) -> OpResult {
    Ok((args.number("a")? * args.number("b")?).into())
}

pub fn divide(args: &Args) -> OpResult {
    let a = args.number("a")?;
    let b = args.number("b")?;
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok((a / b).into())
}

pub fn modulo(args: &Args) -> OpResult {
    let a = args.number("a")?;
    let b = args.number("b")?;
    if b == 0.0 {
        return Err(DomainError::ModuloByZero);
    }
    // Floored remainder: the sign follows the divisor.
    Ok((a - b * (a / b).floor()).into())
}

pub fn abs_value(args: &Args) -> OpResult {
    Ok(args.number("x")?.abs().into())
}

// --- powers and roots ---

pub fn power(args: &Args) -> OpResult {
    Ok(args.number("a")?.powf(args.number("b")?).into())
}

pub fn sqrt(args: &Args) -> OpResult {
    let x = args.number("x")?;
    if x < 0.0 {
        return Err(DomainError::NegativeSqrt);
    }
    Ok(x.sqrt().into())
}

pub fn cbrt(args: &Args) -> OpResult {
    Ok(args.number("x")?.cbrt().into())
}

pub fn nth_root(args: &Args) -> OpResult {
    let x = args.number("x")?;
    let n = args.number("n")?;
    if n == 0.0 {
        return Err(DomainError::ZerothRoot);
    }
    Ok(x.powf(1.0 / n).into())
}

// --- combinatorics ---

pub fn factorial(args: &Args) -> OpResult {
    let n = args.integer("n")?;
    if n < 0 {
        return Err(DomainError::NegativeFactorial);
    }

    let mut product: u128 = 1;
    for factor in 2..=n as u128 {
        product = product.checked_mul(factor).ok_or(DomainError::Overflow)?;
    }
    into_int(product)
}

pub fn permutation(args: &Args) -> OpResult {
    let n = args.integer("n")?;
    let r = args.integer("r")?;
    if n < 0 || r < 0 || r > n {
        return Err(DomainError::InvalidPermutation);
    }

    // P(n, r) = n * (n-1) * ... * (n-r+1), taken as r steps downward from n
    // so the loop bounds never overflow.
    let mut product: u128 = 1;
    let mut factor = n as u128;
    for _ in 0..r {
        product = product.checked_mul(factor).ok_or(DomainError::Overflow)?;
        factor -= 1;
    }
    into_int(product)
}

pub fn combination(args: &Args) -> OpResult {
    let n = args.integer("n")?;
    let r = args.integer("r")?;
    if n < 0 || r < 0 || r > n {
        return Err(DomainError::InvalidCombination);
    }

    // Multiplicative form; each intermediate value is itself a binomial
    // coefficient, so the division is always exact.
    let r = r.min(n - r);
    let mut product: u128 = 1;
    for k in 1..=r {
        product = product
            .checked_mul((n - r + k) as u128)
            .ok_or(DomainError::Overflow)?
            / k as u128;
    }
    into_int(product)
}

fn into_int(value: u128) -> OpResult {
    i64::try_from(value)
        .map(OpOutput::Int)
        .map_err(|_| DomainError::Overflow)
}

// --- trigonometry (radians) ---

pub fn sin(args: &Args) -> OpResult {
    Ok(args.number("x")?.sin().into())
}

pub fn cos(args: &Args) -> OpResult {
    Ok(args.number("x")?.cos().into())
}

pub fn tan(args: &Args) -> OpResult {
    Ok(args.number("x")?.tan().into())
}

pub fn asin(args: &Args) -> OpResult {
    Ok(unit_interval(args.number("x")?, "asin")?.asin().into())
}

pub fn acos(args: &Args) -> OpResult {
    Ok(unit_interval(args.number("x")?, "acos")?.acos().into())
}

pub fn atan(args: &Args) -> OpResult {
    Ok(args.number("x")?.atan().into())
}

pub fn atan2(args: &Args) -> OpResult {
    Ok(args.number("y")?.atan2(args.number("x")?).into())
}

fn unit_interval(x: f64, operation: &'static str) -> Result<f64, DomainError> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(DomainError::InverseTrigDomain(operation));
    }
    Ok(x)
}

// --- trigonometry (degrees) ---

pub fn sin_deg(args: &Args) -> OpResult {
    Ok(args.number("x")?.to_radians().sin().into())
}

pub fn cos_deg(args: &Args) -> OpResult {
    Ok(args.number("x")?.to_radians().cos().into())
}

pub fn tan_deg(args: &Args) -> OpResult {
    Ok(args.number("x")?.to_radians().tan().into())
}

pub fn asin_deg(args: &Args) -> OpResult {
    Ok(unit_interval(args.number("x")?, "asin")?
        .asin()
        .to_degrees()
        .into())
}

pub fn acos_deg(args: &Args) -> OpResult {
    Ok(unit_interval(args.number("x")?, "acos")?
        .acos()
        .to_degrees()
        .into())
}

pub fn atan_deg(args: &Args) -> OpResult {
    Ok(args.number("x")?.atan().to_degrees().into())
}

// --- hyperbolic ---

pub fn sinh(args: &Args) -> OpResult {
    Ok(args.number("x")?.sinh().into())
}

pub fn cosh(args: &Args) -> OpResult {
    Ok(args.number("x")?.cosh().into())
}

pub fn tanh(args: &Args) -> OpResult {
    Ok(args.number("x")?.tanh().into())
}

pub fn asinh(args: &Args) -> OpResult {
    Ok(args.number("x")?.asinh().into())
}

pub fn acosh(args: &Args) -> OpResult {
    let x = args.number("x")?;
    if x < 1.0 {
        return Err(DomainError::AcoshDomain);
    }
    Ok(x.acosh().into())
}

pub fn atanh(args: &Args) -> OpResult {
    let x = args.number("x")?;
    if x <= -1.0 || x >= 1.0 {
        return Err(DomainError::AtanhDomain);
    }
    Ok(x.atanh().into())
}

// --- logarithms and exponentials ---

pub fn log(args: &Args) -> OpResult {
    Ok(positive(args.number("x")?)?.ln().into())
}

pub fn log10(args: &Args) -> OpResult {
    Ok(positive(args.number("x")?)?.log10().into())
}

pub fn log2(args: &Args) -> OpResult {
    Ok(positive(args.number("x")?)?.log2().into())
}

pub fn log_base(args: &Args) -> OpResult {
    let x = args.number("x")?;
    let base = args.number("base")?;
    if x <= 0.0 || base <= 0.0 || base == 1.0 {
        return Err(DomainError::InvalidLogBase);
    }
    Ok((x.ln() / base.ln()).into())
}

pub fn exp(args: &Args) -> OpResult {
    Ok(args.number("x")?.exp().into())
}

pub fn exp2(args: &Args) -> OpResult {
    Ok(args.number("x")?.exp2().into())
}

fn positive(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLog);
    }
    Ok(x)
}

// --- rounding ---

pub fn floor(args: &Args) -> OpResult {
    float_to_int(args.number("x")?.floor())
}

pub fn ceil(args: &Args) -> OpResult {
    float_to_int(args.number("x")?.ceil())
}

pub fn round_number(args: &Args) -> OpResult {
    let x = args.number("x")?;
    let decimals = args.integer_or("decimals", 0)?;
    let decimals = i32::try_from(decimals).map_err(|_| DomainError::Overflow)?;
    let factor = 10f64.powi(decimals);
    Ok(((x * factor).round() / factor).into())
}

pub fn trunc(args: &Args) -> OpResult {
    float_to_int(args.number("x")?.trunc())
}

/// The upper bound is exclusive: 2^63 is exactly representable as f64 but is
/// one past `i64::MAX`.
fn float_to_int(value: f64) -> OpResult {
    if value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Ok(OpOutput::Int(value as i64));
    }
    Err(DomainError::Overflow)
}

// --- angle conversion ---

pub fn deg_to_rad(args: &Args) -> OpResult {
    Ok(args.number("degrees")?.to_radians().into())
}

pub fn rad_to_deg(args: &Args) -> OpResult {
    Ok(args.number("radians")?.to_degrees().into())
}

// --- list statistics ---

pub fn mean(args: &Args) -> OpResult {
    let numbers = samples(args, "Mean", 1)?;
    Ok((numbers.iter().sum::<f64>() / numbers.len() as f64).into())
}

pub fn median(args: &Args) -> OpResult {
    let mut numbers = samples(args, "Median", 1)?;
    numbers.sort_by(f64::total_cmp);
    let mid = numbers.len() / 2;
    let median = if numbers.len() % 2 == 1 {
        numbers[mid]
    } else {
        (numbers[mid - 1] + numbers[mid]) / 2.0
    };
    Ok(median.into())
}

pub fn mode(args: &Args) -> OpResult {
    let mut numbers = samples(args, "Mode", 1)?;
    numbers.sort_by(f64::total_cmp);

    let mut best = numbers[0];
    let mut best_count = 0usize;
    let mut tied = false;
    let mut at = 0;
    while at < numbers.len() {
        let value = numbers[at];
        let mut run = 0;
        while at < numbers.len() && numbers[at] == value {
            run += 1;
            at += 1;
        }
        if run > best_count {
            best = value;
            best_count = run;
            tied = false;
        } else if run == best_count {
            tied = true;
        }
    }

    if tied {
        return Err(DomainError::NoUniqueMode);
    }
    Ok(best.into())
}

pub fn stdev(args: &Args) -> OpResult {
    let numbers = samples(args, "Standard deviation", 2)?;
    Ok(sample_variance(&numbers).sqrt().into())
}

pub fn variance(args: &Args) -> OpResult {
    let numbers = samples(args, "Variance", 2)?;
    Ok(sample_variance(&numbers).into())
}

/// Sample variance with Bessel's correction; the caller guarantees n >= 2.
fn sample_variance(numbers: &[f64]) -> f64 {
    let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
    let squares = numbers
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>();
    squares / (numbers.len() - 1) as f64
}

pub fn range_calc(args: &Args) -> OpResult {
    let numbers = samples(args, "Range", 1)?;
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((max - min).into())
}

pub fn sum_list(args: &Args) -> OpResult {
    Ok(args.numbers("numbers")?.iter().sum::<f64>().into())
}

pub fn product(args: &Args) -> OpResult {
    Ok(args
        .numbers("numbers")?
        .iter()
        .product::<f64>()
        .into())
}

pub fn min_value(args: &Args) -> OpResult {
    let numbers = samples(args, "Min", 1)?;
    Ok(numbers
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
        .into())
}

pub fn max_value(args: &Args) -> OpResult {
    let numbers = samples(args, "Max", 1)?;
    Ok(numbers
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        .into())
}

fn samples(args: &Args, operation: &'static str, at_least: usize) -> Result<Vec<f64>, DomainError> {
    let numbers = args.numbers("numbers")?;
    if numbers.len() < at_least {
        return Err(DomainError::NotEnoughSamples(operation, at_least));
    }
    Ok(numbers)
}

// --- constants ---

pub fn pi(_args: &Args) -> OpResult {
    Ok(std::f64::consts::PI.into())
}

pub fn e(_args: &Args) -> OpResult {
    Ok(std::f64::consts::E.into())
}

pub fn tau(_args: &Args) -> OpResult {
    Ok(std::f64::consts::TAU.into())
}

pub fn golden_ratio(_args: &Args) -> OpResult {
    Ok(((1.0 + 5f64.sqrt()) / 2.0).into())
}

// --- number theory ---

pub fn gcd(args: &Args) -> OpResult {
    let a = args.integer("a")?.unsigned_abs();
    let b = args.integer("b")?.unsigned_abs();
    into_int(gcd_u64(a, b) as u128)
}

pub fn lcm(args: &Args) -> OpResult {
    let a = args.integer("a")?.unsigned_abs();
    let b = args.integer("b")?.unsigned_abs();
    if a == 0 || b == 0 {
        return Ok(OpOutput::Int(0));
    }

    let result = (a / gcd_u64(a, b))
        .checked_mul(b)
        .ok_or(DomainError::Overflow)?;
    into_int(result as u128)
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Deterministic trial division over odd candidates up to the square root.
pub fn is_prime(args: &Args) -> OpResult {
    let n = args.integer("n")?;
    if n < 2 {
        return Ok(false.into());
    }
    if n == 2 {
        return Ok(true.into());
    }
    if n % 2 == 0 {
        return Ok(false.into());
    }

    let mut candidate: i64 = 3;
    while candidate <= n / candidate {
        if n % candidate == 0 {
            return Ok(false.into());
        }
        candidate += 2;
    }
    Ok(true.into())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn call(handler: fn(&Args) -> OpResult, arguments: Value) -> OpResult {
        let map: Map<String, Value> =
            serde_json::from_value(arguments).expect("test arguments are an object");
        handler(&Args::new(&map))
    }

    fn assert_close(result: OpResult, expected: f64) {
        match result {
            Ok(OpOutput::Number(value)) => {
                assert!((value - expected).abs() < 1e-9, "{value} != {expected}")
            }
            other => panic!("expected a number near {expected}, got {other:?}"),
        }
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(call(add, json!({"a": 2, "b": 3})), Ok(OpOutput::Number(5.0)));
        assert_eq!(
            call(subtract, json!({"a": 2, "b": 3})),
            Ok(OpOutput::Number(-1.0))
        );
        assert_eq!(
            call(multiply, json!({"a": 4, "b": 2.5})),
            Ok(OpOutput::Number(10.0))
        );
        assert_eq!(
            call(divide, json!({"a": 10, "b": 4})),
            Ok(OpOutput::Number(2.5))
        );
    }

    #[test]
    fn division_and_modulo_by_zero_fail() {
        assert_eq!(
            call(divide, json!({"a": 10, "b": 0})),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            call(modulo, json!({"a": 10, "b": 0})),
            Err(DomainError::ModuloByZero)
        );
    }

    #[test]
    fn modulo_sign_follows_divisor() {
        assert_eq!(
            call(modulo, json!({"a": -7, "b": 3})),
            Ok(OpOutput::Number(2.0))
        );
        assert_eq!(
            call(modulo, json!({"a": 7, "b": 3})),
            Ok(OpOutput::Number(1.0))
        );
    }

    #[test]
    fn roots_validate_their_domain() {
        assert_eq!(call(sqrt, json!({"x": 9})), Ok(OpOutput::Number(3.0)));
        assert_eq!(call(sqrt, json!({"x": -1})), Err(DomainError::NegativeSqrt));
        assert_eq!(call(cbrt, json!({"x": -27})), Ok(OpOutput::Number(-3.0)));
        assert_eq!(
            call(nth_root, json!({"x": 32, "n": 0})),
            Err(DomainError::ZerothRoot)
        );
    }

    #[test]
    fn factorial_handles_edges() {
        assert_eq!(call(factorial, json!({"n": 0})), Ok(OpOutput::Int(1)));
        assert_eq!(call(factorial, json!({"n": 5})), Ok(OpOutput::Int(120)));
        assert_eq!(
            call(factorial, json!({"n": -1})),
            Err(DomainError::NegativeFactorial)
        );
        assert_eq!(
            call(factorial, json!({"n": 200})),
            Err(DomainError::Overflow)
        );
    }

    #[test]
    fn combinatorics() {
        assert_eq!(
            call(permutation, json!({"n": 5, "r": 2})),
            Ok(OpOutput::Int(20))
        );
        assert_eq!(
            call(combination, json!({"n": 52, "r": 5})),
            Ok(OpOutput::Int(2_598_960))
        );
        assert_eq!(
            call(permutation, json!({"n": 3, "r": 4})),
            Err(DomainError::InvalidPermutation)
        );
        assert_eq!(
            call(combination, json!({"n": -1, "r": 0})),
            Err(DomainError::InvalidCombination)
        );
    }

    #[test]
    fn permutation_handles_extreme_bounds() {
        // r = 0 is an empty product for any n, including i64::MAX.
        assert_eq!(
            call(permutation, json!({"n": i64::MAX, "r": 0})),
            Ok(OpOutput::Int(1))
        );
        assert_eq!(
            call(permutation, json!({"n": i64::MAX, "r": 1})),
            Ok(OpOutput::Int(i64::MAX))
        );
        assert_eq!(
            call(permutation, json!({"n": i64::MAX, "r": 3})),
            Err(DomainError::Overflow)
        );
        assert_eq!(
            call(permutation, json!({"n": 100, "r": 50})),
            Err(DomainError::Overflow)
        );
    }

    #[test]
    fn inverse_trig_domain_is_enforced() {
        assert_close(call(asin, json!({"x": 1})), std::f64::consts::FRAC_PI_2);
        assert_eq!(
            call(asin, json!({"x": 1.5})),
            Err(DomainError::InverseTrigDomain("asin"))
        );
        assert_eq!(
            call(acos_deg, json!({"x": -2})),
            Err(DomainError::InverseTrigDomain("acos"))
        );
    }

    #[test]
    fn degree_variants_match_radian_variants() {
        assert_close(call(sin_deg, json!({"x": 90})), 1.0);
        assert_close(call(asin_deg, json!({"x": 1})), 90.0);
    }

    #[test]
    fn inverse_hyperbolic_domains() {
        assert_eq!(call(acosh, json!({"x": 1})), Ok(OpOutput::Number(0.0)));
        assert_eq!(call(acosh, json!({"x": 0.5})), Err(DomainError::AcoshDomain));
        assert_eq!(call(atanh, json!({"x": 1})), Err(DomainError::AtanhDomain));
        assert_eq!(call(atanh, json!({"x": -1})), Err(DomainError::AtanhDomain));
        assert_eq!(call(atanh, json!({"x": 0})), Ok(OpOutput::Number(0.0)));
    }

    #[test]
    fn logarithms_reject_non_positive_input() {
        assert_eq!(call(log, json!({"x": 0})), Err(DomainError::NonPositiveLog));
        assert_eq!(call(log10, json!({"x": -3})), Err(DomainError::NonPositiveLog));
        assert_close(call(log2, json!({"x": 8})), 3.0);
        assert_eq!(
            call(log_base, json!({"x": 8, "base": 1})),
            Err(DomainError::InvalidLogBase)
        );
        assert_close(call(log_base, json!({"x": 8, "base": 2})), 3.0);
    }

    #[test]
    fn rounding_family() {
        assert_eq!(call(floor, json!({"x": 2.7})), Ok(OpOutput::Int(2)));
        assert_eq!(call(ceil, json!({"x": 2.1})), Ok(OpOutput::Int(3)));
        assert_eq!(call(trunc, json!({"x": -2.9})), Ok(OpOutput::Int(-2)));
        assert_eq!(
            call(round_number, json!({"x": 1.25, "decimals": 1})),
            Ok(OpOutput::Number(1.3))
        );
        assert_eq!(
            call(round_number, json!({"x": 2.6})),
            Ok(OpOutput::Number(3.0))
        );
    }

    #[test]
    fn rounding_to_integer_rejects_unrepresentable_values() {
        assert_eq!(call(floor, json!({"x": 1e300})), Err(DomainError::Overflow));
        assert_eq!(call(ceil, json!({"x": -1e300})), Err(DomainError::Overflow));
        assert_eq!(call(trunc, json!({"x": 1e19})), Err(DomainError::Overflow));
        assert_eq!(
            call(floor, json!({"x": -9.223372036854776e18})),
            Ok(OpOutput::Int(i64::MIN))
        );
        // `decimals` beyond i32 is rejected, not truncated.
        assert_eq!(
            call(round_number, json!({"x": 1.5, "decimals": 4_294_967_298i64})),
            Err(DomainError::Overflow)
        );
    }

    #[test]
    fn statistics_family() {
        assert_eq!(
            call(mean, json!({"numbers": [1, 2, 3, 4, 5]})),
            Ok(OpOutput::Number(3.0))
        );
        assert_eq!(
            call(median, json!({"numbers": [4, 1, 3, 2]})),
            Ok(OpOutput::Number(2.5))
        );
        assert_eq!(
            call(mode, json!({"numbers": [1, 2, 2, 3]})),
            Ok(OpOutput::Number(2.0))
        );
        assert_eq!(
            call(variance, json!({"numbers": [1, 2, 3, 4]})),
            Ok(OpOutput::Number(5.0 / 3.0))
        );
        assert_eq!(
            call(stdev, json!({"numbers": [2, 4]})),
            Ok(OpOutput::Number(2f64.sqrt()))
        );
        assert_eq!(
            call(range_calc, json!({"numbers": [5, 1, 9]})),
            Ok(OpOutput::Number(8.0))
        );
        assert_eq!(
            call(sum_list, json!({"numbers": []})),
            Ok(OpOutput::Number(0.0))
        );
        assert_eq!(
            call(product, json!({"numbers": [2, 3, 4]})),
            Ok(OpOutput::Number(24.0))
        );
        assert_eq!(
            call(min_value, json!({"numbers": [3, -1, 2]})),
            Ok(OpOutput::Number(-1.0))
        );
        assert_eq!(
            call(max_value, json!({"numbers": [3, -1, 2]})),
            Ok(OpOutput::Number(3.0))
        );
    }

    #[test]
    fn statistics_sample_requirements() {
        assert_eq!(
            call(mean, json!({"numbers": []})),
            Err(DomainError::NotEnoughSamples("Mean", 1))
        );
        assert_eq!(
            call(stdev, json!({"numbers": [1]})),
            Err(DomainError::NotEnoughSamples("Standard deviation", 2))
        );
        assert_eq!(
            call(min_value, json!({"numbers": []})),
            Err(DomainError::NotEnoughSamples("Min", 1))
        );
    }

    #[test]
    fn mode_requires_a_unique_winner() {
        assert_eq!(
            call(mode, json!({"numbers": [1, 2, 3]})),
            Err(DomainError::NoUniqueMode)
        );
        assert_eq!(
            call(mode, json!({"numbers": [1, 1, 2, 2]})),
            Err(DomainError::NoUniqueMode)
        );
        assert_eq!(call(mode, json!({"numbers": [7]})), Ok(OpOutput::Number(7.0)));
    }

    #[test]
    fn constants() {
        assert_eq!(
            call(pi, json!({})),
            Ok(OpOutput::Number(std::f64::consts::PI))
        );
        assert_eq!(
            call(golden_ratio, json!({})),
            Ok(OpOutput::Number((1.0 + 5f64.sqrt()) / 2.0))
        );
    }

    #[test]
    fn number_theory() {
        assert_eq!(call(gcd, json!({"a": 54, "b": 24})), Ok(OpOutput::Int(6)));
        assert_eq!(call(gcd, json!({"a": -54, "b": 24})), Ok(OpOutput::Int(6)));
        assert_eq!(call(lcm, json!({"a": 4, "b": 6})), Ok(OpOutput::Int(12)));
        assert_eq!(call(lcm, json!({"a": 0, "b": 6})), Ok(OpOutput::Int(0)));
    }

    #[test]
    fn primality() {
        for (n, expected) in [
            (-7, false),
            (0, false),
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (97, true),
            (99, false),
            (101, true),
            (7919, true),
            (7920, false),
        ] {
            assert_eq!(
                call(is_prime, json!({"n": n})),
                Ok(OpOutput::Bool(expected)),
                "is_prime({n})"
            );
        }
    }

    #[test]
    fn missing_and_mistyped_arguments_are_reported() {
        assert_eq!(
            call(add, json!({"a": 2})),
            Err(DomainError::MissingParameter("b".to_string()))
        );
        assert_eq!(
            call(add, json!({"a": 2, "b": "three"})),
            Err(DomainError::ExpectedNumber("b".to_string()))
        );
        assert_eq!(
            call(factorial, json!({"n": 2.5})),
            Err(DomainError::ExpectedInteger("n".to_string()))
        );
        assert_eq!(
            call(mean, json!({"numbers": [1, "two"]})),
            Err(DomainError::ExpectedNumberArray("numbers".to_string()))
        );
    }
}
