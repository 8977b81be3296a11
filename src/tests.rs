use crate::*;
use rand::Rng;
use rationals_config::RunOption;
use rationals_number::{BigInt, DivBy, InvalidArgumentKind, Rational, gcd_bi};

const ITERATIONS: usize = 500;

fn random_rational(rng: &mut impl Rng) -> Rational {
    let numer = rng.gen_range(-10_000i64..=10_000);
    let mut denom = rng.gen_range(-10_000i64..=10_000);

    if denom == 0 {
        denom = 1;
    }

    numer.div_by(denom).unwrap()
}

// A multiple of 2^64 plus a small offset, so operands have room for common factors
// and products are far beyond what `i64` or `i128` can hold.
fn random_big_int(rng: &mut impl Rng) -> BigInt {
    let high = BigInt::from(rng.gen_range(i64::MIN..=i64::MAX) as i128);
    let low = BigInt::from(rng.gen_range(-1_000i64..=1_000) as i128);

    high.mul_bi(&BigInt::from(1i128 << 64)).add_bi(&low)
}

fn random_big_rational(rng: &mut impl Rng) -> Rational {
    let mut denom = random_big_int(rng);

    if denom.is_zero() {
        denom = BigInt::one();
    }

    random_big_int(rng).div_by(denom).unwrap()
}

fn tokens(s: &str) -> Vec<String> {
    s.split(' ').map(|s| s.to_string()).collect()
}

#[test]
fn normalized_form_is_canonical() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS {
        let x = random_rational(&mut rng);
        let n = x.normalize();

        assert!(n.denom().gt_bi(&BigInt::from(0i64)), "{x:?}");
        assert!(gcd_bi(n.numer(), n.denom()).eq_bi(&BigInt::from(1i64)), "{x:?}");
        assert!(n.is_normalized());
        assert_eq!(format!("{:?}", n.normalize()), format!("{n:?}"));
        assert_eq!(x, n);
    }
}

#[test]
fn algebraic_properties() {
    let mut rng = rand::thread_rng();
    let zero = Rational::zero();
    let one = Rational::one();

    for _ in 0..ITERATIONS {
        let a = random_rational(&mut rng);
        let b = random_rational(&mut rng);

        assert_eq!(a.add_rat(&b), b.add_rat(&a));
        assert_eq!(a.mul_rat(&b), b.mul_rat(&a));
        assert_eq!(a.add_rat(&zero), a);
        assert_eq!(a.mul_rat(&one), a);
        assert_eq!(a.sub_rat(&a), zero);
        assert_eq!(a.neg().neg(), a);
        assert_eq!(a.add_rat(&a.neg()), zero);

        if !b.is_zero() {
            assert_eq!(a.div_rat(&b).unwrap().mul_rat(&b), a);
        }

        else {
            assert_eq!(a.div_rat(&b).unwrap_err().kind(), &InvalidArgumentKind::DivisionByZero);
        }
    }
}

#[test]
fn properties_beyond_i64() {
    let mut rng = rand::thread_rng();
    let zero = Rational::zero();

    for _ in 0..ITERATIONS {
        let a = random_big_rational(&mut rng);
        let b = random_big_rational(&mut rng);
        let small = random_rational(&mut rng);

        let n = a.normalize();
        assert!(!n.denom().is_neg(), "{a:?}");
        assert!(gcd_bi(n.numer(), n.denom()).is_one(), "{a:?}");

        assert_eq!(a.add_rat(&b), b.add_rat(&a));
        assert_eq!(a.mul_rat(&b), b.mul_rat(&a));
        assert_eq!(a.add_rat(&b).sub_rat(&b), a);
        assert_eq!(a.sub_rat(&a), zero);
        assert_eq!(a.add_rat(&small).sub_rat(&small), a);

        if !b.is_zero() {
            assert_eq!(a.div_rat(&b).unwrap().mul_rat(&b), a);
        }

        assert_eq!(a.lt_rat(&b), a.sub_rat(&b).lt_rat(&zero));
        assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
    }
}

#[test]
fn ordering_is_consistent() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS {
        // raw products and quotients may carry negative denominators
        let a = random_rational(&mut rng).mul_rat(&random_rational(&mut rng));
        let b = random_rational(&mut rng);

        assert_eq!(a.lt_rat(&b), b.gt_rat(&a));
        assert_eq!(a.cmp_rat(&b), a.sub_rat(&b).cmp_rat(&Rational::zero()));
        assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
    }
}

#[test]
fn round_trip() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS {
        let x = random_rational(&mut rng);
        let parsed = x.to_string().parse::<Rational>().unwrap();

        assert_eq!(parsed.normalize().to_string(), x.normalize().to_string());
        assert_eq!(parsed, x);
    }
}

#[test]
fn demo_passes() {
    let mut output = RunOutput::new();

    assert_eq!(run_demo(1, &mut output), 0);
    assert!(!output.has_error());
    assert_eq!(output.stdout().len(), DEMO_CASES.len() + 1);
    assert_eq!(output.stdout().last().unwrap(), "13/13 passed");

    let output = run(RunOption::default());
    assert!(!output.has_error());

    // verbosity 0 prints the summary only
    let mut output = RunOutput::new();
    run_demo(0, &mut output);
    assert_eq!(output.stdout().len(), 1);
}

#[test]
fn expressions() {
    let samples = vec![
        ("1/2 + 1/3", "5/6"),
        ("1/2 - 1/3", "1/6"),
        ("2/3 * 3/4", "1/2"),
        ("1/2 / -1/3", "-3/2"),
        ("neg -4/6", "2/3"),
        ("-0/5", "0"),
        ("1/2 == 2/4", "true"),
        ("1/2 != 2/4", "false"),
        ("1/2 <= 1/2", "true"),
        ("1/2 >= 2/3", "false"),
        ("-1/2 > -2/3", "true"),
        ("3/4 in 1/3..2/3", "false"),
        ("-1/2 in -1/1..0", "true"),
    ];

    for (expression, expected) in samples.into_iter() {
        assert_eq!(eval_expression(&tokens(expression)).unwrap().to_string(), expected, "{expression}");
    }
}

#[test]
fn expression_errors() {
    assert!(matches!(
        eval_expression(&tokens("1/2 ^ 2")).unwrap_err().kind(),
        EvalErrorKind::UnknownOperator(op) if op == "^",
    ));
    assert!(matches!(
        eval_expression(&tokens("1/2 in 1/3")).unwrap_err().kind(),
        EvalErrorKind::InvalidRange(_),
    ));
    assert!(matches!(
        eval_expression(&tokens("1 + 2 + 3")).unwrap_err().kind(),
        EvalErrorKind::WrongNumberOfTokens(5),
    ));
    assert!(matches!(
        eval_expression(&[]).unwrap_err().kind(),
        EvalErrorKind::WrongNumberOfTokens(0),
    ));

    match eval_expression(&tokens("1/2 / 0")).unwrap_err().kind() {
        EvalErrorKind::InvalidArgument(e) => assert_eq!(e.kind(), &InvalidArgumentKind::DivisionByZero),
        k => panic!("{k:?}"),
    }

    match eval_expression(&tokens("1/0")).unwrap_err().kind() {
        EvalErrorKind::InvalidArgument(e) => assert_eq!(e.kind(), &InvalidArgumentKind::ZeroDenominator),
        k => panic!("{k:?}"),
    }
}

#[test]
fn run_output() {
    let expression = ["2/3", "*", "3/4"];

    let mut option = RunOption::evaluate(&expression);
    option.verbosity = 0;
    assert_eq!(run(option.clone()).stdout(), &["1/2".to_string()]);

    option.verbosity = 1;
    assert_eq!(run(option.clone()).stdout(), &["2/3 * 3/4 = 1/2".to_string()]);

    option.verbosity = 2;
    assert_eq!(run(option).stdout(), &["2/3 * 3/4 = 1/2  (raw: Rational(6 / 12))".to_string()]);

    let output = run(RunOption::evaluate(&["1/2", "/", "0"]));
    assert!(output.has_error());
    assert!(output.errors()[0].contains("division by zero"));

    let output = run(RunOption::version_info());
    assert_eq!(output.stdout(), &["rationals 0.0.0".to_string()]);

    let output = run(RunOption::help_message());
    assert!(output.stdout()[0].starts_with("Usage: rationals"));
}
