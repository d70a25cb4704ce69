use revpol::{
    ast::{BinaryOperator, Expr, Operand},
    error::{ParseError, RuntimeError},
    interpreter::{dispatch::default_dispatch, environment::Environment, value::Value},
    parse_program, run_program,
};

fn eval(src: &str) -> Value {
    let mut env = Environment::new();
    eval_in(src, &mut env)
}

fn eval_in(src: &str, env: &mut Environment) -> Value {
    let dispatch = default_dispatch();
    run_program(src, &dispatch, env).unwrap_or_else(|e| panic!("Program failed: {src}\nError: {e}"))
}

fn eval_err(src: &str, env: &mut Environment) -> RuntimeError {
    let dispatch = default_dispatch();
    let tree = parse_program(src, &dispatch).unwrap_or_else(|e| panic!("Program failed to parse: {src}\nError: {e}"));

    match tree.evaluate(env) {
        Ok(value) => panic!("Program succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

fn parse_err(src: &str) -> ParseError {
    match parse_program(src, &default_dispatch()) {
        Ok(tree) => panic!("Program parsed as {tree} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

fn rendering(src: &str) -> String {
    parse_program(src, &default_dispatch()).unwrap_or_else(|e| panic!("Program failed to parse: {src}\nError: {e}"))
                                           .to_string()
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("2 3 +"), Value::Integer(5));
    assert_eq!(eval("3 4 *"), Value::Integer(12));
    assert_eq!(eval("2 3 **"), Value::Integer(9));
    assert_eq!(eval("5 print"), Value::Integer(5));
}

#[test]
fn operands_are_consumed_in_stack_order() {
    // The first popped operand is the subtrahend, divisor, or modulus.
    assert_eq!(eval("10 4 -"), Value::Integer(-6));
    assert_eq!(eval("2 8 /"), Value::Real(4.0));
    assert_eq!(eval("3 10 %"), Value::Integer(1));
    assert_eq!(eval("2 3 **"), Value::Integer(9));
    assert_eq!(eval("3 2 >"), Value::Bool(false));
    assert_eq!(eval("3 2 <"), Value::Bool(true));
}

#[test]
fn division_always_yields_a_real() {
    assert_eq!(eval("2 8 /"), Value::Real(4.0));
    assert_eq!(eval("4 2 /"), Value::Real(0.5));
}

#[test]
fn modulus_is_floored() {
    assert_eq!(eval("3 7 %"), Value::Integer(1));
    assert_eq!(eval("3 7 0 - %"), Value::Integer(2));
    assert_eq!(eval("3 0 - 7 %"), Value::Integer(-2));
}

#[test]
fn modulus_handles_extreme_integers() {
    let mut env = Environment::new();
    env.bind("m", Value::Integer(i64::MAX));

    assert_eq!(eval_in("m 1 %", &mut env), Value::Integer(1));
    assert_eq!(eval_in("1 m %", &mut env), Value::Integer(0));
}

#[test]
fn negative_exponents_go_through_reals() {
    assert_eq!(eval("1 0 - 2 **"), Value::Real(0.5));
    assert_eq!(eval("2 0 **"), Value::Integer(0));
}

#[test]
fn zero_base_with_a_negative_exponent_is_an_error() {
    let mut env = Environment::new();
    assert!(matches!(eval_err("1 0 - 0 **", &mut env), RuntimeError::DivisionByZero));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("4 1/"), Value::Real(0.25));
    assert_eq!(eval("5 0 - abs"), Value::Integer(5));
    assert_eq!(eval("5 abs"), Value::Integer(5));
}

#[test]
fn comparisons_produce_booleans() {
    assert_eq!(eval("2 2 ="), Value::Bool(true));
    assert_eq!(eval("5 5 !="), Value::Bool(false));
    assert_eq!(eval("2 3 >="), Value::Bool(true));
    assert_eq!(eval("3 2 <="), Value::Bool(true));
    // Numeric equality crosses the integer/real divide.
    assert_eq!(eval("2 4 / 2 ="), Value::Bool(true));
}

#[test]
fn booleans_coerce_in_arithmetic() {
    assert_eq!(eval("2 2 = 1 +"), Value::Integer(2));
    assert_eq!(eval("1 2 = 1 +"), Value::Integer(1));
}

#[test]
fn alloc_then_setq_rebinds() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();

    run_program("x alloc", &dispatch, &mut env).unwrap();
    assert_eq!(env.get("x"), Some(&Value::Integer(0)));

    let result = run_program("5 x setq", &dispatch, &mut env).unwrap();
    assert_eq!(result, Value::Integer(5));
    assert_eq!(env.get("x"), Some(&Value::Integer(5)));
}

#[test]
fn valloc_then_setv_updates_one_element() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();

    run_program("10 v valloc", &dispatch, &mut env).unwrap();
    let result = run_program("7 3 v setv", &dispatch, &mut env).unwrap();
    assert_eq!(result, Value::Integer(7));

    let Some(Value::Array(cells)) = env.get("v") else {
        panic!("v is not bound to an array");
    };
    let cells = cells.borrow();

    assert_eq!(cells.len(), 10);
    for (index, value) in cells.iter().enumerate() {
        let expected = if index == 3 { 7 } else { 0 };
        assert_eq!(value, &Value::Integer(expected));
    }
}

#[test]
fn while_runs_until_the_condition_fails() {
    let mut env = Environment::new();
    env.bind("x", Value::Integer(0));

    eval_in("x 1 + x setq 1 x != while", &mut env);
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn while_with_a_false_condition_never_runs() {
    let mut env = Environment::new();
    eval_in("x 1 + x setq 0 0 != while x alloc prog2", &mut env);
    assert_eq!(env.get("x"), Some(&Value::Integer(0)));
}

#[test]
fn subroutines_share_the_caller_environment() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();
    env.bind("x", Value::Integer(10));

    run_program("x 4 + x setq f defsub", &dispatch, &mut env).unwrap();

    // Each call reads and rebinds the very same x.
    assert_eq!(run_program("f call", &dispatch, &mut env).unwrap(), Value::Integer(14));
    assert_eq!(run_program("f call", &dispatch, &mut env).unwrap(), Value::Integer(18));
    assert_eq!(env.get("x"), Some(&Value::Integer(18)));
}

#[test]
fn prog_runs_later_slots_first_and_returns_the_first() {
    assert_eq!(eval("1 2 prog2"), Value::Integer(1));
    assert_eq!(eval("x 0 + x 1 + x setq x alloc prog3"), Value::Integer(1));
}

#[test]
fn if_picks_a_branch_by_truthiness() {
    assert_eq!(eval("10 20 1 if"), Value::Integer(20));
    assert_eq!(eval("10 20 0 if"), Value::Integer(10));
    assert_eq!(eval("10 20 3 2 < if"), Value::Integer(20));
}

#[test]
fn if_resolves_a_bare_name_condition() {
    let mut env = Environment::new();
    env.bind("flag", Value::Bool(true));
    assert_eq!(eval_in("10 20 flag if", &mut env), Value::Integer(20));
}

#[test]
fn for_iterates_over_a_half_open_range() {
    let mut env = Environment::new();
    eval_in("s i + s setq 5 0 i for s alloc prog2", &mut env);

    assert_eq!(env.get("s"), Some(&Value::Integer(10)));
    // The index variable outlives the loop at its last bound value.
    assert_eq!(env.get("i"), Some(&Value::Integer(4)));
}

#[test]
fn for_with_an_empty_range_does_nothing() {
    let mut env = Environment::new();
    eval_in("nop 0 5 i for", &mut env);
    assert!(!env.contains("i"));
}

#[test]
fn operand_kinds_resolve_identically() {
    let mut env = Environment::new();
    env.bind("x", Value::Integer(4));

    // Sub-expression, bare name, and literal all produce the same result.
    assert_eq!(eval("2 2 + 1 +"), Value::Integer(5));
    assert_eq!(eval_in("x 1 +", &mut env), Value::Integer(5));

    let literal = Expr::Binary { op: BinaryOperator::Add,
                                 x:  Operand::Literal(Value::Integer(4)),
                                 y:  Operand::Literal(Value::Integer(1)), };
    assert_eq!(literal.evaluate(&mut env).unwrap(), Value::Integer(5));
}

#[test]
fn canonical_renderings() {
    assert_eq!(rendering("2 3 +"), "(+ 2 3)");
    assert_eq!(rendering("x 1/"), "(1/ x)");
    assert_eq!(rendering("x abs"), "abs(x)");
    assert_eq!(rendering("1 2 prog2"), "prog2 (1, 2)");
    assert_eq!(rendering("1 2 x if"), "if(1, 2, x)");
    assert_eq!(rendering("nop 0 1 != while"), "while(nop, (!= 0 1))");
    assert_eq!(rendering("nop 10 0 i for"), "for(nop, from 0 to 10, var i)");
    assert_eq!(rendering("x alloc"), "alloc(x)");
    assert_eq!(rendering("10 v valloc"), "valloc(10, v)");
    assert_eq!(rendering("1 x setq"), "setq(1, x)");
    assert_eq!(rendering("7 3 v setv"), "setv(7, 3, v)");
    assert_eq!(rendering("x 4 + f defsub"), "defsub((+ x 4), f)");
    assert_eq!(rendering("f call"), "call(f)");
    assert_eq!(rendering("x print"), "print(x)");
}

#[test]
fn worked_reference_example() {
    let dispatch = default_dispatch();
    let src = "2 3 + x * 6 5 - / abs 2 ** y 1/ + 1/";

    let tree = parse_program(src, &dispatch).unwrap();
    assert_eq!(tree.to_string(),
               "(1/ (+ (** abs((/ (* (+ 2 3) x) (- 6 5))) 2) (1/ y)))");

    let mut env = Environment::new();
    env.bind("x", Value::Integer(3));
    env.bind("y", Value::Integer(7));

    let Value::Real(result) = tree.evaluate(&mut env).unwrap() else {
        panic!("expected a real result");
    };
    assert!((result - 0.840_229_329_530_24).abs() < 1e-12, "got {result}");
}

#[test]
fn rpn_round_trip_preserves_the_tree() {
    let dispatch = default_dispatch();

    for src in ["2 3 + x * 6 5 - / abs 2 ** y 1/ + 1/",
                "x 1 + x setq x 10 > while x alloc prog2",
                "v print i i * i v setv prog2 10 0 i for 10 v valloc prog2",
                "nop x print prime if nop 0 0 != prime setq i x % 0 = if 1 x - 2 i for 0 0 = prime setq prime alloc prog4 100 2 x for"]
    {
        let tree = parse_program(src, &dispatch).unwrap();
        let round_tripped = parse_program(&tree.to_rpn(), &dispatch).unwrap();
        assert_eq!(tree, round_tripped, "round trip changed the tree for: {src}");
    }
}

#[test]
fn operator_without_enough_operands_is_an_error() {
    assert!(matches!(parse_err("+"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err("1 +"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err("1 2 3 for"), ParseError::InvalidExpression { .. }));
}

#[test]
fn leftover_operands_are_an_error() {
    assert!(matches!(parse_err("1 2"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err(""), ParseError::InvalidExpression { .. }));
}

#[test]
fn binding_slots_require_a_bare_name() {
    assert!(matches!(parse_err("1 alloc"), ParseError::InvalidArgument { .. }));
    assert!(matches!(parse_err("1 2 setq"), ParseError::InvalidArgument { .. }));
    assert!(matches!(parse_err("5 1 valloc"), ParseError::InvalidArgument { .. }));
    assert!(matches!(parse_err("1 call"), ParseError::InvalidArgument { .. }));
}

#[test]
fn value_slots_reject_a_bare_name() {
    assert!(matches!(parse_err("y x setq"), ParseError::InvalidArgument { .. }));
    assert!(matches!(parse_err("n v valloc"), ParseError::InvalidArgument { .. }));
}

#[test]
fn prog_slots_must_be_expressions() {
    assert!(matches!(parse_err("x 1 prog2"), ParseError::InvalidArgument { .. }));
}

#[test]
fn oversized_integer_literals_fail_to_lex() {
    assert!(matches!(parse_err("99999999999999999999"), ParseError::InvalidExpression { .. }));
}

#[test]
fn unknown_words_are_variables() {
    let mut env = Environment::new();
    env.bind("12x", Value::Integer(5));
    assert_eq!(eval_in("12x 1 +", &mut env), Value::Integer(6));
}

#[test]
fn missing_variable_is_an_error() {
    let mut env = Environment::new();
    assert!(matches!(eval_err("x 1 +", &mut env), RuntimeError::MissingVariable { .. }));
}

#[test]
fn division_by_zero_is_an_error() {
    let mut env = Environment::new();
    assert!(matches!(eval_err("0 1 /", &mut env), RuntimeError::DivisionByZero));
    assert!(matches!(eval_err("0 1/", &mut env), RuntimeError::DivisionByZero));
    assert!(matches!(eval_err("0 1 %", &mut env), RuntimeError::InvalidArithmeticOperation { .. }));
    assert_eq!(eval("2 1 /"), Value::Real(0.5));
}

#[test]
fn setv_bounds_are_checked() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();
    run_program("3 v valloc", &dispatch, &mut env).unwrap();

    assert_eq!(eval_in("7 2 v setv", &mut env), Value::Integer(7));
    assert!(matches!(eval_err("7 3 v setv", &mut env),
                     RuntimeError::ArrayIndexOutOfBounds { index: 3, len: 3 }));
    assert!(matches!(eval_err("7 4 v setv", &mut env),
                     RuntimeError::ArrayIndexOutOfBounds { index: 4, len: 3 }));
}

#[test]
fn setv_requires_an_array_binding() {
    let mut env = Environment::new();
    assert!(matches!(eval_err("7 0 v setv", &mut env), RuntimeError::VariableNotFound { .. }));

    env.bind("v", Value::Integer(1));
    assert!(matches!(eval_err("7 0 v setv", &mut env), RuntimeError::VariableNotFound { .. }));
}

#[test]
fn negative_array_sizes_and_indices_are_errors() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();

    assert!(matches!(eval_err("1 0 - v valloc", &mut env),
                     RuntimeError::InvalidArithmeticOperation { .. }));

    run_program("3 v valloc", &dispatch, &mut env).unwrap();
    assert!(matches!(eval_err("7 1 0 - v setv", &mut env),
                     RuntimeError::InvalidArithmeticOperation { .. }));
}

#[test]
fn call_requires_a_stored_body() {
    let mut env = Environment::new();
    assert!(matches!(eval_err("f call", &mut env), RuntimeError::FunctionNotFound { .. }));

    env.bind("f", Value::Integer(3));
    assert!(matches!(eval_err("f call", &mut env), RuntimeError::FunctionNotFound { .. }));
}

#[test]
fn arrays_alias_on_rebind() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();

    run_program("3 v valloc", &dispatch, &mut env).unwrap();
    // Route the array through an if so the assignment sees a value, not a
    // bare name.
    run_program("v v 1 if w setq", &dispatch, &mut env).unwrap();
    run_program("9 0 w setv", &dispatch, &mut env).unwrap();

    let Some(Value::Array(cells)) = env.get("v") else {
        panic!("v is not bound to an array");
    };
    assert_eq!(cells.borrow()[0], Value::Integer(9));
}

#[test]
fn integer_overflow_is_an_error() {
    let dispatch = default_dispatch();
    let mut env = Environment::new();
    env.bind("big", Value::Integer(i64::MAX));

    let tree = parse_program("1 big +", &dispatch).unwrap();
    assert!(matches!(tree.evaluate(&mut env),
                     Err(RuntimeError::InvalidArithmeticOperation { .. })));
}
