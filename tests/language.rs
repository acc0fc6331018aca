use std::fs;

use paint::run;

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn eval_to(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    eval_to("let x = 1 + 2 * 3; x;", "7");
    eval_to("10 - 3 - 2;", "5");
    eval_to("(1 + 2) * 3;", "9");
    eval_to("7 % 3;", "1");
}

#[test]
fn int_float_widening() {
    eval_to("let y = 1 + 2.0; y;", "3.000000");
    eval_to("2.5 * 2;", "5.000000");
    eval_to("1 + 1;", "2");
}

#[test]
fn multiplicative_operators_group_to_the_right() {
    // `a / b / c` parses as `a / (b / c)`.
    eval_to("10.0 / 2.0 / 5.0;", "25.000000");
    // In integers the right-hand division truncates to zero first.
    assert_failure("10 / 2 / 5;");
}

#[test]
fn modulo_truncates_to_integers() {
    eval_to("7.9 % 3;", "1");
    eval_to("7.5 % 2;", "1");
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_failure("let x = 10 / 0;");
    assert_failure("10.0 / 0.0;");
    assert_failure("5 % 0;");
}

#[test]
fn string_concatenation() {
    eval_to("let s = \"foo\" + \"bar\"; s;", "foobar");
    assert_failure("\"foo\" - \"bar\";");
}

#[test]
fn null_operands_resolve_to_the_other_side() {
    eval_to("null + 5;", "5");
    eval_to("let x = null + 5; x;", "5");
    eval_to("5 - null;", "5");
}

#[test]
fn invalid_operands_are_errors() {
    assert_failure("1 + \"a\";");
    assert_failure("true + 1;");
}

#[test]
fn equality_compares_canonical_text() {
    eval_to("1 == 1;", "true");
    eval_to("1 == 1.0;", "false");
    eval_to("\"a\" == \"a\";", "true");
    eval_to("true == true;", "true");
    eval_to("1 != 2;", "true");
}

#[test]
fn ordering_comparisons_read_integers() {
    eval_to("3 > 2;", "true");
    eval_to("2 >= 2;", "true");
    eval_to("2 < 1;", "false");
    eval_to("2 <= 2;", "true");
    // Floats truncate toward zero before comparing.
    eval_to("3.9 > 3;", "false");
    assert_failure("true > 1;");
}

#[test]
fn logical_connectives() {
    eval_to("1 < 2 && 3 < 4;", "true");
    eval_to("true && false;", "false");
    eval_to("false || true;", "true");
    eval_to("1 < 2 || 5 < 4;", "true");
    assert_failure("1 && true;");
}

#[test]
fn bang_negates_booleans() {
    eval_to("!false;", "true");
    eval_to("!true;", "false");
}

#[test]
fn increments_and_decrements() {
    eval_to("let i = 0; i++; i;", "1");
    eval_to("let i = 5; i--; i;", "4");
    eval_to("let f = 1.5; f++; f;", "2.500000");
}

#[test]
fn declarations_and_constants() {
    eval_to("let x; x;", "null");
    eval_to("const c = 5; c;", "5");
    assert_failure("const c = 5; c = 6;");
    assert_failure("const c;");
}

#[test]
fn redeclaration_and_unknown_names_are_errors() {
    assert_failure("let a = 1; let a = 2;");
    assert_failure("b;");
    assert_failure("b = 1;");
}

#[test]
fn blocks_truncate_their_scope() {
    eval_to("let a = 1; if (a == 1) { let b = 2; } a;", "1");
    assert_failure("let a = 1; if (a == 1) { let b = 2; } b;");
}

#[test]
fn conditional_blocks_pick_the_first_true_arm() {
    let script = "let x = VAL;\n\
                  let r = 0;\n\
                  if (x > 10) { r = 1; }\n\
                  elif (x == 10) { r = 2; }\n\
                  else { r = 3; }\n\
                  r;";

    eval_to(&script.replace("VAL", "99"), "1");
    eval_to(&script.replace("VAL", "10"), "2");
    eval_to(&script.replace("VAL", "0"), "3");
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("if (1) { }");
    assert_failure("while (1) { }");
}

#[test]
fn while_loops() {
    eval_to("let s = 0; let i = 0; while (i < 5) { s = s + i; i = i + 1; } s;",
            "10");
}

#[test]
fn for_loops() {
    eval_to("let total = 0; for (i = 1, i <= 4, i++) { total = total + i; } total;",
            "10");
}

#[test]
fn for_loop_variable_scoping() {
    // A loop-introduced variable vanishes with the loop.
    assert_failure("for (i = 0, i < 3, i++) { } i;");
    // A pre-existing variable survives and is re-assigned its initial
    // value after the loop.
    eval_to("let i = 42; for (i = 0, i < 3, i++) { } i;", "0");
}

#[test]
fn functions_and_returns() {
    eval_to("fn add(a, b) { return a + b; } add(2, 5);", "7");
    // Without a return, the body's last value is the result.
    eval_to("fn f() { 42; } f();", "42");
    eval_to("return 5; 99;", "5");
}

#[test]
fn closures_mutate_their_declaring_scope() {
    eval_to("let n = 0; fn bump() { n = n + 1; } bump(); bump(); n;", "2");
}

#[test]
fn recursion() {
    let script = "fn fact(k) {\n\
                      if (k == 0) { return 1; }\n\
                      return k * fact(k - 1);\n\
                  }\n\
                  fact(5);";

    eval_to(script, "120");
}

#[test]
fn nested_functions_and_call_scope_discipline() {
    eval_to("fn outer() { let local = 5; fn inner() { return local + 1; } return inner(); } outer();",
            "6");
    // Body-level locals are truncated away when the call returns.
    assert_failure("fn outer() { let local = 5; return local; } outer(); local;");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("fn add(a, b) { return a + b; } add(2);");
    assert_failure("fn add(a, b) { return a + b; } add(1, 2, 3);");
}

#[test]
fn only_functions_are_callable() {
    assert_failure("let v = 3; v();");
}

#[test]
fn member_access_chains() {
    eval_to("let o = { a = { b = 42 } }; o.a.b;", "42");
    eval_to("let o = { a = 1, c = 2 }; o.c;", "2");
    assert_failure("let o = { a = 1 }; o.x;");
}

#[test]
fn shorthand_properties_reuse_bindings() {
    eval_to("let b = 7; let o = { b }; o.b;", "7");
    assert_failure("let o = { q }; o.q;");
}

#[test]
fn object_literals_declare_their_properties() {
    // Referencing the object itself evaluates the literal, which declares
    // its properties into the surrounding scope and yields null.
    eval_to("let o = { a = 1 }; o; a;", "1");
}

#[test]
fn print_is_variadic_and_returns_null() {
    assert_success("print(\"hello\", 1, null);");
    eval_to("let r = print(\"x\"); r;", "null");
}

#[test]
fn comments_are_skipped() {
    eval_to("# leading comment\nlet x = 1; x; # trailing comment", "1");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.paint").unwrap();
    assert_success(&contents);
}
