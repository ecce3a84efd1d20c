use crate::parser::tests::{parse, parse_with_diagnostics};
use crate::parser::{Declaration, Expr, Statement};

/// Parses `expr_src` as the sole expression statement of a method body and returns it.
fn expr(expr_src: &str) -> Expr {
    let source = format!("class C {{ void M() {{ {expr_src}; }} }}");
    let unit = parse(&source);
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let Declaration::Method(method) = class.members().next().expect("method") else {
        panic!("expected method")
    };
    let block = method.body().into_value().expect("method body");
    let Statement::Expression(stmt) = block.statements().next().expect("statement") else {
        panic!("expected expression statement")
    };
    stmt.expression().expect("expression")
}

#[test]
fn precedence_orders_multiplication_above_addition() {
    let e = expr("a + b * c");
    let Expr::Binary(add) = &e else { panic!("expected top-level binary") };
    assert_eq!(add.operator().unwrap().text(), "+");
    assert!(matches!(add.left().unwrap(), Expr::Identifier(_)));
    let Expr::Binary(mul) = add.right().unwrap() else {
        panic!("expected rhs to be the multiplication")
    };
    assert_eq!(mul.operator().unwrap().text(), "*");
}

#[test]
fn additive_chain_is_left_associative() {
    // `a - b - c` must parse as `(a - b) - c`, not `a - (b - c)`.
    let e = expr("a - b - c");
    let Expr::Binary(outer) = &e else { panic!("expected binary") };
    assert_eq!(outer.operator().unwrap().text(), "-");
    assert!(matches!(outer.right().unwrap(), Expr::Identifier(_)));
    let Expr::Binary(inner) = outer.left().unwrap() else {
        panic!("expected lhs to be the nested subtraction")
    };
    assert_eq!(inner.operator().unwrap().text(), "-");
}

#[test]
fn assignment_is_right_associative() {
    let e = expr("a = b = c");
    let Expr::Assignment(outer) = &e else { panic!("expected assignment") };
    assert_eq!(outer.operator().unwrap().text(), "=");
    let Expr::Assignment(inner) = outer.value().unwrap() else {
        panic!("expected rhs to be the nested assignment")
    };
    assert_eq!(inner.operator().unwrap().text(), "=");
}

#[test]
fn conditional_expression() {
    let e = expr("flag ? 1 : 2");
    let Expr::Conditional(cond) = &e else { panic!("expected conditional") };
    assert!(matches!(cond.condition().unwrap(), Expr::Identifier(_)));
    assert!(matches!(cond.when_true().unwrap(), Expr::Literal(_)));
    assert!(matches!(cond.when_false().unwrap(), Expr::Literal(_)));
}

#[test]
fn is_and_as_expressions() {
    let e = expr("obj is string");
    assert!(matches!(e, Expr::Is(_)));
    let e = expr("obj as string");
    assert!(matches!(e, Expr::As(_)));
}

#[test]
fn parenthesized_expression_is_not_a_cast() {
    let e = expr("(a + b)");
    let Expr::Parenthesized(paren) = &e else { panic!("expected parenthesized expression") };
    assert!(matches!(paren.inner().unwrap(), Expr::Binary(_)));
}

#[test]
fn cast_expression_with_predefined_type() {
    let e = expr("(int)value");
    let Expr::Cast(cast) = &e else { panic!("expected cast, got {e:?}") };
    assert!(cast.ty().is_some());
    assert!(matches!(cast.operand().unwrap(), Expr::Identifier(_)));
}

#[test]
fn cast_requires_a_unary_expression_after_the_parens() {
    // `(a)` followed by a binary operator is a parenthesized expression, not a cast:
    // `(a) + b` means `(a) + b`, not casting to type `a`.
    let e = expr("(a) + b");
    assert!(matches!(e, Expr::Binary(_)));
}

#[test]
fn object_creation_with_arguments() {
    let e = expr("new Widget(1, 2)");
    let Expr::ObjectCreation(creation) = &e else { panic!("expected object creation") };
    assert!(creation.ty().is_some());
    let args = creation.arguments().into_value().expect("argument list");
    assert_eq!(args.arguments().len(), 2);
}

#[test]
fn array_creation_with_initializer() {
    let e = expr("new int[] { 1, 2, 3 }");
    let Expr::ArrayCreation(creation) = &e else { panic!("expected array creation") };
    assert!(creation.ty().is_some());
    let init = creation.initializer().into_value().expect("array initializer");
    assert_eq!(init.elements().len(), 3);
}

#[test]
fn typeof_sizeof_and_stackalloc() {
    assert!(matches!(expr("typeof(int)"), Expr::TypeOf(_)));
    assert!(matches!(expr("sizeof(int)"), Expr::SizeOf(_)));
    assert!(matches!(expr("stackalloc int[8]"), Expr::StackAlloc(_)));
}

#[test]
fn checked_and_unchecked_expressions() {
    assert!(matches!(expr("checked(a + b)"), Expr::Checked(_)));
    assert!(matches!(expr("unchecked(a + b)"), Expr::Unchecked(_)));
}

#[test]
fn postfix_member_invocation_and_element_access_chain() {
    let e = expr("a.b(1)[2]");
    let Expr::ElementAccess(access) = &e else { panic!("expected element access") };
    let Expr::Invocation(invocation) = access.target().unwrap() else {
        panic!("expected invocation as target")
    };
    let Expr::MemberAccess(member) = invocation.callee().unwrap() else {
        panic!("expected member access as callee")
    };
    assert_eq!(member.name().unwrap().text(), "b");
    assert!(matches!(member.target().unwrap(), Expr::Identifier(_)));
}

#[test]
fn prefix_and_postfix_increment() {
    let e = expr("++a");
    assert!(matches!(e, Expr::PrefixUnary(_)));
    let e = expr("a++");
    assert!(matches!(e, Expr::PostfixUnary(_)));
}

#[test]
fn pointer_member_access() {
    let e = expr("p->field");
    let Expr::PointerMemberAccess(access) = &e else { panic!("expected pointer member access") };
    assert_eq!(access.name().unwrap().text(), "field");
}

#[test]
fn missing_operand_reports_a_diagnostic_but_still_produces_a_tree() {
    let source = "class C { void M() { a + ; } }";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}
