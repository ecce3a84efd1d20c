use crate::parser::tests::{parse, parse_with_diagnostics};
use crate::parser::{Declaration, Expr, SyntaxKind, Statement};

/// Parses `body_src` as a method body and returns its statements.
fn statements(body_src: &str) -> Vec<Statement> {
    let source = format!("class C {{ void M() {{ {body_src} }} }}");
    let unit = parse(&source);
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let Declaration::Method(method) = class.members().next().expect("method") else {
        panic!("expected method")
    };
    let block = method.body().into_value().expect("method body");
    block.statements().collect()
}

fn single(body_src: &str) -> Statement {
    let mut stmts = statements(body_src);
    assert_eq!(stmts.len(), 1, "expected exactly one statement, got {stmts:?}");
    stmts.remove(0)
}

#[test]
fn block_nests_statements() {
    let stmt = single("{ int x; int y; }");
    let Statement::Block(block) = &stmt else { panic!("expected block") };
    assert_eq!(block.statements().count(), 2);
}

#[test]
fn if_else() {
    let stmt = single("if (a) b(); else c();");
    let Statement::If(if_stmt) = &stmt else { panic!("expected if") };
    assert!(matches!(if_stmt.condition().unwrap(), Expr::Identifier(_)));
    assert!(matches!(if_stmt.then_branch().unwrap(), Statement::Expression(_)));
    assert!(if_stmt.else_clause().is_present());
}

#[test]
fn if_without_else() {
    let stmt = single("if (a) b();");
    let Statement::If(if_stmt) = &stmt else { panic!("expected if") };
    assert!(!if_stmt.else_clause().is_present());
}

#[test]
fn switch_with_case_and_default() {
    let stmt = single("switch (x) { case 1: a(); break; default: b(); break; }");
    let Statement::Switch(switch) = &stmt else { panic!("expected switch") };
    assert!(matches!(switch.expression().unwrap(), Expr::Identifier(_)));
    let sections: Vec<_> = switch.sections().collect();
    assert_eq!(sections.len(), 2);
    for section in &sections {
        assert_eq!(section.statements().count(), 2);
    }
    let first_kinds: Vec<_> = sections[0]
        .as_cst()
        .children()
        .map(|n| n.kind())
        .take(1)
        .collect();
    assert_eq!(first_kinds, vec![SyntaxKind::CaseSwitchLabel]);
    let second_kinds: Vec<_> = sections[1]
        .as_cst()
        .children()
        .map(|n| n.kind())
        .take(1)
        .collect();
    assert_eq!(second_kinds, vec![SyntaxKind::DefaultSwitchLabel]);
}

#[test]
fn for_loop_with_declaration_initializer() {
    let stmt = single("for (int i = 0; i < 10; i++) { }");
    let Statement::For(for_stmt) = &stmt else { panic!("expected for") };
    let init = for_stmt.initializer().into_value().expect("initializer");
    assert!(init.declaration().is_present());
    assert!(for_stmt.condition().is_present());
    assert_eq!(for_stmt.incrementors().len(), 1);
    assert!(matches!(for_stmt.body().unwrap(), Statement::Block(_)));
}

#[test]
fn for_loop_with_expression_initializer() {
    let stmt = single("for (i = 0; ; i++) { }");
    let Statement::For(for_stmt) = &stmt else { panic!("expected for") };
    let init = for_stmt.initializer().into_value().expect("initializer");
    assert!(!init.declaration().is_present());
    assert_eq!(init.expressions().len(), 1);
    assert!(!for_stmt.condition().is_present());
}

#[test]
fn foreach_loop() {
    let stmt = single("foreach (int item in items) { }");
    let Statement::ForEach(foreach) = &stmt else { panic!("expected foreach") };
    assert!(foreach.ty().is_some());
    assert_eq!(foreach.name().unwrap().text(), "item");
    assert!(matches!(foreach.collection().unwrap(), Expr::Identifier(_)));
}

#[test]
fn while_and_do_while() {
    let stmt = single("while (a) { b(); }");
    assert!(matches!(stmt, Statement::While(_)));
    let stmt = single("do { b(); } while (a);");
    let Statement::Do(do_stmt) = &stmt else { panic!("expected do-while") };
    assert!(matches!(do_stmt.body().unwrap(), Statement::Block(_)));
    assert!(matches!(do_stmt.condition().unwrap(), Expr::Identifier(_)));
}

#[test]
fn break_continue_and_goto() {
    assert!(matches!(single("break;"), Statement::Break(_)));
    assert!(matches!(single("continue;"), Statement::Continue(_)));
    let stmt = single("goto done;");
    let Statement::Goto(goto) = &stmt else { panic!("expected goto") };
    assert_eq!(goto.label().unwrap().text(), "done");
}

#[test]
fn goto_case_and_goto_default() {
    let stmt = single("goto case 1;");
    let Statement::GotoCase(goto_case) = &stmt else { panic!("expected goto case") };
    assert!(matches!(goto_case.value().unwrap(), Expr::Literal(_)));
    assert!(matches!(single("goto default;"), Statement::GotoDefault(_)));
}

#[test]
fn return_with_and_without_value() {
    let stmt = single("return 1;");
    let Statement::Return(ret) = &stmt else { panic!("expected return") };
    assert!(ret.value().is_present());
    let stmt = single("return;");
    let Statement::Return(ret) = &stmt else { panic!("expected return") };
    assert!(!ret.value().is_present());
}

#[test]
fn throw_with_and_without_value() {
    let stmt = single("throw ex;");
    let Statement::Throw(throw) = &stmt else { panic!("expected throw") };
    assert!(throw.value().is_present());
    let stmt = single("throw;");
    let Statement::Throw(throw) = &stmt else { panic!("expected throw") };
    assert!(!throw.value().is_present());
}

#[test]
fn try_catch_finally() {
    let stmt = single(
        "try { risky(); } catch (IOException e) { handle(e); } catch { } finally { cleanup(); }",
    );
    let Statement::Try(try_stmt) = &stmt else { panic!("expected try") };
    assert_eq!(try_stmt.block().unwrap().statements().count(), 1);
    let catches: Vec<_> = try_stmt.catch_clauses().collect();
    assert_eq!(catches.len(), 2);
    let decl = catches[0].declaration().into_value().expect("typed catch declaration");
    assert!(decl.ty().is_some());
    assert_eq!(decl.name().value().unwrap().text(), "e");
    assert!(!catches[1].declaration().is_present());
    assert!(try_stmt.finally_clause().is_present());
}

#[test]
fn checked_and_unchecked_statements() {
    assert!(matches!(single("checked { a(); }"), Statement::Checked(_)));
    assert!(matches!(single("unchecked { a(); }"), Statement::Unchecked(_)));
}

#[test]
fn lock_statement() {
    let stmt = single("lock (monitor) { a(); }");
    let Statement::Lock(lock) = &stmt else { panic!("expected lock") };
    assert!(matches!(lock.expression().unwrap(), Expr::Identifier(_)));
}

#[test]
fn using_statement_with_declaration() {
    let stmt = single("using (var f = Open()) { read(f); }");
    let Statement::Using(using) = &stmt else { panic!("expected using") };
    let resource = using.resource().into_value().expect("using resource");
    assert!(resource.declaration().is_present());
}

#[test]
fn fixed_statement() {
    let stmt = single("fixed (int* p = &value) { use(p); }");
    let Statement::Fixed(fixed) = &stmt else { panic!("expected fixed") };
    assert!(fixed.declaration().is_some());
}

#[test]
fn unsafe_block() {
    assert!(matches!(single("unsafe { int* p; }"), Statement::Unsafe(_)));
}

#[test]
fn labeled_statement() {
    let stmt = single("start: a();");
    let Statement::Labeled(labeled) = &stmt else { panic!("expected labeled statement") };
    assert_eq!(labeled.label().unwrap().text(), "start");
    assert!(matches!(labeled.statement().unwrap(), Statement::Expression(_)));
}

#[test]
fn local_declaration_with_multiple_declarators() {
    let stmt = single("int a = 1, b = 2;");
    let Statement::LocalDeclaration(decl) = &stmt else {
        panic!("expected local declaration")
    };
    let declaration = decl.declaration().expect("variable declaration");
    assert_eq!(declaration.declarators().len(), 2);
}

#[test]
fn const_local_declaration() {
    let stmts = statements("const int x = 1;");
    assert_eq!(stmts.len(), 1);
    assert!(matches!(stmts[0], Statement::LocalDeclaration(_)));
}

#[test]
fn empty_statement() {
    assert!(matches!(single(";"), Statement::Empty(_)));
}

#[test]
fn unterminated_block_reports_a_diagnostic() {
    let source = "class C { void M() { if (a) { } ";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}
