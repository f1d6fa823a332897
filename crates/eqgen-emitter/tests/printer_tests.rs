use super::*;

#[test]
fn test_emit_literals() {
    assert_eq!(CsPrinter::emit_to_string(&CsNode::BooleanLiteral(true)), "true");
    assert_eq!(CsPrinter::emit_to_string(&CsNode::BooleanLiteral(false)), "false");
    assert_eq!(CsPrinter::emit_to_string(&CsNode::NullLiteral), "null");
}

#[test]
fn test_emit_identifiers_escape_keywords() {
    assert_eq!(CsPrinter::emit_to_string(&CsNode::id("point")), "point");
    assert_eq!(CsPrinter::emit_to_string(&CsNode::id("class")), "@class");
    assert_eq!(CsPrinter::emit_to_string(&CsNode::id("var")), "var");
    // Generic type arguments are never escaped.
    assert_eq!(
        CsPrinter::emit_to_string(&CsNode::generic("List", vec!["int".to_string()])),
        "List<int>"
    );
}

#[test]
fn test_keyword_table() {
    assert!(is_reserved_keyword("object"));
    assert!(is_reserved_keyword("this"));
    assert!(!is_reserved_keyword("value"));
    assert!(!is_reserved_keyword("Class"));
    assert_eq!(escape_identifier("event"), "@event");
    assert_eq!(escape_identifier("evt"), "evt");
}

#[test]
fn test_emit_this_member_access_is_simplified() {
    let access = CsNode::prop(CsNode::This, "X");
    assert_eq!(CsPrinter::emit_to_string(&access), "X");

    let mut printer = CsPrinter::with_options(EmitOptions { qualify_this: true });
    printer.emit(&access);
    assert_eq!(printer.finish(), "this.X");
}

#[test]
fn test_emit_member_access_on_other_receivers() {
    let access = CsNode::prop(CsNode::id("point"), "X");
    assert_eq!(CsPrinter::emit_to_string(&access), "point.X");

    let base_call = CsNode::call(CsNode::prop(CsNode::Base, "Equals"), vec![CsNode::id("obj")]);
    assert_eq!(CsPrinter::emit_to_string(&base_call), "base.Equals(obj)");

    let keyword_member = CsNode::prop(CsNode::id("other"), "event");
    assert_eq!(CsPrinter::emit_to_string(&keyword_member), "other.@event");
}

#[test]
fn test_emit_generic_comparer() {
    let comparer = CsNode::prop(
        CsNode::generic("EqualityComparer", vec!["Address".to_string()]),
        "Default",
    );
    let call = CsNode::call(
        CsNode::prop(comparer, "Equals"),
        vec![
            CsNode::prop(CsNode::This, "Address"),
            CsNode::prop(CsNode::id("customer"), "Address"),
        ],
    );
    assert_eq!(
        CsPrinter::emit_to_string(&call),
        "EqualityComparer<Address>.Default.Equals(Address, customer.Address)"
    );
}

#[test]
fn test_emit_type_tests_and_casts() {
    let guard = CsNode::not(CsNode::is_type(CsNode::id("obj"), "Point"));
    assert_eq!(CsPrinter::emit_to_string(&guard), "!(obj is Point)");

    let cast = CsNode::cast("Point", CsNode::id("obj"));
    assert_eq!(CsPrinter::emit_to_string(&cast), "(Point)obj");

    let try_cast = CsNode::as_type(CsNode::id("obj"), "Customer");
    assert_eq!(CsPrinter::emit_to_string(&try_cast), "obj as Customer");

    let cast_then_access = CsNode::prop(CsNode::cast("Point", CsNode::id("obj")), "X");
    assert_eq!(CsPrinter::emit_to_string(&cast_then_access), "((Point)obj).X");
}

#[test]
fn test_emit_binary_and_conjunction_inline() {
    let eq = CsNode::eq(CsNode::prop(CsNode::This, "X"), CsNode::prop(CsNode::id("p"), "X"));
    let ne = CsNode::ne(CsNode::id("p"), CsNode::NullLiteral);
    let and = CsNode::and(ne, eq);
    assert_eq!(CsPrinter::emit_to_string(&and), "p != null && X == p.X");

    let nested = CsNode::eq(
        CsNode::and(CsNode::id("a"), CsNode::id("b")),
        CsNode::BooleanLiteral(true),
    );
    assert_eq!(CsPrinter::emit_to_string(&nested), "(a && b) == true");
}

#[test]
fn test_conjuncts_flatten_any_nesting() {
    let right_nested = CsNode::and(
        CsNode::id("a"),
        CsNode::and(CsNode::id("b"), CsNode::id("c")),
    );
    let names: Vec<_> = right_nested
        .conjuncts()
        .into_iter()
        .map(CsPrinter::emit_to_string)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_emit_statements() {
    let decl = CsNode::var_decl("point", CsNode::cast("Point", CsNode::id("obj")));
    assert_eq!(CsPrinter::emit_to_string(&decl), "var point = (Point)obj;");

    assert_eq!(
        CsPrinter::emit_to_string(&CsNode::ret(CsNode::BooleanLiteral(true))),
        "return true;"
    );

    let guard = CsNode::if_stmt(
        CsNode::not(CsNode::is_type(CsNode::id("obj"), "Point")),
        vec![CsNode::ret(CsNode::BooleanLiteral(false))],
    );
    assert_eq!(
        CsPrinter::emit_to_string(&guard),
        "if (!(obj is Point))\n{\n    return false;\n}"
    );
}

#[test]
fn test_emit_wrapped_return() {
    let conjunction = CsNode::and(
        CsNode::and(
            CsNode::ne(CsNode::id("customer"), CsNode::NullLiteral),
            CsNode::eq(
                CsNode::prop(CsNode::This, "Id"),
                CsNode::prop(CsNode::id("customer"), "Id"),
            ),
        ),
        CsNode::eq(
            CsNode::prop(CsNode::This, "Name"),
            CsNode::prop(CsNode::id("customer"), "Name"),
        ),
    );
    assert_eq!(
        CsPrinter::emit_to_string(&CsNode::ret(conjunction)),
        "return customer != null &&\n       Id == customer.Id &&\n       Name == customer.Name;"
    );
}

#[test]
fn test_local_declaration_shadows_member() {
    let mut printer = CsPrinter::new();
    printer.emit(&CsNode::var_decl("id", CsNode::cast("Id", CsNode::id("obj"))));
    printer.emit(&CsNode::prop(CsNode::This, "id"));
    printer.emit(&CsNode::prop(CsNode::This, "Value"));
    assert_eq!(printer.finish(), "var id = (Id)obj;this.idValue");
}
