use super::*;
use eqgen_model::TypeTable;

#[test]
fn test_emit_point_struct() {
    let mut table = TypeTable::new();
    let point = table.add_struct("Point");
    let x = table.add_field(point, "X", TypeId::INT32);
    let y = table.add_field(point, "Y", TypeId::INT32);

    let text = emit_equals(&table, point, &[x, y], EmitOptions::default());
    let expected = "\
public override bool Equals(object obj)
{
    if (!(obj is Point))
    {
        return false;
    }
    var point = (Point)obj;
    return X == point.X &&
           Y == point.Y;
}";
    assert_eq!(text, expected);
}

#[test]
fn test_emit_customer_class() {
    let mut table = TypeTable::new();
    let address = table.add_class("Address");
    let customer = table.add_class("Customer");
    let id = table.add_property(customer, "Id", TypeId::INT32);
    let addr = table.add_property(customer, "Address", address);

    let text = emit_equals(&table, customer, &[id, addr], EmitOptions::default());
    let expected = "\
public override bool Equals(object obj)
{
    var customer = obj as Customer;
    return customer != null &&
           Id == customer.Id &&
           EqualityComparer<Address>.Default.Equals(Address, customer.Address);
}";
    assert_eq!(text, expected);
}

#[test]
fn test_emit_qualified_this() {
    let mut table = TypeTable::new();
    let customer = table.add_class("Customer");
    let id = table.add_property(customer, "Id", TypeId::INT32);

    let text = emit_equals(&table, customer, &[id], EmitOptions { qualify_this: true });
    assert!(text.contains("this.Id == customer.Id;"), "{text}");
}

#[test]
fn test_emit_base_equals_and_self_equatable() {
    let mut table = TypeTable::new();
    let entity = table.add_class("Entity");
    table.add_equals_override(entity);
    let money = table.add_struct("Money");
    let equatable = table.equatable(money).expect("IEquatable<T> is available");
    table.add_interface_impl(money, equatable);
    let invoice = table.add_class("Invoice");
    table.set_base(invoice, entity);
    let total = table.add_property(invoice, "Total", money);
    let maybe_date = table.nullable(TypeId::DATE_TIME);
    let due = table.add_property(invoice, "Due", maybe_date);

    let text = emit_equals(&table, invoice, &[total, due], EmitOptions::default());
    let expected = "\
public override bool Equals(object obj)
{
    var invoice = obj as Invoice;
    return invoice != null &&
           base.Equals(obj) &&
           Total.Equals(invoice.Total) &&
           Due == invoice.Due;
}";
    assert_eq!(text, expected);
}

#[test]
fn test_emit_empty_value_type_returns_true() {
    let mut table = TypeTable::new();
    let marker = table.add_struct("Marker");

    let text = emit_equals(&table, marker, &[], EmitOptions::default());
    assert!(text.ends_with("    var marker = (Marker)obj;\n    return true;\n}"), "{text}");
}

#[test]
fn test_emit_escapes_keyword_local() {
    let mut table = TypeTable::new();
    let class = table.add_class("Class");
    let name = table.add_property(class, "Name", TypeId::STRING);

    let text = emit_equals(&table, class, &[name], EmitOptions::default());
    assert!(text.contains("var @class = obj as Class;"), "{text}");
    assert!(text.contains("Name == @class.Name;"), "{text}");
}

#[test]
fn test_emit_keeps_this_for_shadowed_members() {
    let mut table = TypeTable::new();
    let wrapper = table.add_class("Wrapper");
    let obj = table.add_field(wrapper, "obj", TypeId::OBJECT);
    let inner = table.add_field(wrapper, "wrapper", TypeId::STRING);

    let text = emit_equals(&table, wrapper, &[obj, inner], EmitOptions::default());
    assert!(
        text.contains("EqualityComparer<object>.Default.Equals(this.obj, wrapper.obj)"),
        "{text}"
    );
    assert!(text.contains("this.wrapper == wrapper.wrapper;"), "{text}");
}

#[test]
fn test_synthesize_equals_exposes_plan() {
    let mut table = TypeTable::new();
    let point = table.add_struct("Point");
    let x = table.add_field(point, "X", TypeId::INT32);

    let method = synthesize_equals(&table, point, &[x]);
    assert_eq!(method.plan.local_name, "point");
    assert_eq!(
        method.statements[1],
        CsNode::var_decl("point", CsNode::cast("Point", CsNode::id("obj")))
    );
}

#[test]
fn test_emit_nullable_reference_members_use_default_comparer() {
    let table = TypeTable::from_json(
        r#"{ "types": [
            { "name": "Customer", "kind": "class", "members": [
                { "name": "Home", "kind": "property", "type": "Address?" },
                { "name": "Nick", "kind": "property", "type": "string?" }
            ] },
            { "name": "Address", "kind": "class" }
        ] }"#,
    )
    .expect("model should load");
    let customer = table.lookup("Customer").expect("Customer declared");
    let members = table.declared_members(customer).to_vec();

    let text = emit_equals(&table, customer, &members, EmitOptions::default());
    assert!(
        text.contains("EqualityComparer<Address>.Default.Equals(Home, customer.Home)"),
        "{text}"
    );
    assert!(text.contains("Nick == customer.Nick;"), "{text}");
}
