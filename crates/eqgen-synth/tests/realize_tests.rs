use super::*;
use eqgen_model::{Accessibility, TypeDatabase, TypeId, TypeTable};

/// Renders nodes as compact C#-like strings.
struct TextFactory<'a> {
    db: &'a TypeTable,
}

impl SyntaxFactory for TextFactory<'_> {
    type Node = String;

    fn identifier(&self, name: &str) -> String {
        name.to_string()
    }
    fn this_expression(&self) -> String {
        "this".to_string()
    }
    fn base_expression(&self) -> String {
        "base".to_string()
    }
    fn member_access(&self, receiver: String, name: &str) -> String {
        format!("{receiver}.{name}")
    }
    fn true_literal(&self) -> String {
        "true".to_string()
    }
    fn false_literal(&self) -> String {
        "false".to_string()
    }
    fn null_literal(&self) -> String {
        "null".to_string()
    }
    fn is_type_expression(&self, expr: String, ty: TypeId) -> String {
        format!("{expr} is {}", self.db.type_name(ty))
    }
    fn cast_expression(&self, ty: TypeId, expr: String) -> String {
        format!("({}){expr}", self.db.type_name(ty))
    }
    fn try_cast_expression(&self, expr: String, ty: TypeId) -> String {
        format!("{expr} as {}", self.db.type_name(ty))
    }
    fn logical_not(&self, expr: String) -> String {
        format!("!({expr})")
    }
    fn logical_and(&self, left: String, right: String) -> String {
        format!("{left} && {right}")
    }
    fn value_equals(&self, left: String, right: String) -> String {
        format!("{left} == {right}")
    }
    fn reference_not_equals(&self, left: String, right: String) -> String {
        format!("{left} != {right}")
    }
    fn invocation(&self, callee: String, arguments: Vec<String>) -> String {
        format!("{callee}({})", arguments.join(", "))
    }
    fn default_equality_comparer(&self, ty: TypeId) -> String {
        format!("EqualityComparer<{}>.{DEFAULT_NAME}", self.db.type_name(ty))
    }
    fn local_declaration(&self, name: &str, initializer: String) -> String {
        format!("var {name} = {initializer};")
    }
    fn if_statement(&self, condition: String, then_branch: Vec<String>) -> String {
        format!("if ({condition}) {{ {} }}", then_branch.join(" "))
    }
    fn return_statement(&self, expr: String) -> String {
        format!("return {expr};")
    }
}

#[test]
fn test_realize_value_type() {
    let mut table = TypeTable::new();
    let point = table.add_struct("Point");
    let x = table.add_field(point, "X", TypeId::INT32);
    let y = table.add_field(point, "Y", TypeId::INT32);

    let plan = build_plan(&table, point, &[x, y]);
    let statements = realize(&plan, &TextFactory { db: &table });
    assert_eq!(
        statements,
        vec![
            "if (!(obj is Point)) { return false; }",
            "var point = (Point)obj;",
            "return this.X == point.X && this.Y == point.Y;",
        ]
    );
}

#[test]
fn test_realize_reference_type() {
    let mut table = TypeTable::new();
    let address = table.add_class("Address");
    let customer = table.add_class("Customer");
    let id = table.add_property(customer, "Id", TypeId::INT32);
    let addr = table.add_property(customer, "Address", address);

    let plan = build_plan(&table, customer, &[id, addr]);
    let statements = realize(&plan, &TextFactory { db: &table });
    assert_eq!(
        statements,
        vec![
            "var customer = obj as Customer;",
            "return customer != null && this.Id == customer.Id && \
             EqualityComparer<Address>.Default.Equals(this.Address, customer.Address);",
        ]
    );
}

#[test]
fn test_realize_base_equals_and_self_equatable() {
    let mut table = TypeTable::new();
    let entity = table.add_class("Entity");
    table.add_equals_override(entity);
    let money = table.add_struct("Money");
    let equatable = table.equatable(money).expect("IEquatable<T> is available");
    table.add_interface_impl(money, equatable);
    let invoice = table.add_class("Invoice");
    table.set_base(invoice, entity);
    let total = table.add_property(invoice, "Total", money);

    let plan = build_plan(&table, invoice, &[total]);
    let statements = realize(&plan, &TextFactory { db: &table });
    assert_eq!(
        statements.last().map(String::as_str),
        Some("return invoice != null && base.Equals(obj) && this.Total.Equals(invoice.Total);")
    );
}

#[test]
fn test_realize_empty_conjunction_returns_true() {
    let mut table = TypeTable::new();
    let marker = table.add_struct("Marker");

    let plan = build_plan(&table, marker, &[]);
    let statements = realize(&plan, &TextFactory { db: &table });
    assert_eq!(statements.last().map(String::as_str), Some("return true;"));
}

#[test]
fn test_value_type_local_is_used_in_comparisons() {
    let mut table = TypeTable::new();
    let id = table.add_struct("CustomerId");
    let value = table.add_field(id, "Value", TypeId::INT64);

    let plan = build_plan(&table, id, &[value]);
    let statements = realize(&plan, &TextFactory { db: &table });
    assert_eq!(statements[1], "var id = (CustomerId)obj;");
    assert_eq!(statements[2], "return this.Value == id.Value;");
}

#[test]
fn test_create_equals_method_shape() {
    let mut table = TypeTable::new();
    let point = table.add_struct("Point");
    let x = table.add_field(point, "X", TypeId::DOUBLE);

    let factory = TextFactory { db: &table };
    let method = create_equals_method(&table, &factory, point, &[x]);

    assert_eq!(method.accessibility, Accessibility::Public);
    assert!(method.is_override);
    assert_eq!(method.name, EQUALS_NAME);
    assert_eq!(method.return_type, table.boolean_type());
    assert_eq!(
        method.parameters,
        vec![Parameter {
            name: OBJ_NAME,
            ty: table.object_type(),
        }]
    );
    assert_eq!(method.statements.len(), 3);
    assert_eq!(method.plan.local_name, "point");
    assert!(method.plan.has_instance_guard());
}
