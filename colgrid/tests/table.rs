use colgrid::{
    ColumnDefaults, ColumnId, ColumnOrder, ColumnSpec, Person, Status, Table, TableError,
    TableLayout, person_columns,
};

fn person(first: &str, age: u32) -> Person {
    Person {
        first_name: first.to_string(),
        last_name: "walnut".to_string(),
        age,
        visits: 12,
        progress: 40,
        status: Status::Single,
    }
}

fn people_table() -> Table<Person> {
    Table::new(
        person_columns(),
        vec![person("ember", 21), person("falcon", 3)],
    )
    .unwrap()
}

fn id(s: &str) -> ColumnId {
    ColumnId::from(s)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_rejects_empty_columns() {
    let err = Table::<Person>::new(Vec::new(), Vec::new()).unwrap_err();
    assert_eq!(err, TableError::NoColumns);
}

#[test]
fn test_rejects_duplicate_columns() {
    let columns = vec![
        ColumnSpec::new("Age", "age"),
        ColumnSpec::new("Age again", "age"),
    ];
    let err = Table::<Person>::new(columns, Vec::new()).unwrap_err();
    assert_eq!(err, TableError::DuplicateColumn(id("age")));
}

#[test]
fn test_rejects_inverted_bounds() {
    let columns = vec![ColumnSpec::new("Age", "age").min_width(30).max_width(10)];
    let err = Table::<Person>::new(columns, Vec::new()).unwrap_err();
    assert_eq!(
        err,
        TableError::InvalidWidthBounds {
            id: id("age"),
            min: 30,
            max: 10
        }
    );
}

// ============================================================================
// Widths
// ============================================================================

#[test]
fn test_widths_clamp_to_bounds() {
    let t = people_table();

    // Spec widths below the default min display at the min
    assert_eq!(t.column_width(&id("age")), Some(15));
    assert_eq!(t.column_width(&id("visits")), Some(15));
    assert_eq!(t.column_width(&id("firstName")), Some(15));
    assert_eq!(t.column_width(&id("nope")), None);
    assert_eq!(t.total_width(), 6 * 15);
}

#[test]
fn test_custom_defaults() {
    let defaults = ColumnDefaults {
        min_width: 4,
        width: 10,
        max_width: 20,
    };
    let t = Table::<Person>::with_defaults(person_columns(), Vec::new(), defaults).unwrap();
    assert_eq!(t.column_width(&id("age")), Some(5));
    assert_eq!(t.column_width(&id("status")), Some(10));
}

#[test]
fn test_resize_applies_delta_from_start() {
    let mut t = people_table();

    t.begin_resize(&id("status"), 40).unwrap();
    assert!(t.resizing().is_resizing());
    assert_eq!(t.resize_to(45), Some(20));
    assert_eq!(t.resize_to(43), Some(18));
    t.end_resize();

    assert!(!t.resizing().is_resizing());
    assert_eq!(t.column_width(&id("status")), Some(18));
    assert_eq!(t.resizing().column_widths.get(&id("status")), Some(&18));
}

#[test]
fn test_resize_clamps_displayed_width() {
    let mut t = people_table();

    t.begin_resize(&id("status"), 40).unwrap();
    assert_eq!(t.resize_to(200), Some(40));
    assert_eq!(t.resize_to(0), Some(15));
    t.end_resize();
}

#[test]
fn test_resize_unknown_column() {
    let mut t = people_table();
    assert_eq!(
        t.begin_resize(&id("nope"), 1),
        Err(TableError::UnknownColumn(id("nope")))
    );
    assert_eq!(t.resize_to(10), None);
}

#[test]
fn test_reset_resizing_restores_defaults() {
    let mut t = people_table();

    t.begin_resize(&id("lastName"), 10).unwrap();
    t.resize_to(20);
    t.end_resize();
    assert_eq!(t.column_width(&id("lastName")), Some(25));

    t.reset_resizing();
    assert_eq!(t.column_width(&id("lastName")), Some(15));
    assert!(t.resizing().column_widths.is_empty());
}

// ============================================================================
// Layout provider
// ============================================================================

#[test]
fn test_headers_and_cells_follow_order() {
    let mut t = people_table();
    let mut ids: Vec<ColumnId> = t.column_order().ids().to_vec();
    ids.swap(0, 2);
    t.set_column_order(ColumnOrder::new(ids)).unwrap();

    let headers = t.headers();
    assert_eq!(headers[0].label, "Age");
    assert_eq!(headers[2].label, "First Name");

    let cells = t.row_cells(0).unwrap();
    assert_eq!(cells[0], "21");
    assert_eq!(cells[2], "ember");
    assert_eq!(t.row_cells(5), None);

    let labels: Vec<&str> = t.visible_columns().iter().map(|c| c.header.as_str()).collect();
    assert_eq!(labels[0], "Age");
}

#[test]
fn test_set_column_order_rejects_non_permutations() {
    let mut t = people_table();
    let before = t.column_order().clone();

    let mut missing = before.ids().to_vec();
    missing.pop();
    assert_eq!(
        t.set_column_order(ColumnOrder::new(missing)),
        Err(TableError::NotAPermutation)
    );

    let mut duplicated = before.ids().to_vec();
    duplicated[1] = duplicated[0].clone();
    assert_eq!(
        t.set_column_order(ColumnOrder::new(duplicated)),
        Err(TableError::NotAPermutation)
    );

    assert_eq!(t.column_order(), &before);
}

#[test]
fn test_header_marks_resizing_column() {
    let mut t = people_table();
    t.begin_resize(&id("visits"), 5).unwrap();

    let headers = t.headers();
    let resizing: Vec<&str> = headers
        .iter()
        .filter(|h| h.resizing)
        .map(|h| h.id.as_str())
        .collect();
    assert_eq!(resizing, ["visits"]);
}

// ============================================================================
// State snapshot
// ============================================================================

#[test]
fn test_state_json_shape() {
    let mut t = people_table();
    t.begin_resize(&id("age"), 10).unwrap();
    t.resize_to(16);

    let value = serde_json::to_value(t.state()).unwrap();
    assert_eq!(value["columnOrder"][0], "firstName");
    assert_eq!(value["columnResizing"]["isResizingColumn"], "age");
    assert_eq!(value["columnResizing"]["startX"], 10);
    assert_eq!(value["columnResizing"]["columnWidth"], 15);
    assert_eq!(value["columnResizing"]["headerIdWidths"][0][0], "age");
    assert_eq!(value["columnResizing"]["columnWidths"]["age"], 21);

    t.end_resize();
    let value = serde_json::to_value(t.state()).unwrap();
    assert!(value["columnResizing"]["isResizingColumn"].is_null());
    assert!(value["columnResizing"]["startX"].is_null());
    assert_eq!(value["columnResizing"]["columnWidth"], 15);
    assert_eq!(value["columnResizing"]["headerIdWidths"][0][1], 15);

    t.reset_resizing();
    let value = serde_json::to_value(t.state()).unwrap();
    assert!(value["columnResizing"]["columnWidth"].is_null());
    assert!(value["columnResizing"]["headerIdWidths"].is_null());
    assert_eq!(value["columnResizing"]["columnWidths"], serde_json::json!({}));

    let pretty = t.state().to_pretty_json().unwrap();
    assert!(pretty.contains("\"columnOrder\": ["));
}
