use leadgrid::core::grid::{EditingCursor, next_cell, previous_cell};
use leadgrid::models::LeadField;
use leadgrid::models::lead_field::{NON_EDITABLE_FIELDS, editable_fields};

const ROWS: [&str; 3] = ["r1", "r2", "r3"];

fn fields() -> Vec<LeadField> {
    editable_fields(&NON_EDITABLE_FIELDS)
}

fn at(row: &str, field: LeadField) -> EditingCursor {
    EditingCursor::new(row, field)
}

#[test]
fn test_editable_fields_in_grid_order() {
    assert_eq!(
        fields(),
        vec![
            LeadField::Name,
            LeadField::Company,
            LeadField::Phone,
            LeadField::Email,
            LeadField::Status,
        ]
    );
}

#[test]
fn test_next_within_row() {
    let next = next_cell(&ROWS, &fields(), &at("r1", LeadField::Name));
    assert_eq!(next, Some(at("r1", LeadField::Company)));
}

#[test]
fn test_next_wraps_to_next_row() {
    let next = next_cell(&ROWS, &fields(), &at("r1", LeadField::Status));
    assert_eq!(next, Some(at("r2", LeadField::Name)));
}

#[test]
fn test_next_after_last_cell_is_none() {
    assert_eq!(next_cell(&ROWS, &fields(), &at("r3", LeadField::Status)), None);
}

#[test]
fn test_previous_within_row() {
    let prev = previous_cell(&ROWS, &fields(), &at("r2", LeadField::Phone));
    assert_eq!(prev, Some(at("r2", LeadField::Company)));
}

#[test]
fn test_previous_wraps_to_previous_row() {
    let prev = previous_cell(&ROWS, &fields(), &at("r2", LeadField::Name));
    assert_eq!(prev, Some(at("r1", LeadField::Status)));
}

#[test]
fn test_previous_before_first_cell_is_none() {
    assert_eq!(previous_cell(&ROWS, &fields(), &at("r1", LeadField::Name)), None);
}

#[test]
fn test_unknown_row_or_field_is_none() {
    assert_eq!(next_cell(&ROWS, &fields(), &at("gone", LeadField::Name)), None);
    assert_eq!(previous_cell(&ROWS, &fields(), &at("gone", LeadField::Name)), None);
    // not in the editable list
    assert_eq!(next_cell(&ROWS, &fields(), &at("r1", LeadField::CreatedAt)), None);
}

#[test]
fn test_single_row_single_field() {
    let rows = vec!["only".to_string()];
    let fields = [LeadField::Email];
    assert_eq!(next_cell(&rows, &fields, &at("only", LeadField::Email)), None);
    assert_eq!(previous_cell(&rows, &fields, &at("only", LeadField::Email)), None);
}

#[test]
fn test_row_ids_compare_exactly() {
    assert_eq!(next_cell(&ROWS, &fields(), &at("R1", LeadField::Name)), None);
}
