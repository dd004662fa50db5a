use leadgrid::import::{
    ColumnDescriptor, ImportError, ImportField, ImportRow, default_columns, normalize_header,
    parse_csv, resolve_columns, split_lines, tokenize_row,
};

fn parse(text: &str) -> Result<Vec<ImportRow>, ImportError> {
    parse_csv(text, &default_columns())
}

#[test]
fn test_full_name_business_headers() {
    let rows = parse("Full Name,Email,Phone,Business\nJane Doe,jane@x.com,555-1234,Acme").unwrap();

    assert_eq!(
        rows,
        vec![ImportRow {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1234".into(),
            company: Some("Acme".into()),
        }]
    );
}

#[test]
fn test_missing_phone_column() {
    let err = parse("Name,Email,Company\nJane,jane@x.com,Acme").unwrap_err();
    assert_eq!(err, ImportError::MissingRequiredColumns(vec!["phone".into()]));
    assert!(err.to_string().contains("phone"));
}

#[test]
fn test_row_missing_email_is_skipped() {
    let text = "name,email,phone\n\
                Ann,ann@x.com,5550001111\n\
                Bob,,5550002222\n\
                Cid,cid@x.com,5550003333\n";
    let rows = parse(text).unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Cid"]);
}

#[test]
fn test_all_rows_invalid() {
    let err = parse("name,email,phone\nAnn,,5550001111\n,bob@x.com,\n").unwrap_err();
    assert_eq!(err, ImportError::NoValidRows);
}

#[test]
fn test_fewer_than_two_lines() {
    assert_eq!(parse("").unwrap_err(), ImportError::EmptyOrMissingData);
    assert_eq!(
        parse("name,email,phone").unwrap_err(),
        ImportError::EmptyOrMissingData
    );
    // blank lines do not count
    assert_eq!(
        parse("name,email,phone\n\n   \n").unwrap_err(),
        ImportError::EmptyOrMissingData
    );
}

#[test]
fn test_crlf_and_blank_lines() {
    let text = "name,email,phone\r\n\r\nAnn,ann@x.com,5550001111\r\n\r\n";
    let rows = parse(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].phone, "5550001111");
}

#[test]
fn test_quoted_comma_kept_in_one_field() {
    let text = "name,email,phone,company\n\"Doe, Jane\",jane@x.com,5551234567,\"Acme, Inc\"";
    let rows = parse(text).unwrap();
    assert_eq!(rows[0].name, "Doe, Jane");
    assert_eq!(rows[0].company.as_deref(), Some("Acme, Inc"));
}

#[test]
fn test_quoted_field_after_comma_and_space() {
    let text = "name,email,phone,company\nJane, jane@x.com, 555-1234, \"Acme, Inc\"\n";
    let rows = parse(text).unwrap();
    assert_eq!(rows[0].email, "jane@x.com");
    assert_eq!(rows[0].phone, "555-1234");
    assert_eq!(rows[0].company.as_deref(), Some("Acme, Inc"));

    assert_eq!(
        tokenize_row("  \"Doe, Jane\" ,\t\"Acme, Inc\""),
        vec!["Doe, Jane", "Acme, Inc"]
    );
}

#[test]
fn test_doubled_quote_inside_quoted_field() {
    assert_eq!(
        tokenize_row("\"Jane \"\"JJ\"\", Doe\", \"x, y\""),
        vec!["Jane \"JJ\", Doe", "x, y"]
    );
}

#[test]
fn test_unquoted_comma_splits_field() {
    // Known limitation: the comma inside "Acme, Inc" starts a new value,
    // so "Inc" shifts into the email column.
    let text = "name,company,email,phone\nJane,Acme, Inc,jane@x.com,5551234567";
    let rows = parse(text).unwrap();
    assert_eq!(rows[0].company.as_deref(), Some("Acme"));
    assert_eq!(rows[0].email, "Inc");
    assert_eq!(rows[0].phone, "jane@x.com");

    assert_eq!(tokenize_row("Jane,Acme, Inc"), vec!["Jane", "Acme", "Inc"]);
}

#[test]
fn test_values_are_trimmed_and_company_optional() {
    let rows = parse("name , email , phone\n  Ann  ,  ann@x.com , 5550001111 ").unwrap();
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].email, "ann@x.com");
    assert_eq!(rows[0].company, None);
}

#[test]
fn test_short_row_missing_trailing_phone() {
    let rows = parse("name,email,phone\nAnn,ann@x.com\nBob,bob@x.com,5550002222").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob");
}

#[test]
fn test_normalize_header() {
    assert_eq!(normalize_header("  Contact Name "), "contact_name");
    assert_eq!(normalize_header("\"E-Mail\""), "e-mail");
    assert_eq!(normalize_header("Phone   Number"), "phone_number");
}

#[test]
fn test_contact_name_matches_name_alias() {
    let headers: Vec<String> = ["Contact Name", "Telephone", "Email Address"]
        .iter()
        .map(|h| normalize_header(h))
        .collect();
    let columns = default_columns();
    let bindings = resolve_columns(&headers, &columns);

    let position = |field: ImportField| {
        bindings
            .iter()
            .find(|b| b.descriptor.field == field)
            .and_then(|b| b.position)
    };
    assert_eq!(position(ImportField::Name), Some(0));
    assert_eq!(position(ImportField::Phone), Some(1));
    assert_eq!(position(ImportField::Email), Some(2));
    assert_eq!(position(ImportField::Company), None);
}

#[test]
fn test_split_lines_drops_blank() {
    assert_eq!(split_lines("a\n\n b \r\n\t\nc"), vec!["a", " b ", "c"]);
}

#[test]
fn test_optional_phone_descriptor_rejected() {
    let descriptors = vec![
        ColumnDescriptor::new(ImportField::Name, true, &["name"]),
        ColumnDescriptor::new(ImportField::Email, true, &["email"]),
        ColumnDescriptor::new(ImportField::Phone, false, &["phone"]),
    ];
    let err = parse_csv("name,email\nAnn,ann@x.com\n", &descriptors).unwrap_err();

    assert_eq!(err, ImportError::OptionalLeadColumn("phone".into()));
    assert_eq!(err.to_string(), "Column 'phone' cannot be optional");
}

#[test]
fn test_required_company_descriptor_allowed() {
    let mut descriptors = default_columns();
    for d in descriptors.iter_mut() {
        d.required = true;
    }

    let err = parse_csv("name,email,phone\nAnn,ann@x.com,5550001111\n", &descriptors).unwrap_err();
    assert_eq!(err, ImportError::MissingRequiredColumns(vec!["company".into()]));

    let rows = parse_csv(
        "name,email,phone,company\nAnn,ann@x.com,5550001111,Acme\n",
        &descriptors,
    )
    .unwrap();
    assert_eq!(rows[0].company.as_deref(), Some("Acme"));
}
