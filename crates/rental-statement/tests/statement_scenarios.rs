use pretty_assertions::assert_eq;
use rental_statement::{
    resolve_formatter, Customer, RentalItem, RentalSheet, StatementError, StatementFormat,
};
use rust_decimal_macros::dec;
use std::path::Path;

fn gladiator_and_spiderman() -> Customer {
    let mut customer = Customer::new("Test");
    customer.add_item(RentalItem::children("Gladiator", 1).unwrap());
    customer.add_item(RentalItem::new_release("Spiderman", 2).unwrap());
    customer
}

#[test]
fn test_children_and_new_release_statement() {
    let snapshot = gladiator_and_spiderman().compute_snapshot();

    let amounts: Vec<_> = snapshot
        .rentals()
        .iter()
        .map(|rental| rental.amount().as_decimal())
        .collect();
    assert_eq!(amounts, vec![dec!(1.5), dec!(6)]);
    assert_eq!(snapshot.total_amount().as_decimal(), dec!(7.5));
    assert_eq!(snapshot.frequent_renter_points(), 3);

    let text = resolve_formatter("string")
        .unwrap()
        .render(&snapshot)
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Rental Record for Test",
            "Gladiator\t1.5",
            "Spiderman\t6",
            "Amount owed is 7.5",
            "You earned 3 frequent renter points",
        ]
    );
}

#[test]
fn test_single_regular_rental() {
    let mut customer = Customer::new("Solo");
    customer.add_item(RentalItem::regular("Movie", 5).unwrap());

    let snapshot = customer.compute_snapshot();
    assert_eq!(snapshot.rentals().len(), 1);
    assert_eq!(snapshot.rentals()[0].amount().as_decimal(), dec!(6.5));
    assert_eq!(snapshot.total_amount().as_decimal(), dec!(6.5));
    assert_eq!(snapshot.frequent_renter_points(), 1);
}

#[test]
fn test_empty_customer_renders_zero_totals() {
    let snapshot = Customer::new("Nobody").compute_snapshot();
    assert!(snapshot.rentals().is_empty());

    let text = resolve_formatter("string")
        .unwrap()
        .render(&snapshot)
        .unwrap();
    assert!(text.contains("Amount owed is 0"));
    assert!(text.contains("You earned 0 frequent renter points"));
}

#[test]
fn test_unknown_format_is_rejected() {
    match resolve_formatter("pdf") {
        Err(StatementError::UnsupportedFormat { format }) => assert_eq!(format, "pdf"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(formatter) => panic!("pdf resolved to {}", formatter.format_id()),
    }
}

#[test]
fn test_negative_days_is_invalid_argument() {
    let err = RentalItem::new_release("Spiderman", -1).unwrap_err();
    assert!(matches!(err, StatementError::InvalidArgument { .. }));
}

#[test]
fn test_formatters_agree_on_content() {
    let snapshot = gladiator_and_spiderman().compute_snapshot();

    for (_, format) in StatementFormat::IDENTIFIERS {
        let out = format.formatter().render(&snapshot).unwrap();
        assert!(out.contains("Test"), "{format} output lacks customer name");
        assert!(out.contains("Gladiator"), "{format} output lacks Gladiator");
        assert!(out.contains("Spiderman"), "{format} output lacks Spiderman");
        assert!(out.contains("7.5"), "{format} output lacks total");
    }
}

#[test]
fn test_rendering_leaves_snapshot_untouched() {
    let customer = gladiator_and_spiderman();
    let snapshot = customer.compute_snapshot();
    let before = snapshot.clone();

    for identifier in ["string", "html", "json"] {
        resolve_formatter(identifier)
            .unwrap()
            .render(&snapshot)
            .unwrap();
    }

    assert_eq!(snapshot, before);
    assert_eq!(customer.compute_snapshot(), before);
}

#[test]
fn test_sample_sheet_renders_html() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("sheets/sample.toml");
    let customer = RentalSheet::from_path(&path)
        .unwrap()
        .into_customer()
        .unwrap();

    let html = resolve_formatter("html")
        .unwrap()
        .render(&customer.compute_snapshot())
        .unwrap();

    assert!(html.starts_with("<h1>Rental Record for Test</h1>"));
    assert!(html.contains("<tr><td>Spiderman</td><td>6</td></tr>"));
    assert!(html.contains("<p>Amount owed is 7.5</p>"));
    assert!(html.contains("<p>You earned 3 frequent renter points</p>"));
}
