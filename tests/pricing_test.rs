use assert_float_eq::assert_float_absolute_eq;

use order_composer_rs::models::Extra;
use order_composer_rs::pricing::{cart_total, format_value, order_price};

fn make_extra(id: u64, name: &str, value: f64, quantity: u32) -> Extra {
    Extra {
        id,
        name: name.to_string(),
        value,
        quantity,
    }
}

#[test]
fn test_total_matches_formula() {
    let extras = vec![
        make_extra(1, "Bacon", 1.5, 2),
        make_extra(2, "Frango", 2.0, 1),
        make_extra(3, "Queijo", 0.5, 0),
    ];

    // (19.9 + 1.5*2 + 2.0*1 + 0.5*0) * 3 = 74.7
    assert_float_absolute_eq!(cart_total(19.9, &extras, 3), 74.7, 0.001);
}

#[test]
fn test_total_is_order_independent() {
    let extras = vec![
        make_extra(1, "Bacon", 1.5, 2),
        make_extra(2, "Frango", 2.0, 1),
        make_extra(3, "Queijo", 0.5, 4),
    ];

    let mut rotated = extras.clone();
    rotated.rotate_left(1);
    let reversed: Vec<Extra> = extras.iter().rev().cloned().collect();

    let total = cart_total(10.0, &extras, 2);
    assert_float_absolute_eq!(total, cart_total(10.0, &rotated, 2), 0.001);
    assert_float_absolute_eq!(total, cart_total(10.0, &reversed, 2), 0.001);
}

#[test]
fn test_unselected_extras_do_not_contribute() {
    let extras = vec![
        make_extra(1, "Bacon", 1.5, 0),
        make_extra(2, "Frango", 2.0, 0),
    ];

    assert_float_absolute_eq!(cart_total(19.9, &extras, 1), 19.9, 0.001);
}

#[test]
fn test_submitted_price_excludes_extras() {
    let extras = vec![make_extra(1, "Bacon", 2.0, 3)];

    let displayed = cart_total(10.0, &extras, 2);
    let submitted = order_price(10.0, 2);

    assert_float_absolute_eq!(displayed, 32.0, 0.001);
    assert_float_absolute_eq!(submitted, 20.0, 0.001);
}

#[test]
fn test_formatted_totals() {
    let extras = vec![make_extra(1, "Bacon", 2.0, 2)];

    assert_eq!(format_value(cart_total(10.0, &extras, 1)), "R$ 14.00");
    assert_eq!(format_value(cart_total(10.0, &extras, 2)), "R$ 28.00");
}
