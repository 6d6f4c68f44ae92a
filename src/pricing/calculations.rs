use crate::models::Extra;

/// Total for the current selection.
///
/// `(base_price + Σ extra.value * extra.quantity) * food_quantity`
pub fn cart_total(base_price: f64, extras: &[Extra], food_quantity: u32) -> f64 {
    let extras_value: f64 = extras.iter().map(Extra::subtotal).sum();
    (base_price + extras_value) * food_quantity as f64
}

/// The `price` field submitted with an order.
///
/// The order endpoint takes the base price scaled by quantity only; extras
/// are carried as separate line items and excluded from this figure.
pub fn order_price(base_price: f64, food_quantity: u32) -> f64 {
    base_price * food_quantity as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn extra(id: u64, value: f64, quantity: u32) -> Extra {
        Extra {
            id,
            name: format!("Extra {}", id),
            value,
            quantity,
        }
    }

    #[test]
    fn test_cart_total_formula() {
        let extras = vec![extra(1, 1.5, 2), extra(2, 2.0, 1)];
        // (10 + 3 + 2) * 3 = 45
        assert_float_absolute_eq!(cart_total(10.0, &extras, 3), 45.0, 0.001);
    }

    #[test]
    fn test_cart_total_no_extras_selected() {
        let extras = vec![extra(1, 1.5, 0), extra(2, 2.0, 0)];
        assert_float_absolute_eq!(cart_total(19.9, &extras, 1), 19.9, 0.001);
    }

    #[test]
    fn test_cart_total_order_independent() {
        let forward = vec![extra(1, 1.5, 2), extra(2, 2.0, 1), extra(3, 0.5, 4)];
        let reversed: Vec<Extra> = forward.iter().rev().cloned().collect();

        assert_float_absolute_eq!(
            cart_total(12.0, &forward, 2),
            cart_total(12.0, &reversed, 2),
            0.001
        );
    }

    #[test]
    fn test_order_price_excludes_extras() {
        let extras = vec![extra(1, 2.0, 5)];
        let displayed = cart_total(10.0, &extras, 2);
        let submitted = order_price(10.0, 2);

        assert_float_absolute_eq!(submitted, 20.0, 0.001);
        assert!(displayed > submitted);
    }
}
