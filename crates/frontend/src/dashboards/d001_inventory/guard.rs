//! Advisory sell check against the cached stock of the selected product.
//!
//! Only the view consults this. The dispatcher sends whatever it is given and the
//! server re-validates every sale.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardHint {
    NoSelection,
    Available(i64),
    OutOfStock,
    Exceeds(i64),
    Remaining(i64),
}

impl GuardHint {
    pub fn text(&self) -> String {
        match self {
            GuardHint::NoSelection => "Select a product to sell.".to_string(),
            GuardHint::Available(stock) => format!("Actual stock: {} units.", stock),
            GuardHint::OutOfStock => "Out of stock! Cannot sell.".to_string(),
            GuardHint::Exceeds(stock) => format!("Error! You only have {} units.", stock),
            GuardHint::Remaining(left) => format!("Remaining stock after sale: {}", left),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GuardHint::OutOfStock | GuardHint::Exceeds(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardVerdict {
    /// Upper bound for the quantity input
    pub max_quantity: Option<i64>,
    pub input_enabled: bool,
    pub confirm_enabled: bool,
    pub hint: GuardHint,
}

/// Quantity as typed; blank or unparsable input counts as 0
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Confirm is enabled iff `0 < quantity <= cached_stock`.
///
/// `cached_stock` is `None` while no product is selected.
pub fn evaluate(cached_stock: Option<i64>, quantity: &str) -> GuardVerdict {
    let Some(stock) = cached_stock else {
        return GuardVerdict {
            max_quantity: None,
            input_enabled: true,
            confirm_enabled: false,
            hint: GuardHint::NoSelection,
        };
    };

    if stock <= 0 {
        return GuardVerdict {
            max_quantity: Some(0),
            input_enabled: false,
            confirm_enabled: false,
            hint: GuardHint::OutOfStock,
        };
    }

    let qty = parse_quantity(quantity);
    let (confirm_enabled, hint) = if qty > stock {
        (false, GuardHint::Exceeds(stock))
    } else if qty <= 0 {
        (false, GuardHint::Available(stock))
    } else {
        (true, GuardHint::Remaining(stock - qty))
    };

    GuardVerdict {
        max_quantity: Some(stock),
        input_enabled: true,
        confirm_enabled,
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_enabled_iff_within_stock() {
        for stock in 0..6 {
            for qty in -2..9 {
                let verdict = evaluate(Some(stock), &qty.to_string());
                assert_eq!(
                    verdict.confirm_enabled,
                    qty > 0 && qty <= stock,
                    "stock={} qty={}",
                    stock,
                    qty
                );
            }
        }
    }

    #[test]
    fn test_zero_stock_disables_everything() {
        let verdict = evaluate(Some(0), "1");
        assert!(!verdict.input_enabled);
        assert!(!verdict.confirm_enabled);
        assert_eq!(verdict.hint, GuardHint::OutOfStock);
        assert_eq!(verdict.hint.text(), "Out of stock! Cannot sell.");
    }

    #[test]
    fn test_oversell_is_blocked() {
        let verdict = evaluate(Some(10), "12");
        assert!(!verdict.confirm_enabled);
        assert_eq!(verdict.max_quantity, Some(10));
        assert_eq!(verdict.hint.text(), "Error! You only have 10 units.");
        assert!(verdict.hint.is_error());
    }

    #[test]
    fn test_remaining_preview() {
        let verdict = evaluate(Some(10), " 4 ");
        assert!(verdict.confirm_enabled);
        assert_eq!(verdict.hint, GuardHint::Remaining(6));
    }

    #[test]
    fn test_blank_quantity_shows_stock() {
        let verdict = evaluate(Some(10), "");
        assert!(!verdict.confirm_enabled);
        assert_eq!(verdict.hint.text(), "Actual stock: 10 units.");
    }

    #[test]
    fn test_no_selection() {
        let verdict = evaluate(None, "3");
        assert!(!verdict.confirm_enabled);
        assert_eq!(verdict.max_quantity, None);
    }
}
