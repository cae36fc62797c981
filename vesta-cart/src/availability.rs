use vesta_core::money;

use crate::models::CartLine;

/// Stock at or below this (and above zero) raises a low-stock advisory.
pub const LOW_STOCK_MAX: i64 = 10;

/// Availability verdict for a single cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAvailability {
    pub line_id: i64,
    /// Any stock at all.
    pub in_stock: bool,
    /// Enough stock to cover the requested quantity.
    pub fulfillable: bool,
    /// Advisory only, never a hard error.
    pub low_stock: bool,
    /// Discount price times quantity, in minor units. Present only for
    /// fulfillable lines; everything else is excluded from billing.
    pub line_subtotal_minor: Option<i64>,
}

/// Aggregate view over a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<LineAvailability>,
    /// Sum of fulfillable line subtotals, in minor units.
    pub subtotal_minor: i64,
}

impl CartSummary {
    pub fn has_low_stock(&self) -> bool {
        self.lines.iter().any(|l| l.low_stock)
    }

    pub fn fulfillable_count(&self) -> usize {
        self.lines.iter().filter(|l| l.fulfillable).count()
    }
}

/// Evaluate a cart snapshot. Pure and deterministic: same snapshot, same
/// summary.
///
/// Lines whose stock cannot cover the requested quantity are excluded from
/// the subtotal entirely rather than truncated to available stock, never
/// bill for stock that is not confirmed available. A line whose price fails
/// to parse is treated the same way.
pub fn evaluate(lines: &[CartLine]) -> CartSummary {
    let mut verdicts = Vec::with_capacity(lines.len());
    let mut subtotal = 0_i64;

    for line in lines {
        let stock = line.product.stock;
        let in_stock = stock > 0;
        let fulfillable = stock >= i64::from(line.quantity);
        let low_stock = stock > 0 && stock <= LOW_STOCK_MAX;

        let line_subtotal = if fulfillable {
            match money::charge_minor_units(&line.product.discount_price, line.quantity) {
                Ok(amount) => Some(amount),
                Err(err) => {
                    tracing::warn!(
                        "excluding cart line {} from subtotal: {err}",
                        line.id
                    );
                    None
                }
            }
        } else {
            None
        };

        if let Some(amount) = line_subtotal {
            subtotal = subtotal.saturating_add(amount);
        }

        verdicts.push(LineAvailability {
            line_id: line.id,
            in_stock,
            fulfillable,
            low_stock,
            line_subtotal_minor: line_subtotal,
        });
    }

    CartSummary {
        lines: verdicts,
        subtotal_minor: subtotal,
    }
}
