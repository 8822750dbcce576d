//! Per-status order counts and totals

use crate::core::currency::{format_currency, parse_currency};
use crate::entities::order::{Order, OrderStatus};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

/// Count and value of the orders sharing one status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusTotals {
    /// Orders with this status
    pub count: usize,
    /// Sum of their parsed order values; clamped at `Decimal::MAX` / `Decimal::MIN`
    pub total_value: Decimal,
    /// Orders whose value could not be parsed and added nothing to the sum
    pub unparsed: usize,
}

impl StatusTotals {
    /// The total formatted for display, e.g. `$23,500`
    pub fn formatted_total(&self) -> String {
        format_currency(self.total_value)
    }
}

/// One [`StatusTotals`] per order status, in declared order.
///
/// Orders whose status is outside the four fixed ones are not counted
/// anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusOverview {
    statuses: IndexMap<OrderStatus, StatusTotals>,
}

impl StatusOverview {
    /// Aggregate already-filtered orders
    pub fn aggregate<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut statuses: IndexMap<OrderStatus, StatusTotals> = OrderStatus::ALL
            .iter()
            .map(|status| (status.clone(), StatusTotals::default()))
            .collect();

        for order in orders {
            let Some(totals) = statuses.get_mut(&order.status) else {
                continue;
            };
            totals.count += 1;
            match parse_currency(&order.order_value) {
                Ok(value) => match totals.total_value.checked_add(value) {
                    Some(sum) => totals.total_value = sum,
                    None => {
                        tracing::debug!(
                            order_id = order.id,
                            status = %order.status,
                            "Status total saturated"
                        );
                        totals.total_value = totals.total_value.saturating_add(value);
                    }
                },
                Err(err) => {
                    tracing::debug!(
                        order_id = order.id,
                        value = %order.order_value,
                        error = %err,
                        "Order value counted as zero"
                    );
                    totals.unparsed += 1;
                }
            }
        }

        Self { statuses }
    }

    /// Totals for one status; all zero for statuses outside the fixed four
    pub fn totals(&self, status: &OrderStatus) -> StatusTotals {
        self.statuses.get(status).cloned().unwrap_or_default()
    }

    /// Every fixed status with its totals, in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&OrderStatus, &StatusTotals)> {
        self.statuses.iter()
    }

    /// Sum of all status totals, clamped to the `Decimal` range
    pub fn grand_total(&self) -> Decimal {
        self.statuses
            .values()
            .fold(Decimal::ZERO, |sum, t| sum.saturating_add(t.total_value))
    }
}
