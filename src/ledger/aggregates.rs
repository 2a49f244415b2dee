use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::OrderStatus;

/// Revenue over the whole ledger, computed from unit prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueSummary {
    pub total: Decimal,
    pub average: Decimal,
}

impl RevenueSummary {
    pub fn from_prices<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let (total, count) = prices
            .into_iter()
            .fold((Decimal::ZERO, 0u64), |(sum, n), price| (sum + price, n + 1));

        let average = if count == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(count)
        };

        Self { total, average }
    }
}

/// Order count per status. Always holds an entry for every status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHistogram(BTreeMap<OrderStatus, usize>);

impl StatusHistogram {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = OrderStatus>,
    {
        let mut counts: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        for status in statuses {
            *counts.entry(status).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn max(&self) -> usize {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// Iterates in Pending, Completed, Canceled order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderStatus, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}
