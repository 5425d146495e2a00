//! Dashboard overview figures.

use serde::Serialize;

use super::money::Money;
use super::order::{OrderDetails, OrderStatus};

/// Number of orders currently in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub menu_items: u64,
    pub customers: u64,
    pub active_promotions: u64,
    /// Sum of order totals across every status.
    pub total_revenue: Money,
    /// Only statuses with at least one order, in workflow order.
    pub orders_by_status: Vec<StatusCount>,
    pub recent_orders: Vec<OrderDetails>,
}

impl DashboardStats {
    /// Number of most recent orders shown on the overview.
    pub const RECENT_ORDERS: usize = 5;

    /// Keep non-empty buckets, sorted in workflow order.
    #[must_use]
    pub fn status_breakdown(counts: impl IntoIterator<Item = StatusCount>) -> Vec<StatusCount> {
        let mut counts: Vec<StatusCount> = counts.into_iter().filter(|c| c.count > 0).collect();
        counts.sort_by_key(|c| c.status);
        counts
    }

    #[must_use]
    pub fn pending_from(counts: &[StatusCount]) -> u64 {
        counts
            .iter()
            .find(|c| c.status == OrderStatus::Pending)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_drops_empty_and_sorts() {
        let counts = DashboardStats::status_breakdown([
            StatusCount { status: OrderStatus::Delivered, count: 4 },
            StatusCount { status: OrderStatus::Ready, count: 0 },
            StatusCount { status: OrderStatus::Pending, count: 2 },
        ]);
        assert_eq!(
            counts.iter().map(|c| c.status).collect::<Vec<_>>(),
            vec![OrderStatus::Pending, OrderStatus::Delivered]
        );
        assert_eq!(DashboardStats::pending_from(&counts), 2);
        assert_eq!(DashboardStats::pending_from(&[]), 0);
    }
}
