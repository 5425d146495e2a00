//! Dashboard overview.

use std::sync::Arc;

use crate::domain::stats::DashboardStats;
use crate::error::Result;
use crate::port::outbound::store::{CustomerStore, MenuItemStore, OrderStore, PromotionStore};

pub struct DashboardService {
    orders: Arc<dyn OrderStore>,
    items: Arc<dyn MenuItemStore>,
    customers: Arc<dyn CustomerStore>,
    promotions: Arc<dyn PromotionStore>,
}

impl DashboardService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        items: Arc<dyn MenuItemStore>,
        customers: Arc<dyn CustomerStore>,
        promotions: Arc<dyn PromotionStore>,
    ) -> Self {
        Self {
            orders,
            items,
            customers,
            promotions,
        }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let counts = self.orders.status_counts().await?;
        let total_orders = counts.iter().map(|c| c.count).sum();

        Ok(DashboardStats {
            total_orders,
            pending_orders: DashboardStats::pending_from(&counts),
            menu_items: self.items.count().await?,
            customers: self.customers.count().await?,
            active_promotions: self.promotions.count_active().await?,
            total_revenue: self.orders.total_revenue().await?,
            orders_by_status: DashboardStats::status_breakdown(counts),
            recent_orders: self.orders.recent(DashboardStats::RECENT_ORDERS).await?,
        })
    }
}
