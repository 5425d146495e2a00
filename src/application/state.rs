//! Shared application state: every service, ready to hand to an inbound
//! adapter.

use std::sync::Arc;

use super::account::CustomerAccountService;
use super::auth::AdminAuthService;
use super::banner::BannerService;
use super::catalog::CatalogService;
use super::customer::CustomerService;
use super::dashboard::DashboardService;
use super::media::MediaService;
use super::order::OrderService;
use super::promotion::PromotionService;
use super::session::SessionSigner;
use super::settings::SettingsService;
use super::staff::StaffService;
use crate::domain::checkout::CheckoutPolicy;
use crate::domain::media::UploadPolicy;
use crate::domain::password::PasswordPolicy;
use crate::port::outbound::credential::PasswordHasher;
use crate::port::outbound::media::MediaStore;
use crate::port::outbound::store::{
    AdminUserStore, BannerStore, CategoryStore, CustomerStore, MenuItemStore, OrderStore,
    PromotionStore, RoleStore, SettingsStore,
};

/// The outbound ports the services are built from.
#[derive(Clone)]
pub struct Stores {
    pub roles: Arc<dyn RoleStore>,
    pub admin_users: Arc<dyn AdminUserStore>,
    pub customers: Arc<dyn CustomerStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub menu_items: Arc<dyn MenuItemStore>,
    pub orders: Arc<dyn OrderStore>,
    pub promotions: Arc<dyn PromotionStore>,
    pub banners: Arc<dyn BannerStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub media: Arc<dyn MediaStore>,
    pub hasher: Arc<dyn PasswordHasher>,
}

/// Rules that come from configuration rather than from storage.
#[derive(Debug, Clone)]
pub struct Policies {
    pub signer: SessionSigner,
    pub checkout: CheckoutPolicy,
    pub upload: UploadPolicy,
    pub password: PasswordPolicy,
}

/// Every use case the service exposes.
#[derive(Clone)]
pub struct AppServices {
    pub admin_auth: Arc<AdminAuthService>,
    pub accounts: Arc<CustomerAccountService>,
    pub catalog: Arc<CatalogService>,
    pub staff: Arc<StaffService>,
    pub customers: Arc<CustomerService>,
    pub orders: Arc<OrderService>,
    pub promotions: Arc<PromotionService>,
    pub banners: Arc<BannerService>,
    pub media: Arc<MediaService>,
    pub settings: Arc<SettingsService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(stores: Stores, policies: Policies) -> Self {
        let Stores {
            roles,
            admin_users,
            customers,
            categories,
            menu_items,
            orders,
            promotions,
            banners,
            settings,
            media,
            hasher,
        } = stores;

        Self {
            admin_auth: Arc::new(AdminAuthService::new(
                Arc::clone(&admin_users),
                Arc::clone(&roles),
                Arc::clone(&hasher),
                policies.signer.clone(),
            )),
            accounts: Arc::new(CustomerAccountService::new(
                Arc::clone(&customers),
                Arc::clone(&hasher),
                policies.signer,
                policies.password,
            )),
            catalog: Arc::new(CatalogService::new(categories, Arc::clone(&menu_items))),
            staff: Arc::new(StaffService::new(admin_users, roles, hasher)),
            customers: Arc::new(CustomerService::new(Arc::clone(&customers))),
            orders: Arc::new(OrderService::new(
                Arc::clone(&orders),
                Arc::clone(&menu_items),
                policies.checkout,
            )),
            promotions: Arc::new(PromotionService::new(
                Arc::clone(&promotions),
                Arc::clone(&menu_items),
            )),
            banners: Arc::new(BannerService::new(banners)),
            media: Arc::new(MediaService::new(media, policies.upload)),
            settings: Arc::new(SettingsService::new(settings)),
            dashboard: Arc::new(DashboardService::new(
                orders, menu_items, customers, promotions,
            )),
        }
    }
}
