//! Signal-bound list reloads for the admin page.

use leptos::prelude::*;

use super::categories::load_categories;
use super::products::load_products;
use crate::net::api::{Catalog, Transport};
use crate::state::admin::{AdminState, ListKind};

/// Refetch `list` and replace it in `admin`, unless a newer fetch started in
/// the meantime. Failures are logged and the old list stays visible.
pub async fn reload<T: Transport>(catalog: &Catalog<T>, admin: RwSignal<AdminState>, list: ListKind) {
    let Some(ticket) = admin.try_update(|s| s.begin_load(list)) else {
        return;
    };
    match list {
        ListKind::Products => match load_products(catalog).await {
            Ok(products) => admin.update(|s| {
                s.apply_products(ticket, products);
            }),
            Err(e) => leptos::logging::error!("Error loading products: {e}"),
        },
        ListKind::Categories => match load_categories(catalog).await {
            Ok(categories) => admin.update(|s| {
                s.apply_categories(ticket, categories);
            }),
            Err(e) => leptos::logging::error!("Error loading categories: {e}"),
        },
    }
}

/// Reload `list` in the background.
pub fn spawn_reload(admin: RwSignal<AdminState>, list: ListKind) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            reload(&Catalog::browser(), admin, list).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (admin, list);
    }
}
