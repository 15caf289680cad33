//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService, checkout::MockCheckoutService, contacts::MockContactsService,
        products::MockProductsService,
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_latest_products().never();
    products.expect_get_product_stock().never();
    products.expect_get_products_by_ids().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_get_cart().never();
    carts.expect_delete_stale_carts().never();

    carts
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_verify_quantities().never();
    checkout.expect_create_session().never();

    checkout
}

fn strict_contacts_mock() -> MockContactsService {
    let mut contacts = MockContactsService::new();

    contacts.expect_submit().never();

    contacts
}

/// Services backing a test router. Anything not replaced fails on first use.
pub(crate) struct TestServices {
    pub products: MockProductsService,
    pub carts: MockCartsService,
    pub checkout: MockCheckoutService,
    pub contacts: MockContactsService,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            carts: strict_carts_mock(),
            checkout: strict_checkout_mock(),
            contacts: strict_contacts_mock(),
        }
    }
}

impl TestServices {
    fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            checkout: Arc::new(self.checkout),
            contacts: Arc::new(self.contacts),
        })
    }

    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    TestServices {
        products,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    TestServices {
        carts,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    TestServices {
        checkout,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn contacts_service(contacts: MockContactsService, route: Router) -> Service {
    TestServices {
        contacts,
        ..TestServices::default()
    }
    .into_service(route)
}
