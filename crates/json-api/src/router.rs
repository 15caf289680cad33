//! App Router

use salvo::Router;

use crate::{carts, checkout, contact, products};

/// Routes served under `/api`.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .push(Router::with_path("add").post(carts::add::handler))
                .push(Router::with_path("update-quantity").post(carts::update_quantity::handler))
                .push(Router::with_path("remove").post(carts::remove::handler))
                .push(Router::with_path("{cart_id}").get(carts::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("latest-products").get(products::latest::handler))
                .push(Router::with_path("by-ids/{ids}").get(products::by_ids::handler))
                .push(Router::with_path("{id:num}/quantity").get(products::quantity::handler)),
        )
        .push(Router::with_path("contact/submit").post(contact::submit::handler))
        .push(
            Router::with_path("checkout")
                .push(Router::with_path("create-session").post(checkout::create_session::handler))
                .push(
                    Router::with_path("verify-quantities")
                        .post(checkout::verify_quantities::handler),
                ),
        )
}
