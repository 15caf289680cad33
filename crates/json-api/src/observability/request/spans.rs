//! HTTP span naming and parent trace extraction.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Literal segments under `/api/cart/` that are not cart ids.
const CART_ACTIONS: [&str; 3] = ["add", "update-quantity", "remove"];

/// Collapse identifiers in `path` so span names and metric labels stay low-cardinality.
pub(super) fn route_for(path: &str) -> String {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => "/".to_owned(),
        ["product-images", ..] => "/product-images/{path}".to_owned(),
        ["api", "cart", cart] if !CART_ACTIONS.contains(cart) => "/api/cart/{cart_id}".to_owned(),
        ["api", "products", "by-ids", _] => "/api/products/by-ids/{ids}".to_owned(),
        _ => segments.iter().fold(String::new(), |mut route, segment| {
            route.push('/');

            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                route.push_str("{id}");
            } else {
                route.push_str(segment);
            }

            route
        }),
    }
}

pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let extractor = HeaderExtractor { headers };

    global::get_text_map_propagator(|propagator| {
        // A fresh base context keeps requests without trace headers from
        // inheriting the active in-process span chain.
        let context = propagator.extract_with_context(&Context::new(), &extractor);

        let valid = context.span().span_context().is_valid();

        valid.then_some(context)
    })
}

#[derive(Debug)]
struct HeaderExtractor<'a> {
    headers: &'a HeaderMap,
}

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.headers.get(key)?.to_str().ok()
    }

    fn keys(&self) -> Vec<&str> {
        self.headers.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_ids_are_collapsed() {
        assert_eq!(route_for("/api/cart/abc-123"), "/api/cart/{cart_id}");
    }

    #[test]
    fn cart_actions_are_kept() {
        assert_eq!(route_for("/api/cart/add"), "/api/cart/add");
        assert_eq!(route_for("/api/cart/update-quantity"), "/api/cart/update-quantity");
    }

    #[test]
    fn numeric_ids_are_collapsed() {
        assert_eq!(
            route_for("/api/products/42/quantity"),
            "/api/products/{id}/quantity"
        );
    }

    #[test]
    fn id_lists_and_image_paths_are_collapsed() {
        assert_eq!(
            route_for("/api/products/by-ids/1,2,3"),
            "/api/products/by-ids/{ids}"
        );
        assert_eq!(
            route_for("/product-images/lamps/desk.png"),
            "/product-images/{path}"
        );
    }

    #[test]
    fn root_and_static_routes_pass_through() {
        assert_eq!(route_for("/"), "/");
        assert_eq!(route_for("/healthcheck"), "/healthcheck");
    }
}
