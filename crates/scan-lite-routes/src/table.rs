// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered route table and path resolution

use crate::error::{Result, RouteError};
use crate::pattern::{split_path, PathPattern, Segment};
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Path of the scanner view
pub const SCANNER_PATH: &str = "/";
/// Path pattern of the product-details view
pub const PRODUCT_PATH: &str = "/product/:barcode";
/// Name of the parameter carrying the barcode
pub const BARCODE_PARAM: &str = "barcode";

/// Views a route can resolve to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViewKind {
    Scanner,
    ProductDetails,
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Scanner => "Scanner",
            ViewKind::ProductDetails => "ProductDetails",
        }
    }
}

/// One entry of the route table
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteDescriptor {
    pub pattern: PathPattern,
    pub view: ViewKind,
    /// Forward captured parameters to the view
    pub props: bool,
}

impl RouteDescriptor {
    pub fn new(pattern: &str, view: ViewKind) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            view,
            props: false,
        })
    }

    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }
}

/// Result of resolving a path against the table
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteMatch {
    pub view: ViewKind,
    /// Pattern that matched, e.g. `/product/:barcode`
    pub pattern: String,
    /// Captured parameters; empty unless the route forwards props
    pub params: FxHashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Immutable, ordered set of routes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build a table, rejecting patterns that overlap an earlier entry
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self> {
        for (i, route) in routes.iter().enumerate() {
            if let Some(existing) = routes[..i]
                .iter()
                .find(|earlier| earlier.pattern.same_shape(&route.pattern))
            {
                return Err(RouteError::DuplicatePattern {
                    pattern: route.pattern.to_string(),
                    existing: existing.pattern.to_string(),
                });
            }
        }
        Ok(Self { routes })
    }

    /// `/` renders the scanner, `/product/:barcode` renders product details
    pub fn default_routes() -> Self {
        Self {
            routes: vec![
                RouteDescriptor {
                    pattern: PathPattern::root(),
                    view: ViewKind::Scanner,
                    props: false,
                },
                RouteDescriptor {
                    pattern: PathPattern::from_segments(vec![
                        Segment::Static("product".to_string()),
                        Segment::Param(BARCODE_PARAM.to_string()),
                    ]),
                    view: ViewKind::ProductDetails,
                    props: true,
                },
            ],
        }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a URL path (query and fragment are ignored).
    ///
    /// The match with the most literal segments wins; on a tie the route
    /// registered first wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let parts = split_path(path);

        let mut best: Option<(&RouteDescriptor, Vec<(&str, &str)>)> = None;
        for route in &self.routes {
            let Some(captured) = route.pattern.captures(&parts) else {
                continue;
            };
            let better = match &best {
                Some((current, _)) => {
                    route.pattern.static_count() > current.pattern.static_count()
                }
                None => true,
            };
            if better {
                best = Some((route, captured));
            }
        }

        best.map(|(route, captured)| {
            let params = if route.props {
                captured
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect()
            } else {
                FxHashMap::default()
            };
            RouteMatch {
                view: route.view,
                pattern: route.pattern.to_string(),
                params,
            }
        })
    }

    /// Whether any route resolves the path
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_scanner() {
        let table = RouteTable::default_routes();
        let m = table.resolve("/").unwrap();
        assert_eq!(m.view, ViewKind::Scanner);
        assert!(m.params.is_empty());
        assert_eq!(m.pattern, SCANNER_PATH);
    }

    #[test]
    fn test_product_resolves_with_barcode() {
        let table = RouteTable::default_routes();
        let m = table.resolve("/product/0001234567890").unwrap();
        assert_eq!(m.view, ViewKind::ProductDetails);
        assert_eq!(m.param(BARCODE_PARAM), Some("0001234567890"));
        assert_eq!(m.params.len(), 1);
        assert_eq!(m.pattern, PRODUCT_PATH);
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        let table = RouteTable::default_routes();
        assert_eq!(table.resolve("/?debug=1").unwrap().view, ViewKind::Scanner);
        let m = table.resolve("/product/42/?debug=1#top").unwrap();
        assert_eq!(m.param(BARCODE_PARAM), Some("42"));
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        let table = RouteTable::default_routes();
        assert!(table.resolve("/product").is_none());
        assert!(table.resolve("/product/1/extra").is_none());
        assert!(table.resolve("/settings").is_none());
        assert!(!table.contains("/products/1"));
    }

    #[test]
    fn test_doubled_slashes_do_not_resolve() {
        let table = RouteTable::default_routes();
        assert!(table.resolve("//product//42").is_none());
        assert!(table.resolve("/product//42").is_none());
    }

    #[test]
    fn test_registration_order_does_not_shadow() {
        let reversed = RouteTable::new(vec![
            RouteDescriptor::new(PRODUCT_PATH, ViewKind::ProductDetails)
                .unwrap()
                .with_props(),
            RouteDescriptor::new(SCANNER_PATH, ViewKind::Scanner).unwrap(),
        ])
        .unwrap();

        for table in [RouteTable::default_routes(), reversed] {
            assert_eq!(table.resolve("/").unwrap().view, ViewKind::Scanner);
            assert_eq!(
                table.resolve("/product/123").unwrap().view,
                ViewKind::ProductDetails
            );
        }
    }

    #[test]
    fn test_static_segment_beats_param() {
        let table = RouteTable::new(vec![
            RouteDescriptor::new("/product/:barcode", ViewKind::ProductDetails)
                .unwrap()
                .with_props(),
            RouteDescriptor::new("/product/recent", ViewKind::Scanner).unwrap(),
        ])
        .unwrap();

        assert_eq!(table.resolve("/product/recent").unwrap().view, ViewKind::Scanner);
        assert_eq!(
            table.resolve("/product/555").unwrap().view,
            ViewKind::ProductDetails
        );
    }

    #[test]
    fn test_params_dropped_without_props() {
        let table = RouteTable::new(vec![RouteDescriptor::new(
            "/product/:barcode",
            ViewKind::ProductDetails,
        )
        .unwrap()])
        .unwrap();

        let m = table.resolve("/product/123").unwrap();
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_overlapping_patterns_rejected() {
        let err = RouteTable::new(vec![
            RouteDescriptor::new("/product/:barcode", ViewKind::ProductDetails).unwrap(),
            RouteDescriptor::new("/product/:code", ViewKind::Scanner).unwrap(),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RouteError::DuplicatePattern {
                pattern: "/product/:code".to_string(),
                existing: "/product/:barcode".to_string(),
            }
        );
    }

    #[test]
    fn test_default_table_matches_parsed_table() {
        let parsed = RouteTable::new(vec![
            RouteDescriptor::new(SCANNER_PATH, ViewKind::Scanner).unwrap(),
            RouteDescriptor::new(PRODUCT_PATH, ViewKind::ProductDetails)
                .unwrap()
                .with_props(),
        ])
        .unwrap();
        assert_eq!(parsed, RouteTable::default_routes());
        assert_eq!(parsed.len(), 2);
    }
}
