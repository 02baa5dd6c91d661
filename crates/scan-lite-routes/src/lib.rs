// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scan-Lite Routes - route table for the Scan-Lite web app
//!
//! Framework-free description of which view renders for which URL, so the
//! routing rules can be tested without a browser.
//!
//! # Example
//!
//! ```
//! use scan_lite_routes::{ProductDetailsProps, RouteTable, ViewKind};
//!
//! let table = RouteTable::default_routes();
//! let route = table.resolve("/product/0001234567890").unwrap();
//! assert_eq!(route.view, ViewKind::ProductDetails);
//!
//! let props = ProductDetailsProps::from_match(&route).unwrap();
//! assert_eq!(props.barcode.as_str(), "0001234567890");
//! ```

mod barcode;
mod error;
mod pattern;
mod props;
mod table;

pub use barcode::{Barcode, Symbology};
pub use error::{Result, RouteError};
pub use pattern::{split_path, PathPattern, Segment};
pub use props::{product_path, ProductDetailsProps};
pub use table::{
    RouteDescriptor, RouteMatch, RouteTable, ViewKind, BARCODE_PARAM, PRODUCT_PATH, SCANNER_PATH,
};
