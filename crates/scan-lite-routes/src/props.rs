// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed inputs handed to views by the router

use crate::barcode::Barcode;
use crate::error::{Result, RouteError};
use crate::table::{RouteMatch, ViewKind, BARCODE_PARAM};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bytes escaped when a value is written into one path segment.
/// Only RFC 3986 unreserved characters pass through.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Inputs of the product-details view
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductDetailsProps {
    pub barcode: Barcode,
}

impl ProductDetailsProps {
    pub fn new(barcode: Barcode) -> Self {
        Self { barcode }
    }

    /// Extract the typed inputs from a resolved route
    pub fn from_match(route: &RouteMatch) -> Result<Self> {
        if route.view != ViewKind::ProductDetails {
            return Err(RouteError::WrongView {
                route: route.pattern.clone(),
                expected: ViewKind::ProductDetails.name(),
                actual: route.view.name(),
            });
        }

        let raw = route
            .param(BARCODE_PARAM)
            .ok_or_else(|| RouteError::MissingParam {
                route: route.pattern.clone(),
                name: BARCODE_PARAM.to_string(),
            })?;

        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| RouteError::barcode(raw, "segment is not valid UTF-8"))?;

        Ok(Self {
            barcode: Barcode::new(decoded)?,
        })
    }
}

/// URL of the product-details view for a barcode
pub fn product_path(barcode: &Barcode) -> String {
    format!("/product/{}", utf8_percent_encode(barcode.as_str(), SEGMENT))
}
