// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Barcode values carried in the product route

use crate::error::{Result, RouteError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A barcode value as typed or scanned.
///
/// Any non-empty text is accepted (Code 39 and Code 128 carry `+`, `$`,
/// `%` and spaces). Leading zeros are significant and kept as-is. Use
/// [`crate::product_path`] to place it in a URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Barcode(String);

impl Barcode {
    /// Validate user input. Surrounding whitespace is trimmed.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input.trim())
    }

    /// Take a value verbatim, e.g. a decoded path segment
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(RouteError::barcode(value, "value is empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Best guess at the symbology, judged by length of an all-digit value
    pub fn symbology(&self) -> Symbology {
        if !self.is_numeric() {
            return Symbology::Unknown;
        }
        match self.0.len() {
            8 => Symbology::Ean8,
            12 => Symbology::UpcA,
            13 => Symbology::Ean13,
            14 => Symbology::Gtin14,
            _ => Symbology::Unknown,
        }
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Barcode {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self> {
        Barcode::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

/// Retail barcode families recognizable from the digit count alone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbology {
    Ean8,
    UpcA,
    Ean13,
    Gtin14,
    Unknown,
}

impl Symbology {
    pub fn label(&self) -> &'static str {
        match self {
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcA => "UPC-A",
            Symbology::Ean13 => "EAN-13",
            Symbology::Gtin14 => "GTIN-14",
            Symbology::Unknown => "Unknown",
        }
    }
}
