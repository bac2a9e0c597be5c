//! Item Price
//!
//! Prices are normalized once, when an item is written. The amount is kept
//! in whole cents so formatting never drifts from what was entered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::WishlistConfig;

/// Largest amount (in cents) that still round-trips exactly through `f64`
const MAX_CENTS: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    /// Amount in cents
    Amount(u64),
    /// No usable price was given
    #[default]
    NotAvailable,
}

impl Price {
    /// Normalize raw price text.
    ///
    /// Anything that is not a finite, non-negative number is
    /// [`Price::NotAvailable`]; the amount is rounded to two decimal places.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Price::NotAvailable;
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                let cents = (value * 100.0).round();
                if cents > MAX_CENTS {
                    log::debug!("price {} out of range", text);
                    Price::NotAvailable
                } else {
                    Price::Amount(cents as u64)
                }
            }
            _ => {
                log::debug!("ignoring unparseable price {:?}", text);
                Price::NotAvailable
            }
        }
    }

    /// Same as [`Price::parse`], with absent text meaning no price.
    pub fn from_input(text: Option<&str>) -> Self {
        text.map(Price::parse).unwrap_or(Price::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Price::Amount(_))
    }

    pub fn cents(&self) -> Option<u64> {
        match self {
            Price::Amount(cents) => Some(*cents),
            Price::NotAvailable => None,
        }
    }

    /// Bare number for an input field (`19.50`), empty when not available.
    pub fn input_text(&self) -> String {
        match self {
            Price::Amount(cents) => format!("{}.{:02}", cents / 100, cents % 100),
            Price::NotAvailable => String::new(),
        }
    }

    /// Display text using the given currency symbol and sentinel label.
    pub fn format_with(&self, config: &WishlistConfig) -> String {
        match self {
            Price::Amount(_) => format!("{}{}", config.currency_symbol, self.input_text()),
            Price::NotAvailable => config.not_available_label.clone(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&WishlistConfig::default()))
    }
}
