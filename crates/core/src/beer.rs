//! The beer entity and its bounded stock arithmetic.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{StockError, StockResult};
use crate::id::BeerId;

/// Beer category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerKind {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerKind::Lager => "LAGER",
            BeerKind::Malzbier => "MALZBIER",
            BeerKind::Witbier => "WITBIER",
            BeerKind::Weiss => "WEISS",
            BeerKind::Ale => "ALE",
            BeerKind::Ipa => "IPA",
            BeerKind::Stout => "STOUT",
        }
    }
}

impl core::fmt::Display for BeerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerKind {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerKind::Lager),
            "MALZBIER" => Ok(BeerKind::Malzbier),
            "WITBIER" => Ok(BeerKind::Witbier),
            "WEISS" => Ok(BeerKind::Weiss),
            "ALE" => Ok(BeerKind::Ale),
            "IPA" => Ok(BeerKind::Ipa),
            "STOUT" => Ok(BeerKind::Stout),
            other => Err(StockError::validation(format!("unknown beer type '{other}'"))),
        }
    }
}

/// A tracked stock-keeping unit.
///
/// Invariant: `quantity <= max` holds for every beer that exists; all
/// mutations go through the bounded arithmetic below or whole-record
/// replacement. A candidate (not yet persisted) carries `id: None`; the
/// repository assigns the id on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u64,
    pub quantity: u64,
    #[serde(rename = "type")]
    pub kind: BeerKind,
}

impl Beer {
    /// Creation-time field checks for a candidate beer.
    pub fn validate(&self) -> StockResult<()> {
        if self.name.trim().is_empty() {
            return Err(StockError::validation("name cannot be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(StockError::validation("brand cannot be empty"));
        }
        if self.max == 0 {
            return Err(StockError::validation("max capacity must be positive"));
        }
        if self.quantity > self.max {
            return Err(StockError::validation(
                "quantity cannot exceed the max capacity",
            ));
        }
        Ok(())
    }

    /// Bounds-checked increment.
    ///
    /// Returns the new quantity without mutating. Reaching exactly `max` is
    /// allowed; only strictly exceeding it fails.
    pub fn incremented(&self, amount: u64) -> StockResult<u64> {
        let exceeded = StockError::StockExceeded {
            current: self.quantity,
            amount,
            max: self.max,
        };

        let new_quantity = self.quantity.checked_add(amount).ok_or(exceeded.clone())?;
        if new_quantity > self.max {
            return Err(exceeded);
        }
        Ok(new_quantity)
    }

    /// Bounds-checked decrement.
    ///
    /// Returns the new quantity without mutating. Draining to exactly zero is
    /// allowed; only falling below zero fails.
    pub fn decremented(&self, amount: u64) -> StockResult<u64> {
        self.quantity
            .checked_sub(amount)
            .ok_or(StockError::InsufficientStock {
                current: self.quantity,
                amount,
            })
    }
}
