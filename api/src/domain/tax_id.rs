//! National tax identifier validation
//!
//! Two schemes share the same mod-11 check digit rule:
//! - Individual (CPF): 11 digits, two check digits
//! - Entity (CNPJ): 14 digits, two check digits
//!
//! Punctuation is ignored, so `889.786.230-69` and `88978623069` are the same id.

use serde::{Deserialize, Serialize};

use super::normalize::digits_only;
use crate::error::DomainError;

const INDIVIDUAL_LEN: usize = 11;
const ENTITY_LEN: usize = 14;

const ENTITY_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const ENTITY_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Which scheme a tax id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIdKind {
    Individual,
    Entity,
}

impl std::fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxIdKind::Individual => write!(f, "individual"),
            TaxIdKind::Entity => write!(f, "entity"),
        }
    }
}

impl std::str::FromStr for TaxIdKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "individual" => Ok(TaxIdKind::Individual),
            "entity" => Ok(TaxIdKind::Entity),
            _ => Err(format!("Unknown tax id kind: {}", s)),
        }
    }
}

/// Outcome of validating a raw tax id string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxIdValidation {
    pub valid: bool,
    /// `None` when the digit count matches neither scheme
    pub kind: Option<TaxIdKind>,
    /// Digits only
    pub normalized: String,
}

/// Validate and normalize a tax id
pub fn validate(raw: &str) -> TaxIdValidation {
    let normalized = digits_only(raw);
    let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();

    let kind = match digits.len() {
        INDIVIDUAL_LEN => Some(TaxIdKind::Individual),
        ENTITY_LEN => Some(TaxIdKind::Entity),
        _ => None,
    };

    let valid = match kind {
        Some(_) if all_same(&digits) => false,
        Some(TaxIdKind::Individual) => individual_checksum_ok(&digits),
        Some(TaxIdKind::Entity) => entity_checksum_ok(&digits),
        None => false,
    };

    TaxIdValidation {
        valid,
        kind,
        normalized,
    }
}

/// A tax id that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId {
    value: String,
    kind: TaxIdKind,
}

impl TaxId {
    /// Validate `raw`, returning the normalized id or `InvalidTaxId`
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let validation = validate(raw);
        match (validation.valid, validation.kind) {
            (true, Some(kind)) => Ok(Self {
                value: validation.normalized,
                kind,
            }),
            _ => Err(DomainError::InvalidTaxId(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn check_digit(sum: u32) -> u32 {
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

fn weighted_sum(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

fn individual_checksum_ok(digits: &[u32]) -> bool {
    let first = check_digit(weighted_sum(&digits[..9], (2..=10).rev()));
    let second = check_digit(weighted_sum(&digits[..10], (2..=11).rev()));
    digits[9] == first && digits[10] == second
}

fn entity_checksum_ok(digits: &[u32]) -> bool {
    let first = check_digit(weighted_sum(
        &digits[..12],
        ENTITY_FIRST_WEIGHTS.iter().copied(),
    ));
    let second = check_digit(weighted_sum(
        &digits[..13],
        ENTITY_SECOND_WEIGHTS.iter().copied(),
    ));
    digits[12] == first && digits[13] == second
}
