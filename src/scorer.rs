//! Receipt Scorer - Main coordinator for scoring receipts
//!
//! Parses the receipt's text fields according to the configured
//! [`FieldPolicy`], runs all 7 rules and sums their points. The scorer holds
//! no state beyond its policy and can be shared freely across threads.

use crate::error::ScoringError;
use crate::receipt::Receipt;
use crate::rules::*;
use crate::utils::{parse_amount, parse_purchase_date, parse_purchase_time};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// How unparseable numeric, date and time fields are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Reject the receipt with a [`ScoringError`]
    #[default]
    Strict,
    /// Substitute a zero value and keep scoring: amounts become 0,
    /// dates become 0001-01-01 and times become 00:00
    Lenient,
}

impl FromStr for FieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FieldPolicy::Strict),
            "lenient" => Ok(FieldPolicy::Lenient),
            other => Err(format!("unknown field policy {:?} (expected strict or lenient)", other)),
        }
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPolicy::Strict => f.write_str("strict"),
            FieldPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

/// Receipt score result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptScore {
    pub points: u64,
    /// Points per rule, in rule order (R1-R7)
    pub rules: [u64; RULE_COUNT],
}

/// Fields parsed out of a receipt, ready for rule evaluation
struct ParsedFields<'a> {
    total: Decimal,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<PricedItem<'a>>,
}

/// Main receipt scorer
#[derive(Debug, Clone, Default)]
pub struct ReceiptScorer {
    policy: FieldPolicy,
}

impl ReceiptScorer {
    pub fn new(policy: FieldPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Score a receipt
    ///
    /// Deterministic: the same receipt always yields the same score. Fails
    /// only under [`FieldPolicy::Strict`], when a field cannot be parsed.
    pub fn score(&self, receipt: &Receipt) -> Result<ReceiptScore, ScoringError> {
        let fields = self.parse_fields(receipt)?;

        let rules = [
            calculate_r1(&receipt.retailer),
            calculate_r2(fields.total),
            calculate_r3(fields.total),
            calculate_r4(receipt.items.len()),
            calculate_r5(&fields.items)?,
            calculate_r6(fields.purchase_date),
            calculate_r7(fields.purchase_time),
        ];
        let points = rules.iter().fold(0u64, |acc, p| acc.saturating_add(*p));

        tracing::debug!(
            "Scored receipt from {:?}: {} points {:?}",
            receipt.retailer,
            points,
            rules
        );

        Ok(ReceiptScore { points, rules })
    }

    fn parse_fields<'a>(&self, receipt: &'a Receipt) -> Result<ParsedFields<'a>, ScoringError> {
        let total = self.resolve(
            parse_amount(&receipt.total),
            Decimal::ZERO,
            || ScoringError::InvalidTotal(receipt.total.clone()),
        )?;

        let purchase_date = self.resolve(
            parse_purchase_date(&receipt.purchase_date),
            fallback_date(),
            || ScoringError::InvalidPurchaseDate(receipt.purchase_date.clone()),
        )?;

        let purchase_time = self.resolve(
            parse_purchase_time(&receipt.purchase_time),
            NaiveTime::MIN,
            || ScoringError::InvalidPurchaseTime(receipt.purchase_time.clone()),
        )?;

        let items = receipt
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<PricedItem<'a>, ScoringError> {
                let price = self.resolve(parse_amount(&item.price), Decimal::ZERO, || {
                    ScoringError::InvalidPrice {
                        index,
                        price: item.price.clone(),
                    }
                })?;
                Ok(PricedItem {
                    short_description: &item.short_description,
                    price,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        Ok(ParsedFields {
            total,
            purchase_date,
            purchase_time,
            items,
        })
    }

    /// Apply the field policy to a parse result
    fn resolve<T>(
        &self,
        parsed: Option<T>,
        fallback: T,
        error: impl FnOnce() -> ScoringError,
    ) -> Result<T, ScoringError> {
        match (parsed, self.policy) {
            (Some(value), _) => Ok(value),
            (None, FieldPolicy::Strict) => Err(error()),
            (None, FieldPolicy::Lenient) => {
                tracing::warn!("Substituting zero value: {}", error());
                Ok(fallback)
            }
        }
    }
}

/// Zero date used by the lenient policy (day 1, which is odd)
fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}
