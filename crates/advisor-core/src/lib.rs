//! Request composition for the loan advisory pipeline.
//!
//! Turns a cash budget, a fixed investment policy, and three raw tabular
//! datasets (current portfolio, primary-market loans, secondary-market
//! offers) into a single advisory prompt. The datasets are embedded
//! verbatim: the advisory model is meant to cross-reference discount,
//! tenor, originator, and country across all three, so nothing here
//! parses, filters, or reorders rows.

mod composer;
mod policy;

pub use composer::{compose, InputError};
pub use policy::DEFAULT_POLICY;
