//! In-memory draft state edited inside the modal dialogs.
//!
//! The two engines here are pure and synchronous: the work draft derives its
//! description and amount from the cascading client → subject → property →
//! service selection, and the payment draft keeps per-work allocations and
//! their running total consistent. Reference data is supplied by the caller;
//! nothing in this module performs I/O.

use thiserror::Error;

use crate::domain::types::WorkId;

pub mod description;
pub mod dialog;
pub mod payment;
pub mod reference;
pub mod work;

/// Errors produced by draft mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The work is not part of the current payment selection.
    #[error("work {0} is not part of the current selection")]
    NotSelected(WorkId),
    /// A monetary input was negative.
    #[error("amount must not be negative")]
    NegativeAmount,
    /// Client and subject cannot change on a work that already exists.
    #[error("client and subject are fixed on an existing work")]
    SelectionLocked,
}
