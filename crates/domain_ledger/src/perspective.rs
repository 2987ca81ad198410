//! Observer-relative reading of a transaction
//!
//! A transaction is stored once, with a from account and a to account. What
//! it means depends on who is asking: money arriving at the observer's
//! account is IN, money leaving it is OUT, and a transaction touching
//! neither endpoint is UNRELATED. All report figures in this crate are
//! built by resolving each transaction against an observer first.

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

/// The direction of a related transaction, seen from one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Money flowed into the observer's account
    In,
    /// Money flowed out of the observer's account
    Out,
}

impl Direction {
    /// Returns the opposite direction
    pub fn flipped(&self) -> Direction {
        match self {
            Direction::In => Direction::Out,
            Direction::Out => Direction::In,
        }
    }
}

/// How a transaction reads from one observer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    /// The observer is the destination
    In,
    /// The observer is the source
    Out,
    /// The observer is neither endpoint
    Unrelated,
}

impl Perspective {
    /// Swaps IN and OUT; UNRELATED is a fixed point
    ///
    /// What one side of a trade receives, the other side pays. A
    /// transaction unrelated to an observer stays unrelated no matter
    /// which side of the mirror it is viewed from.
    pub fn flipped(&self) -> Perspective {
        match self {
            Perspective::In => Perspective::Out,
            Perspective::Out => Perspective::In,
            Perspective::Unrelated => Perspective::Unrelated,
        }
    }

    /// Returns the direction for a related perspective, `None` if unrelated
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Perspective::In => Some(Direction::In),
            Perspective::Out => Some(Direction::Out),
            Perspective::Unrelated => None,
        }
    }

    /// Returns true if the observer is one of the endpoints
    pub fn is_related(&self) -> bool {
        !matches!(self, Perspective::Unrelated)
    }
}

impl From<Direction> for Perspective {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::In => Perspective::In,
            Direction::Out => Perspective::Out,
        }
    }
}

/// Resolves a transaction's endpoints against an observer account
///
/// Checks the destination first, so a malformed row with both endpoints
/// equal to the observer still resolves deterministically (to IN). Such
/// rows are rejected at write time and flagged by the integrity audit;
/// resolution stays total so reports never abort on historical data.
pub fn resolve(to: AccountId, from: AccountId, observer: AccountId) -> Perspective {
    if to == observer {
        Perspective::In
    } else if from == observer {
        Perspective::Out
    } else {
        Perspective::Unrelated
    }
}

/// Resolves a transaction as it reads on a party's ledger page
///
/// Rows on a party ledger are labeled by the business's cashflow with
/// that party: a row crediting the party's account means the business
/// paid out, so the base resolution against the party account is
/// flipped. OUT means the business paid the party, IN means the
/// business received from them.
pub fn resolve_for_party(to: AccountId, from: AccountId, party_account: AccountId) -> Perspective {
    resolve(to, from, party_account).flipped()
}
