//! Error taxonomy for core operations
//!
//! Every variant is an expected, recoverable condition reported back to the
//! caller. Operations pre-validate rather than retry, so a failed call
//! leaves the world untouched.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Coordinate falls outside the grid.
    #[error("coordinate ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },

    /// Construction attempted without enough cash; no partial deduction.
    #[error("insufficient funds: need {cost}, have {balance}")]
    InsufficientFunds { cost: i64, balance: i64 },

    /// Construction or zoning attempted on a non-empty tile.
    #[error("tile ({x}, {y}) is occupied")]
    TileOccupied { x: i32, y: i32 },
}
