//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-partition operations.

pub mod goal;
pub mod transaction;

pub use goal::GoalService;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
