pub mod balance;
pub mod offer;
pub mod order;
pub mod order_book;
pub mod order_ledger;
pub mod ticker;
