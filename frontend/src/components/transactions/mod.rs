pub mod transaction_list;

pub use transaction_list::TransactionList;
