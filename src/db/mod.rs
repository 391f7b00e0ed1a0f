pub mod investment_queries;
pub mod transaction_queries;
pub mod user_queries;
