pub mod auth_service;
pub mod investment_service;
pub mod portfolio_service;
pub mod transaction_service;
pub mod valuation;
