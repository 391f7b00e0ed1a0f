mod investment;
mod transaction;
mod user;
mod valuation;

pub use investment::{CreateInvestment, Investment, UpdateInvestment};
pub use transaction::{CreateTransaction, Transaction, TransactionRecord, TxSide};
pub use user::{Created, LoginRequest, MeResponse, RegisterRequest, TokenResponse, User};
pub use valuation::{GroupSummary, InvestmentMetrics, PortfolioOverview};
