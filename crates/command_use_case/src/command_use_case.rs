pub mod create_interest;
pub mod port;
