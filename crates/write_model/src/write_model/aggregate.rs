pub mod interest;
pub mod interest_record;

pub use self::interest::Interest;
pub use self::interest_record::InterestRecord;
