pub mod interest_repository;
pub mod submission_observer;

pub use self::interest_repository::{
    CreatedInterest, HasInterestRepository, InterestRepository, PersistenceError,
};
pub use self::submission_observer::{
    HasSubmissionObserver, SubmissionEvent, SubmissionObserver, TracingSubmissionObserver,
};
