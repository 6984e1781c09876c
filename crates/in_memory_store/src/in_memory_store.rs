mod in_memory_interest_store;

pub use self::in_memory_interest_store::InMemoryInterestStore;
