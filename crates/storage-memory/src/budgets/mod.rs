mod repository;

pub use repository::InMemoryBudgetRepository;
