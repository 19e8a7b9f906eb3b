mod repository;

pub use repository::InMemoryExpenseRepository;
