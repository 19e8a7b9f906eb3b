mod repository;

pub use repository::InMemoryCategoryRepository;
