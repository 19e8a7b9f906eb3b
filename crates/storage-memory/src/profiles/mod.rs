mod repository;

pub use repository::InMemoryProfileRepository;
