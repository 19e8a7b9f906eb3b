mod repository;

pub use repository::InMemoryTemplateRepository;
