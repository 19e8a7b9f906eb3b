mod repository;

pub use repository::InMemoryAlertRepository;
