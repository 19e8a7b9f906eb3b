mod repository;

pub use repository::InMemoryAllocationRepository;
