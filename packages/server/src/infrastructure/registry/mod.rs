mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
