mod inmemory;

pub use inmemory::InMemoryUserDirectory;
