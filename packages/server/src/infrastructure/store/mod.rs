mod inmemory;

pub use inmemory::InMemoryMessageStore;
