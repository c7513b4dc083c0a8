pub mod manager;
pub mod watcher;
