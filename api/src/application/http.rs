pub mod analysis;
pub mod food;
pub mod health;
pub mod profile;
pub mod recommendation;
pub mod scan_history;
pub mod server;

#[cfg(test)]
pub mod test_context;
