pub mod config;
pub mod employees;
pub mod http;

#[cfg(test)]
mod testing;
