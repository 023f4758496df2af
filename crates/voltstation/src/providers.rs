pub mod base;
pub mod configs;
pub mod gigachat;
pub mod oauth;

#[cfg(test)]
pub mod mock;
