/// Business search and lookup interface
pub mod business;
