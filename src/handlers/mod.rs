pub mod market;
pub mod order;
