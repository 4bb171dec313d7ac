#![cfg(test)]

pub mod counter;
pub mod panic;
