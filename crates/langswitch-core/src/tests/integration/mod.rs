#![cfg(test)]

pub mod common;
pub mod page_tests;
