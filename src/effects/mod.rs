pub mod algorithms;
pub mod catalog;
pub mod evaluate;
pub mod registry;
