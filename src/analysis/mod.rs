pub mod aggregator;
pub mod category;
pub mod classifier;
pub mod participant;
pub mod spatial;
pub mod temporal;
