pub mod advice;
pub mod aggregator;
pub mod alerts;
pub mod analysis;
pub mod classifier;
pub mod debounce;
pub mod email;
pub mod lexicon;
pub mod receipt;
