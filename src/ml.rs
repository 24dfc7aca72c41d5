//! Machine learning models.

pub mod bayes;
