//! User-based collaborative filtering over a small in-memory ratings matrix.
//!
//! Ratings for the movies a user has not seen are estimated from the
//! Pearson-similar users who rated them, falling back to the movie's global
//! average, and the best estimates are listed as recommendations.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
