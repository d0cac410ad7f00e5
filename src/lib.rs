//! METAR Winds Library
//!
//! Builds a wind-direction histogram from METAR reports embedded in
//! aviation weather bulletins.
//!
//! The pipeline has three stages:
//! - Splitting raw bulletin text into candidate reports, dropping comment
//!   lines and stopping at TAF sections
//! - Extracting the wind group of reports from one target station
//! - Classifying each wind group into one of eight 45° compass sectors
//!   (variable winds count once in every sector)
//!
//! The `processor` module runs the stages concurrently over a directory of
//! files and funnels every result into a single aggregator.

pub mod aggregator;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod processor;
pub mod splitter;

pub use aggregator::WindAggregator;
pub use config::WindsConfig;
pub use error::{Result, WindsError};
pub use extractor::WindExtractor;
pub use models::{DistributionCounts, Sector, WindClassification, WindReport, WindToken};
pub use processor::BulletinProcessor;
