//! Split a CSV dataset into `<name>-training.csv` and `<name>-test.csv`.

pub mod error;
pub mod paths;
pub mod ratio;
pub mod splitter;

pub use error::{Result, SplitError};
pub use paths::derive_output_paths;
pub use ratio::Ratios;
pub use splitter::{
    read_dataset, route_rows, split_dataset, split_dataset_with_rng, write_subset, Dataset, Row,
    SplitOutput, Subset, TRAINING_THRESHOLD,
};
