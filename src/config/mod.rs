//! Default file locations for stores.

mod paths;

#[cfg(test)]
mod tests;

pub use paths::{STORE_FILE_NAME, StorePaths};
