pub mod activities;

pub use activities::{ActivityRecord, SeedActivity};
