pub mod lighting;
pub mod orbit;
#[cfg(feature = "vectors")]
pub mod vector;
