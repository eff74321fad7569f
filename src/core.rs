pub mod features;
pub mod history;
pub mod random;
pub mod storage;
