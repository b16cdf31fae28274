pub mod poll;
pub mod storage;
