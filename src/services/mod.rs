pub mod opener;
pub mod storage;
