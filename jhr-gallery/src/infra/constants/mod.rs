pub mod carousel;
pub mod listings;
