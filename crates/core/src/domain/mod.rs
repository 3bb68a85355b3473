pub mod product;
pub mod risk;
