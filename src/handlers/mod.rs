pub mod assets;
pub mod basket;

pub use basket::{delete_basket, get_basket, post_basket, put_basket};
