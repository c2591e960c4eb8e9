//! HTTP handlers for reviews and wishlists. Listing a product's reviews is
//! public; everything else needs an authenticated caller.

pub mod reviews;
pub mod wishlist;
