#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod arithmetic;
mod curve;
mod enumerate;
mod error;
mod point;
mod primality;

pub use crate::{
    curve::Curve,
    enumerate::{PointEnumerator, Points},
    error::{Error, Result},
    point::Point,
    primality::is_prime,
};
pub use num_bigint::BigInt;
