mod all;
mod backdrop;
mod banner;
mod footer;
mod log;
mod quote;
mod share;

use self::log::log;
use super::*;
use backdrop::backdrop;
use banner::banner;
use footer::footer;
use quote::quote;
use share::share;

pub use all::all as render;
