pub mod generate;
pub use generate::*;

pub mod hasher;
pub use hasher::*;

pub mod map;
pub use map::*;
