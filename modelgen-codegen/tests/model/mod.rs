// Generated by modelgen. Do not edit.

mod status;
pub use status::*;
mod metadata;
pub use metadata::*;
mod circle;
pub use circle::*;
mod square;
pub use square::*;
mod shape;
pub use shape::*;
mod drawing;
pub use drawing::*;
mod account;
pub use account::*;
mod owner;
pub use owner::*;
