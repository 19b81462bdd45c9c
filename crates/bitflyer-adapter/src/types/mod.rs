/*
[INPUT]:  API parameter definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API parameters change or new types added
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
