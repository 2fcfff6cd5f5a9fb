mod error;
mod pair_list;
mod pair_table;
mod dotbracket;

pub use error::*;
pub use pair_list::*;
pub use pair_table::*;
pub use dotbracket::*;

