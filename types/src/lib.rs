pub mod line;
pub mod mark;
pub mod square;

pub use line::*;
pub use mark::*;
pub use square::*;
