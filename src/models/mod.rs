pub mod paper;
pub mod years;
pub mod tally;
pub mod ranked;

pub use paper::*;
pub use years::*;
pub use tally::*;
pub use ranked::*;
