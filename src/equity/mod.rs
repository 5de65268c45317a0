pub mod equity;
pub use equity::*;

pub mod sampler;
pub use sampler::*;

pub mod simulation;
pub use simulation::*;

pub mod tally;
pub use tally::*;

pub mod trial;
pub use trial::*;
