pub mod demo;
pub mod error;
pub mod render;
pub mod session;
pub mod vocab;

pub use error::{Result, SessionError};
pub use render::{Bar, BarKind};
pub use session::{Phase, SimulationSession, Snapshot};
pub use vocab::Vocabulary;
