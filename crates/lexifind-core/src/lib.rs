pub mod render;
pub mod search;
pub mod share;

pub use search::{SearchSession, SearchTicket};
pub use share::{ShareAttempt, ShareChain, ShareMechanism, ShareOutcome};
