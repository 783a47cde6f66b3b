//! Mock collaborators for integration tests.

pub mod mock_grammar;
pub mod mock_transport;

pub use mock_grammar::MockPhoneGrammar;
pub use mock_transport::{MockTransport, SentEvent};
