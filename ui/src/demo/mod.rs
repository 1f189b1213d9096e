//! Interactive natural-language-to-SQL demo.
//!
//! `engine` holds the request lifecycle (`Idle -> Pending -> Succeeded | Failed`)
//! as plain data; `view` wires it to a [`api::QueryService`].

mod engine;
mod view;

pub use engine::{DemoPhase, DemoSession, QueryTicket};
pub use view::{use_query_client, DemoView, QueryClient, SqlBlock};
