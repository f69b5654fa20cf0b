//! # `neuroassess` – The umbrella crate
//!
//! Glues the workspace crates together and adds the pieces an application
//! needs on top of them:
//!
//! | Crate                      | What it provides                                                   |
//! |----------------------------|--------------------------------------------------------------------|
//! | **`neuroassess-core`**     | `CompletionProvider` seam, `CompletionClient`, messages, errors    |
//! | **`neuroassess-prompt`**   | Line-oriented prompt builder and `{placeholder}` substitution      |
//! | **`neuroassess-types`**    | `PatientRecord`, `Transcript`, analysis and follow-up prompts      |
//! | **`neuroassess-groq`**     | HTTP client implementing `CompletionProvider` for Groq *(optional)* |
//!
//! On top of the re-exports this crate owns [`session::Session`], the
//! per-user state machine, and [`config::Settings`], the environment-driven
//! configuration.
//!
//! ```rust,no_run
//! use neuroassess::{config::Settings, session::Session, types::patient::PatientRecord};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Settings::from_env()?.completion_client()?;
//!     let mut session = Session::new(client);
//!
//!     let report = session.analyze(&PatientRecord::default()).await?;
//!     println!("{report}");
//!
//!     let answer = session.ask("Which risk factor matters most?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
pub use neuroassess_core::*;
pub use neuroassess_prompt as prompt;
pub use neuroassess_types as types;

#[cfg(feature = "groq")]
pub use neuroassess_groq as groq;

pub mod config;
pub mod repl;
pub mod session;
