//! The AI Campaign Studio conversation engine.
//!
//! Drives a scripted, branching conversation between the user and a team of
//! studio personas: timed steps, typing indicators, choice gates that pause
//! the script until the user picks an option, and in-place updates for live
//! publishing status. The script is fixed at session start; the engine's job
//! is ordering, pacing, and cancellation safety.

pub mod engine;
pub mod message;
pub mod persona;
pub mod script;
pub mod session;

pub use engine::StudioEngine;
pub use message::{Choice, Message, PublishState};
pub use persona::{Persona, PersonaId};
pub use script::{build_script, extract_product_name, ChoiceValue, Script, Step};
pub use session::{Session, SessionSnapshot};
