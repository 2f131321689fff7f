//! Value Objects - Immutable, identity-less domain primitives

mod bio;
mod reaction;
mod voice_persona;

pub use bio::Bio;
pub use reaction::Reaction;
pub use voice_persona::VoicePersona;
