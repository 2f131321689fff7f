//! Application services - Use case implementations

mod roast_service;
mod social_service;
mod voice_roast_service;

pub use roast_service::{
    GenerateRoastInput, GenerateRoastOutput, ROAST_PROMPT_PREAMBLE, RoastService,
    roast_output_schema,
};
pub use social_service::{ReactionAck, SocialService};
pub use voice_roast_service::{VoiceRoastOutput, VoiceRoastService};
