//! Domain entities - transient request/response values

mod profile_stats;
mod roast;
mod share_content;
mod voice_roast;

pub use profile_stats::ProfileStats;
pub use roast::Roast;
pub use share_content::ShareContent;
pub use voice_roast::VoiceRoast;
