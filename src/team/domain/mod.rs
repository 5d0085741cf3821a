//! Domain model for team members.

mod error;
mod ids;
mod member;
mod name;
mod patch;
mod record;
mod status;

pub use error::{MemberDomainError, ParseMemberStatusError};
pub use ids::MemberId;
pub use member::{NewMember, PersistedMemberData, TeamMember};
pub use name::MemberName;
pub use patch::MemberPatch;
pub use record::MemberDocument;
pub use status::MemberStatus;
