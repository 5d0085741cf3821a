//! Board orchestration services.

mod coordinator;
mod loader;
mod members;
mod progress;
mod tasks;

pub use coordinator::BoardService;
pub use loader::LoadReport;
pub use members::UpdateMemberRequest;
pub use progress::ProgressSyncReport;
