//! Repository structs, one per table.

pub mod admin_user_repo;
pub mod mentor_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod update_repo;

pub use admin_user_repo::AdminUserRepo;
pub use mentor_repo::MentorRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use update_repo::ProjectUpdateRepo;
