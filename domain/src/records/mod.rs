//! Ministry records: the CRUD side of the application.
//!
//! Every stored record is a [`Record<F>`] envelope (id + timestamps) around
//! a kind-specific field set `F` implementing [`RecordFields`]. Clients send
//! the bare field set (the "draft"); the store assigns the id.
//!
//! | Kind | Fields type | Collection slug |
//! |------|-------------|-----------------|
//! | Event | [`EventFields`] | `events` |
//! | Prayer request | [`PrayerRequestFields`] | `prayer-requests` |
//! | Task | [`TaskFields`] | `tasks` |
//! | Sermon | [`SermonFields`] | `sermons` |
//! | Team member | [`TeamMemberFields`] | `team-members` |
//! | Resource | [`ResourceFields`] | `resources` |

pub mod event;
pub mod prayer_request;
pub mod record;
pub mod resource;
pub mod sermon;
pub mod task;
pub mod team_member;

pub use event::{Event, EventFields};
pub use prayer_request::{PrayerRequest, PrayerRequestFields, PrayerStatus};
pub use record::{Record, RecordFields, RecordId, RecordKind};
pub use resource::{Resource, ResourceFields, ResourceKind};
pub use sermon::{Sermon, SermonFields};
pub use task::{Task, TaskFields, TaskPriority, TaskStatus};
pub use team_member::{TeamMember, TeamMemberFields};
