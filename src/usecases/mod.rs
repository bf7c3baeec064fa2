//! Application use cases. Orchestrate loading via ports.

pub mod meeting_service;

pub use meeting_service::{LoadedMeeting, MeetingService, ParticipantPaths, RunOutcome, run};
