//! Main load flow: meeting file -> participant files -> report.
//!
//! - Loads the meeting first, then each participant in `participant_files` order
//! - Reports each entity as soon as it is loaded
//! - Stops at the first failing load; nothing is retried

use crate::adapters::loaders::factory_for;
use crate::domain::{DataFormat, DomainError, Meeting, User};
use crate::ports::{DataLoader, ReportPort};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How participant file references are turned into paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticipantPaths {
    /// Use each reference as written (relative to the working directory).
    AsIs,
    /// Resolve relative references against the meeting file's directory.
    #[default]
    RelativeToMeeting,
}

impl ParticipantPaths {
    pub fn resolve(self, meeting_path: &Path, reference: &str) -> PathBuf {
        let reference = Path::new(reference);
        match self {
            ParticipantPaths::AsIs => reference.to_path_buf(),
            ParticipantPaths::RelativeToMeeting if reference.is_absolute() => {
                reference.to_path_buf()
            }
            ParticipantPaths::RelativeToMeeting => meeting_path
                .parent()
                .map(|dir| dir.join(reference))
                .unwrap_or_else(|| reference.to_path_buf()),
        }
    }
}

/// A meeting together with its participants, in reference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedMeeting {
    pub meeting: Meeting,
    pub participants: Vec<User>,
}

/// Collects what a run reports.
impl ReportPort for LoadedMeeting {
    fn meeting_loaded(&mut self, meeting: &Meeting) -> Result<(), DomainError> {
        self.meeting = meeting.clone();
        Ok(())
    }

    fn user_loaded(&mut self, user: &User) -> Result<(), DomainError> {
        self.participants.push(user.clone());
        Ok(())
    }

    fn finished(&mut self, _participants: usize) -> Result<(), DomainError> {
        Ok(())
    }

    fn unsupported_format(&mut self, _tag: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Meeting service. Format-agnostic; works through whichever loader it was given.
pub struct MeetingService {
    loader: Box<dyn DataLoader>,
    resolution: ParticipantPaths,
}

impl MeetingService {
    pub fn new(loader: Box<dyn DataLoader>) -> Self {
        Self {
            loader,
            resolution: ParticipantPaths::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: ParticipantPaths) -> Self {
        self.resolution = resolution;
        self
    }

    /// Load the meeting and all of its participants.
    pub fn load(&self, meeting_path: &Path) -> Result<LoadedMeeting, DomainError> {
        let mut collected = LoadedMeeting::default();
        self.run(meeting_path, &mut collected)?;
        Ok(collected)
    }

    /// Load and report the meeting, then each participant in order.
    /// Returns the number of participants loaded.
    pub fn run(
        &self,
        meeting_path: &Path,
        reporter: &mut dyn ReportPort,
    ) -> Result<usize, DomainError> {
        let meeting = self.loader.load_meeting(meeting_path)?;
        reporter.meeting_loaded(&meeting)?;

        let mut loaded = 0usize;
        for reference in &meeting.participant_files {
            let path = self.resolution.resolve(meeting_path, reference);
            let user = self.loader.load_user(&path)?;
            reporter.user_loaded(&user)?;
            loaded += 1;
        }

        reporter.finished(loaded)?;
        info!(
            meeting = %meeting_path.display(),
            participants = loaded,
            "meeting loaded"
        );
        Ok(loaded)
    }
}

/// Result of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { participants: usize },
    /// The format tag was not recognized; nothing was loaded.
    UnsupportedFormat,
}

/// Select the loader for `format_tag` and run the meeting flow.
///
/// An unknown tag is reported and ends the run cleanly without any load.
pub fn run(
    format_tag: &str,
    meeting_path: &Path,
    resolution: ParticipantPaths,
    reporter: &mut dyn ReportPort,
) -> Result<RunOutcome, DomainError> {
    let format = match format_tag.parse::<DataFormat>() {
        Ok(format) => format,
        Err(DomainError::UnsupportedFormat(tag)) => {
            warn!(format = %tag, "unsupported file format");
            reporter.unsupported_format(&tag)?;
            return Ok(RunOutcome::UnsupportedFormat);
        }
        Err(e) => return Err(e),
    };

    let loader = factory_for(format).create_loader();
    let participants = MeetingService::new(loader)
        .with_resolution(resolution)
        .run(meeting_path, reporter)?;
    Ok(RunOutcome::Completed { participants })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ui::ConsoleReporter;
    use crate::domain::LoadError;
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// In-memory loader that records the order of requested paths.
    struct StubLoader {
        meeting: Meeting,
        users: HashMap<PathBuf, User>,
        calls: Mutex<Vec<PathBuf>>,
    }

    impl DataLoader for StubLoader {
        fn load_meeting(&self, path: &Path) -> Result<Meeting, DomainError> {
            self.calls.lock().unwrap().push(path.to_path_buf());
            Ok(self.meeting.clone())
        }

        fn load_user(&self, path: &Path) -> Result<User, DomainError> {
            self.calls.lock().unwrap().push(path.to_path_buf());
            self.users
                .get(path)
                .cloned()
                .ok_or_else(|| DomainError::load(path, LoadError::NotFound))
        }
    }

    fn user(id: i32, name: &str) -> User {
        User {
            id,
            name: name.into(),
            avatar: format!("{}.png", name.to_lowercase()),
        }
    }

    fn stub(files: &[&str], users: &[(&str, User)]) -> StubLoader {
        StubLoader {
            meeting: Meeting {
                date: "2024-01-10".into(),
                description: "Sprint review".into(),
                url: "https://example.test/m1".into(),
                participant_files: files.iter().map(|s| s.to_string()).collect(),
            },
            users: users
                .iter()
                .map(|(p, u)| (PathBuf::from(p), u.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(reporter.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_load_preserves_reference_order() {
        let loader = stub(
            &["c.json", "a.json", "b.json"],
            &[
                ("a.json", user(1, "Ann")),
                ("b.json", user(2, "Ben")),
                ("c.json", user(3, "Cid")),
            ],
        );
        let service = MeetingService::new(Box::new(loader)).with_resolution(ParticipantPaths::AsIs);

        let loaded = service.load(Path::new("meeting.json")).unwrap();
        assert_eq!(loaded.meeting.description, "Sprint review");
        let names: Vec<_> = loaded.participants.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Cid", "Ann", "Ben"]);
    }

    #[test]
    fn test_empty_participants_still_reports_summary() {
        let service = MeetingService::new(Box::new(stub(&[], &[])));
        let mut reporter = ConsoleReporter::new(Vec::new());

        let count = service.run(Path::new("meeting.json"), &mut reporter).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            output(reporter),
            [
                "Meeting on 2024-01-10, URL: https://example.test/m1",
                "Description: Sprint review",
                "All participants loaded.",
            ]
        );
    }

    #[test]
    fn test_first_failure_stops_run() {
        let loader = stub(
            &["a.json", "missing.json", "b.json"],
            &[("a.json", user(1, "Ann")), ("b.json", user(2, "Ben"))],
        );
        let service = MeetingService::new(Box::new(loader)).with_resolution(ParticipantPaths::AsIs);
        let mut reporter = ConsoleReporter::new(Vec::new());

        let err = service
            .run(Path::new("meeting.json"), &mut reporter)
            .unwrap_err();
        assert!(matches!(err, DomainError::Load { ref path, .. } if path == Path::new("missing.json")));
        let lines = output(reporter);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "User Ann (ID: 1)");
    }

    #[test]
    fn test_resolution_modes() {
        let meeting = Path::new("/data/files/meeting.json");
        assert_eq!(
            ParticipantPaths::RelativeToMeeting.resolve(meeting, "u1.json"),
            PathBuf::from("/data/files/u1.json")
        );
        assert_eq!(
            ParticipantPaths::AsIs.resolve(meeting, "u1.json"),
            PathBuf::from("u1.json")
        );
        assert_eq!(
            ParticipantPaths::RelativeToMeeting.resolve(meeting, "/abs/u1.json"),
            PathBuf::from("/abs/u1.json")
        );
    }

    #[test]
    fn test_run_json_example_scenario() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("meeting.json"),
            r#"{"date": "2024-01-10", "description": "Sprint review",
                "url": "https://example.test/m1", "participantFiles": ["u1.json", "u2.json"]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("u1.json"),
            r#"{"id": 1, "name": "Ann", "avatar": "a.png"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("u2.json"),
            r#"{"id": 2, "name": "Ben", "avatar": "b.png"}"#,
        )
        .unwrap();

        let mut reporter = ConsoleReporter::new(Vec::new());
        let outcome = run(
            "json",
            &dir.path().join("meeting.json"),
            ParticipantPaths::RelativeToMeeting,
            &mut reporter,
        )
        .unwrap();

        assert_eq!(outcome, RunOutcome::Completed { participants: 2 });
        assert_eq!(
            output(reporter),
            [
                "Meeting on 2024-01-10, URL: https://example.test/m1",
                "Description: Sprint review",
                "User Ann (ID: 1)",
                "User Ben (ID: 2)",
                "All participants loaded.",
            ]
        );
    }

    #[test]
    fn test_run_xml() {
        let dir = TempDir::new().unwrap();
        let u1 = dir.path().join("u1.xml");
        fs::write(&u1, "<User><ID>1</ID><Name>Ann</Name><Avatar>a.png</Avatar></User>").unwrap();
        fs::write(
            dir.path().join("meeting.xml"),
            format!(
                "<Meeting><Date>2024-01-10</Date><Description>Sprint review</Description>\
                 <URL>https://example.test/m1</URL>\
                 <ParticipantFiles><string>{}</string></ParticipantFiles></Meeting>",
                u1.display()
            ),
        )
        .unwrap();

        let mut reporter = ConsoleReporter::new(Vec::new());
        let outcome = run(
            "xml",
            &dir.path().join("meeting.xml"),
            ParticipantPaths::AsIs,
            &mut reporter,
        )
        .unwrap();

        assert_eq!(outcome, RunOutcome::Completed { participants: 1 });
        assert_eq!(output(reporter)[2], "User Ann (ID: 1)");
    }

    #[test]
    fn test_run_unsupported_format_loads_nothing() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let outcome = run(
            "yaml",
            Path::new("/nonexistent/meeting.yaml"),
            ParticipantPaths::default(),
            &mut reporter,
        )
        .unwrap();

        assert_eq!(outcome, RunOutcome::UnsupportedFormat);
        assert_eq!(
            output(reporter),
            ["Unsupported file format 'yaml'. Use json or xml."]
        );
    }

    #[test]
    fn test_run_json_file_through_xml_loader_fails() {
        let dir = TempDir::new().unwrap();
        let meeting = dir.path().join("meeting.json");
        fs::write(&meeting, r#"{"date": "2024-01-10"}"#).unwrap();

        let mut reporter = ConsoleReporter::new(Vec::new());
        let err = run("xml", &meeting, ParticipantPaths::default(), &mut reporter).unwrap_err();
        assert!(matches!(err, DomainError::Load { .. }));
        assert!(output(reporter).is_empty());
    }
}
