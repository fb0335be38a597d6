use crate::core::input::Direction;
use crate::game::note::NoteKind;
use serde::{Deserialize, Serialize};

/// One authored note within a beat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteSpec {
    pub direction: Direction,
    #[serde(flatten)]
    pub kind: NoteKind,
}

impl NoteSpec {
    pub const fn tap(direction: Direction) -> Self {
        Self { direction, kind: NoteKind::Tap }
    }
}

/// Immutable song description: tempo plus an ordered list of beats, each beat
/// the set of notes spawned together. Empty beats are valid and spawn
/// nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub bpm: f32,
    pub beatmap: Vec<Vec<NoteSpec>>,
}

impl Song {
    pub fn beat_duration(&self) -> f32 {
        60.0 / self.bpm
    }

    /// Game time at which beat `index` is due; beat 0 lands one full beat
    /// after the song starts.
    pub fn beat_due_time(&self, index: usize) -> f32 {
        (index as f32 + 1.0) * self.beat_duration()
    }

    pub fn is_playable(&self) -> bool {
        self.bpm.is_finite() && self.bpm > 0.0
    }
}

/// The catalog shipped in the binary, used when no catalog file is
/// configured or the configured one fails to load.
pub fn builtin_catalog() -> Vec<Song> {
    use Direction::*;
    vec![Song {
        name: "Demo".to_string(),
        bpm: 120.0,
        beatmap: vec![
            vec![NoteSpec::tap(UpLeft), NoteSpec::tap(UpRight)],
            vec![],
            vec![NoteSpec::tap(LeftUp), NoteSpec::tap(RightUp)],
            vec![],
            vec![NoteSpec::tap(LeftDown)],
            vec![NoteSpec::tap(RightDown)],
            vec![NoteSpec::tap(DownLeft), NoteSpec::tap(DownRight)],
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beat_duration_from_bpm() {
        let song = Song { name: "t".into(), bpm: 120.0, beatmap: vec![] };
        assert_eq!(song.beat_duration(), 0.5);
        assert_eq!(song.beat_due_time(0), 0.5);
        assert_eq!(song.beat_due_time(3), 2.0);
    }

    #[test]
    fn zero_and_negative_bpm_are_unplayable() {
        let mut song = Song { name: "t".into(), bpm: 0.0, beatmap: vec![] };
        assert!(!song.is_playable());
        song.bpm = -60.0;
        assert!(!song.is_playable());
        song.bpm = 90.0;
        assert!(song.is_playable());
    }

    #[test]
    fn builtin_catalog_is_playable() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 1);
        let demo = &catalog[0];
        assert!(demo.is_playable());
        assert_eq!(demo.beatmap.len(), 7);
        assert!(demo.beatmap[1].is_empty());
    }

    #[test]
    fn note_spec_json_shape() {
        let spec: NoteSpec = serde_json::from_str(r#"{"direction": 3, "kind": "hold", "beats": 2.0}"#).unwrap();
        assert_eq!(spec.direction, Direction::DownLeft);
        assert_eq!(spec.kind, crate::game::note::NoteKind::Hold { beats: 2.0 });

        let tap: NoteSpec = serde_json::from_str(r#"{"direction": 0, "kind": "tap"}"#).unwrap();
        assert_eq!(tap, NoteSpec::tap(Direction::UpLeft));

        // Direction indices are validated on deserialize.
        assert!(serde_json::from_str::<NoteSpec>(r#"{"direction": 8, "kind": "tap"}"#).is_err());
    }
}
