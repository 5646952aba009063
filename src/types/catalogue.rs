use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One entry of the soundboard catalogue. Created once at startup, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    pub id: u32,
    /// Path of the audio file, absolute or relative to the working directory.
    pub source: String,
    pub label: String,
}

/// The stock clip set for the quiz-show control desk.
pub fn builtin_catalogue() -> Vec<ClipDescriptor> {
    let clips = [
        ("assets/opening-theme.mp3", "Opening Theme"),
        ("assets/closing-buzzer.mp3", "Closing Buzzer"),
        ("assets/contestant-select-loop.mp3", "Contestant Select (loop)"),
        ("assets/contestant-select-end.mp3", "Contestant Select End"),
        ("assets/question-sting.mp3", "Question Sting"),
        ("assets/question-background.mp3", "Question Background"),
        ("assets/timer-30.mp3", "Timer - 30 seconds"),
        ("assets/timer-60.mp3", "Timer - 60 seconds"),
        ("assets/timer-90.mp3", "Timer - 90 seconds"),
        ("assets/timer-120.mp3", "Timer - 120 seconds"),
        ("assets/answer-lock.mp3", "Answer Lock"),
        ("assets/correct-answer.mp3", "Correct Answer"),
        ("assets/wrong-answer.mp3", "Wrong Answer"),
    ];
    clips
        .iter()
        .enumerate()
        .map(|(i, (source, label))| ClipDescriptor {
            id: i as u32 + 1,
            source: source.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Loads the catalogue from a JSON file, falling back to the built-in clip
/// set when the file does not exist. A file that exists but cannot be read
/// or parsed is an error rather than a silent fallback.
pub fn load_catalogue(path: &Path) -> anyhow::Result<Vec<ClipDescriptor>> {
    if !path.exists() {
        log::info!(
            "no catalogue file at {}, using built-in clip set",
            path.display()
        );
        return Ok(builtin_catalogue());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalogue file {}", path.display()))?;
    let clips: Vec<ClipDescriptor> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse catalogue file {}", path.display()))?;
    log::info!("loaded {} clips from {}", clips.len(), path.display());
    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue_has_unique_ids() {
        let clips = builtin_catalogue();
        assert!(!clips.is_empty());
        let mut ids: Vec<u32> = clips.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), clips.len());
    }

    #[test]
    fn test_catalogue_json_roundtrip() {
        let json = r#"[
            { "id": 1, "source": "bell.mp3", "label": "Bell" },
            { "id": 2, "source": "gong.mp3", "label": "Gong" }
        ]"#;
        let clips: Vec<ClipDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0].label, "Bell");
        assert_eq!(clips[1].source, "gong.mp3");

        let back = serde_json::to_string(&clips).unwrap();
        let again: Vec<ClipDescriptor> = serde_json::from_str(&back).unwrap();
        assert_eq!(again, clips);
    }

    #[test]
    fn test_load_catalogue_missing_file_uses_builtin() {
        let clips = load_catalogue(Path::new("/nonexistent/soundboard.json")).unwrap();
        assert_eq!(clips, builtin_catalogue());
    }
}
