use crate::common_derives;

common_derives! {
    /// Tentative speaker attribution attached to a word by the diarization /
    /// identity-resolution step. Either field, both, or neither may be
    /// present; a fully absent identity means "unknown speaker."
    pub struct SpeakerIdentity {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub speaker_index: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub human_id: Option<String>,
    }
}

common_derives! {
    /// One recognized word with timing, channel, finality, and optional
    /// tentative speaker identity.
    ///
    /// `is_final = false` marks an interim hypothesis that the recognizer may
    /// still revise; once a word is emitted final it is never re-emitted as
    /// interim. `text` is carried through untouched; downstream consumers
    /// own joining and display.
    pub struct WordFrame {
        pub text: String,
        pub start_ms: i64,
        pub end_ms: i64,
        pub channel: i32,
        pub is_final: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub identity: Option<SpeakerIdentity>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_without_identity_parses() {
        let frame: WordFrame = serde_json::from_str(
            r#"{"text":" hey","start_ms":0,"end_ms":120,"channel":0,"is_final":true}"#,
        )
        .unwrap();

        assert_eq!(frame.text, " hey");
        assert!(frame.identity.is_none());
    }

    #[test]
    fn partial_identity_parses_with_missing_field_absent() {
        let frame: WordFrame = serde_json::from_str(
            r#"{"text":" hey","start_ms":0,"end_ms":120,"channel":1,"is_final":false,"identity":{"human_id":"spk_ana"}}"#,
        )
        .unwrap();

        let identity = frame.identity.unwrap();
        assert_eq!(identity.human_id.as_deref(), Some("spk_ana"));
        assert!(identity.speaker_index.is_none());
    }

    #[test]
    fn absent_fields_are_omitted_when_serialized() {
        let frame = WordFrame {
            text: " hey".to_string(),
            start_ms: 0,
            end_ms: 120,
            channel: 0,
            is_final: true,
            identity: None,
        };

        let json = serde_json::to_string(&frame).unwrap();
        assert!(!json.contains("identity"), "absent identity must be omitted: {json}");
    }
}
