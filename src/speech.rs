//! Classified speech-capture failures.
//!
//! Speech recognition is an external collaborator; the pipeline itself only
//! ever sees a non-empty recognized string. When capture fails before that
//! point, the engine's error label is mapped onto this enum so callers can
//! show a meaningful message. None of these are retried automatically.

/// Custom error type for the speech-capture layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechCaptureError {
    #[error("沒有偵測到語音，請再試一次")]
    NoSpeech,
    #[error("無法存取麥克風，請檢查權限設定")]
    AudioCapture,
    #[error("麥克風權限被拒絕，請允許使用麥克風")]
    NotAllowed,
    #[error("網路連線問題，請檢查網路")]
    Network,
    #[error("語音服務不可用")]
    ServiceNotAllowed,
    #[error("語音識別發生錯誤: {0}")]
    Unrecognized(String),
}

/// Map a recognition engine's error label onto a classified error.
pub fn classify_capture_error(label: &str) -> SpeechCaptureError {
    match label {
        "no-speech" => SpeechCaptureError::NoSpeech,
        "audio-capture" => SpeechCaptureError::AudioCapture,
        "not-allowed" => SpeechCaptureError::NotAllowed,
        "network" => SpeechCaptureError::Network,
        "service-not-allowed" => SpeechCaptureError::ServiceNotAllowed,
        other => SpeechCaptureError::Unrecognized(other.to_string()),
    }
}
