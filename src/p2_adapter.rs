//! Pattern 2: Structural Patterns
//! Example: Adapter - Bridging Incompatible Interfaces
//!
//! Run with: cargo run --bin p2_adapter
//!
//! The client speaks `MediaPlayer`; the legacy `VideoPlayer` speaks its own
//! `play_video` dialect. The adapter translates between them so mp4 files can
//! flow through an audio-player interface without either side changing.

// ============================================================================
// Example: Adapter with Trait Objects
// ============================================================================

// Target interface the client code expects.
trait MediaPlayer {
    fn play_audio(&self, kind: &str, file_name: &str) -> String;
}

// Adaptee: existing component with an incompatible interface.
struct VideoPlayer;

impl VideoPlayer {
    fn play_video(&self, video_kind: &str, file_name: &str) -> String {
        if video_kind == "mp4" {
            format!("Playing mp4 video: {}", file_name)
        } else {
            format!("Unsupported video format: {}", video_kind)
        }
    }
}

// Adapter: owns the adaptee and translates the call.
struct MediaAdapter {
    video_player: VideoPlayer,
}

impl MediaAdapter {
    fn new() -> Self {
        Self {
            video_player: VideoPlayer,
        }
    }
}

impl MediaPlayer for MediaAdapter {
    fn play_audio(&self, kind: &str, file_name: &str) -> String {
        if kind == "mp4" {
            self.video_player.play_video(kind, file_name)
        } else {
            format!("Unsupported audio format: {}", kind)
        }
    }
}

// Client-facing player: handles mp3 itself, delegates mp4 to the adapter.
struct AudioPlayer {
    media_adapter: MediaAdapter,
}

impl AudioPlayer {
    fn new() -> Self {
        Self {
            media_adapter: MediaAdapter::new(),
        }
    }
}

impl MediaPlayer for AudioPlayer {
    fn play_audio(&self, kind: &str, file_name: &str) -> String {
        match kind {
            "mp3" => format!("Playing mp3 audio: {}", file_name),
            "mp4" => self.media_adapter.play_audio(kind, file_name),
            _ => format!("Unsupported format: {}", kind),
        }
    }
}

fn adapter_trait_object_example() {
    let player = AudioPlayer::new();

    println!("{}", player.play_audio("mp3", "song.mp3"));
    println!("{}", player.play_audio("mp4", "movie.mp4"));
    println!("{}", player.play_audio("avi", "video.avi"));
}

// ============================================================================
// Example: Zero-cost Adapter with Generics
// ============================================================================

trait PlaysVideo {
    fn play_video(&self, kind: &str, file_name: &str) -> String;
}

impl PlaysVideo for VideoPlayer {
    fn play_video(&self, kind: &str, file_name: &str) -> String {
        VideoPlayer::play_video(self, kind, file_name)
    }
}

// Monomorphized per adaptee; no trait object overhead.
struct GenericAdapter<T> {
    inner: T,
}

impl<T: PlaysVideo> MediaPlayer for GenericAdapter<T> {
    fn play_audio(&self, kind: &str, file_name: &str) -> String {
        self.inner.play_video(kind, file_name)
    }
}

fn adapter_generic_example() {
    let adapter = GenericAdapter { inner: VideoPlayer };
    println!("{}", adapter.play_audio("mp4", "movie.mkv.mp4"));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp3_plays_natively() {
        let player = AudioPlayer::new();
        assert_eq!(
            player.play_audio("mp3", "song.mp3"),
            "Playing mp3 audio: song.mp3"
        );
    }

    #[test]
    fn test_mp4_goes_through_adapter() {
        let player = AudioPlayer::new();
        assert_eq!(
            player.play_audio("mp4", "movie.mp4"),
            "Playing mp4 video: movie.mp4"
        );
    }

    #[test]
    fn test_unknown_format_reported() {
        let player = AudioPlayer::new();
        assert_eq!(
            player.play_audio("avi", "video.avi"),
            "Unsupported format: avi"
        );
    }

    #[test]
    fn test_adapter_rejects_non_mp4_audio() {
        let adapter = MediaAdapter::new();
        assert_eq!(
            adapter.play_audio("ogg", "clip.ogg"),
            "Unsupported audio format: ogg"
        );
    }

    #[test]
    fn test_generic_adapter() {
        let adapter = GenericAdapter { inner: VideoPlayer };
        assert_eq!(
            adapter.play_audio("mp4", "movie.mp4"),
            "Playing mp4 video: movie.mp4"
        );
    }
}

fn main() {
    println!("=== Adapter Pattern (Trait Objects) ===");
    adapter_trait_object_example();
    println!();

    println!("=== Adapter Pattern (Generics) ===");
    adapter_generic_example();
}
