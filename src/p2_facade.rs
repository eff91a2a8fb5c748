// Pattern 2: Structural Patterns - Facade
// One simple call over a set of fiddly subsystems. The facade owns the
// subsystems outright; clients never see them.

// ============================================================================
// Subsystems
// ============================================================================

struct DvdPlayer;

impl DvdPlayer {
    fn on(&self) -> String {
        "DVD Player is ON.".to_string()
    }

    fn play(&self, movie: &str) -> String {
        format!("Playing movie: {}", movie)
    }

    fn off(&self) -> String {
        "DVD Player is OFF.".to_string()
    }
}

struct Projector;

impl Projector {
    fn on(&self) -> String {
        "Projector is ON.".to_string()
    }

    fn set_wide_screen_mode(&self) -> String {
        "Projector set to widescreen mode.".to_string()
    }

    fn off(&self) -> String {
        "Projector is OFF.".to_string()
    }
}

struct SoundSystem;

impl SoundSystem {
    fn on(&self) -> String {
        "Sound System is ON.".to_string()
    }

    fn set_surround_sound(&self) -> String {
        "Sound System set to surround sound.".to_string()
    }

    fn off(&self) -> String {
        "Sound System is OFF.".to_string()
    }
}

// ============================================================================
// Example: Facade Pattern
// ============================================================================

struct HomeTheaterFacade {
    dvd_player: DvdPlayer,
    projector: Projector,
    sound_system: SoundSystem,
}

impl HomeTheaterFacade {
    fn new() -> Self {
        Self {
            dvd_player: DvdPlayer,
            projector: Projector,
            sound_system: SoundSystem,
        }
    }

    // Setup order matters to the subsystems; the facade is the one place
    // that knows it.
    fn watch_movie(&self, movie: &str) -> Vec<String> {
        vec![
            "Setting up the home theater to watch a movie...".to_string(),
            self.projector.on(),
            self.projector.set_wide_screen_mode(),
            self.sound_system.on(),
            self.sound_system.set_surround_sound(),
            self.dvd_player.on(),
            self.dvd_player.play(movie),
        ]
    }

    fn end_movie(&self) -> Vec<String> {
        vec![
            "Shutting down the home theater...".to_string(),
            self.dvd_player.off(),
            self.sound_system.off(),
            self.projector.off(),
        ]
    }
}

fn facade_example() {
    let home_theater = HomeTheaterFacade::new();

    for line in home_theater.watch_movie("Inception") {
        println!("{}", line);
    }
    for line in home_theater.end_movie() {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_sequence() {
        let theater = HomeTheaterFacade::new();
        assert_eq!(
            theater.watch_movie("Inception"),
            vec![
                "Setting up the home theater to watch a movie...",
                "Projector is ON.",
                "Projector set to widescreen mode.",
                "Sound System is ON.",
                "Sound System set to surround sound.",
                "DVD Player is ON.",
                "Playing movie: Inception",
            ]
        );
    }

    #[test]
    fn test_end_movie_shuts_down_in_reverse() {
        let theater = HomeTheaterFacade::new();
        assert_eq!(
            theater.end_movie(),
            vec![
                "Shutting down the home theater...",
                "DVD Player is OFF.",
                "Sound System is OFF.",
                "Projector is OFF.",
            ]
        );
    }
}

fn main() {
    println!("=== Facade Pattern ===");
    facade_example();
}
