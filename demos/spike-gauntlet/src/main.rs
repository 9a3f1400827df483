//! Headless demo: sets up a small level directory, then drives one run of
//! the gauntlet with scripted input instead of a window. Useful as an
//! end-to-end smoke test and as a worked example of the engine API — a
//! real frontend implements the same `Frontend` trait against a window
//! and a GPU.

use std::path::PathBuf;

use boxhop_engine::{
    FrameData, Frontend, InputEvent, Key, LevelSelect, RunOutcome, TextureRegistry,
};

/// A ground plank, a spike pit in the middle, and a finish zone on the far
/// right. Running right without jumping lands in the pit.
const GAUNTLET: &str = "player 100 500;\n\
                        object 540 600 1080 50;\n\
                        spike 540 560 120 30;\n\
                        finish 1000 550 50 60;\n";

/// Scripted stand-in for a windowed frontend: holds the right-run key for
/// a while, jumps over the pit, and eventually gives up via escape so the
/// demo always terminates.
struct ScriptedRun {
    tick: u32,
    frames: u32,
}

impl ScriptedRun {
    fn new() -> Self {
        Self { tick: 0, frames: 0 }
    }
}

impl Frontend for ScriptedRun {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.tick += 1;
        match self.tick {
            1 => vec![InputEvent::KeyDown(Key::Right)],
            40 => vec![InputEvent::KeyDown(Key::Jump)],
            45 => vec![InputEvent::KeyUp(Key::Jump)],
            90 => vec![InputEvent::KeyDown(Key::Jump)],
            95 => vec![InputEvent::KeyUp(Key::Jump)],
            // Give up after five simulated seconds if the finish line
            // has not ended the run by itself.
            300 => vec![InputEvent::KeyDown(Key::Quit)],
            _ => Vec::new(),
        }
    }

    fn present(&mut self, frame: &FrameData) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::info!(
                "t={:.2}s fps={:.0} sprites={}",
                frame.hud.elapsed,
                frame.hud.measured_fps,
                frame.instances.len()
            );
        }
    }
}

fn main() {
    env_logger::init();

    let root = std::env::temp_dir().join("spike-gauntlet-demo");
    let levels_dir = root.join("levels");
    if let Err(e) = std::fs::create_dir_all(&levels_dir) {
        eprintln!("cannot create demo directory {}: {}", levels_dir.display(), e);
        std::process::exit(1);
    }
    let level_path: PathBuf = levels_dir.join("gauntlet.lvl");
    if let Err(e) = std::fs::write(&level_path, GAUNTLET) {
        eprintln!("cannot write demo level: {}", e);
        std::process::exit(1);
    }

    let mut select = LevelSelect::load(
        &levels_dir,
        root.join("records.json"),
        &root.join("settings.json"),
    );
    // No texture manifest on disk: every sprite falls back to its role
    // color, which is all a headless run needs.
    let registry = TextureRegistry::new();

    println!("levels:");
    for entry in select.entries() {
        match select.best(&entry.id) {
            Some(best) => println!("  {} | best {:.2}s", entry.id, best),
            None => println!("  {} | no record", entry.id),
        }
    }

    let mut frontend = ScriptedRun::new();
    match select.play("gauntlet", &mut frontend, &registry) {
        Ok(report) => match report.outcome {
            RunOutcome::Finished(time) => {
                println!("finished in {:.2}s (new best: {})", time, report.improved);
            }
            RunOutcome::Quit => println!("gave up after {} frames", frontend.frames),
        },
        Err(e) => {
            eprintln!("demo run failed: {}", e);
            std::process::exit(1);
        }
    }
}
