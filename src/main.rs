//! Aurafit CLI
//!
//! Usage:
//!   aurafit --angles "180,70,175"            # One-shot synthetic evaluation
//!   aurafit --interactive                    # Angle-per-line synthetic mode
//!   aurafit --replay frames.jsonl            # Replay recorded pose frames
//!   aurafit --serve                          # HTTP API server
//!   aurafit --angles "180,70,175" --json     # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use aurafit::core::engine::synthetic_frame;
use aurafit::core::{run_server, RepEngine};
use aurafit::types::{ExerciseKind, Frame, FrameResult, RepPhase};
use aurafit::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "aurafit",
    version = VERSION,
    about = "Aurafit - Count exercise reps from 2D pose estimates",
    long_about = "Aurafit is the rep-counting core of the Aura fitness tracker.\n\n\
                  It turns a stream of 2D joint estimates into rep counts and\n\
                  coaching feedback via a per-exercise threshold state machine.\n\n\
                  Modes:\n  \
                  --angles       One-shot evaluation of a comma-separated angle sweep\n  \
                  --interactive  Type one angle per line (synthetic pose source)\n  \
                  --replay       Replay a JSONL file of recorded pose frames\n  \
                  --serve        HTTP API server mode\n\n\
                  Phases:\n  \
                  EXTENDED    - Limb near straight\n  \
                  CONTRACTED  - Limb bent past the exercise threshold"
)]
struct Args {
    /// Comma-separated joint angles to evaluate in one shot
    #[arg(short, long)]
    angles: Option<String>,

    /// Interactive mode - read one angle per line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Replay a JSONL file of recorded pose frames
    #[arg(short, long)]
    replay: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Exercise to track
    #[arg(short, long, value_enum, default_value_t = ExerciseKind::Squat)]
    exercise: ExerciseKind,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show threshold breakdown per frame
    #[arg(long)]
    verbose: bool,

    /// Directory for workout history (default: ./workouts)
    #[arg(long, default_value = "./workouts")]
    data_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref path) = args.replay {
        run_replay(path, &args);
    } else if let Some(ref angles) = args.angles {
        run_angles(angles, &args);
    } else if args.interactive {
        run_interactive(&args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Evaluate a comma-separated list of angles in one shot
fn run_angles(angles: &str, args: &Args) {
    let mut engine = RepEngine::new(args.exercise);

    for token in angles.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let angle: f64 = match token.parse() {
            Ok(a) => a,
            Err(_) => {
                eprintln!("Skipping non-numeric angle: {}", token);
                continue;
            }
        };
        let frame = synthetic_frame(args.exercise, angle);
        let result = engine.process(&frame.joints);
        print_result(&result, args);
    }

    if !args.json {
        println!();
        println!("Total reps: {}", engine.rep_count());
    }
}

/// Run interactive mode - one angle per line from a synthetic pose source
fn run_interactive(args: &Args) {
    let mut engine = RepEngine::new(args.exercise);
    let profile = engine.thresholds();

    print_header(&format!("{} - Interactive", args.exercise.name()), args.no_color);
    println!("{}", args.exercise.description());
    println!(
        "Type a joint angle (degrees) per line. Thresholds: down < {:.0}°, up > {:.0}°.",
        profile.contracted_deg, profile.extended_deg
    );
    println!("Type 'reset' between sets, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&engine, args.no_color);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSet ended. Reps: {} ({} frames)", engine.rep_count(), engine.frame_count());
            break;
        }
        if line.eq_ignore_ascii_case("reset") {
            engine.reset();
            println!("Set reset.");
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let angle: f64 = match line.parse() {
            Ok(a) => a,
            Err(_) => {
                println!("Enter an angle in degrees, 'reset', or 'quit'.");
                continue;
            }
        };

        let frame = synthetic_frame(args.exercise, angle);
        let result = engine.process(&frame.joints);
        print_result(&result, args);
    }
}

/// Replay a JSONL file of recorded pose frames
fn run_replay(path: &str, args: &Args) {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Cannot open {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut engine = RepEngine::new(args.exercise);
    let reader = io::BufReader::new(file);
    let mut frames = 0u64;

    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Read error at line {}: {}", line_no + 1, e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame = match serde_json::from_str(&line) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Skipping malformed frame at line {}: {}", line_no + 1, e);
                continue;
            }
        };

        let result = engine.process(&frame.joints);
        frames += 1;
        print_result(&result, args);
    }

    if !args.json {
        println!();
        println!(
            "Replay finished: {} frames, {} reps ({})",
            frames,
            engine.rep_count(),
            args.exercise.name()
        );
    }
}

/// Print one frame result in the selected format
fn print_result(result: &FrameResult, args: &Args) {
    if args.json {
        match serde_json::to_string(result) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Serialization error: {}", e),
        }
    } else if args.verbose {
        print_verbose(result, args);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
        if result.is_new_rep {
            println!("\x1b[32m  ✓ Rep {} counted\x1b[0m", result.rep_count);
        }
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Aurafit v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Aurafit v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Format the interactive prompt
fn format_prompt(engine: &RepEngine, no_color: bool) -> String {
    let phase = engine.phase();
    if no_color {
        format!("[{} | reps={}] > ", phase, engine.rep_count())
    } else {
        format!(
            "{}{} [{} | reps={}]{} > ",
            phase.color_code(),
            phase.emoji(),
            phase,
            engine.rep_count(),
            RepPhase::color_reset()
        )
    }
}

/// Print verbose frame output with the threshold breakdown
fn print_verbose(result: &FrameResult, args: &Args) {
    let profile = args.exercise.profile();
    let color = if args.no_color { "" } else { result.phase.color_code() };
    let reset = if args.no_color { "" } else { RepPhase::color_reset() };

    println!("{}+-------------------------------------+{}", color, reset);
    println!(
        "{}| {} = {:.1} deg{}",
        color, profile.joint_label, result.smoothed_angle, reset
    );
    println!(
        "{}| thresholds: down < {:.0} | up > {:.0}{}",
        color, profile.contracted_deg, profile.extended_deg, reset
    );
    println!(
        "{}| phase: {} | reps: {} | rep this frame: {}{}",
        color, result.phase, result.rep_count, result.is_new_rep, reset
    );
    println!("{}| feedback: {}{}", color, result.feedback, reset);
    println!("{}+-------------------------------------+{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    print_header("API Server", args.no_color);

    if let Err(e) = run_server(&args.addr, args.data_dir.clone()).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
