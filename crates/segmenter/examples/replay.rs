use clap::Parser;
use frame_interface::WordFrame;
use segmenter::{DEFAULT_MAX_GAP_MS, ProtoSegment, SegmentAccumulator, SegmenterConfig};

#[derive(Clone, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
enum Fixture {
    Meeting,
    Dictation,
}

impl Fixture {
    fn json(&self) -> &'static str {
        match self {
            Self::Meeting => seg_data::meeting_1::FRAMES_JSON,
            Self::Dictation => seg_data::dictation_1::FRAMES_JSON,
        }
    }
}

#[derive(clap::Parser)]
#[command(name = "replay", about = "Replay a word-frame fixture through the segmenter")]
struct Args {
    #[arg(short, long, default_value_t = Fixture::Meeting)]
    fixture: Fixture,

    /// Maximum in-segment silence in milliseconds.
    #[arg(short, long, default_value_t = DEFAULT_MAX_GAP_MS)]
    gap_ms: i64,

    /// Print the segment list after every ingested frame.
    #[arg(long)]
    step: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let frames: Vec<WordFrame> = serde_json::from_str(args.fixture.json())?;
    frame_interface::ensure_chronological(&frames)?;

    let total = frames.len();
    let mut acc = SegmentAccumulator::with_config(SegmenterConfig {
        max_gap_ms: args.gap_ms,
    });

    for frame in frames {
        acc.ingest(frame);
        if args.step {
            render(acc.segments());
            println!();
        }
    }

    if !args.step {
        render(acc.segments());
    }

    println!(
        "Done. {} segments from {} frames ({} fixture).",
        acc.segments().len(),
        total,
        args.fixture,
    );
    Ok(())
}

fn render(segments: &[ProtoSegment]) {
    for segment in segments {
        let speaker = match (&segment.key.human_id, segment.key.speaker_index) {
            (Some(human_id), _) => human_id.clone(),
            (None, Some(index)) => format!("speaker {index}"),
            (None, None) => "unknown".to_string(),
        };

        let text: String = segment.words.iter().map(|w| w.text.as_str()).collect();
        let stability = if segment.all_final() { " " } else { "~" };

        println!(
            "[ch {} | {:<12}] {}{}  ({}ms-{}ms)",
            segment.key.channel,
            speaker,
            stability,
            text.trim(),
            segment.start_ms(),
            segment.end_ms(),
        );
    }
}
