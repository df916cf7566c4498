//! Scaling probe for the full-table aligner.
//!
//! Runs alignments across growing input sizes, records wall time and RSS
//! delta, and verifies scores against an independent two-row score-only
//! recurrence up to a configurable size limit. The full table is quadratic
//! in memory, so sizes are capped well below what score-only code handles.

use std::env;
use std::time::Instant;

use gotoh_align::{align, Penalties};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("align_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let penalties = Penalties::new(1, 3, 1).expect("probe penalties are positive");
    let mut sys = System::new();
    let mut measurements = Vec::with_capacity(SIZES.len());

    for &len in SIZES {
        let s = deterministic_dna(len, 0);
        let t = deterministic_dna(len, 3);

        let before = rss_kib(&mut sys);
        let start = Instant::now();
        let alignment = align(&s, &t, penalties);
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(&mut sys);

        let verification = if len <= options.verify_limit {
            let baseline = rolling_score(&s, &t, penalties);
            if baseline == alignment.score() {
                VerificationStatus::Passed
            } else {
                eprintln!(
                    "align_probe: len={len} score mismatch: expected {baseline}, got {}",
                    alignment.score()
                );
                VerificationStatus::Failed
            }
        } else {
            VerificationStatus::NotChecked
        };

        measurements.push(Measurement {
            len,
            score: alignment.score(),
            columns: alignment.len(),
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            verification,
        });
    }

    options.format.write(&measurements);

    if measurements
        .iter()
        .any(|m| matches!(m.verification, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin align_probe [-- <options>]

Options:
  --format <csv|table>      Output format (default: csv)
  --verify-limit <N>        Maximum length verified against the score-only
                            baseline (default: 512)
  -h, --help                Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
        }
    }
}

struct Measurement {
    len: usize,
    score: u32,
    columns: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: VerificationStatus,
}

#[derive(Copy, Clone)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn write_csv(measurements: &[Measurement]) {
    println!("len,score,columns,wall_s,rss_delta_kib,verification");
    for m in measurements {
        println!(
            "{},{},{},{:.3},{},{}",
            m.len,
            m.score,
            m.columns,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label()
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:>8}  {:>8}  {:>8}  {:>10}  {:>14}  {:>12}",
        "len", "score", "columns", "wall_s", "rss_delta_kib", "verification"
    );
    for m in measurements {
        println!(
            "{:>8}  {:>8}  {:>8}  {:>10.3}  {:>14}  {:>12}",
            m.len,
            m.score,
            m.columns,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label()
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()])
        .collect()
}

const INF: u32 = u32::MAX;

/// Score-only baseline: the same three-state recurrence over two rolling
/// rows, no pointers, O(min-row) memory.
fn rolling_score(s: &[u8], t: &[u8], penalties: Penalties) -> u32 {
    let m = t.len();
    let open = penalties.gap_open();
    let extend = penalties.gap_extend();

    let mut m_prev = vec![INF; m + 1];
    let mut ix_prev = vec![INF; m + 1];
    let mut iy_prev = vec![INF; m + 1];
    m_prev[0] = 0;
    for j in 1..=m {
        iy_prev[j] = if j == 1 {
            open
        } else {
            iy_prev[j - 1].saturating_add(extend)
        };
    }

    for (i, &cs) in s.iter().enumerate() {
        let mut m_cur = vec![INF; m + 1];
        let mut ix_cur = vec![INF; m + 1];
        let mut iy_cur = vec![INF; m + 1];
        ix_cur[0] = if i == 0 {
            open
        } else {
            ix_prev[0].saturating_add(extend)
        };

        for j in 1..=m {
            let subst = if cs == t[j - 1] {
                0
            } else {
                penalties.mismatch()
            };
            let diag = m_prev[j - 1].min(ix_prev[j - 1]).min(iy_prev[j - 1]);
            m_cur[j] = diag.saturating_add(subst);
            ix_cur[j] = m_prev[j]
                .saturating_add(open)
                .min(ix_prev[j].saturating_add(extend));
            iy_cur[j] = m_cur[j - 1]
                .saturating_add(open)
                .min(iy_cur[j - 1].saturating_add(extend));
        }

        m_prev = m_cur;
        ix_prev = ix_cur;
        iy_prev = iy_cur;
    }

    m_prev[m].min(ix_prev[m]).min(iy_prev[m])
}
