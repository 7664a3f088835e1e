use std::env;
use std::time::Instant;

use dp_kernels::{
    find_largest_zero_square,
    synth::{random_matrix, random_uppercase},
    utils::resident_set_kib,
    BinaryMatrix, CharWeights, MatcherBuilder, SquareResult, SubstringMatch,
    WeightedSubstringMatcher,
};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::System;

/// Largest matrix side printed in full.
const DISPLAY_LIMIT: usize = 20;
/// Penalty used by the uniform-weight scenario.
const UNIFORM_PENALTY: f64 = 10.0;
/// Number of intervals in the frequency-weight penalty sweep.
const PENALTY_STEPS: usize = 10;
/// Synthetic sequence lengths.
const SEQUENCE_LENGTHS: &[usize] = &[50, 100, 200, 500, 1000];
/// Synthetic matrix shapes as `(rows, cols)`.
const ZERO_SQUARE_SHAPES: &[(usize, usize)] =
    &[(10, 10), (10, 100), (10, 1000), (100, 1000), (1000, 1000)];
/// Probability of a zero cell in the shape runs.
const SHAPE_ZERO_DENSITY: f64 = 0.3;
/// Side of the square matrix swept over [`ZERO_DENSITIES`].
const DENSITY_SWEEP_SIDE: usize = 100;
const ZERO_DENSITIES: &[f64] = &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
const SUBSTRING_SEED: u64 = 42;
const ZERO_SQUARE_SEED: u64 = 12345;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dp_report: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let rule = "=".repeat(80);
    eprintln!("\n{rule}");
    eprintln!("Dynamic-programming kernels: experimental report");
    eprintln!("{rule}");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Weighted approximate common substring");
    measurements.extend(report_substring(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Largest zero square sub-matrix");
    measurements.extend(report_zero_square(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("dp_report output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    seed: Option<u64>,
    skip_perf: bool,
    seq1: Vec<u8>,
    seq2: Vec<u8>,
    matrix: BinaryMatrix,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 200usize;
        let mut seed = None;
        let mut skip_perf = false;
        let mut seq1 = b"DYNAMICPROGRAMMING".to_vec();
        let mut seq2 = b"DYNAMITEPROGRAMS".to_vec();
        let mut matrix = default_matrix();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => {
                    verify_limit = value("--verify-limit")?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a positive integer".to_string())?
                }
                "--seed" => {
                    seed = Some(
                        value("--seed")?
                            .parse::<u64>()
                            .map_err(|_| "seed must be an unsigned integer".to_string())?,
                    )
                }
                "--skip-perf" => skip_perf = true,
                "--seq1" => seq1 = parse_sequence(&value("--seq1")?)?,
                "--seq2" => seq2 = parse_sequence(&value("--seq2")?)?,
                "--matrix" => {
                    matrix = BinaryMatrix::parse(&value("--matrix")?).map_err(|e| e.to_string())?;
                    if matrix.is_empty() {
                        return Err("matrix must have at least one row and column".into());
                    }
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            seed,
            skip_perf,
            seq1,
            seq2,
            matrix,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin dp_report [-- <options>]

Options:
  --seq1 <A-Z>                  First sequence (default: DYNAMICPROGRAMMING)
  --seq2 <A-Z>                  Second sequence (default: DYNAMITEPROGRAMS)
  --matrix <rows>               Binary matrix, rows separated by ';' (default: 5x5 reference)
  --skip-perf                   Skip the synthetic performance runs
  --seed <N>                    Seed for synthetic data (default: 42 for
                                sequences, 12345 for matrices)
  --verify-limit <N>            Largest input side checked against brute force (default: 200)
  --format <csv|table|json>     Output format (default: csv)
  -h, --help                    Print this help message

Examples:
  cargo run --bin dp_report -- --seq1 ABCD --seq2 ABCE --skip-perf
  cargo run --bin dp_report -- --matrix \"0 0 1;0 0 1;1 1 1\" --format table
"
        );
    }
}

fn default_matrix() -> BinaryMatrix {
    BinaryMatrix::parse("1 0 1 0 0; 1 0 0 0 0; 1 1 0 0 0; 1 0 0 0 0; 1 1 1 0 1")
        .unwrap_or_default()
}

fn parse_sequence(raw: &str) -> Result<Vec<u8>, String> {
    let seq = raw.trim().to_ascii_uppercase().into_bytes();
    if seq.is_empty() || !seq.iter().all(u8::is_ascii_uppercase) {
        return Err(format!("sequence '{raw}' must contain only letters A-Z"));
    }
    Ok(seq)
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    result: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

impl Measurement {
    fn record(&mut self, (status, detail): Verdict) {
        self.verification_status = status;
        self.verification_detail = detail;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

type Verdict = (VerificationStatus, Option<String>);

fn report_substring(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let (s, t) = (&options.seq1, &options.seq2);
    let mut out = Vec::new();
    eprintln!("      String 1: {} (length {})", display_seq(s), s.len());
    eprintln!("      String 2: {} (length {})", display_seq(t), t.len());
    eprintln!();

    eprintln!("      Scenario 1: uniform weights (w = 1.0), penalty = {UNIFORM_PENALTY}");
    let uniform = WeightedSubstringMatcher::new(CharWeights::uniform(1.0), UNIFORM_PENALTY);
    let m = run_match("substring_uniform", s, t, &uniform, options, sys);
    eprintln!("      {} Best match: {} ({:.3} ms)", m.verification_status.icon(), m.result, m.wall_s * 1e3);
    out.push(m);
    eprintln!();

    let freq = CharWeights::english_frequency();
    eprintln!(
        "      Scenario 2: English-frequency weights in [{:.3}, {:.3}], penalty sweep",
        freq.min_weight(),
        freq.max_weight()
    );
    eprintln!("      {:-<76}", "");
    eprintln!("      {:<10} | {:<50} | {:>9}", "penalty", "result", "time (ms)");
    eprintln!("      {:-<76}", "");
    for penalty in freq.penalty_sweep(PENALTY_STEPS) {
        let matcher = match MatcherBuilder::new(freq.clone()).with_penalty(penalty).build() {
            Ok(matcher) => matcher,
            Err(err) => {
                eprintln!("      skipping penalty {penalty}: {err}");
                continue;
            }
        };
        let m = run_match("substring_frequency", s, t, &matcher, options, sys);
        eprintln!("      {:<10.3} | {:<50} | {:>9.3}", penalty, m.result, m.wall_s * 1e3);
        out.push(m);
    }
    eprintln!();

    if options.skip_perf {
        eprintln!("      Synthetic performance runs skipped.");
        return out;
    }

    let seed = options.seed.unwrap_or(SUBSTRING_SEED);
    eprintln!("      Synthetic runs (uniform A-Z, seed {seed}):");
    let mut rng = StdRng::seed_from_u64(seed);
    for (idx, &len) in SEQUENCE_LENGTHS.iter().enumerate() {
        eprint!("      [{}/{}] {len} x {len}... ", idx + 1, SEQUENCE_LENGTHS.len());
        let a = random_uppercase(len, &mut rng);
        let b = random_uppercase(len, &mut rng);
        let m = run_match("substring_synthetic", &a, &b, &uniform, options, sys);
        eprintln!(
            "{} len={}, time={:.3}s, rss_delta={} KiB, status={}",
            m.verification_status.icon(),
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label()
        );
        out.push(m);
    }
    out
}

fn run_match(
    scenario: &'static str,
    s: &[u8],
    t: &[u8],
    matcher: &WeightedSubstringMatcher,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    let size_desc = format!("{}x{}", s.len(), t.len());
    let (mut m, found) = measure(scenario, size_desc, sys, || matcher.find_best_match(s, t));
    if s.len().max(t.len()) <= options.verify_limit {
        m.record(verify_match(s, t, matcher, &found));
    }
    m.result = found.to_string();
    m
}

fn report_zero_square(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let matrix = &options.matrix;
    let mut out = Vec::new();
    eprintln!("      Input matrix ({} x {}):", matrix.rows(), matrix.cols());
    eprintln!("{}", display_matrix(matrix));

    let (m, square) = run_square("zero_square_input", matrix, options, sys);
    eprintln!("      {} {} ({:.3} ms)", m.verification_status.icon(), m.result, m.wall_s * 1e3);
    if !square.is_empty() {
        eprintln!("{}", display_matrix(&square.submatrix));
    }
    out.push(m);
    eprintln!();

    if options.skip_perf {
        eprintln!("      Synthetic performance runs skipped.");
        return out;
    }

    let seed = options.seed.unwrap_or(ZERO_SQUARE_SEED);
    let mut rng = StdRng::seed_from_u64(seed);
    out.extend(shape_runs(&mut rng, seed, options, sys));
    eprintln!();
    out.extend(density_runs(&mut rng, options, sys));
    out
}

fn shape_runs(rng: &mut StdRng, seed: u64, options: &Options, sys: &mut System) -> Vec<Measurement> {
    eprintln!("      Synthetic runs (zero density {SHAPE_ZERO_DENSITY}, seed {seed}):");
    eprintln!("      {:-<76}", "");
    eprintln!(
        "      {:<13} | {:>10} | {:>13} | {:<10} | status",
        "size", "time (ms)", "rss (KiB)", "max square"
    );
    eprintln!("      {:-<76}", "");
    let mut out = Vec::with_capacity(ZERO_SQUARE_SHAPES.len());
    for &(rows, cols) in ZERO_SQUARE_SHAPES {
        let matrix = random_matrix(rows, cols, SHAPE_ZERO_DENSITY, rng);
        let (m, square) = run_square("zero_square_synthetic", &matrix, options, sys);
        let max_square = format!("{0}x{0}", square.size);
        eprintln!(
            "      {:<13} | {:>10.3} | {:>13} | {:<10} | {} {}",
            m.size_desc,
            m.wall_s * 1e3,
            m.rss_delta_kib,
            max_square,
            m.verification_status.icon(),
            m.verification_status.label()
        );
        out.push(m);
    }
    out
}

/// One run per entry of [`ZERO_DENSITIES`] on a fixed-size square matrix.
fn density_runs(rng: &mut StdRng, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let side = DENSITY_SWEEP_SIDE;
    eprintln!("      Impact of zero density ({side} x {side}):");
    eprintln!("      {:-<76}", "");
    eprintln!("      {:<12} | {:>10} | {:<10} | status", "zero density", "time (ms)", "max square");
    eprintln!("      {:-<76}", "");
    let mut out = Vec::with_capacity(ZERO_DENSITIES.len());
    for &density in ZERO_DENSITIES {
        let matrix = random_matrix(side, side, density, rng);
        let (mut m, square) = run_square("zero_square_density", &matrix, options, sys);
        m.size_desc = format!("{side}x{side}@{density:.1}");
        let max_square = format!("{0}x{0}", square.size);
        eprintln!(
            "      {:<12.1} | {:>10.3} | {:<10} | {} {}",
            density,
            m.wall_s * 1e3,
            max_square,
            m.verification_status.icon(),
            m.verification_status.label()
        );
        out.push(m);
    }
    out
}

fn run_square(
    scenario: &'static str,
    matrix: &BinaryMatrix,
    options: &Options,
    sys: &mut System,
) -> (Measurement, SquareResult) {
    let size_desc = format!("{}x{}", matrix.rows(), matrix.cols());
    let (mut m, found) = measure(scenario, size_desc, sys, || find_largest_zero_square(matrix));
    if matrix.rows().max(matrix.cols()) <= options.verify_limit {
        m.record(verify_square(matrix, &found));
    }
    m.result = found.to_string();
    (m, found)
}

fn verify_match(
    s: &[u8],
    t: &[u8],
    matcher: &WeightedSubstringMatcher,
    found: &SubstringMatch,
) -> Verdict {
    let baseline = brute_force_best_score(s, t, matcher);
    let direct: f64 = found
        .substring1
        .iter()
        .zip(&found.substring2)
        .map(|(&a, &b)| matcher.match_score(a, b))
        .sum();
    let tolerance = 1e-9 * (1.0 + baseline.abs());
    if (baseline - found.score).abs() > tolerance {
        (
            VerificationStatus::Failed,
            Some(format!("expected score {baseline}, got {}", found.score)),
        )
    } else if (direct - found.score).abs() > tolerance {
        (
            VerificationStatus::Failed,
            Some(format!("reported score {} but pair sums to {direct}", found.score)),
        )
    } else {
        (VerificationStatus::Passed, None)
    }
}

/// Best score over every `(len, i, j)` by direct summation.
fn brute_force_best_score(s: &[u8], t: &[u8], matcher: &WeightedSubstringMatcher) -> f64 {
    let mut best: Option<f64> = None;
    for len in 1..=s.len().min(t.len()) {
        for i in len - 1..s.len() {
            for j in len - 1..t.len() {
                let score: f64 = (0..len)
                    .map(|k| matcher.match_score(s[i - k], t[j - k]))
                    .sum();
                if best.map_or(true, |b| score > b) {
                    best = Some(score);
                }
            }
        }
    }
    best.unwrap_or(0.0)
}

fn verify_square(matrix: &BinaryMatrix, found: &SquareResult) -> Verdict {
    let fits = |top: usize, left: usize, size: usize| {
        (top..top + size).all(|r| matrix.row(r)[left..left + size].iter().all(|&v| v == 0))
    };
    if let Some((top, left)) = found.anchor {
        if !fits(top, left, found.size) {
            return (
                VerificationStatus::Failed,
                Some(format!("block at ({top}, {left}) is not all zeros")),
            );
        }
    }
    let bigger = found.size + 1;
    if bigger <= matrix.rows().min(matrix.cols()) {
        for top in 0..=matrix.rows() - bigger {
            for left in 0..=matrix.cols() - bigger {
                if fits(top, left, bigger) {
                    return (
                        VerificationStatus::Failed,
                        Some(format!("zero square of size {bigger} at ({top}, {left})")),
                    );
                }
            }
        }
    }
    (VerificationStatus::Passed, None)
}

fn display_seq(seq: &[u8]) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

fn display_matrix(matrix: &BinaryMatrix) -> String {
    if matrix.rows() > DISPLAY_LIMIT || matrix.cols() > DISPLAY_LIMIT {
        return format!("      Matrix too large to display (max {DISPLAY_LIMIT}x{DISPLAY_LIMIT})");
    }
    matrix
        .to_string()
        .lines()
        .map(|line| format!("        {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    eprintln!("  Runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (side > {}): {not_checked}",
        options.verify_limit
    );
    for m in measurements {
        if matches!(m.verification_status, VerificationStatus::Failed) {
            eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
            if let Some(ref detail) = m.verification_detail {
                eprintln!("     Error: {detail}");
            }
        }
    }
    eprintln!();
    eprintln!("Complexity:");
    eprintln!("  substring:   O(n * m * min(n, m)) time, O(n * m) space (two rolling layers)");
    eprintln!("  zero square: O(rows * cols) time and space");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

/// Times `compute` alone; verification is recorded afterwards with
/// [`Measurement::record`].
fn measure<T, F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> (Measurement, T)
where
    F: FnOnce() -> T,
{
    let before = resident_set_kib(sys);
    let start = Instant::now();
    let output = compute();
    let duration = start.elapsed();
    let after = resident_set_kib(sys);

    let m = Measurement {
        scenario,
        size_desc,
        result: String::new(),
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: VerificationStatus::NotChecked,
        verification_detail: None,
    };
    (m, output)
}

fn escape(s: &str) -> String {
    s.replace('"', "'")
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,result,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        println!(
            "{},{},\"{}\",{:.6},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            escape(&m.result),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().map(escape).unwrap_or_default()
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .chain(["scenario".len()])
        .max()
        .unwrap_or(0);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .chain(["size".len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  result",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.6}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.result
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"result\":\"{}\",\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            escape(&m.result),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match m.verification_detail {
                Some(ref d) => format!("\"{}\"", escape(d)),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_kernels::synth::random_sequence;

    fn defaults() -> Options {
        Options::parse(std::iter::empty::<String>()).unwrap()
    }

    #[test]
    fn timing_excludes_brute_force_check() {
        let options = defaults();
        let mut sys = System::new();
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_uppercase(150, &mut rng);
        let t = random_uppercase(150, &mut rng);
        let matcher = WeightedSubstringMatcher::new(CharWeights::uniform(1.0), UNIFORM_PENALTY);

        let m = run_match("substring_synthetic", &s, &t, &matcher, &options, &mut sys);
        assert_eq!(m.verification_status, VerificationStatus::Passed);

        let found = matcher.find_best_match(&s, &t);
        let start = Instant::now();
        let verdict = verify_match(&s, &t, &matcher, &found);
        let check_s = start.elapsed().as_secs_f64();
        assert_eq!(verdict.0, VerificationStatus::Passed);
        assert!(
            m.wall_s < check_s,
            "timed {:.6}s, brute force alone takes {check_s:.6}s",
            m.wall_s
        );
    }

    #[test]
    fn square_check_runs_after_timing() {
        let options = defaults();
        let mut sys = System::new();
        let matrix = BinaryMatrix::zeros(3, 3);
        let (m, square) = run_square("zero_square_input", &matrix, &options, &mut sys);
        assert_eq!(square.size, 3);
        assert_eq!(m.verification_status, VerificationStatus::Passed);
        assert_eq!(m.result, "Largest zero square: 3x3 at position (0, 0)");
    }

    #[test]
    fn measure_leaves_verification_unset() {
        let mut sys = System::new();
        let (m, out) = measure("x", "1x1".into(), &mut sys, || 41 + 1);
        assert_eq!(out, 42);
        assert_eq!(m.verification_status, VerificationStatus::NotChecked);
        assert!(m.verification_detail.is_none());
    }

    #[test]
    fn shape_runs_follow_configured_shapes() {
        let options = defaults();
        let mut sys = System::new();
        let mut rng = StdRng::seed_from_u64(ZERO_SQUARE_SEED);
        let runs = shape_runs(&mut rng, ZERO_SQUARE_SEED, &options, &mut sys);
        let sizes: Vec<_> = runs.iter().map(|m| m.size_desc.as_str()).collect();
        assert_eq!(sizes, ["10x10", "10x100", "10x1000", "100x1000", "1000x1000"]);
        // Only shapes whose longer side fits the default verify limit are checked.
        assert!(runs[..2]
            .iter()
            .all(|m| m.verification_status == VerificationStatus::Passed));
        assert!(runs[2..]
            .iter()
            .all(|m| m.verification_status == VerificationStatus::NotChecked));
    }

    #[test]
    fn density_sweep_covers_every_density() {
        let options = defaults();
        let mut sys = System::new();
        let mut rng = StdRng::seed_from_u64(ZERO_SQUARE_SEED);
        let runs = density_runs(&mut rng, &options, &mut sys);
        assert_eq!(runs.len(), ZERO_DENSITIES.len());
        assert_eq!(runs[0].size_desc, "100x100@0.1");
        assert_eq!(runs[8].size_desc, "100x100@0.9");
        assert!(runs.iter().all(|m| m.scenario == "zero_square_density"
            && m.verification_status == VerificationStatus::Passed));
    }

    #[test]
    fn seed_defaults_per_section() {
        assert_eq!(defaults().seed, None);
        let opts = Options::parse(["--seed", "9"].into_iter()).unwrap();
        assert_eq!(opts.seed, Some(9));
    }

    #[test]
    fn long_sequences_display_in_full() {
        let seq = random_sequence(300, b"ACGT", &mut StdRng::seed_from_u64(3));
        assert_eq!(display_seq(&seq).len(), 300);
    }
}
