use argh::FromArgs;
use serde::Serialize;
use std::path::PathBuf;

use planefit::k3d::io::text;
use planefit::ransac::{self, ExecutionStrategy, RansacParams};

#[derive(FromArgs)]
/// Fit a plane to a point table with RANSAC
struct Args {
    /// path to the point table, one `x y z` row per point
    #[argh(option)]
    points_path: PathBuf,

    /// path to the output coefficient file
    #[argh(option, default = "PathBuf::from(\"plane_coefficients.txt\")")]
    output_path: PathBuf,

    /// path to a JSON file with the estimator parameters
    #[argh(option)]
    config: Option<PathBuf>,

    /// maximum point-to-plane distance of an inlier
    #[argh(option)]
    distance_threshold: Option<f64>,

    /// probability of drawing at least one outlier-free sample
    #[argh(option)]
    confidence: Option<f64>,

    /// assumed fraction of outliers
    #[argh(option)]
    outlier_ratio: Option<f64>,

    /// seed for reproducible sampling
    #[argh(option)]
    seed: Option<u64>,

    /// score hypotheses in parallel
    #[argh(switch)]
    parallel: bool,

    /// path to write a JSON report
    #[argh(option)]
    report_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    coefficients: [f64; 4],
    hypothesis: [f64; 4],
    num_points: usize,
    num_inliers: usize,
    inliers: &'a [usize],
    sample_time: usize,
    degenerate_draws: usize,
    best_iteration: usize,
    rmse: f64,
    params: &'a RansacParams,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut params = match &args.config {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(std::io::BufReader::new(file))?
        }
        None => RansacParams::default(),
    };

    // flags override the config file
    if let Some(threshold) = args.distance_threshold {
        params.distance_threshold = threshold;
    }
    if let Some(confidence) = args.confidence {
        params.confidence = confidence;
    }
    if let Some(ratio) = args.outlier_ratio {
        params.outlier_ratio = ratio;
    }
    if args.seed.is_some() {
        params.random_seed = args.seed;
    }
    if args.parallel {
        params.execution = ExecutionStrategy::Parallel;
    }

    let cloud = text::read_points_txt(&args.points_path)?;
    println!("Read #{} points from {:?}", cloud.len(), args.points_path);

    let result = ransac::ransac_plane(cloud.points(), &params)?;
    log::debug!("RANSAC result: {:?}", result);

    println!("Plane: {}", result.model);
    println!(
        "Inliers: {}/{} after {} samples",
        result.inliers.len(),
        cloud.len(),
        result.sample_time
    );

    text::write_plane_txt(&args.output_path, &result.model)?;
    println!("Wrote coefficients to {:?}", args.output_path);

    if let Some(report_path) = &args.report_path {
        let report = Report {
            coefficients: result.model.coefficients(),
            hypothesis: result.hypothesis.coefficients(),
            num_points: cloud.len(),
            num_inliers: result.inliers.len(),
            inliers: &result.inliers,
            sample_time: result.sample_time,
            degenerate_draws: result.degenerate_draws,
            best_iteration: result.best_iteration,
            rmse: result.rmse,
            params: &params,
        };
        let file = std::fs::File::create(report_path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &report)?;
        println!("Wrote report to {:?}", report_path);
    }

    Ok(())
}
