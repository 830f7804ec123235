use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;

use planefit::k3d::{io::text, PlaneModel};

#[derive(FromArgs)]
/// Generate a point table with inliers near a plane and uniform outliers
struct Args {
    /// path to the output point table
    #[argh(option, default = "PathBuf::from(\"points.txt\")")]
    output_path: PathBuf,

    /// number of points near the plane
    #[argh(option, default = "100")]
    num_inliers: usize,

    /// number of points away from the plane
    #[argh(option, default = "30")]
    num_outliers: usize,

    /// maximum distance of an inlier to the plane
    #[argh(option, default = "0.01")]
    noise: f64,

    /// seed for the random generator
    #[argh(option)]
    seed: Option<u64>,

    /// plane coefficients as `a,b,c,d`
    #[argh(option, default = "String::from(\"1,2,2,-3\")")]
    plane: String,

    /// half extent of the sampled square on the plane
    #[argh(option, default = "2.0")]
    extent: f64,
}

fn parse_plane(s: &str) -> Result<PlaneModel, Box<dyn std::error::Error>> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        &[a, b, c, d] => Ok(PlaneModel::new(a, b, c, d)?),
        _ => Err(format!("expected 4 plane coefficients, got {}", values.len()).into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let plane = parse_plane(&args.plane)?;
    if !(args.extent > 0.0) {
        return Err(format!("extent must be > 0, got {}", args.extent).into());
    }
    let n = plane.normal();
    let p0 = n * -plane.offset();

    // in-plane axes
    let helper = if n.x.abs() < 0.9 {
        planefit::linalg::vector::cross3(&n.to_array(), &[1.0, 0.0, 0.0])
    } else {
        planefit::linalg::vector::cross3(&n.to_array(), &[0.0, 1.0, 0.0])
    };
    let u = normalize(helper);
    let v = planefit::linalg::vector::cross3(&n.to_array(), &u);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut tr = rand::rng();
            StdRng::from_rng(&mut tr)
        }
    };

    let extent = args.extent;
    let point_at = |offset: f64, rng: &mut StdRng| -> [f64; 3] {
        let a = rng.random_range(-extent..=extent);
        let b = rng.random_range(-extent..=extent);
        std::array::from_fn(|k| p0[k] + a * u[k] + b * v[k] + offset * n[k])
    };

    let mut points = Vec::with_capacity(args.num_inliers + args.num_outliers);
    for _ in 0..args.num_inliers {
        let offset = if args.noise > 0.0 {
            rng.random_range(-args.noise..=args.noise)
        } else {
            0.0
        };
        points.push(point_at(offset, &mut rng));
    }

    // outliers are at least ten times the noise away from the plane
    let min_offset = (10.0 * args.noise).max(0.1);
    for _ in 0..args.num_outliers {
        let offset = rng.random_range(min_offset..=min_offset + extent);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        points.push(point_at(sign * offset, &mut rng));
    }

    log::info!(
        "generated {} inliers and {} outliers around {}",
        args.num_inliers,
        args.num_outliers,
        plane
    );

    text::write_points_txt(&args.output_path, &points)?;
    println!("Wrote #{} points to {:?}", points.len(), args.output_path);

    Ok(())
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let norm = planefit::linalg::vector::norm3(&v);
    [v[0] / norm, v[1] / norm, v[2] / norm]
}
