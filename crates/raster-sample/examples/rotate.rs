//! Rotate a synthetic grayscale pattern with bilinear resampling.
//!
//! Each destination pixel is mapped back into the source by the inverse
//! rotation about the image center and sampled through the bilinear
//! accessor; source positions outside the grid are filled with a constant.
//! Writes the rotated image as PNG and a small JSON timing report.
//!
//! Usage: `rotate [angle_deg] [output.png] [report.json]`

use std::{env, fs, path::PathBuf, time::Instant};

use log::LevelFilter;
use nalgebra::Point2;
use serde::Serialize;

use raster_access::init_with_level;
use raster_sample::{BilinearAccessor, GridPos, RasterView};

const WIDTH: usize = 512;
const HEIGHT: usize = 384;
const FILL: u8 = 32;

#[derive(Debug, Serialize)]
struct TimingsMs {
    synth: u64,
    rotate: u64,
    save: u64,
    total: u64,
}

#[derive(Debug, Serialize)]
struct RotateReport {
    width: usize,
    height: usize,
    angle_deg: f32,
    sampled: usize,
    filled: usize,
    output_path: String,
    timings_ms: TimingsMs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let args: Vec<String> = env::args().collect();
    let angle_deg: f32 = args.get(1).map(|a| a.parse()).transpose()?.unwrap_or(30.0);
    let out_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmpdata/rotated.png"));
    let report_path = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmpdata/rotate_report.json"));
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir)?;
    }
    if let Some(dir) = report_path.parent() {
        fs::create_dir_all(dir)?;
    }

    let t_total = Instant::now();

    let t_synth = Instant::now();
    let src = synth_pattern(WIDTH, HEIGHT);
    let synth_ms = t_synth.elapsed().as_millis() as u64;
    log::info!(
        "synthesized {}x{} test pattern duration_ms={}",
        WIDTH,
        HEIGHT,
        synth_ms
    );

    let view = RasterView::new(WIDTH, HEIGHT, &src)?;
    let sampler: BilinearAccessor<_, u8> = BilinearAccessor::new(view);
    let origin = GridPos::new(0, 0);

    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let cx = (WIDTH as f32 - 1.0) * 0.5;
    let cy = (HEIGHT as f32 - 1.0) * 0.5;
    let max_x = WIDTH as f32 - 1.0;
    let max_y = HEIGHT as f32 - 1.0;

    let t_rot = Instant::now();
    let mut out = vec![FILL; WIDTH * HEIGHT];
    let mut sampled = 0usize;
    let mut filled = 0usize;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let sx = cos_a * dx + sin_a * dy + cx;
            let sy = -sin_a * dx + cos_a * dy + cy;

            if sx < 0.0 || sy < 0.0 || sx > max_x || sy > max_y {
                filled += 1;
                continue;
            }
            out[y * WIDTH + x] = sampler.sample_point(&origin, Point2::new(sx, sy));
            sampled += 1;
        }
    }
    let rotate_ms = t_rot.elapsed().as_millis() as u64;
    log::info!(
        "rotated by {} deg duration_ms={} sampled={} filled={}",
        angle_deg,
        rotate_ms,
        sampled,
        filled
    );

    let t_save = Instant::now();
    image::save_buffer(
        &out_path,
        &out,
        WIDTH as u32,
        HEIGHT as u32,
        image::ColorType::L8,
    )?;
    let save_ms = t_save.elapsed().as_millis() as u64;
    log::info!("wrote rotated image to {}", out_path.display());

    let report = RotateReport {
        width: WIDTH,
        height: HEIGHT,
        angle_deg,
        sampled,
        filled,
        output_path: out_path.to_string_lossy().into_owned(),
        timings_ms: TimingsMs {
            synth: synth_ms,
            rotate: rotate_ms,
            save: save_ms,
            total: t_total.elapsed().as_millis() as u64,
        },
    };
    fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    log::info!("wrote timing report to {}", report_path.display());

    Ok(())
}

/// Concentric rings over a horizontal ramp; enough structure to make
/// interpolation artifacts visible.
fn synth_pattern(w: usize, h: usize) -> Vec<u8> {
    let cx = (w as f32 - 1.0) * 0.5;
    let cy = (h as f32 - 1.0) * 0.5;
    (0..w * h)
        .map(|i| {
            let x = (i % w) as f32;
            let y = (i / w) as f32;
            let r = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            let rings = (r * 0.35).sin() * 0.5 + 0.5;
            let ramp = x / (w as f32 - 1.0);
            (127.5 * (rings + ramp)) as u8
        })
        .collect()
}
