//! Wireframe sphere demo.
//!
//! Slices a unit sphere into latitude circles, rotates them in 3D,
//! perspective-projects the points, and draws each slice as a closed path
//! through the canvas path protocol. Output path is the first CLI argument
//! (default `sphere_slices.svg`).

use inkplot_core::{Canvas, SvgResult};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;
const NUM_SLICES: usize = 25;
const POINTS_PER_SLICE: usize = 100;
const ROTATION_Y_DEG: f64 = 30.0;
const ROTATION_X_DEG: f64 = 15.0;
const FOCAL_LENGTH: f64 = 2.0;
/// Pushes the sphere in front of the camera before projection.
const CAMERA_OFFSET: f64 = 3.0;
const SCREEN_SCALE: f64 = 300.0;

#[derive(Debug, Clone, Copy)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

fn rotate_y(p: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3 {
        x: p.x * cos - p.z * sin,
        y: p.y,
        z: p.x * sin + p.z * cos,
    }
}

fn rotate_x(p: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3 {
        x: p.x,
        y: p.y * cos + p.z * sin,
        z: -p.y * sin + p.z * cos,
    }
}

/// Perspective projection onto screen coordinates, centered on the canvas.
fn project(p: Vec3) -> (f64, f64) {
    let scale = FOCAL_LENGTH / (p.z + CAMERA_OFFSET);
    (
        f64::from(WIDTH) / 2.0 + p.x * scale * SCREEN_SCALE,
        f64::from(HEIGHT) / 2.0 + p.y * scale * SCREEN_SCALE,
    )
}

fn run(output: &str) -> SvgResult<()> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT)?;
    canvas.background("white")?;
    canvas.stroke("black")?;
    canvas.fill("none")?;

    let rot_y = ROTATION_Y_DEG.to_radians();
    let rot_x = ROTATION_X_DEG.to_radians();

    for i in 0..NUM_SLICES {
        // Slice height runs from 1 (north pole) down to -1.
        let height = 1.0 - 2.0 * i as f64 / (NUM_SLICES - 1) as f64;
        let radius = (1.0 - height * height).max(0.0).sqrt();

        canvas.begin_shape()?;
        for j in 0..POINTS_PER_SLICE {
            let angle = j as f64 / POINTS_PER_SLICE as f64 * std::f64::consts::TAU;
            let point = Vec3 {
                x: radius * angle.cos(),
                y: height,
                z: radius * angle.sin(),
            };
            let (sx, sy) = project(rotate_y(rotate_x(point, rot_x), rot_y));
            canvas.vertex(sx, sy)?;
        }
        canvas.end_shape(true)?;
    }

    canvas.save(output)?;
    log::info!("rendered {NUM_SLICES} slices to {output}");
    Ok(())
}

fn main() {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sphere_slices.svg".to_string());

    if let Err(err) = run(&output) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    println!("SVG saved to: {output}");
}
