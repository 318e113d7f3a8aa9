//! Prints the different views of a few shaped values.
//!
//! Run with `RUST_LOG=linalg_views=trace` to see the allocating operations being logged.

use anyhow::ensure;
use linalg_views::*;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("linalg_views"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()?;

    let v = vec4(1, 2, 3, 4);
    log::info!("vector {:?}: {} elements", v, elements(&v));
    log::info!("flat: {:?}", flat_view(&v));
    log::info!("copy: {:?}", to_dynamic_array(&v));

    let q = Quat::from_components(1.0f32, 2.0, 3.0, 4.0);
    log::info!("{:?}: flat {:?}", q, flat_view(&q));
    ensure!(flat_view(&q).iter().sum::<f32>() == 10.0, "quaternion sum mismatch");

    let mut m = Mat4x3::<f32>::IDENTITY;
    log::info!(
        "matrix ({}x{}, {} elements):\n{:#?}",
        row_extent::<Mat4x3<f32>>(),
        col_extent::<Mat4x3<f32>>(),
        elements(&m),
        m,
    );
    log::info!("column-major storage: {:?}", flat_view(&m));
    log::info!("shaped view:\n{}", shaped_view(&m));

    shaped_view_mut(&mut m).column_mut(2).fill(5.0);
    log::info!("after filling the last column:\n{}", shaped_view(&m));
    log::info!("as an owned array:\n{}", to_shaped_array(&m));

    let sum: f32 = m.iter().sum();
    ensure!(sum == 2.0 + 4.0 * 5.0, "unexpected sum {sum}");

    Ok(())
}
