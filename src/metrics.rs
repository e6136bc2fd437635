use anyhow::Result;
use plotters::prelude::*;

use crate::mechanics::rolling::{
    final_disk_speed, potential_energy, rotational_energy, translational_energy,
};

#[derive(Debug)]
pub struct DataPoint {
    pub height: f64,
    pub mass: f64,
    pub radius: f64,
    pub final_speed: f64,
    pub potential_energy: f64,
    pub translational_energy: f64,
    pub rotational_energy: f64,
}

/// Snapshot of one descent; `None` if the inputs fail validation.
pub fn snapshot(
    height: f64,
    length: f64,
    incline: f64,
    mass: f64,
    friction: f64,
    radius: f64,
) -> Option<DataPoint> {
    let final_speed = final_disk_speed(height, length, incline, mass, friction, radius)?;
    Some(DataPoint {
        height,
        mass,
        radius,
        final_speed,
        potential_energy: potential_energy(mass, height),
        translational_energy: translational_energy(mass, final_speed),
        rotational_energy: rotational_energy(mass, final_speed),
    })
}

pub fn export_csv(log: &[DataPoint], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "height",
        "mass",
        "radius",
        "final_speed",
        "potential_energy",
        "translational_energy",
        "rotational_energy",
    ])?;
    for dp in log {
        writer.write_record(&[
            format!("{:.3}", dp.height),
            format!("{:.3}", dp.mass),
            format!("{:.3}", dp.radius),
            format!("{:.6}", dp.final_speed),
            format!("{:.3}", dp.potential_energy),
            format!("{:.3}", dp.translational_energy),
            format!("{:.3}", dp.rotational_energy),
        ])?;
    }
    writer.flush()?;
    println!("✅ Data exported to {path}");
    Ok(())
}

pub fn plot_results(log: &[DataPoint], path: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = log.iter().map(|d| d.height).fold(0.0, f64::max).max(1.0);
    let y_max = log
        .iter()
        .map(|d| d.potential_energy.max(d.final_speed))
        .fold(0.0, f64::max)
        .ceil()
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Rolling Disk Descent", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Drop height (m)")
        .y_desc("Speed (m/s) / Energy (J)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.height, d.final_speed)),
            &BLUE,
        ))?
        .label("Final speed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.height, d.translational_energy)),
            &RED,
        ))?
        .label("Translational KE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.height, d.rotational_energy)),
            &GREEN,
        ))?
        .label("Rotational KE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &GREEN));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    println!("✅ Plot saved to {path}");

    Ok(())
}
