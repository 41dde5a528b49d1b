//! Propagate measurement uncertainty through a kinetic energy calculation.

use ef_core::{Value, linspace};
use ef_propagate::{Args, Point, propagate};
use ef_quantity::Quantity;

fn kinetic_energy(p: &Point) -> Value {
    0.5 * (&p["m"] * &p["v"].powi(2))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Raw evaluation: plain numbers in, plain number out.
    let raw = propagate(kinetic_energy, &Args::new().with("m", 22.5).with("v", 5.5))?;
    if let Some(energy) = raw.value().as_scalar() {
        println!("E = {energy:.1} J");
    }

    // Uncertain evaluation: quantities in, quantity out.
    let mass = Quantity::new(22.5, 0.1)?; // kg
    let velocity = Quantity::new(5.5, 0.01)?; // m/s
    let energy = propagate(kinetic_energy, &Args::new().with("m", mass).with("v", velocity))?
        .into_quantity()
        .ok_or("expected a propagated quantity")?;
    println!("E = {}", energy.display("J"));

    // A whole series of measurements at once.
    let masses = Quantity::new(
        Value::from(linspace(1.5, 22.5, 100)),
        Value::from(vec![0.1; 100]),
    )?;
    let velocities = Quantity::new(
        Value::from(linspace(1.5, 5.5, 100)),
        Value::from(vec![0.01; 100]),
    )?;
    let energies = propagate(
        kinetic_energy,
        &Args::new().with("m", masses).with("v", velocities),
    )?
    .into_quantity()
    .ok_or("expected a propagated quantity")?;
    println!("E = {}", energies.display("J"));

    Ok(())
}
