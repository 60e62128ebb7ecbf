//! Example: project a two-mode holographic wave, then extract every artifact
//! from it and watch the spectral entropy rise as decoherence grows.

use holoquant::{
    FourierMode, FourierProjection, HoloError, ProjectionParams, check_finite,
    compute_bohmian_velocity, compute_entanglement_entropy, compute_mqp, compute_quantum_foam,
    holographic_decoherence_seeded, spectral_flatness, wave_particle_duality,
};
use ndarray::Array1;

fn main() -> Result<(), HoloError> {
    env_logger::init();
    println!("--- holoquant Example: Foam, Flow and Decoherence ---");

    // --- Build Projection ---
    let projection = FourierProjection::new(ProjectionParams {
        modes: vec![
            FourierMode::new(1.0, 2.0, 1.0, 0.0),
            FourierMode::new(0.4, 5.0, 2.5, 0.3),
        ],
    })?;
    println!("\nProjection: {}", projection);

    let x = Array1::linspace(0.0, std::f64::consts::TAU, 64);
    let density = wave_particle_duality(&x, 0.0, &projection)?;
    println!("Density range: [{:.4}, {:.4}]",
        density.iter().cloned().fold(f64::INFINITY, f64::min),
        density.iter().cloned().fold(f64::NEG_INFINITY, f64::max));

    // --- Flow and Potential ---
    let phase = x.mapv(|xi| 2.0 * xi);
    let velocity = compute_bohmian_velocity(&phase, 1.0, None)?;
    println!("Mean Bohmian velocity: {:.4}", velocity[0].mean().unwrap_or(0.0));

    let mqp = compute_mqp(&density, None, None)?;
    match check_finite(&mqp) {
        Ok(()) => println!("MQP finite everywhere, peak |Q| = {:.4}",
            mqp.iter().fold(0.0f64, |acc, q| acc.max(q.abs()))),
        Err(e) => println!("MQP has singular points: {}", e),
    }

    // --- Spectral Artifacts ---
    let foam = compute_quantum_foam(&density)?;
    println!("\nTotal foam intensity: {:.6}", foam.sum());

    println!("\n{:>8} | {:>10} | {:>10}", "rate", "entropy", "flatness");
    for rate in [0.0, 0.01, 0.1, 0.5, 1.0] {
        let decohered = holographic_decoherence_seeded(&density, rate, 17)?;
        let entropy = compute_entanglement_entropy(&decohered)?;
        let flatness = spectral_flatness(&decohered)?;
        println!("{:>8.2} | {:>10.4} | {:>10.4}", rate, entropy, flatness);
    }

    Ok(())
}
