//! Explicit finite-difference time-steppers for 2D scalar fields.
//!
//! Both solvers advance a dense grid through `time_steps` explicit updates
//! of the interior cells. The first and last row and column are Dirichlet
//! boundaries: copied unchanged into every new time level, never recomputed.
//! Inputs are borrowed and left untouched; a fresh grid is returned.
//!
//! Neither solver enforces its stability bound. An unstable parameter
//! combination produces a divergent field, not an error; a warning is
//! logged once per call.

use log::warn;
use nalgebra::DMatrix;

/// A sampled 2D scalar field with uniform spacing `dx` in both directions.
/// Rows index the first spatial dimension.
pub type Grid = DMatrix<f64>;

/// Largest stable `alpha * dt / dx²` for the 2D forward-Euler heat step.
const HEAT_STABILITY_LIMIT: f64 = 0.25;

/// Largest stable Courant number `c * dt / dx` for the 2D leapfrog scheme.
const WAVE_STABILITY_LIMIT: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Steps the heat equation `u_t = alpha * (u_xx + u_yy)` forward in time.
///
/// Forward Euler with the 5-point Laplacian stencil:
/// every interior cell moves toward the mean of its four neighbors at a rate
/// set by `alpha * dt / dx²`. With `time_steps = 0` (or `alpha = 0`) the
/// returned grid equals the input.
pub fn solve_heat_equation(u: &Grid, alpha: f64, dt: f64, dx: f64, time_steps: usize) -> Grid {
    let r = alpha * dt / (dx * dx);
    if r > HEAT_STABILITY_LIMIT {
        warn!(
            "heat step ratio alpha*dt/dx^2 = {r} exceeds {HEAT_STABILITY_LIMIT}; \
             the explicit scheme will diverge"
        );
    }

    let (nx, ny) = u.shape();
    let mut current = u.clone();

    for _ in 0..time_steps {
        let mut next = current.clone();
        for i in 1..nx.saturating_sub(1) {
            for j in 1..ny.saturating_sub(1) {
                next[(i, j)] = current[(i, j)]
                    + r * (current[(i + 1, j)] - 2.0 * current[(i, j)] + current[(i - 1, j)])
                    + r * (current[(i, j + 1)] - 2.0 * current[(i, j)] + current[(i, j - 1)]);
            }
        }
        current = next;
    }

    current
}

/// Steps the wave equation `u_tt = c² * (u_xx + u_yy)` forward in time.
///
/// Leapfrog over two time levels. The initial velocity grid `v` seeds the
/// fictitious level before the first step as `u_prev = u - dt * v`, so the
/// first update becomes `u + dt*v + c²dt²∇²u`; a zero velocity field
/// reproduces a start from rest.
///
/// # Panics
///
/// Panics when `u` and `v` differ in shape.
pub fn solve_wave_equation(
    u: &Grid,
    v: &Grid,
    c: f64,
    dt: f64,
    dx: f64,
    time_steps: usize,
) -> Grid {
    assert_eq!(
        u.shape(),
        v.shape(),
        "displacement and velocity grids must have equal shape"
    );

    let courant = c * dt / dx;
    if courant > WAVE_STABILITY_LIMIT {
        warn!(
            "wave Courant number c*dt/dx = {courant} exceeds {WAVE_STABILITY_LIMIT}; \
             the leapfrog scheme will diverge"
        );
    }

    let (nx, ny) = u.shape();
    let dx_sq = dx * dx;
    let c2_dt2 = c * c * dt * dt;

    let mut prev = u - v * dt;
    let mut current = u.clone();

    for _ in 0..time_steps {
        let mut next = current.clone();
        for i in 1..nx.saturating_sub(1) {
            for j in 1..ny.saturating_sub(1) {
                let laplacian = (current[(i + 1, j)] - 2.0 * current[(i, j)]
                    + current[(i - 1, j)])
                    / dx_sq
                    + (current[(i, j + 1)] - 2.0 * current[(i, j)] + current[(i, j - 1)]) / dx_sq;
                next[(i, j)] = 2.0 * current[(i, j)] - prev[(i, j)] + c2_dt2 * laplacian;
            }
        }
        prev = current;
        current = next;
    }

    current
}
