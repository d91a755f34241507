//! # Swimmer Integration
//!
//! Resistive-force model of a segment chain in a viscous medium, advanced
//! with semi-implicit Euler.
//!
//! Translation is integrated at the center of mass, so joint motion alone
//! never moves it: only fluid drag does. The head pose is recovered from the
//! center of mass after the joints and heading have been updated.

use crate::swimmer::{mean_offset, relative_chain, SwimmerConfig};
use crate::types::{SwimmerState, Vec2};

/// Anisotropic drag on one segment moving with `velocity`.
#[must_use]
pub fn drag_force(config: &SwimmerConfig, angle: f32, velocity: Vec2) -> Vec2 {
    let tangent = Vec2::from_angle(angle);
    let normal = tangent.perp();
    let v_t = velocity.dot(tangent);
    let v_n = velocity.dot(normal);
    -(tangent * (config.tangential_drag * v_t) + normal * (config.normal_drag * v_n))
        * config.segment_length
}

/// Advance `state` by one `config.time_step` under motor commands `torques`.
///
/// `torques` must already be clipped to the control range and have one entry
/// per joint.
#[allow(clippy::cast_precision_loss)]
pub fn integrate_swimmer(config: &SwimmerConfig, state: &mut SwimmerState, torques: &[f32]) {
    let dt = config.time_step;
    let m = config.segment_mass;
    let l = config.segment_length;
    let total_mass = m * config.segments as f32;
    let rod_inertia = m * l * l / 12.0;
    let hinge_inertia = m * l * l / 3.0;

    let chain = relative_chain(
        config,
        state.heading,
        state.angular_velocity,
        &state.joint_angles,
        &state.joint_velocities,
    );
    let (offset, offset_vel) = mean_offset(&chain);
    let mut com = state.position + offset;
    let mut com_vel = state.velocity + offset_vel;

    // 1. Fluid forces about the center of mass
    let mut force = Vec2::ZERO;
    let mut torque = 0.0;
    let mut inertia = 0.0;
    for seg in &chain {
        let velocity = state.velocity + seg.velocity;
        let f = drag_force(config, seg.angle, velocity);
        let arm = state.position + seg.center - com;
        force += f;
        torque += arm.cross(f) - config.normal_drag * seg.angular_velocity * l.powi(3) / 12.0;
        inertia += rod_inertia + m * arm.length_squared();
    }

    // 2. Velocities
    com_vel += force * (dt / total_mass);
    state.angular_velocity += torque / inertia * dt;
    for (dq, u) in state.joint_velocities.iter_mut().zip(torques) {
        let accel = (config.gear * u - config.joint_damping * *dq) / hinge_inertia;
        *dq += accel * dt;
    }

    // 3. Positions
    com += com_vel * dt;
    state.heading += state.angular_velocity * dt;
    let limit = config.joint_limit;
    for (q, dq) in state.joint_angles.iter_mut().zip(state.joint_velocities.iter_mut()) {
        *q += *dq * dt;
        if q.abs() > limit {
            *q = q.clamp(-limit, limit);
            *dq = 0.0;
        }
    }

    // 4. Head pose from the new center of mass
    let chain = relative_chain(
        config,
        state.heading,
        state.angular_velocity,
        &state.joint_angles,
        &state.joint_velocities,
    );
    let (offset, offset_vel) = mean_offset(&chain);
    state.position = com - offset;
    state.velocity = com_vel - offset_vel;
}
