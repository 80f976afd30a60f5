use approx::assert_relative_eq;
use glint_core::{Animation, DrawCommand, DrawList, Size};
use glint_effects::{Particle, ParticleConfig, ParticleSystem};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_system(seed: u64, bounds: Size) -> ParticleSystem {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleSystem::new(ParticleConfig::default(), Some(bounds), &mut rng)
}

#[test]
fn empty_config_uses_defaults() {
    let config: ParticleConfig = toml::from_str("").unwrap();
    let system = ParticleSystem::new(
        config,
        Some(Size::new(640.0, 480.0)),
        &mut StdRng::seed_from_u64(1),
    );

    assert_eq!(system.particles().len(), 50);
    assert_eq!(system.config().speed, 1.0);
    assert_eq!(system.config().size, 2.0);
    assert!(system.config().connections);
}

#[test]
fn same_seed_same_trajectory() {
    let bounds = Size::new(320.0, 240.0);
    let mut a = seeded_system(7, bounds);
    let mut b = seeded_system(7, bounds);
    let mut surface_a = DrawList::new(bounds);
    let mut surface_b = DrawList::new(bounds);

    for _ in 0..500 {
        a.tick(&mut surface_a);
        b.tick(&mut surface_b);
    }

    assert_eq!(a.particles(), b.particles());
    assert_eq!(surface_a.commands(), surface_b.commands());

    let fresh = seeded_system(7, bounds);
    let other = seeded_system(8, bounds);
    assert_ne!(fresh.particles(), other.particles());
}

#[test]
fn particles_stay_within_one_step_of_bounds() {
    let bounds = Size::new(150.0, 90.0);
    let mut rng = StdRng::seed_from_u64(99);
    let config = ParticleConfig {
        count: 80,
        speed: 6.0,
        ..Default::default()
    };
    let mut system = ParticleSystem::new(config, Some(bounds), &mut rng);
    let mut surface = DrawList::new(bounds);

    for _ in 0..2_000 {
        system.tick(&mut surface);
        for p in system.particles() {
            assert!(p.x >= -p.vx.abs() && p.x <= bounds.width + p.vx.abs(), "{p:?}");
            assert!(p.y >= -p.vy.abs() && p.y <= bounds.height + p.vy.abs(), "{p:?}");
        }
    }
}

#[test]
fn overshoot_is_corrected_on_the_following_tick() {
    let bounds = Size::new(200.0, 200.0);
    let mut system = ParticleSystem::with_particles(
        ParticleConfig::default(),
        bounds,
        vec![Particle {
            x: 199.5,
            y: 50.0,
            vx: 2.0,
            vy: 0.0,
            radius: 1.0,
        }],
    );
    let mut surface = DrawList::new(bounds);

    system.tick(&mut surface);
    let p = system.particles()[0];
    assert_relative_eq!(p.x, 201.5);
    assert_eq!(p.vx, -2.0);

    system.tick(&mut surface);
    assert!(bounds.contains(system.particles()[0].position()));
}

#[test]
fn close_pair_draws_line_on_first_tick() {
    let bounds = Size::new(200.0, 200.0);
    let config = ParticleConfig {
        count: 2,
        ..Default::default()
    };
    let still = |x, y| Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 2.0,
    };
    let mut system =
        ParticleSystem::with_particles(config, bounds, vec![still(0.0, 100.0), still(10.0, 100.0)]);
    let mut surface = DrawList::new(bounds);

    system.tick(&mut surface);

    assert_eq!(surface.circles().count(), 2);
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 1);
    let DrawCommand::Line { color, .. } = lines[0] else {
        panic!("expected a line");
    };
    assert_relative_eq!(color.a, 0.9);
}

#[test]
fn distant_pair_draws_no_line() {
    let bounds = Size::new(400.0, 400.0);
    let still = |x, y| Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 2.0,
    };
    let mut system = ParticleSystem::with_particles(
        ParticleConfig::default(),
        bounds,
        vec![still(0.0, 0.0), still(100.0, 0.0), still(300.0, 300.0)],
    );
    let mut surface = DrawList::new(bounds);

    system.tick(&mut surface);
    assert_eq!(surface.lines().count(), 0);
}

#[test]
fn every_line_matches_its_distance() {
    let bounds = Size::new(300.0, 300.0);
    let mut system = seeded_system(3, bounds);
    let mut surface = DrawList::new(bounds);
    system.tick(&mut surface);

    let mut expected = 0;
    let particles = system.particles();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if a.position().distance(b.position()) < 100.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(surface.lines().count(), expected);

    for line in surface.lines() {
        let DrawCommand::Line { from, to, color, .. } = line else {
            unreachable!();
        };
        let d = from.distance(*to);
        assert!(color.a > 0.0 && color.a <= 1.0);
        assert_relative_eq!(color.a, (1.0 - d / 100.0) as f32, epsilon = 1e-6);
    }
}
