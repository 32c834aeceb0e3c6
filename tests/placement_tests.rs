// Host-side tests for surface tracking decisions, placement, and the bus.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bus {
    include!("../src/bus.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod reticle {
    include!("../src/reticle.rs");
}
mod placement {
    include!("../src/placement.rs");
}

use bus::{EventBus, SceneEvent};
use glam::{Quat, Vec3};
use scene::Entity;
use std::cell::RefCell;
use std::rc::Rc;

fn surface_pose() -> (Vec3, Quat) {
    (Vec3::new(0.4, -1.2, -2.5), Quat::from_rotation_x(0.3))
}

#[test]
fn hit_shows_reticle_with_the_exact_pose() {
    let mut reticle = Entity::default();
    let (position, orientation) = surface_pose();

    reticle::update_from_hit(&mut reticle, Some((position, orientation)));

    assert!(reticle.visible);
    assert_eq!(reticle.position, position);
    assert_eq!(reticle.orientation, orientation);
}

#[test]
fn miss_hides_reticle_but_keeps_the_last_pose() {
    let mut reticle = Entity::default();
    let (position, orientation) = surface_pose();
    reticle::update_from_hit(&mut reticle, Some((position, orientation)));

    reticle::update_from_hit(&mut reticle, None);

    assert!(!reticle.visible);
    assert_eq!(reticle.position, position);
    assert_eq!(reticle.orientation, orientation);
}

#[test]
fn confirmation_requires_a_visible_reticle() {
    let mut reticle = Entity::default();
    assert_eq!(reticle::confirmation(&reticle), None);

    let (position, orientation) = surface_pose();
    reticle::update_from_hit(&mut reticle, Some((position, orientation)));

    assert_eq!(
        reticle::confirmation(&reticle),
        Some(SceneEvent::SurfaceConfirmed {
            position,
            orientation
        })
    );
}

#[test]
fn confirmation_is_a_snapshot_not_a_live_view() {
    let mut reticle = Entity::default();
    let (position, orientation) = surface_pose();
    reticle::update_from_hit(&mut reticle, Some((position, orientation)));
    let confirmed = reticle::confirmation(&reticle).unwrap();

    // the reticle moving on afterwards must not affect the earlier event
    reticle::update_from_hit(&mut reticle, Some((Vec3::ONE, Quat::IDENTITY)));

    assert_eq!(
        confirmed,
        SceneEvent::SurfaceConfirmed {
            position,
            orientation
        }
    );
}

#[test]
fn commit_reveals_the_object_and_is_idempotent() {
    let mut placed = Entity::default();
    let (position, _) = surface_pose();

    placement::commit(&mut placed, position);
    assert!(placed.visible);
    assert_eq!(placed.position, position);

    let after_first = placed;
    placement::commit(&mut placed, position);
    assert_eq!(placed, after_first);
}

#[test]
fn commit_leaves_orientation_and_yaw_to_their_owners() {
    let mut placed = Entity::default();
    placed.orientation = Quat::from_rotation_y(1.1);
    placed.yaw = 1.25;

    placement::commit(&mut placed, Vec3::new(2.0, 0.0, -1.0));

    assert_eq!(placed.orientation, Quat::from_rotation_y(1.1));
    assert_eq!(placed.yaw, 1.25);
}

#[test]
fn repositioning_moves_an_already_placed_object() {
    let mut placed = Entity::default();
    placement::commit(&mut placed, Vec3::new(1.0, 0.0, 0.0));
    placement::commit(&mut placed, Vec3::new(-3.0, 0.5, 2.0));

    assert!(placed.visible);
    assert_eq!(placed.position, Vec3::new(-3.0, 0.5, 2.0));
}

#[test]
fn bus_delivers_the_payload_to_every_subscriber() {
    let seen_a: Rc<RefCell<Vec<SceneEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_b: Rc<RefCell<Vec<SceneEvent>>> = Rc::new(RefCell::new(Vec::new()));

    let mut bus = EventBus::default();
    let a = seen_a.clone();
    bus.subscribe(move |event| a.borrow_mut().push(*event));
    let b = seen_b.clone();
    bus.subscribe(move |event| b.borrow_mut().push(*event));

    let (position, orientation) = surface_pose();
    let event = SceneEvent::SurfaceConfirmed {
        position,
        orientation,
    };
    bus.emit(&event);

    assert_eq!(*seen_a.borrow(), vec![event]);
    assert_eq!(*seen_b.borrow(), vec![event]);
}

#[test]
fn confirmed_surface_flows_through_to_the_placed_object() {
    let mut scene = scene::Scene::default();
    let (position, orientation) = surface_pose();

    reticle::update_from_hit(&mut scene.reticle, Some((position, orientation)));
    let SceneEvent::SurfaceConfirmed { position, .. } =
        reticle::confirmation(&scene.reticle).unwrap();
    placement::commit(&mut scene.placed, position);

    assert!(scene.placed.visible);
    assert_eq!(scene.placed.position, scene.reticle.position);
}
