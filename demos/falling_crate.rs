//! A crate drops through a coin trigger, lands on the ground, then jumps off.
//!
//! The "engine" here is a few lines of kinematics that fire contact hooks the
//! way a real physics step would. Game reactions only happen in the drain
//! after each step.
//!
//! Run with: cargo run --example falling_crate

use phys_contacts::{
    collision::Manifold, Body, Contact, ContactAggregator, ContactCallbacks, ContactHandler,
    ContactManager, ContactReport, Direction, Fixture, ObjectId, ObjectStorage, Storage,
    Transform2, Vector2,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

const GRAVITY: f32 = -9.81;
const TIME_STEP: f32 = 1.0 / 60.0;
const COIN_CENTER: Vector2 = Vector2 { x: 0.3, y: 1.5 };

/// Minimal stand-in for a physics world with one falling box
struct ToyEngine {
    manager: Rc<ContactManager>,
    crate_id: ObjectId,
    ground_id: ObjectId,
    coin_id: ObjectId,
    bottom: f32,
    velocity: f32,
    on_ground: bool,
    in_coin: bool,
}

impl ToyEngine {
    fn crate_body(&self) -> Body {
        let center = Vector2::new(0.0, self.bottom + 0.5);
        Body::owned_by(self.crate_id, Transform2::from_position(center))
    }

    fn ground_contact(&self, touching: bool) -> Contact {
        let center = Transform2::from_position(Vector2::new(0.0, -0.5));
        let ground = Body::owned_by(self.ground_id, center);
        let mut manifold = Manifold::face_b(Vector2::unit_y(), Vector2::new(0.0, 0.5));
        if touching {
            manifold = manifold
                .with_point(Vector2::new(-0.5, -0.5))
                .with_point(Vector2::new(0.5, -0.5));
        }
        Contact::new(Fixture::new(self.crate_body()), Fixture::new(ground), manifold)
    }

    fn coin_contact(&self) -> Contact {
        let coin = Body::owned_by(self.coin_id, Transform2::from_position(COIN_CENTER));
        Contact::new(
            Fixture::sensor(coin).with_radius(0.25),
            Fixture::new(self.crate_body()).with_radius(0.5),
            Manifold::circles(Vector2::zero(), Vector2::zero()),
        )
    }

    fn step(&mut self, dt: f32) {
        self.velocity += GRAVITY * dt;
        self.bottom += self.velocity * dt;

        let on_ground = self.bottom <= 0.0;
        if on_ground {
            self.bottom = 0.0;
            self.velocity = self.velocity.max(0.0);
        }
        if on_ground != self.on_ground {
            let contact = self.ground_contact(on_ground);
            if on_ground {
                self.manager.begin_contact(&contact);
            } else {
                self.manager.end_contact(&contact);
            }
            self.on_ground = on_ground;
        }

        let in_coin = (1.0..=2.0).contains(&self.bottom);
        if in_coin != self.in_coin {
            let contact = self.coin_contact();
            if in_coin {
                self.manager.begin_contact(&contact);
            } else {
                self.manager.end_contact(&contact);
            }
            self.in_coin = in_coin;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let manager = ContactManager::new();
    let aggregator = ContactAggregator::new(&manager);
    let mut objects: ObjectStorage<ContactCallbacks> = ObjectStorage::new();

    let grounded = Rc::new(Cell::new(false));
    let coins = Rc::new(Cell::new(0u32));

    let crate_id = objects.add(
        ContactCallbacks::new()
            .with_contact({
                let grounded = Rc::clone(&grounded);
                move |report: &ContactReport<'_>| {
                    if report.other.is_sensor() {
                        info!(trigger = %report.other_object(), "crate passed through a trigger");
                    } else if report.direction().contains(Direction::BOTTOM) {
                        grounded.set(true);
                        info!(on = %report.other_object(), "crate landed");
                    }
                }
            })
            .with_separate({
                let grounded = Rc::clone(&grounded);
                move |report: &ContactReport<'_>| {
                    if !report.other.is_sensor() {
                        grounded.set(false);
                        info!("crate left the ground");
                    }
                }
            }),
    );
    let ground_id = objects.add(ContactCallbacks::new());
    let coin_id = objects.add(ContactCallbacks::new().with_sensor_contact({
        let coins = Rc::clone(&coins);
        move |report: &ContactReport<'_>| {
            coins.set(coins.get() + 1);
            info!(by = %report.other_object(), "coin collected");
        }
    }));

    let mut engine = ToyEngine {
        manager: Rc::clone(&manager),
        crate_id,
        ground_id,
        coin_id,
        bottom: 3.0,
        velocity: 0.0,
        on_ground: false,
        in_coin: false,
    };

    for frame in 0..180 {
        if frame == 120 && grounded.get() {
            engine.velocity = 4.0;
        }

        engine.step(TIME_STEP);
        let report = aggregator.drain_and_notify(&mut objects);

        // Safe to mutate the world here: the step is over
        if coins.get() > 0 {
            if let Ok(coin) = objects.get_object_mut(coin_id) {
                if coin.physics_enabled() {
                    coin.set_physics_enabled(false);
                    info!(frame, "coin disabled after pickup");
                }
            }
        }

        if report.pairs > 0 {
            info!(
                frame,
                pairs = report.pairs,
                delivered = report.delivered,
                "frame dispatched contacts"
            );
        }
    }

    info!(coins = coins.get(), grounded = grounded.get(), "simulation finished");
}
