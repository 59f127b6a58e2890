use std::{cell::RefCell, env, rc::Rc, sync::OnceLock};

use common::subject_observer::{Observer, SharedObserver};
use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEED: OnceLock<u64> = OnceLock::new();

/// Seed shared by every randomized test of the process: `DEFAULT_TEST_SEED`
/// when set, a random one otherwise. Printed once so a failing run can be
/// replayed.
pub fn test_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var(DEFAULT_TEST_SEED_ENV)
            .ok()
            .and_then(|seed_var| seed_var.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, DEFAULT_TEST_SEED_ENV);
        seed
    })
}

pub fn get_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(test_seed())
}

/// Observer keeping a copy of every event it receives.
pub struct EventRecorder<E> {
    events: RefCell<Vec<E>>,
}

impl<E: Clone + 'static> EventRecorder<E> {
    pub fn new() -> Rc<Self> {
        Rc::new(EventRecorder {
            events: RefCell::new(vec![]),
        })
    }

    /// Same recorder, typed as a registrable observer.
    pub fn as_observer(self: &Rc<Self>) -> SharedObserver<E> {
        self.clone()
    }

    pub fn events(&self) -> Vec<E> {
        self.events.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<E: Clone> Observer<E> for EventRecorder<E> {
    fn update(&self, event: &E) {
        self.events.borrow_mut().push(event.clone());
    }
}
