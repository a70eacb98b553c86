use std::thread;
use std::time::{Duration, Instant};

use crate::config::Speed;
use crate::engine::MazeEngine;

const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Steps per second, recomputed from the engine's raw step counter at most
/// once per second.
#[derive(Debug, Clone)]
pub struct RateMeter {
    last_sample: Instant,
    last_count: u64,
    rate: f64,
}

impl RateMeter {
    pub fn new(now: Instant) -> Self {
        Self {
            last_sample: now,
            last_count: 0,
            rate: 0.0,
        }
    }

    /// Feeds the current counter value. Returns the new rate when a full
    /// window has passed since the previous sample.
    pub fn sample(&mut self, now: Instant, count: u64) -> Option<f64> {
        let elapsed = now.saturating_duration_since(self.last_sample);
        if elapsed < SAMPLE_WINDOW {
            return None;
        }

        // the engine zeroes its counter on reset and mode switches
        let delta = if count >= self.last_count {
            count - self.last_count
        } else {
            count
        };
        self.rate = delta as f64 / elapsed.as_secs_f64();
        self.last_sample = now;
        self.last_count = count;
        Some(self.rate)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Paces an engine: a burst of `steps_per_tick` steps, then `tick_delay`
/// of sleep.
pub struct Driver {
    speed: Speed,
    meter: RateMeter,
}

impl Driver {
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            meter: RateMeter::new(Instant::now()),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        log::debug!("speed set to {}", speed);
        self.speed = speed;
    }

    pub fn rate(&self) -> f64 {
        self.meter.rate()
    }

    /// Runs one burst of steps. Returns whether the engine still has work.
    pub fn tick(&mut self, engine: &mut MazeEngine) -> bool {
        self.tick_at(engine, Instant::now())
    }

    pub fn tick_at(&mut self, engine: &mut MazeEngine, now: Instant) -> bool {
        let mut more = !engine.is_complete();
        for _ in 0..self.speed.steps_per_tick() {
            more = engine.step();
            if !more {
                break;
            }
        }

        if let Some(rate) = self.meter.sample(now, engine.step_count()) {
            log::debug!("{:.0} steps/s, {:.0}% done", rate, engine.progress());
        }
        more
    }

    /// Ticks until the engine runs dry, sleeping between ticks unless
    /// `instant` is set. Returns the number of ticks.
    pub fn run(&mut self, engine: &mut MazeEngine, instant: bool) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if !self.tick(engine) {
                return ticks;
            }
            if !instant {
                thread::sleep(self.speed.tick_delay());
            }
        }
    }
}

#[cfg(test)]
mod test_driver {
    use super::*;
    use crate::config::MazeConfig;
    use crate::generators::GeneratorKind;
    use rand::rngs::mock::StepRng;

    fn engine() -> MazeEngine {
        let config = MazeConfig {
            width: 5,
            height: 5,
            generator: GeneratorKind::BinaryTree,
            ..MazeConfig::default()
        };
        MazeEngine::new(&config, Box::new(StepRng::new(0, 0)))
    }

    #[test]
    fn tick_runs_a_burst() {
        let mut engine = engine();
        let mut driver = Driver::new(Speed::Fast);

        assert!(driver.tick(&mut engine));
        assert_eq!(engine.step_count(), 4);
        driver.set_speed(Speed::Slow);
        assert!(driver.tick(&mut engine));
        assert_eq!(engine.step_count(), 5);
    }

    #[test]
    fn run_stops_with_the_engine() {
        let mut engine = engine();
        let mut driver = Driver::new(Speed::Fast);

        // 25 generation steps, four per tick
        assert_eq!(driver.run(&mut engine, true), 7);
        assert!(engine.is_complete());
        assert!(!driver.tick(&mut engine));
        assert_eq!(engine.step_count(), 25);
    }

    #[test]
    fn meter_waits_a_full_window() {
        let start = Instant::now();
        let mut meter = RateMeter::new(start);

        assert_eq!(meter.sample(start + Duration::from_millis(500), 40), None);
        assert_eq!(meter.sample(start + Duration::from_secs(2), 100), Some(50.0));
        assert_eq!(meter.rate(), 50.0);
        assert_eq!(meter.sample(start + Duration::from_secs(3), 130), Some(30.0));
    }

    #[test]
    fn meter_survives_a_counter_reset() {
        let start = Instant::now();
        let mut meter = RateMeter::new(start);
        meter.sample(start + Duration::from_secs(1), 500);

        assert_eq!(meter.sample(start + Duration::from_secs(2), 20), Some(20.0));
    }
}
