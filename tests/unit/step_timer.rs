//! Unit tests for the interrupt-driven step timer.
//!
//! Each test owns its `static` timer because callbacks are plain function
//! pointers and reach the timer through it.

use std::sync::atomic::{AtomicU32, Ordering};

use stepper_axes::error::TimerError;
use stepper_axes::{StepTimer, StepTimerHardware};

/// Hardware double recording the last programmed state.
#[derive(Debug, Default)]
struct SimTimer {
    frequency: u32,
    enabled: bool,
    pauses: u32,
}

impl StepTimerHardware for SimTimer {
    fn set_frequency(&mut self, frequency_hz: u32) {
        self.frequency = frequency_hz;
    }

    fn resume(&mut self) {
        self.enabled = true;
    }

    fn pause(&mut self) {
        self.enabled = false;
        self.pauses += 1;
    }
}

/// Fire the interrupt while the hardware is enabled, up to `max` times.
fn run_interrupts(timer: &StepTimer<SimTimer>, max: u32) -> u32 {
    let mut fired = 0;
    while fired < max && timer.with_hardware(|hw| hw.enabled) == Some(true) {
        timer.on_interrupt();
        fired += 1;
    }
    fired
}

static STOP_INSIDE: StepTimer<SimTimer> = StepTimer::new();
static STOP_INSIDE_CALLS: AtomicU32 = AtomicU32::new(0);

fn stop_on_third() -> bool {
    if STOP_INSIDE_CALLS.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
        STOP_INSIDE.stop();
    }
    true
}

#[test]
fn test_callback_can_stop_timer() {
    STOP_INSIDE.init(SimTimer::default(), 1_000_000, stop_on_third).unwrap();
    STOP_INSIDE.set_ticks(100).unwrap();
    STOP_INSIDE.start().unwrap();

    let fired = run_interrupts(&STOP_INSIDE, 10);
    assert_eq!(fired, 3);
    assert_eq!(STOP_INSIDE_CALLS.load(Ordering::SeqCst), 3);
    assert!(!STOP_INSIDE.is_running());

    // Spurious interrupt after stop does not reach the callback
    STOP_INSIDE.on_interrupt();
    assert_eq!(STOP_INSIDE_CALLS.load(Ordering::SeqCst), 3);
}

static FINISHING: StepTimer<SimTimer> = StepTimer::new();
static FINISHING_LEFT: AtomicU32 = AtomicU32::new(4);

fn count_down() -> bool {
    FINISHING_LEFT.fetch_sub(1, Ordering::SeqCst) > 1
}

#[test]
fn test_callback_false_stops_timer() {
    FINISHING.init(SimTimer::default(), 1_000_000, count_down).unwrap();
    FINISHING.start().unwrap();

    let fired = run_interrupts(&FINISHING, 10);
    assert_eq!(fired, 4);
    assert!(!FINISHING.is_running());
    assert_eq!(FINISHING.with_hardware(|hw| hw.enabled), Some(false));
}

static RESTARTED: StepTimer<SimTimer> = StepTimer::new();

fn keep_stepping() -> bool {
    true
}

#[test]
fn test_start_stop_idempotent() {
    RESTARTED.init(SimTimer::default(), 2_000_000, keep_stepping).unwrap();

    RESTARTED.start().unwrap();
    RESTARTED.start().unwrap();
    assert!(RESTARTED.is_running());

    let pauses = RESTARTED.with_hardware(|hw| hw.pauses).unwrap();
    RESTARTED.stop();
    RESTARTED.stop();
    assert!(!RESTARTED.is_running());
    assert_eq!(RESTARTED.with_hardware(|hw| hw.pauses), Some(pauses + 1));

    RESTARTED.start().unwrap();
    assert_eq!(RESTARTED.with_hardware(|hw| hw.enabled), Some(true));
    RESTARTED.stop();
}

static RETIMED: StepTimer<SimTimer> = StepTimer::new();

#[test]
fn test_set_ticks_while_running() {
    RETIMED.init(SimTimer::default(), 1_000_000, keep_stepping).unwrap();
    RETIMED.set_ticks(1_000).unwrap();
    RETIMED.start().unwrap();
    assert_eq!(RETIMED.with_hardware(|hw| hw.frequency), Some(1_000));

    RETIMED.set_ticks(50).unwrap();
    assert!(RETIMED.is_running());
    assert_eq!(RETIMED.ticks(), 50);
    assert_eq!(RETIMED.interrupt_frequency(), 20_000);
    assert_eq!(RETIMED.with_hardware(|hw| hw.frequency), Some(20_000));

    assert_eq!(RETIMED.set_ticks(0), Err(TimerError::ZeroTicks));
    RETIMED.stop();
}

#[test]
fn test_reinit_stops_running_timer() {
    let timer = StepTimer::new();
    timer.init(SimTimer::default(), 1_000_000, keep_stepping).unwrap();
    timer.start().unwrap();

    timer.init(SimTimer::default(), 500_000, keep_stepping).unwrap();
    assert!(!timer.is_running());
    assert_eq!(timer.frequency(), 500_000);
    assert_eq!(timer.ticks(), 0);
    assert_eq!(timer.with_hardware(|hw| hw.enabled), Some(false));
}
