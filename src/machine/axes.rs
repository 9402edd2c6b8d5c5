//! Axis registry.
//!
//! Owns the finalized axis table and the shared stepper lines, and performs
//! every mask-addressed bulk operation: enable/disable, homing-mode entry and
//! exit, hard-limit aggregation and name/mask conversion.

use core::marker::PhantomData;

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{AxisError, Error, Result};
use crate::motor::MotorDriver;
use crate::stepping::StepBlocks;

use super::axis::Axis;
use super::disabled::{MotorsDisabled, Settle};
use super::mask::{AxisMask, MotorMask, AXIS_NAMES, MAX_MOTORS_PER_AXIS, MAX_N_AXIS};
use super::names::{self, AxisNames, MOTOR_NAMES_CAPACITY};
use super::pin::NoPin;
use super::state::{AxesState, Parsed, Ready, StateName};

/// Axis registry with type-state lifecycle.
///
/// Created by [`AxesBuilder::after_parse`](super::AxesBuilder::after_parse)
/// in the [`Parsed`] state; [`init`](Axes::init) moves it to [`Ready`], where
/// the runtime operations live.
///
/// Generic over:
/// - `D`: motor driver type (must implement `MotorDriver`)
/// - `P`: shared disable/reset pin type (must implement `OutputPin`)
/// - `STATE`: Type-state marker (defaults to `Parsed`)
pub struct Axes<D, P = NoPin, STATE = Parsed> {
    /// Dense axis table; index equals axis number.
    pub(super) axes: heapless::Vec<Axis<D>, MAX_N_AXIS>,

    /// Line that disables every stepper driver at once.
    pub(super) shared_disable: Option<P>,

    /// Line that holds every stepper driver in reset.
    pub(super) shared_reset: Option<P>,

    /// Homing approach/pulloff repetitions.
    pub(super) homing_runs: u32,

    /// Settle time after re-enabling disabled motors.
    pub(super) disable_delay_us: u32,

    /// Axes that home toward negative travel.
    pub(super) homing_direction_mask: AxisMask,

    /// Type-state marker.
    pub(super) _state: PhantomData<STATE>,
}

impl<D, P, STATE> Axes<D, P, STATE>
where
    D: MotorDriver,
    P: OutputPin,
    STATE: AxesState + StateName,
{
    /// Number of axes, at least 3.
    #[inline]
    pub fn number_axis(&self) -> usize {
        self.axes.len()
    }

    /// Axis letters in index order, one per axis.
    #[inline]
    pub fn names(&self) -> &'static [char] {
        let names: &'static [char] = &AXIS_NAMES;
        &names[..self.axes.len()]
    }

    /// Get an axis by index.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<&Axis<D>> {
        self.axes.get(index)
    }

    /// Iterate over every axis in index order.
    pub fn axes(&self) -> impl Iterator<Item = &Axis<D>> {
        self.axes.iter()
    }

    /// Number of homing approach/pulloff repetitions.
    #[inline]
    pub fn homing_runs(&self) -> u32 {
        self.homing_runs
    }

    /// Settle time applied when disabled motors are re-enabled.
    #[inline]
    pub fn disable_delay_us(&self) -> u32 {
        self.disable_delay_us
    }

    /// Axes that home toward negative travel. Populated by `init`.
    #[inline]
    pub fn homing_direction_mask(&self) -> AxisMask {
        self.homing_direction_mask
    }

    /// Whether a shared disable line is wired.
    #[inline]
    pub fn has_shared_disable(&self) -> bool {
        self.shared_disable.is_some()
    }

    /// Whether a shared reset line is wired.
    #[inline]
    pub fn has_shared_reset(&self) -> bool {
        self.shared_reset.is_some()
    }

    /// Get the current lifecycle state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Render an axis mask as letters, e.g. `"XZ"`.
    pub fn mask_to_names(&self, mask: AxisMask) -> heapless::String<MAX_N_AXIS> {
        names::mask_to_names(self.names(), mask)
    }

    /// Render a motor mask as space-prefixed letters, e.g. `" X X2"`.
    pub fn motor_mask_to_names(&self, mask: MotorMask) -> heapless::String<MOTOR_NAMES_CAPACITY> {
        names::motor_mask_to_names(self.names(), mask)
    }

    /// Resolve a string of axis letters (case-insensitive) into a mask.
    ///
    /// Letters that match no configured axis are reported in the result and
    /// never set a bit; the remaining letters are still resolved.
    pub fn names_to_mask(&self, input: &str) -> AxisNames {
        names::names_to_mask(self.names(), input)
    }

    fn config_motors(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.config_motors();
        }
    }
}

impl<D, P> Axes<D, P, Parsed>
where
    D: MotorDriver,
    P: OutputPin,
{
    /// Initialize shared lines and motors.
    ///
    /// Drives the shared reset line active, so motors stay in reset until the
    /// caller releases them. Initializes every axis, records which axes home
    /// toward negative travel, then applies driver-specific settings.
    ///
    /// # Errors
    ///
    /// Returns `AxisError::PinError` if the reset line cannot be driven.
    pub fn init(mut self) -> Result<Axes<D, P, Ready>> {
        info!("Axis count {}", self.axes.len());

        if self.shared_disable.is_some() {
            info!("Shared stepper disable");
        }

        if let Some(pin) = self.shared_reset.as_mut() {
            pin.set_high().map_err(|_| Error::Axis(AxisError::PinError))?;
            info!("Shared stepper reset");
        }

        let mut direction_mask = AxisMask::EMPTY;
        for axis in self.axes.iter_mut() {
            let (min, max) = axis.travel_limits();
            info!("Axis {} ({},{})", axis.name(), min.value(), max.value());
            axis.init();

            if axis.homes_negative() {
                direction_mask.set(axis.index());
            }
        }
        self.homing_direction_mask = direction_mask;

        self.config_motors();

        Ok(Axes {
            axes: self.axes,
            shared_disable: self.shared_disable,
            shared_reset: self.shared_reset,
            homing_runs: self.homing_runs,
            disable_delay_us: self.disable_delay_us,
            homing_direction_mask: self.homing_direction_mask,
            _state: PhantomData,
        })
    }
}

impl<D, P> Axes<D, P, Ready>
where
    D: MotorDriver,
    P: OutputPin,
{
    /// Get an axis by index mutably.
    #[inline]
    pub fn axis_mut(&mut self, index: usize) -> Option<&mut Axis<D>> {
        self.axes.get_mut(index)
    }

    /// Enable or disable every motor on one axis.
    ///
    /// Safe to call from the step interrupt as a fault response: no blocking,
    /// no allocation, no logging. A disable request sets `disabled` until the
    /// next bulk enable; an enable request leaves it alone. Unknown axis
    /// indices are ignored.
    pub fn set_disable_axis(&mut self, axis: usize, disable: bool, disabled: &MotorsDisabled) {
        let Some(entry) = self.axes.get_mut(axis) else {
            return;
        };
        entry.set_disable(disable);

        if disable {
            disabled.mark();
        }
    }

    /// Enable or disable every motor and drive the shared disable line.
    ///
    /// Does not block. When this re-enables motors that were disabled, the
    /// returned [`Settle`] carries the configured settle delay; wait it out
    /// with [`Settle::wait`] after releasing the registry and before stepping.
    ///
    /// ```rust,ignore
    /// let settle = critical_section::with(|cs| {
    ///     AXES.borrow_ref_mut(cs).as_mut().map(|axes| axes.set_disable(false, &DISABLED))
    /// });
    /// if let Some(settle) = settle {
    ///     settle?.wait(&mut delay);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AxisError::PinError` if the shared disable line cannot be driven.
    pub fn set_disable(&mut self, disable: bool, disabled: &MotorsDisabled) -> Result<Settle> {
        for axis in 0..self.axes.len() {
            self.set_disable_axis(axis, disable, disabled);
        }

        if let Some(pin) = self.shared_disable.as_mut() {
            pin.set_state(PinState::from(disable))
                .map_err(|_| Error::Axis(AxisError::PinError))?;
        }

        if !disable && disabled.take() {
            return Ok(Settle::new(self.disable_delay_us));
        }

        Ok(Settle::NONE)
    }

    /// Put the motors of the masked axes into or out of homing mode.
    ///
    /// Each axis-motor pair is unblocked in `blocks` before its driver is
    /// switched, so the step interrupt never sees a homing motor that is
    /// still suppressed. Returns the motors whose driver will actively move
    /// during homing; the rest are carried along passively.
    pub fn set_homing_mode(
        &mut self,
        axis_mask: AxisMask,
        is_homing: bool,
        blocks: &StepBlocks,
    ) -> MotorMask {
        let mut can_home = MotorMask::EMPTY;

        for (index, axis) in self.axes.iter_mut().enumerate() {
            if !axis_mask.contains(index) {
                continue;
            }

            for slot in 0..MAX_MOTORS_PER_AXIS {
                blocks.unblock(index, slot);
                if let Some(motor) = axis.motor_mut(slot) {
                    if motor.driver_mut().set_homing_mode(is_homing) {
                        can_home.set(index, slot);
                    }
                }
            }
        }

        debug!("Homing mode {} axes {:x} active {:x}", is_homing, axis_mask.bits(), can_home.bits());
        can_home
    }

    /// Axes with at least one motor applying hard limits.
    pub fn hard_limit_mask(&self) -> AxisMask {
        let mut mask = AxisMask::EMPTY;
        for (index, axis) in self.axes.iter().enumerate() {
            if axis.hard_limits() {
                mask.set(index);
            }
        }
        mask
    }

    /// Axis index and motor slot owning a driver instance.
    ///
    /// Drivers are matched by address, not by value.
    ///
    /// # Panics
    ///
    /// Panics if the driver is not registered: the wiring is broken and no
    /// motion may proceed.
    pub fn find_motor(&self, driver: &D) -> (usize, usize) {
        for (index, axis) in self.axes.iter().enumerate() {
            if let Some(slot) = axis.motor_slot(driver) {
                return (index, slot);
            }
        }

        panic!("Cannot find axis for motor driver '{}'", driver.name());
    }

    /// Axis index owning a driver instance.
    ///
    /// # Panics
    ///
    /// Panics if the driver is not registered.
    pub fn find_axis_index(&self, driver: &D) -> usize {
        self.find_motor(driver).0
    }

    /// Motor slot of a driver instance within its axis.
    ///
    /// # Panics
    ///
    /// Panics if the driver is not registered.
    pub fn find_axis_motor(&self, driver: &D) -> usize {
        self.find_motor(driver).1
    }
}
