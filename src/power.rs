//! Sleep modes and the watchdog timer.
//!
//! The operations here are register writes with nothing to report back,
//! so none of them can fail: an out-of-range watchdog level is clamped to
//! the longest timeout rather than rejected.
//!
//! `HardwareControl` is the interface firmware codes against. `Avr`
//! implements it for ATmega-family chips on top of any `Registers`
//! access, which is `Mmio` on real hardware and can be a plain struct in
//! tests.

use log::{debug, trace, warn};


/// Sleep and watchdog control.
pub trait HardwareControl {

    /// Puts the processor to sleep in the given mode, returning once an
    /// enabled wake source fires.
    fn enter_sleep(&mut self, mode: SleepMode);

    /// Arms the watchdog at the given timeout level (see
    /// `WatchdogTimeout`). Levels past the last one are clamped to it.
    ///
    /// The watchdog raises its interrupt when it expires, rather than
    /// resetting the chip, so it can be used to wake from sleep.
    fn start_watchdog(&mut self, level: u8);

    /// Disarms the watchdog.
    fn stop_watchdog(&mut self);
}


/// How deeply the processor sleeps. Deeper modes turn off more clocks
/// and leave fewer wake sources.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    Idle,
    AdcNoiseReduction,
    PowerDown,
    PowerSave,
    Standby,
    ExtendedStandby,
}

impl SleepMode {

    /// The SM2..SM0 bits for this mode, already in place for SMCR.
    pub fn bits(self) -> u8 {
        match self {
            SleepMode::Idle              => 0b000 << 1,
            SleepMode::AdcNoiseReduction => 0b001 << 1,
            SleepMode::PowerDown         => 0b010 << 1,
            SleepMode::PowerSave         => 0b011 << 1,
            SleepMode::Standby           => 0b110 << 1,
            SleepMode::ExtendedStandby   => 0b111 << 1,
        }
    }
}


/// The watchdog timeouts the hardware can count to, in order. A
/// timeout’s **level** is its position in this list.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogTimeout {
    Ms16, Ms32, Ms64, Ms128, Ms250, Ms500,
    S1, S2, S4, S8,
}

static TIMEOUTS: [WatchdogTimeout; 10] = [
    WatchdogTimeout::Ms16,  WatchdogTimeout::Ms32,
    WatchdogTimeout::Ms64,  WatchdogTimeout::Ms128,
    WatchdogTimeout::Ms250, WatchdogTimeout::Ms500,
    WatchdogTimeout::S1,    WatchdogTimeout::S2,
    WatchdogTimeout::S4,    WatchdogTimeout::S8,
];

impl WatchdogTimeout {

    /// The longest timeout, which is what out-of-range levels become.
    pub const LONGEST: Self = WatchdogTimeout::S8;

    /// Returns the timeout at the given level, from 0 (16 ms) to 9 (8 s).
    /// Anything above 9 gives the 8 second timeout.
    ///
    /// ```rust
    /// use timeutils::WatchdogTimeout;
    ///
    /// assert_eq!(WatchdogTimeout::from_level(3), WatchdogTimeout::Ms128);
    /// assert_eq!(WatchdogTimeout::from_level(15), WatchdogTimeout::S8);
    /// ```
    pub fn from_level(level: u8) -> Self {
        match TIMEOUTS.get(usize::from(level)) {
            Some(timeout) => *timeout,
            None          => Self::LONGEST,
        }
    }

    /// Returns this timeout’s position in the list of timeouts.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// The nominal length of this timeout, in milliseconds.
    pub fn millis(self) -> u16 {
        match self {
            WatchdogTimeout::Ms16  =>   16,
            WatchdogTimeout::Ms32  =>   32,
            WatchdogTimeout::Ms64  =>   64,
            WatchdogTimeout::Ms128 =>  128,
            WatchdogTimeout::Ms250 =>  250,
            WatchdogTimeout::Ms500 =>  500,
            WatchdogTimeout::S1    => 1000,
            WatchdogTimeout::S2    => 2000,
            WatchdogTimeout::S4    => 4000,
            WatchdogTimeout::S8    => 8000,
        }
    }

    /// The WDP3..WDP0 prescaler bits for this timeout, in their WDTCSR
    /// positions. WDP3 is not next to the others: it lives in bit 5.
    pub fn prescaler_bits(self) -> u8 {
        let level = self.level();
        let mut bits = level & 0b111;
        if level > 7 {
            bits |= WDP3;
        }
        bits
    }
}


/// MCUSR: watchdog reset flag.
pub const WDRF: u8 = 1 << 3;

/// WDTCSR: watchdog interrupt enable.
pub const WDIE: u8 = 1 << 6;

/// WDTCSR: prescaler bit 3.
pub const WDP3: u8 = 1 << 5;

/// WDTCSR: watchdog change enable.
pub const WDCE: u8 = 1 << 4;

/// WDTCSR: watchdog system reset enable.
pub const WDE: u8 = 1 << 3;

/// SMCR: sleep enable.
pub const SE: u8 = 1 << 0;

/// SMCR: the three sleep mode select bits.
pub const SM_MASK: u8 = 0b111 << 1;


/// The registers this module touches.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {

    /// MCU status register, which records the cause of the last reset.
    Mcusr,

    /// Watchdog timer control register.
    Wdtcsr,

    /// Sleep mode control register.
    Smcr,
}

impl Register {

    /// The data-space address of this register on the ATmega48/88/168/328
    /// family.
    pub fn address(self) -> usize {
        match self {
            Register::Smcr   => 0x53,
            Register::Mcusr  => 0x54,
            Register::Wdtcsr => 0x60,
        }
    }
}


/// Byte-wide access to the power-control registers.
pub trait Registers {

    /// Reads the current value of a register.
    fn read(&mut self, register: Register) -> u8;

    /// Writes a whole register.
    fn write(&mut self, register: Register, value: u8);

    /// Reads a register, changes the value, and writes it back.
    fn modify<F: FnOnce(u8) -> u8>(&mut self, register: Register, f: F) {
        let value = self.read(register);
        self.write(register, f(value));
    }

    /// Executes the processor’s `sleep` instruction.
    fn sleep_cpu(&mut self);
}


/// Volatile access to the real registers, at the addresses given by
/// `Register::address`.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    sleep: fn(),
}

impl Mmio {

    /// Creates register access for the running chip. The `sleep` function
    /// must execute the `sleep` instruction; it usually comes from the
    /// board support crate.
    ///
    /// # Safety
    ///
    /// Only sound on a chip that has these registers at these addresses,
    /// and while nothing else is writing to them.
    pub const unsafe fn new(sleep: fn()) -> Self {
        Self { sleep }
    }
}

impl Registers for Mmio {
    fn read(&mut self, register: Register) -> u8 {
        unsafe { core::ptr::read_volatile(register.address() as *const u8) }
    }

    fn write(&mut self, register: Register, value: u8) {
        unsafe { core::ptr::write_volatile(register.address() as *mut u8, value) }
    }

    fn sleep_cpu(&mut self) {
        (self.sleep)()
    }
}


/// Sleep and watchdog control for ATmega-family chips.
#[derive(Debug)]
pub struct Avr<R> {
    registers: R,
}

impl<R: Registers> Avr<R> {

    /// Takes ownership of the given register access.
    pub fn new(registers: R) -> Self {
        Self { registers }
    }

    /// Returns the register access, giving up control.
    pub fn release(self) -> R {
        self.registers
    }

    /// Clears the watchdog reset flag, then starts the timed sequence:
    /// setting WDCE and WDE together allows the watchdog settings to be
    /// changed for the next four clock cycles.
    fn unlock_watchdog(&mut self) {
        self.registers.modify(Register::Mcusr, |v| v & !WDRF);
        self.registers.modify(Register::Wdtcsr, |v| v | WDCE | WDE);
    }
}

impl<R: Registers> HardwareControl for Avr<R> {
    fn enter_sleep(&mut self, mode: SleepMode) {
        trace!("sleeping in {:?}", mode);

        self.registers.modify(Register::Smcr, |v| (v & !SM_MASK) | mode.bits());
        self.registers.modify(Register::Smcr, |v| v | SE);
        self.registers.sleep_cpu();

        // Awake again: leave sleep disabled so a stray instruction can't
        // put the chip back to sleep.
        self.registers.modify(Register::Smcr, |v| v & !SE);
        trace!("woke from {:?}", mode);
    }

    fn start_watchdog(&mut self, level: u8) {
        let timeout = WatchdogTimeout::from_level(level);
        if timeout.level() != level {
            warn!("watchdog level {} out of range, using {:?}", level, timeout);
        }

        let wdtcsr = timeout.prescaler_bits() | WDCE;

        self.unlock_watchdog();
        self.registers.write(Register::Wdtcsr, wdtcsr);
        self.registers.modify(Register::Wdtcsr, |v| v | WDIE);

        debug!("watchdog armed at {} ms", timeout.millis());
    }

    fn stop_watchdog(&mut self) {
        // The prescaler is left alone during the timed sequence, so the
        // watchdog can't time out early while it's being turned off.
        self.unlock_watchdog();
        self.registers.write(Register::Wdtcsr, 0x00);

        debug!("watchdog stopped");
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prescaler_bits() {
        assert_eq!(WatchdogTimeout::Ms16.prescaler_bits(), 0b0000_0000);
        assert_eq!(WatchdogTimeout::S2.prescaler_bits(),   0b0000_0111);
        assert_eq!(WatchdogTimeout::S4.prescaler_bits(),   0b0010_0000);
        assert_eq!(WatchdogTimeout::S8.prescaler_bits(),   0b0010_0001);
    }

    #[test]
    fn levels_round_trip() {
        for level in 0..10 {
            assert_eq!(WatchdogTimeout::from_level(level).level(), level);
        }
    }

    #[test]
    fn clamped() {
        assert_eq!(WatchdogTimeout::from_level(10), WatchdogTimeout::LONGEST);
        assert_eq!(WatchdogTimeout::from_level(255), WatchdogTimeout::S8);
    }

    #[test]
    fn sleep_bits_fit_the_mask() {
        for mode in [SleepMode::Idle, SleepMode::AdcNoiseReduction, SleepMode::PowerDown,
                     SleepMode::PowerSave, SleepMode::Standby, SleepMode::ExtendedStandby].iter() {
            assert_eq!(mode.bits() & !SM_MASK, 0);
        }
    }
}
