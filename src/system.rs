//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.
//!
//! Firmware gets its time from a clock chip instead; this is only built
//! with the `std` feature, for hosted tools and simulators.


#[cfg(unix)] use log::warn;
#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
///
/// `clock_gettime` can only fail here if the real-time clock is missing,
/// in which case the time comes from `std` instead.
#[cfg(unix)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    let mut tv: libc::timespec = std::mem::zeroed();
    if libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv) != 0 {
        warn!("clock_gettime failed, asking std for the time instead");
        return std_time();
    }

    (i64::from(tv.tv_sec), (tv.tv_nsec / 1_000_000) as i16)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let hectonanos = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    let (seconds, rest) = crate::util::split_cycles(hectonanos, HECTONANOSECS_IN_SEC);
    (seconds, (rest / 10_000) as i16)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    std_time()
}

/// Asks `std` for the current time, in the same form as `sys_time`.
#[cfg(not(windows))]
fn std_time() -> (i64, i16) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since)  => (since.as_secs() as i64, since.subsec_millis() as i16),
        Err(until) => {
            let before = until.duration();
            (-(before.as_secs() as i64), -(before.subsec_millis() as i16))
        }
    }
}
