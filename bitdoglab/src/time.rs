//! Free-running board time read straight from the RP2040 timer.

pub fn time_us() -> u32 {
    unsafe { (*rp2040_pac::TIMER::PTR).timerawl.read().bits() }
}

pub fn time_us64() -> u64 {
    unsafe {
        let timer = &*rp2040_pac::TIMER::PTR;
        // Reading TIMELR latches TIMEHR.
        let low = timer.timelr.read().bits() as u64;
        let high = timer.timehr.read().bits() as u64;
        low | (high << 32)
    }
}

/// Milliseconds since boot. Wraps after about 49 days; everything that
/// compares these stamps uses wrapping arithmetic.
pub fn time_ms() -> u32 {
    (time_us64() / 1000) as u32
}
